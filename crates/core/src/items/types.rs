use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the key attribute in the table.
pub const ITEM_ID_ATTRIBUTE: &str = "ItemId";

/// Name of the attribute holding the opaque payload.
pub const DATA_ATTRIBUTE: &str = "Data";

/// A single row of the table.
///
/// Items written through the write handler always carry `Data` and nothing
/// else. Items scanned from the table keep any other top-level attribute in
/// `attributes` so they are returned exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "ItemId")]
    pub item_id: String,
    #[serde(rename = "Data", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Item {
    /// Creates an item with the given key and payload.
    pub fn new(item_id: impl Into<String>, data: Value) -> Self {
        Self {
            item_id: item_id.into(),
            data: Some(data),
            attributes: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_with_table_attribute_names() {
        let item = Item::new("42", json!({"x": 1}));

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value, json!({"ItemId": "42", "Data": {"x": 1}}));
    }

    #[test]
    fn test_null_data_is_kept() {
        let item = Item::new("a", Value::Null);

        let text = serde_json::to_string(&item).unwrap();

        assert_eq!(text, r#"{"ItemId":"a","Data":null}"#);
    }

    #[test]
    fn test_extra_attributes_are_flattened() {
        let mut item = Item::new("a", json!("payload"));
        item.attributes.insert("Owner".to_string(), json!("ops"));

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            value,
            json!({"ItemId": "a", "Data": "payload", "Owner": "ops"})
        );
    }

    #[test]
    fn test_item_without_data_omits_field() {
        let item = Item {
            item_id: "bare".to_string(),
            data: None,
            attributes: Map::new(),
        };

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value, json!({"ItemId": "bare"}));
    }
}
