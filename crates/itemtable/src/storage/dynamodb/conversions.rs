//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! items. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use itemtable_core::items::{normalize_number, Item, DATA_ATTRIBUTE, ITEM_ID_ATTRIBUTE};
use itemtable_core::storage::{RepositoryError, Result};
use serde_json::{Map, Value};

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes: HashMap<String, AttributeValue> = item
        .attributes
        .iter()
        .map(|(name, value)| (name.clone(), json_to_attribute(value)))
        .collect();

    attributes.insert(
        ITEM_ID_ATTRIBUTE.to_string(),
        AttributeValue::S(item.item_id.clone()),
    );
    if let Some(data) = &item.data {
        attributes.insert(DATA_ATTRIBUTE.to_string(), json_to_attribute(data));
    }

    attributes
}

/// Convert a DynamoDB item to an Item.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    let item_id = match attributes.get(ITEM_ID_ATTRIBUTE) {
        Some(AttributeValue::S(s)) => s.clone(),
        Some(AttributeValue::N(n)) => n.clone(),
        _ => {
            return Err(RepositoryError::InvalidData(format!(
                "Item is missing key attribute: {ITEM_ID_ATTRIBUTE}"
            )))
        }
    };

    let data = attributes
        .get(DATA_ATTRIBUTE)
        .map(attribute_to_json)
        .transpose()?;

    let mut extra = Map::new();
    for (name, value) in attributes {
        if name != ITEM_ID_ATTRIBUTE && name != DATA_ATTRIBUTE {
            extra.insert(name.clone(), attribute_to_json(value)?);
        }
    }

    Ok(Item {
        item_id,
        data,
        attributes: extra,
    })
}

/// Convert a JSON value to the matching DynamoDB attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(name, value)| (name.clone(), json_to_attribute(value)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute to JSON, normalizing numbers.
///
/// String and number sets become arrays. Binary attributes have no JSON form
/// and fail with a serialization error.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => normalize_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(name, value)| attribute_to_json(value).map(|json| (name.clone(), json)))
            .collect::<Result<Map<_, _>>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| normalize_number(n).map(Value::Number))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(RepositoryError::Serialization(
            "Binary attributes are not JSON serializable".to_string(),
        )),
        _ => Err(RepositoryError::Serialization(
            "Unknown attribute type is not JSON serializable".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn stored(item_id: &str, data: AttributeValue) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                ITEM_ID_ATTRIBUTE.to_string(),
                AttributeValue::S(item_id.to_string()),
            ),
            (DATA_ATTRIBUTE.to_string(), data),
        ])
    }

    #[test]
    fn test_item_to_attributes_keys() {
        let item = Item::new("42", json!({"x": 1}));

        let attributes = item_to_attributes(&item);

        assert_eq!(attributes.get("ItemId").unwrap().as_s().unwrap(), "42");
        let data = attributes.get("Data").unwrap().as_m().unwrap();
        assert_eq!(data.get("x").unwrap().as_n().unwrap(), "1");
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn test_json_to_attribute_shapes() {
        assert_eq!(json_to_attribute(&Value::Null), AttributeValue::Null(true));
        assert_eq!(json_to_attribute(&json!(true)), AttributeValue::Bool(true));
        assert_eq!(
            json_to_attribute(&json!(3.5)),
            AttributeValue::N("3.5".to_string())
        );
        assert_eq!(
            json_to_attribute(&json!(["a", 1])),
            AttributeValue::L(vec![
                AttributeValue::S("a".to_string()),
                AttributeValue::N("1".to_string()),
            ])
        );
    }

    #[test]
    fn test_numbers_are_normalized_on_read() {
        let attributes = stored(
            "n",
            AttributeValue::L(vec![
                AttributeValue::N("3".to_string()),
                AttributeValue::N("3.5".to_string()),
            ]),
        );

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"ItemId":"n","Data":[3,3.5]}"#
        );
    }

    #[test]
    fn test_widest_stored_integer_reads_back_exactly() {
        let digits = "12345678901234567890123456789012345678";
        let attributes = stored("wide", AttributeValue::N(digits.to_string()));

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            format!(r#"{{"ItemId":"wide","Data":{digits}}}"#)
        );
    }

    #[test]
    fn test_large_integer_is_written_with_every_digit() {
        let item: Item =
            serde_json::from_str(r#"{"ItemId": "big", "Data": 12345678901234567890123}"#).unwrap();

        let attributes = item_to_attributes(&item);

        assert_eq!(
            attributes.get("Data").unwrap().as_n().unwrap(),
            "12345678901234567890123"
        );
    }

    #[test]
    fn test_nested_map_round_trip() {
        let item = Item::new("m", json!({"name": "x", "tags": ["a", "b"], "on": false}));

        let parsed = attributes_to_item(&item_to_attributes(&item)).unwrap();

        assert_eq!(parsed, item);
    }

    #[test]
    fn test_sets_become_arrays() {
        let attributes = stored(
            "s",
            AttributeValue::M(HashMap::from([
                (
                    "names".to_string(),
                    AttributeValue::Ss(vec!["a".to_string()]),
                ),
                (
                    "counts".to_string(),
                    AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]),
                ),
            ])),
        );

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(item.data, Some(json!({"names": ["a"], "counts": [1, 2.5]})));
    }

    #[test]
    fn test_extra_attributes_are_preserved() {
        let mut attributes = stored("e", AttributeValue::S("v".to_string()));
        attributes.insert("Owner".to_string(), AttributeValue::S("ops".to_string()));

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(item.attributes.get("Owner"), Some(&json!("ops")));
    }

    #[test]
    fn test_numeric_key_is_read_as_string() {
        let attributes = HashMap::from([(
            ITEM_ID_ATTRIBUTE.to_string(),
            AttributeValue::N("7".to_string()),
        )]);

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(item.item_id, "7");
        assert_eq!(item.data, None);
    }

    #[test]
    fn test_missing_key_is_invalid_data() {
        let attributes = HashMap::from([(
            DATA_ATTRIBUTE.to_string(),
            AttributeValue::S("orphan".to_string()),
        )]);

        assert!(matches!(
            attributes_to_item(&attributes),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_binary_is_not_serializable() {
        let attributes = stored("b", AttributeValue::B(Blob::new(vec![0, 1])));

        assert!(matches!(
            attributes_to_item(&attributes),
            Err(RepositoryError::Serialization(_))
        ));
    }
}
