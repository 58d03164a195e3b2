//! Validation chain for the write handler.
//!
//! Each step either hands its output to the next one or stops with a
//! [`WriteRequestError`]. The order decides which message a client sees when
//! a request has more than one problem.

use serde_json::Value;

use super::error::WriteRequestError;
use super::types::{Item, DATA_ATTRIBUTE, ITEM_ID_ATTRIBUTE};

/// A validated write request.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRequest {
    pub item_id: String,
    pub data: Value,
}

impl WriteRequest {
    /// Converts the request into the item that gets persisted.
    pub fn into_item(self) -> Item {
        Item::new(self.item_id, self.data)
    }
}

/// Validates a raw request body and extracts the item to write.
///
/// # Examples
///
/// ```
/// use itemtable_core::items::{parse_write_request, WriteRequestError};
///
/// let request = parse_write_request(Some(r#"{"ItemId": 42, "Data": [1, 2]}"#)).unwrap();
/// assert_eq!(request.item_id, "42");
///
/// assert_eq!(parse_write_request(None), Err(WriteRequestError::MissingBody));
/// ```
pub fn parse_write_request(body: Option<&str>) -> Result<WriteRequest, WriteRequestError> {
    let body = require_body(body)?;
    let value = parse_json(body)?;
    require_fields(value)
}

fn require_body(body: Option<&str>) -> Result<&str, WriteRequestError> {
    match body {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(WriteRequestError::MissingBody),
    }
}

fn parse_json(body: &str) -> Result<Value, WriteRequestError> {
    serde_json::from_str(body).map_err(|_| WriteRequestError::InvalidJson)
}

fn require_fields(value: Value) -> Result<WriteRequest, WriteRequestError> {
    let Value::Object(mut object) = value else {
        return Err(WriteRequestError::MissingFields);
    };

    let (Some(item_id), Some(data)) = (
        object.remove(ITEM_ID_ATTRIBUTE),
        object.remove(DATA_ATTRIBUTE),
    ) else {
        return Err(WriteRequestError::MissingFields);
    };

    Ok(WriteRequest {
        item_id: coerce_item_id(&item_id),
        data,
    })
}

/// Turns any JSON value into the string stored as the item key.
///
/// Strings are used verbatim. Everything else uses its compact JSON text, so
/// `42` becomes `"42"` and `true` becomes `"true"`. Numbers keep the digits
/// as sent, so distinct large integers never collapse onto one key.
///
/// Booleans and `null` deliberately render as JSON (`"true"`, `"null"`)
/// rather than any language-specific spelling such as `"True"` or `"None"`.
pub fn coerce_item_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
