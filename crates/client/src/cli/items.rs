//! Item CLI commands.

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List all items.
    List,
    /// Save an item, overwriting any item with the same ID.
    Put {
        /// Item ID.
        #[arg(long)]
        id: String,
        /// Item data as JSON (e.g. '{"x": 1}', '"text"', '42').
        #[arg(long)]
        data: String,
    },
}

/// Parse the `--data` argument before any request is sent.
pub fn parse_data(data: &str) -> Result<Value> {
    serde_json::from_str(data)
        .map_err(|e| ClientError::InvalidInput(format!("--data must be valid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_data_accepts_any_json() {
        assert_eq!(parse_data(r#"{"x": 1}"#).unwrap(), json!({"x": 1}));
        assert_eq!(parse_data("42").unwrap(), json!(42));
        assert_eq!(parse_data(r#""text""#).unwrap(), json!("text"));
    }

    #[test]
    fn test_parse_data_rejects_bare_words() {
        assert!(matches!(
            parse_data("text"),
            Err(ClientError::InvalidInput(_))
        ));
    }
}
