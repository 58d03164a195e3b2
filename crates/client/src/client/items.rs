//! Item API operations.

use serde::Deserialize;
use serde_json::{json, Value};

use super::ItemtableClient;
use crate::error::Result;
use itemtable_core::items::Item;

/// Acknowledgement returned after a successful write.
#[derive(Debug, Deserialize)]
pub struct SaveResponse {
    pub message: String,
}

impl ItemtableClient {
    /// List all items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.client.get(self.url("/items")).send().await?;
        self.handle_response(response).await
    }

    /// Save an item, overwriting any item with the same ID.
    pub async fn put_item(&self, item_id: &str, data: Value) -> Result<SaveResponse> {
        let response = self
            .client
            .post(self.url("/items"))
            .json(&json!({ "ItemId": item_id, "Data": data }))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
