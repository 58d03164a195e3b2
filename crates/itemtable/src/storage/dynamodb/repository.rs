//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `itemtable_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use itemtable_core::items::Item;
use itemtable_core::storage::{ItemRepository, Result};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{map_put_item_error, map_scan_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share; one instance serves
/// every request for the life of the process.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from configuration.
    ///
    /// Uses the AWS SDK default credential chain and region resolution.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&sdk_config);

        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn scan_items(&self) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_scan_error(e, &self.table_name))?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                "Scan result truncated, remaining pages are not fetched"
            );
        }

        let items = result.items.unwrap_or_default();
        tracing::debug!(table = %self.table_name, count = items.len(), "Scanned items");

        items.iter().map(attributes_to_item).collect()
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        tracing::debug!(table = %self.table_name, item_id = %item.item_id, "Put item");
        Ok(())
    }
}
