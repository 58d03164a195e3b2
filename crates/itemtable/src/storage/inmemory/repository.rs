//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemtable_core::items::Item;
use itemtable_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory table keyed by `ItemId`.
///
/// Mirrors the key rules of the managed table: a put overwrites any item with
/// the same key, and an empty key is rejected.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<String, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given items.
    #[cfg(test)]
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.item_id.clone(), item))
            .collect();

        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Returns the number of stored items.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn scan_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        if item.item_id.is_empty() {
            return Err(RepositoryError::InvalidData(
                "The AttributeValue for a key attribute cannot contain an empty string value. Key: ItemId"
                    .to_string(),
            ));
        }

        let mut items = self.items.write().await;
        items.insert(item.item_id.clone(), item.clone());
        Ok(())
    }
}
