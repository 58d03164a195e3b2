//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store is held as a trait object so the handlers do
//! not depend on the backend selected by feature flags.

use std::sync::Arc;

use itemtable_core::storage::ItemRepository;

#[cfg(feature = "dynamodb")]
use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request. The repository is built once at startup and
/// never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Item store shared by every request.
    pub item_repo: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates a state around an existing repository.
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Creates a state backed by an empty in-memory table.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    /// Creates a state backed by the configured DynamoDB table.
    #[cfg(feature = "dynamodb")]
    pub async fn dynamodb(config: &Config) -> Self {
        let repo = crate::storage::DynamoDbRepository::from_config(config).await;
        tracing::info!(table = %repo.table_name(), "Using DynamoDB item store");
        Self::new(Arc::new(repo))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
