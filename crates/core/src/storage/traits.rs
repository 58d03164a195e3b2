use async_trait::async_trait;

use crate::items::Item;

use super::Result;

/// Access to the table backing both handlers.
///
/// Implementations must be cheap to share between concurrent requests: the
/// server holds a single instance behind an `Arc` for the life of the process.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns the items from a single scan of the table.
    ///
    /// Only one page is fetched. If the store truncates the result, the
    /// remaining items are not returned.
    async fn scan_items(&self) -> Result<Vec<Item>>;

    /// Inserts the item or overwrites the one stored under the same `ItemId`.
    async fn put_item(&self, item: &Item) -> Result<()>;
}
