use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemRecord};

/// Repository trait for item persistence
///
/// This trait defines the data access interface for items. The shipped
/// implementation keeps everything in process memory; the trait leaves
/// room for a synchronized or persistent backend later.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item under a freshly assigned identifier
    async fn create(&self, item: Item) -> ItemResult<ItemRecord>;

    /// Fetch an item by identifier
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<ItemRecord>>;

    /// All records currently stored
    async fn list(&self) -> ItemResult<Vec<ItemRecord>>;

    /// Replace the item stored under `id` in full
    async fn update(&self, id: i64, item: Item) -> ItemResult<ItemRecord>;

    /// Remove the item stored under `id`; the identifier is retired
    async fn delete(&self, id: i64) -> ItemResult<()>;
}
