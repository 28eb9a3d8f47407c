//! Item Service - business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemRecord};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service maps missing records to [`ItemError::NotFound`] and
/// orchestrates repository operations. There is deliberately no input
/// validation here: any well-typed item is accepted, and the boundary
/// layer already guarantees the types.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item; always succeeds
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, item: Item) -> ItemResult<ItemRecord> {
        self.repository.create(item).await
    }

    /// Get an item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<ItemRecord> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List every record currently stored
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<ItemRecord>> {
        self.repository.list().await
    }

    /// Replace the item stored under `id` in full
    #[instrument(skip(self, item))]
    pub async fn update_item(&self, id: i64, item: Item) -> ItemResult<ItemRecord> {
        self.repository.update(id, item).await
    }

    /// Delete an item; its id is permanently retired
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    fn pear() -> Item {
        Item {
            name: "Pear".to_string(),
            price: 2.5,
            is_offer: None,
        }
    }

    #[tokio::test]
    async fn get_item_maps_missing_records_to_not_found() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_get_by_id()
            .with(eq(99))
            .returning(|_| Ok(None));

        let service = ItemService::new(repository);

        let err = service.get_item(99).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(99)));
    }

    #[tokio::test]
    async fn get_item_returns_the_stored_record() {
        let mut repository = MockItemRepository::new();
        repository.expect_get_by_id().with(eq(1)).returning(|id| {
            Ok(Some(ItemRecord {
                id,
                item: pear(),
            }))
        });

        let service = ItemService::new(repository);

        let record = service.get_item(1).await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.item, pear());
    }

    #[tokio::test]
    async fn create_item_passes_any_payload_through() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|item| Ok(ItemRecord { id: 3, item }));

        let service = ItemService::new(repository);

        // Empty name and negative price are accepted: the store performs no
        // field validation.
        let odd = Item {
            name: String::new(),
            price: -1.0,
            is_offer: None,
        };
        let record = service.create_item(odd.clone()).await.unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.item, odd);
    }

    #[tokio::test]
    async fn update_item_propagates_not_found() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_update()
            .returning(|id, _| Err(ItemError::NotFound(id)));

        let service = ItemService::new(repository);

        let err = service.update_item(7, pear()).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(7)));
    }

    #[tokio::test]
    async fn delete_item_delegates_to_the_repository() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_delete()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let service = ItemService::new(repository);

        service.delete_item(2).await.unwrap();
    }
}
