//! In-memory implementation of ItemRepository

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemRecord};
use crate::repository::ItemRepository;

/// Process-wide in-memory item store.
///
/// Holds the id → item map and the id counter behind a single mutex, so
/// every operation is one atomic step over the map even under concurrent
/// request dispatch. The counter only moves forward; deleted identifiers
/// are never handed out again.
pub struct InMemoryItemRepository {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl InMemoryItemRepository {
    /// Create an empty store; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-loaded with the two demo records (ids 1 and 2).
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.items.insert(
                1,
                Item {
                    name: "Maçã".to_string(),
                    price: 1.0,
                    is_offer: Some(true),
                },
            );
            inner.items.insert(
                2,
                Item {
                    name: "Banana".to_string(),
                    price: 0.5,
                    is_offer: Some(false),
                },
            );
            inner.next_id = 3;
        }
        store
    }

    // A poisoned lock still holds a structurally intact map; keep serving.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    async fn create(&self, item: Item) -> ItemResult<ItemRecord> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.items.insert(id, item.clone());
        inner.next_id += 1;

        tracing::info!(item_id = id, "item created");
        Ok(ItemRecord { id, item })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<ItemRecord>> {
        let inner = self.lock();
        Ok(inner
            .items
            .get(&id)
            .cloned()
            .map(|item| ItemRecord { id, item }))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<ItemRecord>> {
        let inner = self.lock();
        Ok(inner
            .items
            .iter()
            .map(|(&id, item)| ItemRecord {
                id,
                item: item.clone(),
            })
            .collect())
    }

    #[instrument(skip(self, item))]
    async fn update(&self, id: i64, item: Item) -> ItemResult<ItemRecord> {
        let mut inner = self.lock();
        let slot = inner.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        *slot = item.clone();

        tracing::info!(item_id = id, "item replaced");
        Ok(ItemRecord { id, item })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> ItemResult<()> {
        let mut inner = self.lock();
        if inner.items.remove(&id).is_none() {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = id, "item deleted");
        Ok(())
    }
}
