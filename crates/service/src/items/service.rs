use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{NewItem, TodoItem, UpdateItemInput};
use super::repository::ItemStore;
use crate::errors::ServiceError;
use crate::lists::CollectionService;

/// Per-user facade over [`ItemStore`].
///
/// Operations that name a list first resolve it through
/// [`CollectionService::get_by_id`], so a foreign list id fails with
/// `NotFound` before any item row is read or written.
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    lists: CollectionService,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>, lists: CollectionService) -> Self { Self { store, lists } }

    #[instrument(skip(self, item))]
    pub async fn create(&self, user_id: i32, list_id: i32, item: NewItem) -> Result<i32, ServiceError> {
        item.validate()?;
        self.lists.get_by_id(user_id, list_id).await?;
        let id = self.store.create(list_id, item).await?;
        info!(item_id = id, "item_created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self, user_id: i32, list_id: i32) -> Result<Vec<TodoItem>, ServiceError> {
        self.lists.get_by_id(user_id, list_id).await?;
        self.store.get_all(user_id, list_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, user_id: i32, item_id: i32) -> Result<TodoItem, ServiceError> {
        self.store.get_by_id(user_id, item_id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, user_id: i32, item_id: i32, input: UpdateItemInput) -> Result<(), ServiceError> {
        input.validate()?;
        self.store.update(user_id, item_id, input).await?;
        info!("item_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i32, item_id: i32) -> Result<(), ServiceError> {
        self.store.delete(user_id, item_id).await?;
        info!("item_deleted");
        Ok(())
    }
}
