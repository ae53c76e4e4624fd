use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{NewList, TodoList, UpdateListInput};
use super::repository::ListStore;
use crate::errors::ServiceError;

/// Per-user facade over [`ListStore`].
#[derive(Clone)]
pub struct CollectionService {
    store: Arc<dyn ListStore>,
}

impl CollectionService {
    pub fn new(store: Arc<dyn ListStore>) -> Self { Self { store } }

    #[instrument(skip(self, list))]
    pub async fn create(&self, user_id: i32, list: NewList) -> Result<i32, ServiceError> {
        list.validate()?;
        let id = self.store.create(user_id, list).await?;
        info!(list_id = id, "list_created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<TodoList>, ServiceError> {
        self.store.get_all(user_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, user_id: i32, list_id: i32) -> Result<TodoList, ServiceError> {
        self.store.get_by_id(user_id, list_id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, user_id: i32, list_id: i32, input: UpdateListInput) -> Result<(), ServiceError> {
        input.validate()?;
        self.store.update(user_id, list_id, input).await?;
        info!("list_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i32, list_id: i32) -> Result<(), ServiceError> {
        self.store.delete(user_id, list_id).await?;
        info!("list_deleted");
        Ok(())
    }
}
