use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use super::domain::{NewItem, TodoItem, UpdateItemInput};
use crate::errors::ServiceError;
use crate::storage::ownership::{items_in_owned_list, items_owned_by};
use crate::storage::tx::abort;
use models::{lists_item, todo_item};

/// Persistence of items, scoped through user -> list -> item.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert the item and its list link atomically. The caller has already
    /// verified that the list belongs to the requesting user.
    async fn create(&self, list_id: i32, item: NewItem) -> Result<i32, ServiceError>;
    async fn get_all(&self, user_id: i32, list_id: i32) -> Result<Vec<TodoItem>, ServiceError>;
    async fn get_by_id(&self, user_id: i32, item_id: i32) -> Result<TodoItem, ServiceError>;
    async fn update(&self, user_id: i32, item_id: i32, input: UpdateItemInput) -> Result<(), ServiceError>;
    async fn delete(&self, user_id: i32, item_id: i32) -> Result<(), ServiceError>;
}

pub struct SeaOrmItemStore {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmItemStore {
    async fn find_owned(&self, user_id: i32, item_id: i32) -> Result<Option<TodoItem>, ServiceError> {
        todo_item::Entity::find_by_id(item_id)
            .filter(todo_item::Column::Id.in_subquery(items_owned_by(user_id)))
            .one(self.db.as_ref())
            .await
            .map_err(ServiceError::db)
    }
}

#[async_trait]
impl ItemStore for SeaOrmItemStore {
    async fn create(&self, list_id: i32, item: NewItem) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::tx)?;

        let row = todo_item::ActiveModel {
            id: NotSet,
            title: Set(item.title),
            description: Set(item.description),
            done: Set(false),
        };
        let created = match row.insert(&txn).await {
            Ok(m) => m,
            Err(e) => return abort(txn, ServiceError::tx(e)).await,
        };

        let link = lists_item::ActiveModel { id: NotSet, list_id: Set(list_id), item_id: Set(created.id) };
        if let Err(e) = lists_item::Entity::insert(link).exec_without_returning(&txn).await {
            return abort(txn, ServiceError::tx(e)).await;
        }

        txn.commit().await.map_err(ServiceError::tx)?;
        Ok(created.id)
    }

    async fn get_all(&self, user_id: i32, list_id: i32) -> Result<Vec<TodoItem>, ServiceError> {
        todo_item::Entity::find()
            .filter(todo_item::Column::Id.in_subquery(items_in_owned_list(user_id, list_id)))
            .order_by_asc(todo_item::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(ServiceError::db)
    }

    async fn get_by_id(&self, user_id: i32, item_id: i32) -> Result<TodoItem, ServiceError> {
        self.find_owned(user_id, item_id).await?.ok_or_else(|| ServiceError::not_found("item"))
    }

    async fn update(&self, user_id: i32, item_id: i32, input: UpdateItemInput) -> Result<(), ServiceError> {
        if input.is_empty() {
            debug!(item_id, "empty update, checking ownership only");
            return self.find_owned(user_id, item_id).await?.map(|_| ()).ok_or_else(|| ServiceError::not_found("item"));
        }

        let mut q = todo_item::Entity::update_many();
        if let Some(title) = input.title {
            q = q.col_expr(todo_item::Column::Title, Expr::value(title));
        }
        if let Some(description) = input.description {
            q = q.col_expr(todo_item::Column::Description, Expr::value(description));
        }
        if let Some(done) = input.done {
            q = q.col_expr(todo_item::Column::Done, Expr::value(done));
        }
        let res = q
            .filter(todo_item::Column::Id.eq(item_id))
            .filter(todo_item::Column::Id.in_subquery(items_owned_by(user_id)))
            .exec(self.db.as_ref())
            .await
            .map_err(ServiceError::db)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("item"));
        }
        Ok(())
    }

    async fn delete(&self, user_id: i32, item_id: i32) -> Result<(), ServiceError> {
        // The lists_items row goes with it via ON DELETE CASCADE.
        let res = todo_item::Entity::delete_many()
            .filter(todo_item::Column::Id.eq(item_id))
            .filter(todo_item::Column::Id.in_subquery(items_owned_by(user_id)))
            .exec(self.db.as_ref())
            .await
            .map_err(ServiceError::db)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("item"));
        }
        Ok(())
    }
}
