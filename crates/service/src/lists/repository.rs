use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use super::domain::{NewList, TodoList, UpdateListInput};
use crate::errors::ServiceError;
use crate::storage::ownership::lists_owned_by;
use crate::storage::tx::abort;
use models::{lists_item, todo_item, todo_list, users_list};

/// Ownership-scoped persistence of lists.
///
/// Every method except `create` filters through the `users_lists` join; a list
/// owned by somebody else is reported exactly like a missing one.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Insert the list and its ownership row atomically.
    async fn create(&self, user_id: i32, list: NewList) -> Result<i32, ServiceError>;
    async fn get_all(&self, user_id: i32) -> Result<Vec<TodoList>, ServiceError>;
    async fn get_by_id(&self, user_id: i32, list_id: i32) -> Result<TodoList, ServiceError>;
    /// Touch only the supplied fields. Zero fields is a no-op that still
    /// requires ownership.
    async fn update(&self, user_id: i32, list_id: i32, input: UpdateListInput) -> Result<(), ServiceError>;
    /// Delete the list together with the items linked to it.
    async fn delete(&self, user_id: i32, list_id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmListStore {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmListStore {
    async fn find_owned(&self, user_id: i32, list_id: i32) -> Result<Option<TodoList>, ServiceError> {
        todo_list::Entity::find_by_id(list_id)
            .filter(todo_list::Column::Id.in_subquery(lists_owned_by(user_id)))
            .one(self.db.as_ref())
            .await
            .map_err(ServiceError::db)
    }
}

#[async_trait]
impl ListStore for SeaOrmListStore {
    async fn create(&self, user_id: i32, list: NewList) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::tx)?;

        let row = todo_list::ActiveModel { id: NotSet, title: Set(list.title), description: Set(list.description) };
        let created = match row.insert(&txn).await {
            Ok(m) => m,
            Err(e) => return abort(txn, ServiceError::tx(e)).await,
        };

        let link = users_list::ActiveModel { id: NotSet, user_id: Set(user_id), list_id: Set(created.id) };
        if let Err(e) = users_list::Entity::insert(link).exec_without_returning(&txn).await {
            return abort(txn, ServiceError::tx(e)).await;
        }

        txn.commit().await.map_err(ServiceError::tx)?;
        Ok(created.id)
    }

    async fn get_all(&self, user_id: i32) -> Result<Vec<TodoList>, ServiceError> {
        todo_list::Entity::find()
            .filter(todo_list::Column::Id.in_subquery(lists_owned_by(user_id)))
            .order_by_asc(todo_list::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(ServiceError::db)
    }

    async fn get_by_id(&self, user_id: i32, list_id: i32) -> Result<TodoList, ServiceError> {
        self.find_owned(user_id, list_id).await?.ok_or_else(|| ServiceError::not_found("list"))
    }

    async fn update(&self, user_id: i32, list_id: i32, input: UpdateListInput) -> Result<(), ServiceError> {
        if input.is_empty() {
            debug!(list_id, "empty update, checking ownership only");
            return self.find_owned(user_id, list_id).await?.map(|_| ()).ok_or_else(|| ServiceError::not_found("list"));
        }

        let mut q = todo_list::Entity::update_many();
        if let Some(title) = input.title {
            q = q.col_expr(todo_list::Column::Title, Expr::value(title));
        }
        if let Some(description) = input.description {
            q = q.col_expr(todo_list::Column::Description, Expr::value(description));
        }
        let res = q
            .filter(todo_list::Column::Id.eq(list_id))
            .filter(todo_list::Column::Id.in_subquery(lists_owned_by(user_id)))
            .exec(self.db.as_ref())
            .await
            .map_err(ServiceError::db)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("list"));
        }
        Ok(())
    }

    async fn delete(&self, user_id: i32, list_id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::tx)?;

        // Collect item ids before the cascade removes their links.
        let links = match lists_item::Entity::find()
            .filter(lists_item::Column::ListId.eq(list_id))
            .all(&txn)
            .await
        {
            Ok(links) => links,
            Err(e) => return abort(txn, ServiceError::tx(e)).await,
        };

        let deleted = match todo_list::Entity::delete_many()
            .filter(todo_list::Column::Id.eq(list_id))
            .filter(todo_list::Column::Id.in_subquery(lists_owned_by(user_id)))
            .exec(&txn)
            .await
        {
            Ok(res) => res.rows_affected,
            Err(e) => return abort(txn, ServiceError::tx(e)).await,
        };
        if deleted == 0 {
            return abort(txn, ServiceError::not_found("list")).await;
        }

        let item_ids: Vec<i32> = links.into_iter().map(|l| l.item_id).collect();
        if !item_ids.is_empty() {
            if let Err(e) = todo_item::Entity::delete_many()
                .filter(todo_item::Column::Id.is_in(item_ids))
                .exec(&txn)
                .await
            {
                return abort(txn, ServiceError::tx(e)).await;
            }
        }

        txn.commit().await.map_err(ServiceError::tx)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::transaction_log;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn list(id: i32, title: &str) -> todo_list::Model {
        todo_list::Model { id, title: title.into(), description: String::new() }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult { last_insert_id: 0, rows_affected }
    }

    fn groceries() -> NewList {
        NewList { title: "groceries".into(), description: String::new() }
    }

    fn connect(mock: MockDatabase) -> (Arc<DatabaseConnection>, SeaOrmListStore) {
        let db = Arc::new(mock.into_connection());
        (db.clone(), SeaOrmListStore { db })
    }

    #[tokio::test]
    async fn create_inserts_list_then_owner_link() {
        let (db, store) = connect(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![list(1, "groceries")]])
                .append_exec_results([exec(1)]),
        );
        assert_eq!(store.create(1, groceries()).await.unwrap(), 1);
        drop(store);
        let log = transaction_log(db);
        assert!(log.contains("COMMIT"), "{log}");
        assert!(!log.contains("ROLLBACK"), "{log}");
    }

    #[tokio::test]
    async fn create_rolls_back_when_first_insert_fails() {
        let (db, store) = connect(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Custom("insert list".into())]),
        );
        let err = store.create(1, groceries()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transaction(_)));
        drop(store);
        let log = transaction_log(db);
        assert!(log.contains("ROLLBACK"), "{log}");
        assert!(!log.contains("COMMIT"), "{log}");
    }

    #[tokio::test]
    async fn create_rolls_back_when_link_insert_fails() {
        let (db, store) = connect(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![list(1, "groceries")]])
                .append_exec_errors([DbErr::Custom("insert users_lists".into())]),
        );
        let err = store.create(1, groceries()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transaction(_)));
        drop(store);
        let log = transaction_log(db);
        assert!(log.contains("users_lists"), "{log}");
        assert!(log.contains("ROLLBACK"), "{log}");
        assert!(!log.contains("COMMIT"), "{log}");
    }

    #[tokio::test]
    async fn get_by_id_of_foreign_list_is_not_found() {
        let (_, store) =
            connect(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([Vec::<todo_list::Model>::new()]));
        assert!(matches!(store.get_by_id(2, 1).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_all_returns_owned_rows() {
        let (_, store) = connect(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![list(1, "a"), list(2, "b")]]),
        );
        let rows = store.get_all(1).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title, "b");
    }

    #[tokio::test]
    async fn update_touching_nothing_owned_is_not_found() {
        let (_, store) = connect(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec(0)]));
        let input = UpdateListInput { title: Some("x".into()), description: None };
        assert!(matches!(store.update(2, 1, input).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_with_fields_succeeds_on_one_row() {
        let (_, store) = connect(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec(1)]));
        let input = UpdateListInput { title: None, description: Some("weekly".into()) };
        store.update(1, 1, input).await.unwrap();
    }

    #[tokio::test]
    async fn empty_update_still_checks_ownership() {
        let (_, owned) = connect(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![list(1, "a")]]));
        owned.update(1, 1, UpdateListInput::default()).await.unwrap();

        let (_, foreign) =
            connect(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([Vec::<todo_list::Model>::new()]));
        let res = foreign.update(2, 1, UpdateListInput::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_of_foreign_list_rolls_back() {
        let (db, store) = connect(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<lists_item::Model>::new()])
                .append_exec_results([exec(0)]),
        );
        assert!(matches!(store.delete(2, 1).await, Err(ServiceError::NotFound(_))));
        drop(store);
        let log = transaction_log(db);
        assert!(log.contains("ROLLBACK"), "{log}");
        assert!(!log.contains("COMMIT"), "{log}");
    }

    #[tokio::test]
    async fn delete_removes_linked_items() {
        let (db, store) = connect(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![
                    lists_item::Model { id: 1, list_id: 1, item_id: 10 },
                    lists_item::Model { id: 2, list_id: 1, item_id: 11 },
                ]])
                .append_exec_results([exec(1), exec(2)]),
        );
        store.delete(1, 1).await.unwrap();
        drop(store);
        let log = transaction_log(db);
        assert!(log.contains("todo_items"), "{log}");
        assert!(log.contains("COMMIT"), "{log}");
    }
}
