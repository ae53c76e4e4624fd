use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use crate::auth::domain::{AuthUser, NewUser};
use crate::auth::repository::CredentialStore;
use crate::errors::ServiceError;
use models::user;

pub struct SeaOrmCredentialStore {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait::async_trait]
impl CredentialStore for SeaOrmCredentialStore {
    async fn create_user(&self, new: NewUser) -> Result<i32, ServiceError> {
        let am = user::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            username: Set(new.username),
            password_hash: Set(new.password_hash),
        };
        let created = am.insert(self.db.as_ref()).await.map_err(ServiceError::db)?;
        Ok(created.id)
    }

    async fn get_user(&self, username: &str, password_hash: &str) -> Result<Option<AuthUser>, ServiceError> {
        let res = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .filter(user::Column::PasswordHash.eq(password_hash))
            .one(self.db.as_ref())
            .await
            .map_err(ServiceError::db)?;
        Ok(res.map(|u| AuthUser { id: u.id, name: u.name, username: u.username }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn row(id: i32) -> user::Model {
        user::Model { id, name: "Ann".into(), username: "ann".into(), password_hash: "h".into() }
    }

    #[tokio::test]
    async fn create_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(7)]])
            .into_connection();
        let store = SeaOrmCredentialStore { db: Arc::new(db) };
        let id = store
            .create_user(NewUser { name: "Ann".into(), username: "ann".into(), password_hash: "h".into() })
            .await
            .unwrap();
        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn duplicate_username_is_propagated_as_store_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("duplicate key value violates unique constraint".into())])
            .into_connection();
        let store = SeaOrmCredentialStore { db: Arc::new(db) };
        let err = store
            .create_user(NewUser { name: "Ann".into(), username: "ann".into(), password_hash: "h".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Dependency(_)));
    }

    #[tokio::test]
    async fn lookup_miss_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = SeaOrmCredentialStore { db: Arc::new(db) };
        assert!(store.get_user("ann", "wrong").await.unwrap().is_none());
    }
}
