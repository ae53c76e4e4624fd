//! Service layer for the todo API.
//! - Credentials, bearer tokens and request identity live in `auth`.
//! - `lists` and `items` expose per-user facades over ownership-scoped stores.
//! - Every store has a SeaORM implementation and an in-memory one in `storage::memory`.

pub mod errors;
pub mod auth;
pub mod lists;
pub mod items;
pub mod storage;
#[cfg(test)]
pub mod test_support;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use auth::repo::seaorm::SeaOrmCredentialStore;
use auth::repository::CredentialStore;
use auth::{AuthConfig, CredentialService, IdentityResolver};
use errors::ServiceError;
use items::{ItemService, ItemStore, SeaOrmItemStore};
use lists::{CollectionService, ListStore, SeaOrmListStore};
use storage::memory::MemoryStore;

/// Everything a transport layer needs, wired against one set of stores.
#[derive(Clone)]
pub struct Services {
    pub credentials: Arc<CredentialService>,
    pub identity: IdentityResolver,
    pub lists: CollectionService,
    pub items: ItemService,
}

impl Services {
    pub fn new(
        users: Arc<dyn CredentialStore>,
        lists: Arc<dyn ListStore>,
        items: Arc<dyn ItemStore>,
        cfg: AuthConfig,
    ) -> Result<Self, ServiceError> {
        let credentials = Arc::new(CredentialService::new(users, cfg)?);
        let lists = CollectionService::new(lists);
        Ok(Self {
            identity: IdentityResolver::new(credentials.clone()),
            credentials,
            items: ItemService::new(items, lists.clone()),
            lists,
        })
    }

    /// Postgres-backed wiring.
    pub fn seaorm(db: DatabaseConnection, cfg: AuthConfig) -> Result<Self, ServiceError> {
        let db = Arc::new(db);
        Self::new(
            Arc::new(SeaOrmCredentialStore { db: db.clone() }),
            Arc::new(SeaOrmListStore { db: db.clone() }),
            Arc::new(SeaOrmItemStore { db }),
            cfg,
        )
    }

    /// Wiring over a single [`MemoryStore`], returned alongside so callers can
    /// inspect it or inject failures.
    pub fn in_memory(cfg: AuthConfig) -> Result<(Self, Arc<MemoryStore>), ServiceError> {
        let store = Arc::new(MemoryStore::default());
        let services = Self::new(store.clone(), store.clone(), store.clone(), cfg)?;
        Ok((services, store))
    }
}
