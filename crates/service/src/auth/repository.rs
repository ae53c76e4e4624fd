use async_trait::async_trait;

use super::domain::{AuthUser, NewUser};
use crate::errors::ServiceError;

/// Persistence of user records.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a user and return the generated id. A duplicate username is a
    /// store error and is propagated as such.
    async fn create_user(&self, user: NewUser) -> Result<i32, ServiceError>;

    /// Look a user up by username and password hash in one predicate, so a
    /// wrong username and a wrong password are indistinguishable.
    async fn get_user(&self, username: &str, password_hash: &str) -> Result<Option<AuthUser>, ServiceError>;
}
