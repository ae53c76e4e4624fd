use sea_orm::DbErr;
use thiserror::Error;

use crate::auth::errors::AuthError;
use models::errors::ModelError;

/// Error taxonomy shared by every store and service.
///
/// `NotFound` deliberately covers both "absent" and "owned by someone else".
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("transaction failed: {0}")]
    Transaction(String),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Store error outside of a multi-step write.
    pub fn db(e: DbErr) -> Self { Self::Dependency(e.to_string()) }

    /// Store error inside a multi-step write; the caller rolls back first.
    pub fn tx(e: DbErr) -> Self { Self::Transaction(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Authentication(e) => e.code(),
            ServiceError::NotFound(_) => 1003,
            ServiceError::Transaction(_) => 1201,
            ServiceError::Dependency(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Dependency(msg),
        }
    }
}
