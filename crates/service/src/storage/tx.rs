use sea_orm::DatabaseTransaction;
use tracing::warn;

use crate::errors::ServiceError;

/// Roll the transaction back, then surface `err`.
pub(crate) async fn abort<T>(txn: DatabaseTransaction, err: ServiceError) -> Result<T, ServiceError> {
    if let Err(e) = txn.rollback().await {
        warn!(error = %e, "rollback failed");
    }
    Err(err)
}
