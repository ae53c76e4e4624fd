#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Migrations run once per test process; `false` means the database is unusable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_file().unwrap_or_else(|_| DatabaseConfig::from_env());
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout = std::time::Duration::from_secs(5);
    cfg.connect_timeout = std::time::Duration::from_secs(5);
    cfg
}

/// A migrated connection, or `None` when `SKIP_DB_TESTS` is set or Postgres
/// cannot be reached.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let ready = *MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&config()).await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {e}");
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {e}");
                    false
                }
            }
        })
        .await;
    if !ready {
        return None;
    }
    // Fresh connection for the current test's runtime
    connect_with_config(&config()).await.ok()
}

/// Username unique across test runs against a shared database.
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}_{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

/// Debug rendering of a mock connection's transaction log. Every store
/// holding the connection must be dropped first.
pub fn transaction_log(db: std::sync::Arc<DatabaseConnection>) -> String {
    match std::sync::Arc::try_unwrap(db) {
        Ok(conn) => format!("{:?}", conn.into_transaction_log()),
        Err(_) => panic!("mock connection is still shared"),
    }
}
