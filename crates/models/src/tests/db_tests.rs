use crate::db::{connect_with_config, test_connection, DatabaseConfig};
use std::time::Duration;
use anyhow::Result;

use super::setup_test_db;

#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    test_connection(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if setup_test_db().await.is_none() {
        return Ok(());
    }
    let mut config = DatabaseConfig::from_env();
    config.max_connections = 5;
    config.min_connections = 1;
    config.connect_timeout = Duration::from_secs(10);
    let db = connect_with_config(&config).await?;
    test_connection(&db).await?;
    Ok(())
}

#[test]
fn config_conversion_keeps_pool_bounds() {
    let raw = configs::DatabaseConfig {
        url: "postgres://localhost/todo".into(),
        max_connections: 7,
        min_connections: 3,
        acquire_timeout_secs: 5,
        ..configs::DatabaseConfig::default()
    };
    let cfg = DatabaseConfig::from(&raw);
    assert_eq!(cfg.max_connections, 7);
    assert_eq!(cfg.min_connections, 3);
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(5));
}
