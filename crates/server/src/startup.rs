use std::net::SocketAddr;

use axum::Router;
use chrono::Duration;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::auth::AuthConfig;
use service::Services;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Map the file/env auth section onto the service's explicit configuration.
pub fn auth_config(cfg: &configs::AuthConfig) -> Result<AuthConfig, StartupError> {
    let ttl = Duration::try_hours(cfg.token_ttl_hours)
        .ok_or_else(|| StartupError::InvalidConfig(format!("auth.token_ttl_hours out of range: {}", cfg.token_ttl_hours)))?;
    Ok(AuthConfig::new(cfg.signing_key.clone(), cfg.password_salt.clone()).with_ttl(ttl))
}

/// Public entry: load configuration, migrate, build the app and serve until
/// the future is dropped.
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    models::db::test_connection(&db).await?;
    migration::Migrator::up(&db, None).await.map_err(anyhow::Error::from)?;
    info!("migrations applied");

    let services = Services::seaorm(db, auth_config(&cfg.auth)?)?;
    let app: Router = routes::build_router(AppState::new(services), build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
