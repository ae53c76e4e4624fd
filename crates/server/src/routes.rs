use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::Services;

use crate::middleware::require_identity;

pub mod auth;
pub mod items;
pub mod lists;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    pub fn new(services: Services) -> Self { Self { services: Arc::new(services) } }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public health and auth routes, and the
/// bearer-protected `/api` resources.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/sign-in", post(auth::sign_in));

    let api = Router::new()
        .route("/api/lists", post(lists::create).get(lists::get_all))
        .route("/api/lists/:id", get(lists::get_by_id).put(lists::update).delete(lists::delete))
        .route("/api/lists/:id/items", post(items::create).get(items::get_all))
        .route("/api/items/:id", get(items::get_by_id).put(items::update).delete(items::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_identity));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
