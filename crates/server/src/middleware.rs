use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use service::auth::errors::AuthError;
use service::errors::ServiceError;
use tracing::warn;

use crate::errors::JsonApiError;
use crate::routes::AppState;

/// Resolve `Authorization: Bearer <token>` and store the [`service::auth::CallerId`]
/// in request extensions for the handlers behind it.
pub async fn require_identity(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    // A header that is present but not visible ASCII is malformed, not missing.
    let header = match req.headers().get(AUTHORIZATION) {
        None => None,
        Some(v) => Some(v.to_str().map_err(|_| {
            warn!("non-ascii authorization header");
            ServiceError::from(AuthError::MalformedHeader)
        })?),
    };
    let caller = state.services.identity.resolve(header)?;
    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
