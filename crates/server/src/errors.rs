use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use service::errors::ServiceError;

/// JSON error body: `{"error": title, "message": detail}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, body: ErrorBody { error: title.into(), message: detail } }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = e.code();
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "invalid input", Some(msg)),
            ServiceError::Authentication(kind) => {
                warn!(code, reason = %kind, "unauthenticated");
                Self::new(StatusCode::UNAUTHORIZED, "unauthorized", Some(kind.to_string()))
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "not found", Some(msg)),
            // Store details stay in the logs.
            ServiceError::Transaction(msg) | ServiceError::Dependency(msg) => {
                error!(code, error = %msg, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error", None)
            }
        }
    }
}

/// Unreadable or incomplete request bodies are input errors.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from(ServiceError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
