use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde::Serialize;

use common::types::Created;
use service::auth::domain::{SignInInput, SignUpInput};

use super::AppState;
use crate::errors::JsonApiError;

#[derive(Debug, Serialize)]
pub struct TokenOutput {
    pub token: String,
}

pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpInput>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = payload?;
    let id = state.services.credentials.create_user(input).await?;
    Ok(Json(Created { id }))
}

pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInInput>, JsonRejection>,
) -> Result<Json<TokenOutput>, JsonApiError> {
    let Json(input) = payload?;
    let token = state.services.credentials.generate_token(input).await?;
    Ok(Json(TokenOutput { token }))
}
