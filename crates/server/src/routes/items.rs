use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    Extension, Json,
};

use common::types::{Created, Status};
use service::auth::CallerId;
use service::items::domain::{NewItem, TodoItem, UpdateItemInput};

use super::AppState;
use crate::errors::JsonApiError;

/// `POST /api/lists/:id/items`
pub async fn create(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(list_id): Path<i32>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = payload?;
    let id = state.services.items.create(user_id, list_id, input).await?;
    Ok(Json(Created { id }))
}

/// `GET /api/lists/:id/items`
pub async fn get_all(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(list_id): Path<i32>,
) -> Result<Json<Vec<TodoItem>>, JsonApiError> {
    Ok(Json(state.services.items.get_all(user_id, list_id).await?))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(id): Path<i32>,
) -> Result<Json<TodoItem>, JsonApiError> {
    Ok(Json(state.services.items.get_by_id(user_id, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateItemInput>, JsonRejection>,
) -> Result<Json<Status>, JsonApiError> {
    let Json(input) = payload?;
    state.services.items.update(user_id, id, input).await?;
    Ok(Json(Status::ok()))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(id): Path<i32>,
) -> Result<Json<Status>, JsonApiError> {
    state.services.items.delete(user_id, id).await?;
    Ok(Json(Status::ok()))
}
