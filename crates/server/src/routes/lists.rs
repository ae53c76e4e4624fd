use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    Extension, Json,
};

use common::types::{Created, Status};
use service::auth::CallerId;
use service::lists::domain::{NewList, TodoList, UpdateListInput};

use super::AppState;
use crate::errors::JsonApiError;

pub async fn create(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    payload: Result<Json<NewList>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = payload?;
    let id = state.services.lists.create(user_id, input).await?;
    Ok(Json(Created { id }))
}

pub async fn get_all(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
) -> Result<Json<Vec<TodoList>>, JsonApiError> {
    Ok(Json(state.services.lists.get_all(user_id).await?))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(id): Path<i32>,
) -> Result<Json<TodoList>, JsonApiError> {
    Ok(Json(state.services.lists.get_by_id(user_id, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateListInput>, JsonRejection>,
) -> Result<Json<Status>, JsonApiError> {
    let Json(input) = payload?;
    state.services.lists.update(user_id, id, input).await?;
    Ok(Json(Status::ok()))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(CallerId(user_id)): Extension<CallerId>,
    Path(id): Path<i32>,
) -> Result<Json<Status>, JsonApiError> {
    state.services.lists.delete(user_id, id).await?;
    Ok(Json(Status::ok()))
}
