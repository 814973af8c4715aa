//! User endpoints: create, list, read, update, delete.

use super::parse_id;
use crate::error::AppError;
use crate::model::{NewUser, User};
use crate::response::{item_deleted, Deleted};
use crate::service::{RequestValidator, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<User>), AppError> {
    RequestValidator::require(&body, NewUser::REQUIRED)?;
    let input: NewUser = RequestValidator::decode(body)?;
    let user = UserService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id_str)?;
    RequestValidator::require(&body, NewUser::REQUIRED)?;
    let input: NewUser = RequestValidator::decode(body)?;
    let user = UserService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let id = parse_id(&id_str)?;
    if !UserService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    Ok(Json(item_deleted()))
}
