//! Product endpoints: create, list, read, update, delete.

use super::parse_id;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use crate::response::{item_deleted, Deleted};
use crate::service::{ProductService, RequestValidator};
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
) -> Result<(StatusCode, Json<Product>), AppError> {
    RequestValidator::require(&body, NewProduct::REQUIRED)?;
    let input: NewProduct = RequestValidator::decode(body)?;
    let product = ProductService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list(&state.pool).await?;
    Ok(Json(products))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id_str)?;
    let product = ProductService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id_str)?;
    RequestValidator::require(&body, NewProduct::REQUIRED)?;
    let input: NewProduct = RequestValidator::decode(body)?;
    let product = ProductService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let id = parse_id(&id_str)?;
    if !ProductService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("product {}", id)));
    }
    Ok(Json(item_deleted()))
}
