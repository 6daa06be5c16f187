//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Query parameters for product listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// GET /products?category= - list catalog products
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.products.list(query.category.as_deref())?;
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /products/{id} - fetch a single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state
        .products
        .get(&id)?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /products - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let product = state.products.create(payload)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(product))))
}

/// PUT /products/{id} - partially update a product
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.products.update(&id, payload)?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /products/{id} - delete a product
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.products.delete(&id)?;
    Ok(Json(ApiResponse::ok_message("Product deleted successfully")))
}
