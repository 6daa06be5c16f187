//! Cart API Handlers
//!
//! The cart id is an explicit required parameter at this boundary; only the
//! outermost caller (the client crate's configuration) applies a default.
//! Unit prices are copied from the catalog record, never taken from the
//! request. The catalog is the source of truth for pricing.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::{AddItemRequest, Cart, SetQuantityRequest};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Query parameters for cart reads and clears
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    pub cart_id: Option<String>,
}

fn require_cart_id(cart_id: Option<String>) -> AppResult<String> {
    match cart_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(AppError::validation("cartId is required")),
    }
}

/// GET /cart?cartId= - fetch a cart (fresh empty cart for unknown ids)
pub async fn get_cart(
    State(state): State<ServerState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let cart_id = require_cart_id(query.cart_id)?;
    Ok(Json(ApiResponse::ok(state.carts.get(&cart_id))))
}

/// POST /cart - add a catalog product to a cart
pub async fn add_item(
    State(state): State<ServerState>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Cart>>)> {
    let cart_id = require_cart_id(payload.cart_id)?;

    let product = state
        .products
        .get(&payload.product_id)?
        .ok_or_else(|| AppError::not_found(format!("Product {}", payload.product_id)))?;

    let cart = state.carts.add_item(&cart_id, &product, payload.quantity);
    tracing::debug!(
        cart_id = %cart_id,
        product_id = %product.id,
        quantity = payload.quantity,
        total = cart.total,
        "Item added to cart"
    );
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(cart))))
}

/// PUT /cart - overwrite a line's quantity (<= 0 removes the line)
pub async fn set_quantity(
    State(state): State<ServerState>,
    Json(payload): Json<SetQuantityRequest>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let cart_id = require_cart_id(payload.cart_id)?;
    let cart = state
        .carts
        .set_quantity(&cart_id, &payload.product_id, payload.quantity)?;
    Ok(Json(ApiResponse::ok(cart)))
}

/// DELETE /cart?cartId= - delete the cart record outright
pub async fn clear(
    State(state): State<ServerState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    let cart_id = require_cart_id(query.cart_id)?;
    state.carts.clear(&cart_id);
    Ok(Json(ApiResponse::ok_message("Cart cleared successfully")))
}
