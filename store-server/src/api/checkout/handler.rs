//! Checkout API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::{CheckoutRequest, Order};

use crate::checkout::build_order;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Query parameters for order lookup and deletion
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    pub order_id: Option<String>,
}

/// POST /checkout - create an order from a cart snapshot
///
/// The order is persisted before the originating cart (when named) is
/// cleared, so no order is ever visible half-created and a clear failure
/// cannot lose a sale.
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let order = build_order(
        payload.cart_items,
        payload.customer_info,
        payload.shipping_address,
        payload.payment_method,
    )?;

    state.orders.create(&order)?;

    // Checkout clears the originating cart when the caller names one
    if let Some(cart_id) = payload.cart_id.as_deref() {
        state.carts.clear(cart_id);
        tracing::debug!(cart_id = %cart_id, order_id = %order.id, "Cart cleared after checkout");
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            order,
            "Order created successfully",
        )),
    ))
}

/// GET /checkout?orderId= - one order by id, or all orders (newest first)
pub async fn get_orders(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Response> {
    match query.order_id {
        Some(order_id) => {
            let order = state
                .orders
                .get(&order_id)?
                .ok_or_else(|| AppError::not_found(format!("Order {order_id}")))?;
            Ok(Json(ApiResponse::ok(order)).into_response())
        }
        None => {
            let orders = state.orders.list()?;
            Ok(Json(ApiResponse::ok(orders)).into_response())
        }
    }
}

/// DELETE /checkout?orderId= - delete one order record
pub async fn delete_order(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    let order_id = query
        .order_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::validation("Order ID is required"))?;

    state.orders.delete(&order_id)?;
    Ok(Json(ApiResponse::ok_message("Order deleted successfully")))
}
