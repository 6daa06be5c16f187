//! Health API module

use axum::{Json, Router, routing::get};
use serde_json::json;
use shared::ApiResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health - liveness probe
async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::ok(json!({
        "status": "healthy",
        "service": "store-server",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
