//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`products`] - catalog endpoints
//! - [`cart`] - cart aggregator endpoints
//! - [`checkout`] - checkout and order record endpoints
//!
//! Every response uses the `{success, data?, error?, message?}` envelope
//! from `shared::response`; handler errors convert through
//! [`crate::utils::AppError`].

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod cart;
pub mod checkout;
pub mod health;
pub mod products;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(cart::router())
        .merge(checkout::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the storefront UI is served from a different origin
        .layer(CorsLayer::permissive())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
