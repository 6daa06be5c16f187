//! Checkout API module
//!
//! Order records live under the checkout resource: creating one is a
//! checkout, and `GET`/`DELETE` address the records it produced.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/checkout", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/",
        get(handler::get_orders)
            .post(handler::checkout)
            .delete(handler::delete_order),
    )
}
