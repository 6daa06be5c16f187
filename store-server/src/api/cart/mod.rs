//! Cart API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/",
        get(handler::get_cart)
            .post(handler::add_item)
            .put(handler::set_quantity)
            .delete(handler::clear),
    )
}
