//! Storefront client - typed HTTP client for the store server
//!
//! Wraps the store API behind typed calls and layers a durable local order
//! cache on top, so past orders remain viewable when the server restarts or
//! is unreachable. The server is always authoritative when both sources hold
//! a record with the same id; the cache only ever fills gaps.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use cache::OrderCache;
pub use client::StoreClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpApi, HttpTransport};

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::models::{
    AddItemRequest, Cart, CartLineItem, CheckoutRequest, CustomerInfo, Order, OrderStatus,
    PaymentMethod, Product, ShippingAddress,
};
