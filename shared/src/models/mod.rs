//! Data models
//!
//! Shared between store-server and store-client (via API).
//! All IDs are strings; wire field names are camelCase.

pub mod cart;
pub mod order;
pub mod product;

// Re-exports
pub use cart::*;
pub use order::*;
pub use product::*;
