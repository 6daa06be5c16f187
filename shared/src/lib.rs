//! Shared types for the storefront workspace
//!
//! Wire-level types used by both the server and the client: domain models,
//! the unified API response envelope, and money arithmetic.

pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use models::*;
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
