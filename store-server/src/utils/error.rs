//! Unified error handling
//!
//! Application-level error type and its HTTP mapping. Every handler error is
//! caught at the boundary and converted into the standard response envelope;
//! nothing is retried automatically.
//!
//! | Variant | Status |
//! |---------|--------|
//! | `Validation` | 400 |
//! | `NotFound` | 404 |
//! | `Storage` | 500 |
//! | `Internal` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ApiResponse;
use tracing::error;

use crate::carts::CartError;
use crate::checkout::CheckoutError;
use crate::store::StoreError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown cart, item, order, or product (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Storage layer failure (500)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Anything else, collapsed to a generic 500
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("{msg} not found")),
            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(message));
        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(resource) => AppError::NotFound(resource),
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::CartNotFound(id) => AppError::NotFound(format!("Cart {id}")),
            CartError::ItemNotFound { product_id, .. } => {
                AppError::NotFound(format!("Item {product_id} in cart"))
            }
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => AppError::Validation("Cart is empty".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_app_not_found() {
        let err: AppError = StoreError::NotFound("Order ORD-1".to_string()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn store_serialization_maps_to_storage() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: AppError = StoreError::from(json_err).into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
