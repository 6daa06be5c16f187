//! Order Model
//!
//! An order is an immutable snapshot created at checkout. Only the subtotal
//! is stored; the displayed grand total is recomputed through
//! [`crate::money::display_total`] wherever the order is shown.

use serde::{Deserialize, Serialize};

use crate::models::CartLineItem;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

/// Customer contact details captured at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Shipping destination captured at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Payment method reference
///
/// Only the card type and the last 4 digits are ever persisted; the full
/// card number must be truncated before the checkout request is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub card_type: String,
    pub card_last4: String,
}

/// Completed (or pending) purchase record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Timestamp-derived token, e.g. `ORD-1736434800000`
    pub id: String,
    /// Snapshot of the cart items at checkout time; immutable once created
    pub items: Vec<CartLineItem>,
    pub customer_info: CustomerInfo,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    /// Subtotal over `items`; tax is applied at display time only
    pub total: f64,
    pub status: OrderStatus,
    /// ISO-8601 creation timestamp
    pub created_at: String,
}

impl Order {
    /// Millisecond timestamp encoded in the order id, if the id carries one
    pub fn created_at_millis(&self) -> Option<i64> {
        self.id.strip_prefix("ORD-").and_then(|t| t.parse().ok())
    }
}

/// Checkout payload: `POST /checkout`
///
/// `cart_id` names the originating cart, which is cleared once the order is
/// persisted; checkout from a raw item list leaves every cart untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub cart_id: Option<String>,
    pub cart_items: Vec<CartLineItem>,
    pub customer_info: CustomerInfo,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}
