//! Cart Model

use serde::{Deserialize, Serialize};

use crate::money;

/// One product's entry within a cart
///
/// Name and unit price are copied from the catalog at add time and never
/// re-fetched, so a later catalog edit does not retroactively reprice lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// A per-identifier mutable selection of line items plus a derived total
///
/// Invariant: `total` always equals the reduction over the current items.
/// It is recomputed after every mutation via [`Cart::recompute_total`],
/// never adjusted incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartLineItem>,
    pub total: f64,
}

impl Cart {
    /// Fresh empty cart: `{items: [], total: 0}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Recompute `total` from the current items
    pub fn recompute_total(&mut self) {
        self.total = money::items_subtotal(&self.items);
    }
}

/// Add-to-cart payload: `POST /cart`
///
/// Unit price and name are intentionally absent; the server copies both from
/// the catalog record (server-trusted pricing).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub cart_id: Option<String>,
    pub product_id: String,
    pub quantity: i32,
}

/// Set-quantity payload: `PUT /cart`
///
/// `quantity <= 0` removes the line (the sole removal mechanism).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQuantityRequest {
    pub cart_id: Option<String>,
    pub product_id: String,
    pub quantity: i32,
}
