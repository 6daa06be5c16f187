//! In-memory cart aggregator
//!
//! Carts are ephemeral session state keyed by cart id: they live for the
//! process lifetime and reset on restart, while orders survive in the redb
//! store. Every mutation runs under the DashMap entry lock for its cart key,
//! so concurrent operations on one cart are serialized and cannot lose
//! updates; operations on different carts proceed in parallel.

use dashmap::DashMap;
use shared::models::{Cart, CartLineItem, Product};
use thiserror::Error;

/// Cart aggregator errors
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart {0} not found")]
    CartNotFound(String),

    #[error("Item {product_id} not found in cart {cart_id}")]
    ItemNotFound { cart_id: String, product_id: String },
}

pub type CartResult<T> = Result<T, CartError>;

/// Process-wide cart state, one entry per cart id
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<String, Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing cart, or a fresh `{items: [], total: 0}`; never errors
    ///
    /// The fresh cart is not inserted; a cart record is only materialized by
    /// the first `add_item`, so probing an id leaves no state behind.
    pub fn get(&self, cart_id: &str) -> Cart {
        self.carts
            .get(cart_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(Cart::empty)
    }

    /// Add `quantity` of a catalog product to the cart
    ///
    /// The line item denormalizes name and unit price from the catalog record
    /// at add time. An existing line for the same product id has its quantity
    /// incremented (no cap, no negative guard); otherwise a new line is
    /// appended. Returns the full updated cart.
    pub fn add_item(&self, cart_id: &str, product: &Product, quantity: i32) -> Cart {
        let mut entry = self.carts.entry(cart_id.to_string()).or_default();
        let cart = entry.value_mut();

        match cart
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => cart.items.push(CartLineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
            }),
        }
        cart.recompute_total();
        cart.clone()
    }

    /// Overwrite a line's quantity; `quantity <= 0` removes the line
    ///
    /// This is the sole removal mechanism. Fails with NotFound when the cart
    /// or the line item does not exist.
    pub fn set_quantity(&self, cart_id: &str, product_id: &str, quantity: i32) -> CartResult<Cart> {
        let mut entry = self
            .carts
            .get_mut(cart_id)
            .ok_or_else(|| CartError::CartNotFound(cart_id.to_string()))?;
        let cart = entry.value_mut();

        let line = cart
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or_else(|| CartError::ItemNotFound {
                cart_id: cart_id.to_string(),
                product_id: product_id.to_string(),
            })?;

        if quantity <= 0 {
            cart.items.retain(|item| item.product_id != product_id);
        } else {
            line.quantity = quantity;
        }
        cart.recompute_total();
        Ok(cart.clone())
    }

    /// Delete the cart entry outright
    ///
    /// A subsequent `get` on the same id returns a brand-new empty cart,
    /// indistinguishable from one that never existed.
    pub fn clear(&self, cart_id: &str) {
        self.carts.remove(cart_id);
    }
}
