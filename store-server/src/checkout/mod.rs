//! Checkout processor
//!
//! Turns a cart snapshot into an order record. The subtotal is recomputed
//! here from the submitted items with decimal arithmetic; the cart
//! aggregator's cached total is never trusted, so a stale or tampered cart
//! total cannot leak into a persisted order.

use chrono::Utc;
use shared::models::{
    CartLineItem, CustomerInfo, Order, OrderStatus, PaymentMethod, ShippingAddress,
};
use shared::money;
use thiserror::Error;

/// Checkout errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
}

/// Build an order from a cart snapshot
///
/// Fails when `items` is empty: checkout never proceeds on an empty cart.
/// The order id is a wall-clock token (`ORD-<unix millis>`); collisions under
/// high-frequency concurrent checkouts are an accepted limitation. The order
/// is returned fully formed: callers persist it atomically or not at all.
pub fn build_order(
    items: Vec<CartLineItem>,
    customer_info: CustomerInfo,
    shipping_address: ShippingAddress,
    payment_method: PaymentMethod,
) -> Result<Order, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let now = Utc::now();
    let subtotal = money::items_subtotal(&items);

    Ok(Order {
        id: format!("ORD-{}", now.timestamp_millis()),
        items,
        customer_info,
        shipping_address,
        payment_method,
        total: subtotal,
        status: OrderStatus::Pending,
        created_at: now.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0101".to_string(),
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            address: "1 Harbor St".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zip_code: "22201".to_string(),
        }
    }

    fn card() -> PaymentMethod {
        PaymentMethod {
            card_type: "visa".to_string(),
            card_last4: "4242".to_string(),
        }
    }

    fn line(product_id: &str, price: f64, quantity: i32) -> CartLineItem {
        CartLineItem {
            product_id: product_id.to_string(),
            name: format!("Product {product_id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn empty_cart_is_rejected() {
        let err = build_order(vec![], customer(), address(), card()).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn subtotal_is_recomputed_from_items() {
        let order = build_order(
            vec![line("1", 199.99, 3), line("3", 49.99, 2)],
            customer(),
            address(),
            card(),
        )
        .unwrap();
        assert_eq!(order.total, 699.95);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn order_id_is_a_timestamp_token() {
        let order = build_order(vec![line("1", 199.99, 1)], customer(), address(), card()).unwrap();
        let millis = order.created_at_millis().expect("ORD-<millis> id");
        // The id token and created_at describe the same instant
        let created = chrono::DateTime::parse_from_rfc3339(&order.created_at).unwrap();
        assert_eq!(created.timestamp_millis(), millis);
    }

    #[test]
    fn snapshot_keeps_submitted_items_verbatim() {
        let items = vec![line("1", 199.99, 3)];
        let order = build_order(items.clone(), customer(), address(), card()).unwrap();
        assert_eq!(order.items, items);
        // 199.99 * 3, display total applies the 10% surcharge on top
        assert_eq!(order.total, 599.97);
        assert_eq!(shared::money::display_total(order.total), 659.97);
    }
}
