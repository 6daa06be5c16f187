//! Store client
//!
//! Typed calls over the store API plus the reconciliation logic that merges
//! the durable local cache with the authoritative order store.

use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::{
    AddItemRequest, Cart, CheckoutRequest, CustomerInfo, Order, PaymentMethod, Product,
    SetQuantityRequest, ShippingAddress,
};

use crate::cache::OrderCache;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpApi, HttpTransport};

/// Storefront API client
///
/// Generic over the transport so reconciliation behavior is testable against
/// scripted responses; production code uses [`HttpTransport`].
#[derive(Debug)]
pub struct StoreClient<H: HttpApi = HttpTransport> {
    http: H,
    cache: Option<OrderCache>,
    cart_id: String,
}

impl StoreClient<HttpTransport> {
    /// Create a client over the network transport
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = HttpTransport::new(&config)?;
        Ok(Self::with_transport(http, &config))
    }
}

impl<H: HttpApi> StoreClient<H> {
    /// Create a client over a custom transport
    pub fn with_transport(http: H, config: &ClientConfig) -> Self {
        Self {
            http,
            cache: config.cache_dir.as_ref().map(OrderCache::new),
            cart_id: config.cart_id.clone(),
        }
    }

    /// The cart id sent with every cart operation
    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    // ========== Catalog ==========

    /// List catalog products, optionally filtered by category
    pub async fn products(&self, category: Option<&str>) -> ClientResult<Vec<Product>> {
        let path = match category {
            Some(category) => format!("/products?category={category}"),
            None => "/products".to_string(),
        };
        expect_data(self.http.get(&path).await?)
    }

    /// Fetch a single product
    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        expect_data(self.http.get(&format!("/products/{id}")).await?)
    }

    // ========== Cart ==========

    /// Fetch this client's cart
    pub async fn cart(&self) -> ClientResult<Cart> {
        expect_data(
            self.http
                .get(&format!("/cart?cartId={}", self.cart_id))
                .await?,
        )
    }

    /// Add a catalog product to the cart
    ///
    /// Pricing is server-trusted: only the product id and quantity are sent.
    pub async fn add_to_cart(&self, product_id: &str, quantity: i32) -> ClientResult<Cart> {
        let request = AddItemRequest {
            cart_id: Some(self.cart_id.clone()),
            product_id: product_id.to_string(),
            quantity,
        };
        expect_data(self.http.post("/cart", &request).await?)
    }

    /// Overwrite a line's quantity; `quantity <= 0` removes the line
    pub async fn set_quantity(&self, product_id: &str, quantity: i32) -> ClientResult<Cart> {
        let request = SetQuantityRequest {
            cart_id: Some(self.cart_id.clone()),
            product_id: product_id.to_string(),
            quantity,
        };
        expect_data(self.http.put("/cart", &request).await?)
    }

    /// Delete the cart record outright
    pub async fn clear_cart(&self) -> ClientResult<()> {
        let response: ApiResponse<serde_json::Value> = self
            .http
            .delete(&format!("/cart?cartId={}", self.cart_id))
            .await?;
        expect_success(response)
    }

    // ========== Checkout and orders ==========

    /// Check out the current cart
    ///
    /// Sends the cart snapshot together with the cart id so the server clears
    /// the cart once the order is persisted. The full card number never
    /// leaves this function: only its last 4 digits enter the request. The
    /// created order is recorded in the durable cache before returning.
    pub async fn checkout(
        &self,
        customer_info: CustomerInfo,
        shipping_address: ShippingAddress,
        card_type: &str,
        card_number: &str,
    ) -> ClientResult<Order> {
        let cart = self.cart().await?;
        let request = CheckoutRequest {
            cart_id: Some(self.cart_id.clone()),
            cart_items: cart.items,
            customer_info,
            shipping_address,
            payment_method: PaymentMethod {
                card_type: card_type.to_string(),
                card_last4: card_last4(card_number),
            },
        };

        let order: Order = expect_data(self.http.post("/checkout", &request).await?)?;

        if let Some(cache) = &self.cache
            && let Err(e) = cache.record_order(&order)
        {
            // Cache is resilience only; a failed write must not fail checkout
            tracing::warn!(order_id = %order.id, error = %e, "Failed to cache order");
        }
        Ok(order)
    }

    /// List orders, reconciling the store with the local cache
    ///
    /// The store's list (newest first) comes first and wins on id collisions;
    /// cached orders the store no longer knows (typically after a restart
    /// wiped the in-memory variant, or after data loss) are appended in
    /// their cached order. When the fetch fails entirely the cache alone is
    /// returned rather than an error.
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        let cached = self
            .cache
            .as_ref()
            .map(|cache| cache.history())
            .unwrap_or_default();

        match self.http.get::<Vec<Order>>("/checkout").await {
            Ok(response) if response.success => {
                let store_orders = response.data.unwrap_or_default();
                Ok(merge_orders(store_orders, cached))
            }
            Ok(_) => Ok(cached),
            Err(e) => {
                tracing::warn!(error = %e, "Order list fetch failed, serving cached history");
                Ok(cached)
            }
        }
    }

    /// Fetch one receipt, preferring the store but never downgrading
    ///
    /// A cached `last_order` with a matching id is the optimistic value; a
    /// successful fetch whose id matches replaces it. When the fetch fails or
    /// returns the wrong record, the optimistic value is kept. Only when
    /// neither source has the order does this surface NotFound.
    pub async fn receipt(&self, order_id: &str) -> ClientResult<Order> {
        let optimistic = self
            .cache
            .as_ref()
            .and_then(|cache| cache.last_order())
            .filter(|order| order.id == order_id);

        let fetched = self
            .http
            .get::<Order>(&format!("/checkout?orderId={order_id}"))
            .await;

        match fetched {
            Ok(response) if response.success => match response.data {
                Some(order) if order.id == order_id => Ok(order),
                _ => optimistic.ok_or_else(|| not_found(order_id)),
            },
            Ok(_) | Err(_) => optimistic.ok_or_else(|| not_found(order_id)),
        }
    }

    /// Delete an order from the store, then from the local cache
    ///
    /// The store is updated first; when that fails the cache is left
    /// untouched and the error propagates, so the order keeps appearing
    /// until the authoritative deletion succeeds.
    pub async fn delete_order(&self, order_id: &str) -> ClientResult<()> {
        let response: ApiResponse<serde_json::Value> = self
            .http
            .delete(&format!("/checkout?orderId={order_id}"))
            .await?;
        expect_success(response)?;

        if let Some(cache) = &self.cache {
            cache.remove(order_id)?;
        }
        Ok(())
    }
}

/// Merge the authoritative order list with cached history
///
/// Store entries come first in store order; cached entries are appended only
/// when their id was not already seen, preserving their cached order.
fn merge_orders(store_orders: Vec<Order>, cached: Vec<Order>) -> Vec<Order> {
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut merged = Vec::with_capacity(store_orders.len() + cached.len());

    for order in store_orders.into_iter().chain(cached) {
        if seen.insert(order.id.clone()) {
            merged.push(order);
        }
    }
    merged
}

/// Last 4 digits of a card number, ignoring spaces and separators
fn card_last4(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
}

fn expect_data<T: DeserializeOwned>(response: ApiResponse<T>) -> ClientResult<T> {
    if !response.success {
        return Err(ClientError::Api {
            status: 200,
            message: response
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing data in response".to_string()))
}

fn expect_success<T>(response: ApiResponse<T>) -> ClientResult<()> {
    if !response.success {
        return Err(ClientError::Api {
            status: 200,
            message: response
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }
    Ok(())
}

fn not_found(order_id: &str) -> ClientError {
    ClientError::NotFound(format!("Order {order_id}"))
}
