// store-client/tests/client_integration.rs
// End-to-end tests: a real store-server on an ephemeral port, driven
// through StoreClient.

use shared::models::{CustomerInfo, ShippingAddress};
use shared::money;
use store_client::{ClientConfig, ClientError, StoreClient};
use store_server::core::{Config, ServerState};
use tempfile::TempDir;

/// Boot a fresh in-memory server and return its base URL
async fn spawn_server() -> String {
    let config = Config::with_overrides("./ignored", 0);
    let state = ServerState::initialize_in_memory(&config).expect("server state");
    let app = store_server::api::build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

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

#[tokio::test]
async fn seeded_catalog_is_served() {
    let base_url = spawn_server().await;
    let client = StoreClient::new(ClientConfig::new(&base_url)).unwrap();

    let all = client.products(None).await.unwrap();
    assert_eq!(all.len(), 4);

    let electronics = client.products(Some("Electronics")).await.unwrap();
    assert_eq!(electronics.len(), 2);

    let headphones = client.product("1").await.unwrap();
    assert_eq!(headphones.name, "Premium Wireless Headphones");
    assert_eq!(headphones.price, 199.99);

    assert!(matches!(
        client.product("99").await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn cart_flow_merges_lines_and_recomputes_totals() {
    let base_url = spawn_server().await;
    let client = StoreClient::new(ClientConfig::new(&base_url)).unwrap();

    let cart = client.add_to_cart("1", 1).await.unwrap();
    assert_eq!(cart.items.len(), 1);

    // Same product again: one line, summed quantity
    let cart = client.add_to_cart("1", 2).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
    assert_eq!(cart.total, 599.97);

    // Price and name came from the catalog, not the request
    assert_eq!(cart.items[0].price, 199.99);
    assert_eq!(cart.items[0].name, "Premium Wireless Headphones");

    // Quantity zero removes the line
    let cart = client.set_quantity("1", 0).await.unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, 0.0);

    // Unknown product cannot be added (server-trusted pricing)
    assert!(matches!(
        client.add_to_cart("99", 1).await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn set_quantity_on_unknown_cart_is_not_found() {
    let base_url = spawn_server().await;
    let client = StoreClient::new(ClientConfig::new(&base_url)).unwrap();
    assert!(matches!(
        client.set_quantity("1", 2).await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn checkout_creates_order_and_clears_cart() {
    let base_url = spawn_server().await;
    let cache_dir = TempDir::new().unwrap();
    let client = StoreClient::new(
        ClientConfig::new(&base_url).with_cache_dir(cache_dir.path()),
    )
    .unwrap();

    client.add_to_cart("1", 1).await.unwrap();
    client.add_to_cart("1", 2).await.unwrap();

    let order = client
        .checkout(customer(), address(), "visa", "4242 4242 4242 4242")
        .await
        .unwrap();

    assert!(order.id.starts_with("ORD-"));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 3);
    assert_eq!(order.total, 599.97);
    assert_eq!(money::display_total(order.total), 659.97);
    // Only the last 4 digits ever reach the server
    assert_eq!(order.payment_method.card_last4, "4242");

    // Checkout cleared the originating cart
    let cart = client.cart().await.unwrap();
    assert!(cart.items.is_empty());

    // The store serves the receipt and the order list
    let receipt = client.receipt(&order.id).await.unwrap();
    assert_eq!(receipt.total, 599.97);
    let orders = client.orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
}

#[tokio::test]
async fn checkout_with_empty_cart_is_rejected() {
    let base_url = spawn_server().await;
    let client = StoreClient::new(ClientConfig::new(&base_url)).unwrap();

    let err = client
        .checkout(customer(), address(), "visa", "4242 4242 4242 4242")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    // No order was created
    assert!(client.orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn cached_orders_survive_a_server_restart() {
    let cache_dir = TempDir::new().unwrap();

    // Check out against the first server instance
    let first_url = spawn_server().await;
    let client = StoreClient::new(
        ClientConfig::new(&first_url).with_cache_dir(cache_dir.path()),
    )
    .unwrap();
    client.add_to_cart("2", 1).await.unwrap();
    let order = client
        .checkout(customer(), address(), "mastercard", "5105105105105100")
        .await
        .unwrap();

    // "Restart": a fresh server with an empty order store
    let second_url = spawn_server().await;
    let client = StoreClient::new(
        ClientConfig::new(&second_url).with_cache_dir(cache_dir.path()),
    )
    .unwrap();

    // The store is empty but the cached history fills the gap
    let orders = client.orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);

    // The receipt is still viewable from the optimistic cache
    let receipt = client.receipt(&order.id).await.unwrap();
    assert_eq!(receipt.id, order.id);
}

#[tokio::test]
async fn deleting_an_order_updates_store_and_cache() {
    let base_url = spawn_server().await;
    let cache_dir = TempDir::new().unwrap();
    let client = StoreClient::new(
        ClientConfig::new(&base_url).with_cache_dir(cache_dir.path()),
    )
    .unwrap();

    client.add_to_cart("3", 2).await.unwrap();
    let order = client
        .checkout(customer(), address(), "visa", "4242424242424242")
        .await
        .unwrap();

    client.delete_order(&order.id).await.unwrap();

    // Gone from the store...
    assert!(matches!(
        client.receipt(&order.id).await,
        Err(ClientError::NotFound(_))
    ));
    // ...and it does not reappear from the cache on reconciliation
    assert!(client.orders().await.unwrap().is_empty());

    // Deleting again is NotFound
    assert!(matches!(
        client.delete_order(&order.id).await,
        Err(ClientError::NotFound(_))
    ));
}
