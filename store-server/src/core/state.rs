use std::sync::Arc;

use crate::carts::CartStore;
use crate::core::Config;
use crate::store::{OrderStore, ProductStore, StoreDb, StoreResult};

/// Server state: shared handles to every store
///
/// `ServerState` is the single value threaded through all axum handlers.
/// Cloning is shallow: the redb database and the cart map are behind `Arc`.
///
/// | Field | Backing | Lifetime |
/// |-------|---------|----------|
/// | products | redb | Survives restarts |
/// | orders | redb | Survives restarts |
/// | carts | DashMap | Process-local, reset on restart |
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Catalog store (source of truth for unit prices)
    pub products: ProductStore,
    /// Order store
    pub orders: OrderStore,
    /// Cart aggregator
    pub carts: Arc<CartStore>,
}

impl ServerState {
    /// Initialize server state against the on-disk database
    ///
    /// Creates the work directory structure, opens (or creates) the database
    /// at `WORK_DIR/database/store.db`, and seeds the demo catalog when
    /// configured and empty.
    pub fn initialize(config: &Config) -> StoreResult<Self> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)?;

        let store = StoreDb::open(db_dir.join("store.db"))?;
        Self::with_store(config.clone(), store)
    }

    /// Initialize server state against an in-memory database
    ///
    /// Used by tests and the client integration suite; behavior is identical
    /// to [`initialize`](Self::initialize) apart from durability.
    pub fn initialize_in_memory(config: &Config) -> StoreResult<Self> {
        let store = StoreDb::open_in_memory()?;
        Self::with_store(config.clone(), store)
    }

    fn with_store(config: Config, store: StoreDb) -> StoreResult<Self> {
        let products = ProductStore::new(store.clone());
        let orders = OrderStore::new(store);

        if config.seed_catalog {
            products.seed_if_empty()?;
        }

        Ok(Self {
            config,
            products,
            orders,
            carts: Arc::new(CartStore::new()),
        })
    }
}
