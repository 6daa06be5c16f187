//! redb-backed storage layer for the catalog and order records
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `products` | `product_id` | `Product` (JSON) | Catalog records |
//! | `orders` | `order_id` | `Order` (JSON) | Completed checkouts |
//! | `sequence_counter` | name | `u64` | Product id sequence |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so the database file is always in a consistent
//! state across restarts. Carts are deliberately NOT stored here: a cart is
//! ephemeral session state and lives in [`crate::carts::CartStore`].

pub mod orders;
pub mod products;

pub use orders::OrderStore;
pub use products::ProductStore;

use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Catalog records: key = product id, value = JSON-serialized Product
pub(crate) const PRODUCTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("products");

/// Order records: key = order id, value = JSON-serialized Order
pub(crate) const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Sequence counters: key = counter name, value = last issued value
pub(crate) const SEQUENCE_TABLE: TableDefinition<&str, u64> =
    TableDefinition::new("sequence_counter");

/// Counter name for generated product ids
pub(crate) const PRODUCT_SEQ_KEY: &str = "product_seq";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle to the embedded database
///
/// Both [`ProductStore`] and [`OrderStore`] operate on the same underlying
/// database file; this wrapper owns it and initializes the tables once.
#[derive(Clone)]
pub struct StoreDb {
    db: Arc<Database>,
}

impl StoreDb {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init_tables(db)
    }

    /// Open an in-memory database (tests and ephemeral setups)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init_tables(db)
    }

    fn init_tables(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PRODUCTS_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            if seq_table.get(PRODUCT_SEQ_KEY)?.is_none() {
                seq_table.insert(PRODUCT_SEQ_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }
}

impl std::fmt::Debug for StoreDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreDb").finish_non_exhaustive()
    }
}
