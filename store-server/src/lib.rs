//! Storefront backend server
//!
//! Authoritative backend for the storefront: product catalog, per-identifier
//! shopping carts, checkout, and order records behind a JSON HTTP API.
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers (one module per resource)
//! ├── carts/         # In-memory cart aggregator
//! ├── checkout/      # Order construction from a cart snapshot
//! ├── store/         # redb-backed catalog and order stores
//! └── utils/         # Error types, logging
//! ```
//!
//! The catalog is the source of truth for unit prices: cart lines copy the
//! price and name from the catalog record at add time. Orders persist the
//! subtotal only; the display surcharge is recomputed by callers through
//! `shared::money::display_total`.

pub mod api;
pub mod carts;
pub mod checkout;
pub mod core;
pub mod store;
pub mod utils;

// Re-export public types
pub use carts::CartStore;
pub use core::{Config, Server, ServerState};
pub use store::{OrderStore, ProductStore, StoreDb};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
