//! Durable order cache
//!
//! JSON files under a cache directory mirror what the storefront keeps in
//! browser storage: the most recent order (`last_order.json`) and a bounded
//! history of past orders (`orders_history.json`, newest first, capped at
//! 50 entries). The cache exists purely for resilience and is never the
//! source of truth when the server can answer.
//!
//! Reads are tolerant by design: a missing or corrupt file degrades to
//! "nothing cached", never to an error.

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::Order;

use crate::error::ClientResult;

/// Maximum number of history entries kept on disk
pub const HISTORY_CAP: usize = 50;

const LAST_ORDER_FILE: &str = "last_order.json";
const HISTORY_FILE: &str = "orders_history.json";

/// File-backed order cache
#[derive(Debug, Clone)]
pub struct OrderCache {
    dir: PathBuf,
}

impl OrderCache {
    /// Create a cache rooted at `dir` (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The most recently checked-out order, if cached and readable
    pub fn last_order(&self) -> Option<Order> {
        read_json(&self.dir.join(LAST_ORDER_FILE))
    }

    /// Cached order history, newest first; empty when absent or corrupt
    pub fn history(&self) -> Vec<Order> {
        read_json(&self.dir.join(HISTORY_FILE)).unwrap_or_default()
    }

    /// Record a freshly created order
    ///
    /// Overwrites `last_order` and unshifts the order into the history,
    /// deduplicating by id and truncating to [`HISTORY_CAP`].
    pub fn record_order(&self, order: &Order) -> ClientResult<()> {
        fs::create_dir_all(&self.dir)?;
        write_json(&self.dir.join(LAST_ORDER_FILE), order)?;

        let mut history = self.history();
        history.retain(|cached| cached.id != order.id);
        history.insert(0, order.clone());
        history.truncate(HISTORY_CAP);
        write_json(&self.dir.join(HISTORY_FILE), &history)?;
        Ok(())
    }

    /// Remove one order id from both cache files
    ///
    /// Called only after the server confirmed the deletion, so the deleted
    /// order cannot reappear on the next reconciliation.
    pub fn remove(&self, order_id: &str) -> ClientResult<()> {
        if self.last_order().is_some_and(|order| order.id == order_id) {
            fs::remove_file(self.dir.join(LAST_ORDER_FILE))?;
        }

        let mut history = self.history();
        let before = history.len();
        history.retain(|cached| cached.id != order_id);
        if history.len() != before {
            fs::create_dir_all(&self.dir)?;
            write_json(&self.dir.join(HISTORY_FILE), &history)?;
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt cache file");
            None
        }
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> ClientResult<()> {
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        CartLineItem, CustomerInfo, OrderStatus, PaymentMethod, ShippingAddress,
    };
    use tempfile::TempDir;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            items: vec![CartLineItem {
                product_id: "1".to_string(),
                name: "Premium Wireless Headphones".to_string(),
                price: 199.99,
                quantity: 1,
            }],
            customer_info: CustomerInfo {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace@example.com".to_string(),
                phone: "555-0101".to_string(),
            },
            shipping_address: ShippingAddress {
                address: "1 Harbor St".to_string(),
                city: "Arlington".to_string(),
                state: "VA".to_string(),
                zip_code: "22201".to_string(),
            },
            payment_method: PaymentMethod {
                card_type: "visa".to_string(),
                card_last4: "4242".to_string(),
            },
            total: 199.99,
            status: OrderStatus::Pending,
            created_at: "2025-01-09T15:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_cache_reads_as_nothing() {
        let dir = TempDir::new().unwrap();
        let cache = OrderCache::new(dir.path());
        assert!(cache.last_order().is_none());
        assert!(cache.history().is_empty());
    }

    #[test]
    fn record_order_sets_last_and_unshifts_history() {
        let dir = TempDir::new().unwrap();
        let cache = OrderCache::new(dir.path());

        cache.record_order(&order("ORD-1")).unwrap();
        cache.record_order(&order("ORD-2")).unwrap();

        assert_eq!(cache.last_order().unwrap().id, "ORD-2");
        let ids: Vec<String> = cache.history().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["ORD-2", "ORD-1"]);
    }

    #[test]
    fn recording_an_existing_id_dedups() {
        let dir = TempDir::new().unwrap();
        let cache = OrderCache::new(dir.path());

        cache.record_order(&order("ORD-1")).unwrap();
        cache.record_order(&order("ORD-2")).unwrap();
        cache.record_order(&order("ORD-1")).unwrap();

        let ids: Vec<String> = cache.history().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["ORD-1", "ORD-2"]);
    }

    #[test]
    fn history_is_capped() {
        let dir = TempDir::new().unwrap();
        let cache = OrderCache::new(dir.path());

        for i in 0..=HISTORY_CAP {
            cache.record_order(&order(&format!("ORD-{i}"))).unwrap();
        }

        let history = cache.history();
        assert_eq!(history.len(), HISTORY_CAP);
        // Newest kept, oldest evicted
        assert_eq!(history[0].id, format!("ORD-{HISTORY_CAP}"));
        assert!(history.iter().all(|o| o.id != "ORD-0"));
    }

    #[test]
    fn remove_purges_both_files() {
        let dir = TempDir::new().unwrap();
        let cache = OrderCache::new(dir.path());

        cache.record_order(&order("ORD-1")).unwrap();
        cache.record_order(&order("ORD-2")).unwrap();
        cache.remove("ORD-2").unwrap();

        assert!(cache.last_order().is_none());
        let ids: Vec<String> = cache.history().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["ORD-1"]);

        // Removing an id that is not cached is a no-op
        cache.remove("ORD-99").unwrap();
        assert_eq!(cache.history().len(), 1);
    }

    #[test]
    fn corrupt_files_degrade_to_empty() {
        let dir = TempDir::new().unwrap();
        let cache = OrderCache::new(dir.path());
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join("orders_history.json"), "{not json").unwrap();
        std::fs::write(dir.path().join("last_order.json"), "[]").unwrap();

        assert!(cache.history().is_empty());
        assert!(cache.last_order().is_none());

        // A corrupt history is replaced wholesale on the next write
        cache.record_order(&order("ORD-1")).unwrap();
        assert_eq!(cache.history().len(), 1);
    }
}
