//! Order store
//!
//! Orders are immutable once created: the store only ever inserts whole
//! records, returns them, or removes them. Listing is sorted newest-first by
//! creation time. This is an explicit contract, not an artifact of insertion order,
//! because the client reconciliation layer merges against it.

use redb::{ReadableDatabase, ReadableTable};
use shared::models::Order;

use super::{ORDERS_TABLE, StoreDb, StoreError, StoreResult};

/// Order store backed by redb
#[derive(Debug, Clone)]
pub struct OrderStore {
    store: StoreDb,
}

impl OrderStore {
    pub fn new(store: StoreDb) -> Self {
        Self { store }
    }

    /// Persist a newly created order
    ///
    /// Ids are unique by construction (timestamp tokens); the storage layer
    /// still refuses to overwrite an existing record.
    pub fn create(&self, order: &Order) -> StoreResult<()> {
        let txn = self.store.db().begin_write()?;
        {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            if table.get(order.id.as_str())?.is_some() {
                return Err(StoreError::Conflict(format!("Order {}", order.id)));
            }
            let value = serde_json::to_vec(order)?;
            table.insert(order.id.as_str(), value.as_slice())?;
        }
        txn.commit()?;

        tracing::info!(id = %order.id, total = order.total, "Order persisted");
        Ok(())
    }

    /// Find an order by id
    pub fn get(&self, order_id: &str) -> StoreResult<Option<Order>> {
        let read_txn = self.store.db().begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        match table.get(order_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All orders, newest first
    pub fn list(&self) -> StoreResult<Vec<Order>> {
        let read_txn = self.store.db().begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let order: Order = serde_json::from_slice(value.value())?;
            orders.push(order);
        }
        orders.sort_by(|a, b| {
            created_millis(b)
                .cmp(&created_millis(a))
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(orders)
    }

    /// Delete an order
    ///
    /// Fails with NotFound when no such order exists; otherwise removes
    /// exactly that one record.
    pub fn delete(&self, order_id: &str) -> StoreResult<()> {
        let txn = self.store.db().begin_write()?;
        let removed = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            table.remove(order_id)?.is_some()
        };
        txn.commit()?;

        if !removed {
            return Err(StoreError::NotFound(format!("Order {order_id}")));
        }
        tracing::info!(id = %order_id, "Order deleted");
        Ok(())
    }
}

/// Creation time in unix millis: from the id token when present, otherwise
/// from the `created_at` timestamp
fn created_millis(order: &Order) -> i64 {
    order.created_at_millis().unwrap_or_else(|| {
        chrono::DateTime::parse_from_rfc3339(&order.created_at)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    })
}
