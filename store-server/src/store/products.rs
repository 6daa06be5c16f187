//! Catalog store
//!
//! Products are seeded once on an empty database and remain the source of
//! truth for unit prices: the cart aggregator copies price and name from here
//! at add time. Generated ids continue the seeded `"1"`, `"2"`, … sequence
//! from a persistent counter.

use redb::{ReadableDatabase, ReadableTable};
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::{PRODUCT_SEQ_KEY, PRODUCTS_TABLE, SEQUENCE_TABLE, StoreDb, StoreError, StoreResult};

/// Catalog store backed by redb
#[derive(Debug, Clone)]
pub struct ProductStore {
    store: StoreDb,
}

impl ProductStore {
    pub fn new(store: StoreDb) -> Self {
        Self { store }
    }

    /// Seed the demo catalog when the table is empty
    ///
    /// Returns the number of seeded records (0 when the catalog already has
    /// content, so restarts never duplicate or overwrite edits).
    pub fn seed_if_empty(&self) -> StoreResult<usize> {
        let txn = self.store.db().begin_write()?;
        let seeded = {
            let mut table = txn.open_table(PRODUCTS_TABLE)?;
            if table.iter()?.next().is_some() {
                0
            } else {
                let seeds = seed_catalog();
                let count = seeds.len();
                for product in &seeds {
                    let value = serde_json::to_vec(product)?;
                    table.insert(product.id.as_str(), value.as_slice())?;
                }
                let mut seq_table = txn.open_table(SEQUENCE_TABLE)?;
                seq_table.insert(PRODUCT_SEQ_KEY, count as u64)?;
                count
            }
        };
        txn.commit()?;

        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded demo catalog");
        }
        Ok(seeded)
    }

    /// All products, optionally filtered by exact category match
    ///
    /// Ordered by id (numeric ids numerically, others after, lexicographic).
    pub fn list(&self, category: Option<&str>) -> StoreResult<Vec<Product>> {
        let read_txn = self.store.db().begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;

        let mut products = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let product: Product = serde_json::from_slice(value.value())?;
            if category.is_none_or(|c| product.category == c) {
                products.push(product);
            }
        }
        products.sort_by(|a, b| match (id_ordinal(&a.id), id_ordinal(&b.id)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });
        Ok(products)
    }

    /// Find a product by id
    pub fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        let read_txn = self.store.db().begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;
        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Create a new product with a generated id
    pub fn create(&self, data: ProductCreate) -> StoreResult<Product> {
        let txn = self.store.db().begin_write()?;
        let product = {
            let mut seq_table = txn.open_table(SEQUENCE_TABLE)?;
            let next = seq_table.get(PRODUCT_SEQ_KEY)?.map(|g| g.value()).unwrap_or(0) + 1;
            seq_table.insert(PRODUCT_SEQ_KEY, next)?;
            drop(seq_table);

            let product = Product {
                id: next.to_string(),
                name: data.name,
                price: data.price,
                description: data.description.unwrap_or_default(),
                image: data.image.unwrap_or_default(),
                category: data.category,
                stock: data.stock.unwrap_or(0),
            };

            let mut table = txn.open_table(PRODUCTS_TABLE)?;
            let value = serde_json::to_vec(&product)?;
            table.insert(product.id.as_str(), value.as_slice())?;
            product
        };
        txn.commit()?;

        tracing::info!(id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Partially update a product
    pub fn update(&self, id: &str, data: ProductUpdate) -> StoreResult<Product> {
        let txn = self.store.db().begin_write()?;
        let product = {
            let mut table = txn.open_table(PRODUCTS_TABLE)?;
            let mut product: Product = match table.get(id)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Err(StoreError::NotFound(format!("Product {id}"))),
            };

            if let Some(v) = data.name {
                product.name = v;
            }
            if let Some(v) = data.price {
                product.price = v;
            }
            if let Some(v) = data.description {
                product.description = v;
            }
            if let Some(v) = data.image {
                product.image = v;
            }
            if let Some(v) = data.category {
                product.category = v;
            }
            if let Some(v) = data.stock {
                product.stock = v;
            }

            let value = serde_json::to_vec(&product)?;
            table.insert(id, value.as_slice())?;
            product
        };
        txn.commit()?;
        Ok(product)
    }

    /// Delete a product
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let txn = self.store.db().begin_write()?;
        let removed = {
            let mut table = txn.open_table(PRODUCTS_TABLE)?;
            table.remove(id)?.is_some()
        };
        txn.commit()?;

        if !removed {
            return Err(StoreError::NotFound(format!("Product {id}")));
        }
        Ok(())
    }
}

/// Numeric ordinal of an id, for stable catalog ordering
fn id_ordinal(id: &str) -> Option<u64> {
    id.parse().ok()
}

/// The demo catalog used to seed an empty store
fn seed_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Premium Wireless Headphones".to_string(),
            price: 199.99,
            description: "High-quality sound with noise cancellation".to_string(),
            image: "/wireless-headphones.png".to_string(),
            category: "Electronics".to_string(),
            stock: 50,
        },
        Product {
            id: "2".to_string(),
            name: "Ergonomic Keyboard".to_string(),
            price: 89.99,
            description: "Comfortable typing experience with mechanical switches".to_string(),
            image: "/ergonomic-keyboard.jpg".to_string(),
            category: "Electronics".to_string(),
            stock: 30,
        },
        Product {
            id: "3".to_string(),
            name: "USB-C Hub".to_string(),
            price: 49.99,
            description: "Multi-port connectivity hub for laptops".to_string(),
            image: "/usb-hub.png".to_string(),
            category: "Accessories".to_string(),
            stock: 100,
        },
        Product {
            id: "4".to_string(),
            name: "Laptop Stand".to_string(),
            price: 39.99,
            description: "Adjustable aluminum laptop stand".to_string(),
            image: "/laptop-stand.png".to_string(),
            category: "Accessories".to_string(),
            stock: 45,
        },
    ]
}
