//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price in the store currency
    pub price: f64,
    pub description: String,
    /// Image reference (path or URL, served elsewhere)
    pub image: String,
    pub category: String,
    /// Stock on hand; informational, not reserved at checkout
    pub stock: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: String,
    pub stock: Option<i64>,
}

/// Update product payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}
