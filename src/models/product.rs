use serde::{Deserialize, Serialize};

/// Catalog identifier: the product's zero-based position in the source list
pub type ProductId = usize;

/// A product as it appears in the catalog data file, before an id is assigned
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductEntry {
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: f64,
}

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "product_name")]
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Assigns an id to a raw catalog entry
    pub fn from_entry(id: ProductId, entry: ProductEntry) -> Self {
        Self {
            id,
            name: entry.product_name,
            brand: entry.brand,
            category: entry.category,
            description: entry.description,
            price: entry.price,
        }
    }
}
