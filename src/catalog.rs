/// In-memory product catalog
///
/// Loaded once at startup and shared read-only for the life of the process.
/// Each product's id is its position in the source list, so loading the same
/// source always yields the same id-to-product mapping.
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Product, ProductEntry, ProductId},
};

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../data/skus.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the bundled catalog
    pub fn load() -> AppResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Loads a catalog file from disk
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json(&raw)?;

        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Loaded catalog file"
        );

        Ok(catalog)
    }

    /// Parses a JSON array of catalog entries, assigning ids by position
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let entries: Vec<ProductEntry> = serde_json::from_str(raw)
            .map_err(|e| AppError::Catalog(format!("Malformed catalog data: {}", e)))?;

        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<ProductEntry>) -> Self {
        let products = entries
            .into_iter()
            .enumerate()
            .map(|(id, entry)| Product::from_entry(id, entry))
            .collect();

        Self { products }
    }

    /// Exact id lookup
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LAPTOPS: &str = r#"[
        {"product_name": "Laptop A", "brand": "Acme", "category": "Laptop", "description": "cheap", "price": 50000},
        {"product_name": "Laptop B", "brand": "Acme", "category": "Laptop", "description": "light", "price": 70000}
    ]"#;

    #[test]
    fn test_ids_follow_source_order() {
        let catalog = Catalog::from_json(TWO_LAPTOPS).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "Laptop A");
        assert_eq!(catalog.get(1).unwrap().name, "Laptop B");
        assert_eq!(catalog.get(1).unwrap().price, 70000.0);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_ids_match_positions() {
        let catalog = Catalog::load().unwrap();
        for (position, product) in catalog.iter().enumerate() {
            assert_eq!(product.id, position);
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|p| !p.name.is_empty() && p.price > 0.0));
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let first = Catalog::load().unwrap();
        let second = Catalog::load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_catalog_is_rejected() {
        let missing_price = r#"[{"product_name": "X", "brand": "Y", "category": "Z", "description": "W"}]"#;
        assert!(matches!(
            Catalog::from_json(missing_price),
            Err(AppError::Catalog(_))
        ));

        let not_an_array = r#"{"product_name": "X"}"#;
        assert!(Catalog::from_json(not_an_array).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.products(), &[] as &[Product]);
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::from_path(Path::new("/nonexistent/skus.json"));
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
