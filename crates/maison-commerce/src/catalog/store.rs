//! Read-only catalog store.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{filter, SearchQuery};

/// The embedded catalog dataset, loaded once at startup.
const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// An immutable, ordered collection of products.
///
/// Loaded once at startup and treated as read-only configuration; there
/// is no mutation API.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Load the embedded catalog dataset.
    pub fn embedded() -> Result<Self, CommerceError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Build a catalog from an ordered product list.
    ///
    /// Rejects duplicate ids and products with no selectable colors.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if product.available_colors.is_empty() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has no selectable colors",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// All products, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, erroring when absent.
    pub fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.find_by_id(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Filter the catalog with a raw query string.
    pub fn search(&self, raw: &str) -> Vec<&Product> {
        let query = SearchQuery::parse(raw);
        filter(&self.products, &query)
    }

    /// The first `n` products, used for featured/hero views.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            detailed_description: None,
            price: Money::new(1000, Currency::NGN),
            image: String::new(),
            color: "Blue".to_string(),
            spec: "Standard".to_string(),
            available_colors: vec!["Blue".to_string()],
            available_sizes: Vec::new(),
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CatalogStore::embedded().unwrap();
        assert!(!catalog.is_empty());

        // Every product keeps the data-model invariants.
        for p in catalog.all() {
            assert!(!p.available_colors.is_empty());
            assert!(p.price.is_positive());
        }
    }

    #[test]
    fn test_find_by_id() {
        let catalog =
            CatalogStore::from_products(vec![product("p1", "Lamp"), product("p2", "Chair")])
                .unwrap();

        assert_eq!(catalog.find_by_id(&ProductId::new("p2")).unwrap().name, "Chair");
        assert!(catalog.find_by_id(&ProductId::new("p9")).is_none());
    }

    #[test]
    fn test_get_not_found() {
        let catalog = CatalogStore::from_products(vec![product("p1", "Lamp")]).unwrap();
        let err = catalog.get(&ProductId::new("missing")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result =
            CatalogStore::from_products(vec![product("p1", "Lamp"), product("p1", "Chair")]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_missing_colors_rejected() {
        let mut bad = product("p1", "Lamp");
        bad.available_colors.clear();
        let result = CatalogStore::from_products(vec![bad]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_featured_clamps_to_len() {
        let catalog =
            CatalogStore::from_products(vec![product("p1", "Lamp"), product("p2", "Chair")])
                .unwrap();
        assert_eq!(catalog.featured(1).len(), 1);
        assert_eq!(catalog.featured(10).len(), 2);
    }
}
