//! The catalog filter.

use crate::catalog::Product;
use crate::search::SearchQuery;

/// Filter a product list with a query.
///
/// An empty query returns the full list unchanged; otherwise every
/// product whose name, description, color or spec contains the query
/// (case-insensitively) is returned, in original order. Pure and
/// deterministic; there are no error conditions.
pub fn filter<'a>(products: &'a [Product], query: &SearchQuery) -> Vec<&'a Product> {
    products.iter().filter(|p| query.matches(p)).collect()
}
