//! Search query parsing and matching.

use crate::catalog::Product;

/// A parsed search query.
///
/// Holds the raw input alongside the trimmed, lowercased needle used
/// for matching. An empty or whitespace-only query matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Parse a raw query string.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// The query as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The trimmed input used for matching, in original case.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    /// Whether the query is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check whether a product matches this query.
    ///
    /// Case-insensitive substring match over name, description, color
    /// and spec. An empty query matches every product.
    pub fn matches(&self, product: &Product) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            product.name.as_str(),
            product.description.as_str(),
            product.color.as_str(),
            product.spec.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
