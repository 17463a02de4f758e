//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A selected variant label the product does not offer.
    #[error("{kind} \"{label}\" is not offered for {product}")]
    VariantNotOffered {
        product: String,
        kind: String,
        label: String,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed per line.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Malformed email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Catalog dataset failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CommerceError {
    /// Build a variant-not-offered error for a color label.
    pub fn color_not_offered(product: impl Into<String>, label: impl Into<String>) -> Self {
        CommerceError::VariantNotOffered {
            product: product.into(),
            kind: "Color".to_string(),
            label: label.into(),
        }
    }

    /// Build a variant-not-offered error for a size label.
    pub fn size_not_offered(product: impl Into<String>, label: impl Into<String>) -> Self {
        CommerceError::VariantNotOffered {
            product: product.into(),
            kind: "Size".to_string(),
            label: label.into(),
        }
    }
}
