//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable after catalog load; `id` is unique across
/// the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Long-form description for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Display asset (URL or path).
    pub image: String,
    /// Default color variant label.
    pub color: String,
    /// Default specification/size label.
    pub spec: String,
    /// Selectable color labels (non-empty).
    pub available_colors: Vec<String>,
    /// Selectable size labels (may be empty).
    #[serde(default)]
    pub available_sizes: Vec<String>,
}

impl Product {
    /// Description shown on the detail view, falling back to the
    /// short description.
    pub fn detail_text(&self) -> &str {
        self.detailed_description
            .as_deref()
            .unwrap_or(&self.description)
    }

    /// Check whether the product offers the given color label.
    ///
    /// The default color always counts as offered.
    pub fn offers_color(&self, label: &str) -> bool {
        self.color == label || self.available_colors.iter().any(|c| c == label)
    }

    /// Check whether the product offers the given size label.
    ///
    /// The default spec label always counts as offered.
    pub fn offers_size(&self, label: &str) -> bool {
        self.spec == label || self.available_sizes.iter().any(|s| s == label)
    }

    /// Whether the product has more than one selectable color.
    pub fn has_color_choices(&self) -> bool {
        self.available_colors.len() > 1
    }

    /// Whether the product has selectable sizes at all.
    pub fn has_size_choices(&self) -> bool {
        !self.available_sizes.is_empty()
    }
}
