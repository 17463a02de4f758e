//! Cart and line item types.

use crate::catalog::{CatalogStore, Product};
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// The identity of a cart line: product plus selected variant.
///
/// Two lines are the same line iff product id and both selected-variant
/// labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// The product being purchased.
    pub product_id: ProductId,
    /// Selected color label.
    pub color: String,
    /// Selected size label.
    pub size: String,
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.product_id, self.color, self.size)
    }
}

/// A line in the cart.
///
/// `quantity` is always >= 1; a line reduced to zero is removed, not
/// retained. Unit price is not stored here: totals re-read the catalog
/// price at the time of the call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Line identity.
    pub key: LineKey,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Quantity, >= 1.
    pub quantity: i64,
}

/// The result of an add operation, handed to the notification boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedLine {
    /// Identity of the affected line.
    pub key: LineKey,
    /// Product name for display.
    pub product_name: String,
    /// Quantity after the add.
    pub quantity: i64,
    /// Whether this add created the line (vs. incrementing it).
    pub first_add: bool,
}

/// A shopping cart.
///
/// An ordered collection of lines, mutated only through its operations.
/// Lifetime is one shop session: created empty at session start and
/// discarded (or cleared after checkout) at session end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Session that owns this cart.
    pub session_id: SessionId,
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn new(session_id: SessionId) -> Self {
        let now = current_timestamp();
        Self {
            session_id,
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one unit of a product with the selected variant.
    ///
    /// Missing color/size labels resolve to the product's defaults;
    /// labels the product does not offer are rejected. An identical
    /// line is incremented by 1 (up to `MAX_QUANTITY_PER_LINE`),
    /// otherwise a new line with quantity 1 is appended.
    pub fn add_line(
        &mut self,
        product: &Product,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<AddedLine, CommerceError> {
        let color = match color {
            Some(label) if !product.offers_color(label) => {
                return Err(CommerceError::color_not_offered(product.name.as_str(), label));
            }
            Some(label) => label.to_string(),
            None => product.color.clone(),
        };
        let size = match size {
            Some(label) if !product.offers_size(label) => {
                return Err(CommerceError::size_not_offered(product.name.as_str(), label));
            }
            Some(label) => label.to_string(),
            None => product.spec.clone(),
        };

        let key = LineKey {
            product_id: product.id.clone(),
            color,
            size,
        };

        if let Some(existing) = self.lines.iter_mut().find(|l| l.key == key) {
            let new_quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = new_quantity;
            let added = AddedLine {
                key: existing.key.clone(),
                product_name: existing.product_name.clone(),
                quantity: existing.quantity,
                first_add: false,
            };
            self.updated_at = current_timestamp();
            return Ok(added);
        }

        self.lines.push(CartLine {
            key: key.clone(),
            product_name: product.name.clone(),
            quantity: 1,
        });
        self.updated_at = current_timestamp();
        Ok(AddedLine {
            key,
            product_name: product.name.clone(),
            quantity: 1,
            first_add: true,
        })
    }

    /// Remove a line from the cart.
    ///
    /// Removing an absent line is a no-op, not an error.
    pub fn remove_line(&mut self, key: &LineKey) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.key != key);
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Update a line's quantity.
    ///
    /// A quantity <= 0 behaves as remove. Returns `Ok(false)` when the
    /// line is absent.
    pub fn update_quantity(
        &mut self,
        key: &LineKey,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_line(key));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.key == key) {
            line.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.updated_at = current_timestamp();
    }

    /// Total item count (sum of quantities); 0 for an empty cart.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a line by identity.
    pub fn find_line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.key == key)
    }

    /// Price of one line at the catalog's current unit price.
    pub fn line_total(
        &self,
        line: &CartLine,
        catalog: &CatalogStore,
    ) -> Result<Money, CommerceError> {
        let product = catalog.get(&line.key.product_id)?;
        product
            .price
            .try_multiply(line.quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Total price across lines; zero for an empty cart.
    ///
    /// Unit prices are re-read from the catalog at the time of the
    /// call, never snapshotted at add time.
    pub fn total_price(&self, catalog: &CatalogStore) -> Result<Money, CommerceError> {
        let mut total: Option<Money> = None;
        for line in &self.lines {
            let line_total = self.line_total(line, catalog)?;
            total = Some(match total {
                None => line_total,
                Some(acc) => acc.try_add(&line_total).ok_or_else(|| {
                    CommerceError::CurrencyMismatch {
                        expected: acc.currency.code().to_string(),
                        got: line_total.currency.code().to_string(),
                    }
                })?,
            });
        }
        Ok(total.unwrap_or_else(|| Money::zero(Currency::default())))
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price_minor: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{} description", name),
            detailed_description: None,
            price: Money::new(price_minor, Currency::NGN),
            image: String::new(),
            color: "Blue".to_string(),
            spec: "Standard".to_string(),
            available_colors: vec!["Blue".to_string(), "Red".to_string()],
            available_sizes: vec!["Standard".to_string(), "Large".to_string()],
        }
    }

    fn cart() -> Cart {
        Cart::new(SessionId::new("sess-test"))
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = cart();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_resolves_default_variant() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);

        let added = cart.add_line(&p, None, None).unwrap();
        assert_eq!(added.key.color, "Blue");
        assert_eq!(added.key.size, "Standard");
        assert!(added.first_add);
        assert_eq!(added.quantity, 1);
    }

    #[test]
    fn test_repeat_add_increments_single_line() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);

        cart.add_line(&p, None, None).unwrap();
        let added = cart.add_line(&p, None, None).unwrap();

        assert!(!added.first_add);
        assert_eq!(added.quantity, 2);
        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_different_color_is_a_distinct_line() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);

        cart.add_line(&p, Some("Blue"), None).unwrap();
        cart.add_line(&p, Some("Red"), None).unwrap();

        assert_eq!(cart.unique_line_count(), 2);
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn test_unoffered_color_rejected() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);

        let err = cart.add_line(&p, Some("Chartreuse"), None).unwrap_err();
        assert!(matches!(err, CommerceError::VariantNotOffered { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_line() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);
        let added = cart.add_line(&p, None, None).unwrap();

        assert!(cart.remove_line(&added.key));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut cart = cart();
        let key = LineKey {
            product_id: ProductId::new("ghost"),
            color: "Blue".to_string(),
            size: "Standard".to_string(),
        };
        assert!(!cart.remove_line(&key));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);
        let added = cart.add_line(&p, None, None).unwrap();

        assert!(cart.update_quantity(&added.key, 5).unwrap());
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);
        let added = cart.add_line(&p, None, None).unwrap();

        assert!(cart.update_quantity(&added.key, 0).unwrap());
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);
        let added = cart.add_line(&p, None, None).unwrap();

        assert!(cart.update_quantity(&added.key, -3).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_line() {
        let mut cart = cart();
        let key = LineKey {
            product_id: ProductId::new("ghost"),
            color: "Blue".to_string(),
            size: "Standard".to_string(),
        };
        assert!(!cart.update_quantity(&key, 3).unwrap());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);
        let added = cart.add_line(&p, None, None).unwrap();

        let err = cart
            .update_quantity(&added.key, MAX_QUANTITY_PER_LINE + 1)
            .unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(_, _)));

        // Incrementing past the cap via add is rejected too.
        cart.update_quantity(&added.key, MAX_QUANTITY_PER_LINE)
            .unwrap();
        let err = cart.add_line(&p, None, None).unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(_, _)));
    }

    #[test]
    fn test_clear() {
        let mut cart = cart();
        let p = product("p1", "Lamp", 1000);
        cart.add_line(&p, None, None).unwrap();
        cart.add_line(&p, Some("Red"), None).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_total_price() {
        let a = product("p1", "Lamp", 1000);
        let b = product("p2", "Chair", 500);
        let catalog = CatalogStore::from_products(vec![a.clone(), b.clone()]).unwrap();

        let mut cart = cart();
        cart.add_line(&a, None, None).unwrap();
        cart.add_line(&a, None, None).unwrap();
        cart.add_line(&b, None, None).unwrap();

        // 2 x 1000 + 1 x 500
        let total = cart.total_price(&catalog).unwrap();
        assert_eq!(total.amount_minor, 2500);
    }

    #[test]
    fn test_total_price_empty_cart_is_zero() {
        let catalog = CatalogStore::from_products(Vec::new()).unwrap();
        let total = cart().total_price(&catalog).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_total_price_reads_current_catalog() {
        let p = product("p1", "Lamp", 1000);
        let mut cart = cart();
        cart.add_line(&p, None, None).unwrap();
        cart.add_line(&p, None, None).unwrap();

        let catalog = CatalogStore::from_products(vec![p.clone()]).unwrap();
        assert_eq!(cart.total_price(&catalog).unwrap().amount_minor, 2000);

        // A catalog carrying a different unit price changes the total:
        // totals always reflect the price at the time of the call.
        let mut repriced = p;
        repriced.price = Money::new(1500, Currency::NGN);
        let catalog = CatalogStore::from_products(vec![repriced]).unwrap();
        assert_eq!(cart.total_price(&catalog).unwrap().amount_minor, 3000);
    }

    #[test]
    fn test_scenario_blue_lamp_totals() {
        let lamp = product("p1", "Blue Lamp", 5000);
        let catalog = CatalogStore::from_products(vec![lamp.clone()]).unwrap();

        let mut cart = cart();
        cart.add_line(&lamp, None, None).unwrap();
        cart.add_line(&lamp, None, None).unwrap();

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price(&catalog).unwrap().amount_minor, 10000);
    }
}
