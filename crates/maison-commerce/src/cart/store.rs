//! Shared cart store handle.

use std::sync::{Arc, PoisonError, RwLock};

use crate::cart::{AddedLine, Cart, CartEvent, CartObserver, LineKey};
use crate::catalog::{CatalogStore, Product};
use crate::error::CommerceError;
use crate::ids::SessionId;
use crate::money::Money;

/// The access-controlled mutable cart state.
///
/// A cheap-to-clone handle around a single cart, passed to whichever
/// component needs it rather than reached through global state. The
/// inner `RwLock` gives the single-writer/multiple-reader discipline a
/// multi-threaded caller needs; within a single-threaded event loop the
/// locks are uncontended.
#[derive(Clone)]
pub struct CartStore {
    cart: Arc<RwLock<Cart>>,
    observers: Arc<RwLock<Vec<Arc<dyn CartObserver>>>>,
}

impl CartStore {
    /// Create an empty cart store for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            cart: Arc::new(RwLock::new(Cart::new(session_id))),
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register an observer for cart events.
    pub fn register_observer(&self, observer: Arc<dyn CartObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Add one unit of a product with the selected variant.
    ///
    /// Emits `CartEvent::LineAdded` on success; the notification
    /// boundary turns that into the visible confirmation.
    pub fn add_to_cart(
        &self,
        product: &Product,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<AddedLine, CommerceError> {
        let added = self.write().add_line(product, color, size)?;
        self.notify(&CartEvent::LineAdded {
            line: added.clone(),
        });
        Ok(added)
    }

    /// Remove a line. No-op (and no event) when the line is absent.
    pub fn remove_from_cart(&self, key: &LineKey) -> bool {
        let removed = self.write().remove_line(key);
        if removed {
            self.notify(&CartEvent::LineRemoved { key: key.clone() });
        }
        removed
    }

    /// Set a line's quantity; a quantity <= 0 behaves as remove.
    pub fn update_quantity(&self, key: &LineKey, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_from_cart(key));
        }
        let changed = self.write().update_quantity(key, quantity)?;
        if changed {
            self.notify(&CartEvent::QuantityUpdated {
                key: key.clone(),
                quantity,
            });
        }
        Ok(changed)
    }

    /// Empty the cart unconditionally.
    pub fn clear(&self) {
        self.write().clear();
        self.notify(&CartEvent::Cleared);
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> i64 {
        self.read().item_count()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.read().unique_line_count()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Total price at the catalog's current unit prices.
    pub fn total_price(&self, catalog: &CatalogStore) -> Result<Money, CommerceError> {
        self.read().total_price(catalog)
    }

    /// The owning session's id.
    pub fn session_id(&self) -> SessionId {
        self.read().session_id.clone()
    }

    /// A point-in-time copy of the cart for display.
    pub fn snapshot(&self) -> Cart {
        self.read().clone()
    }

    fn notify(&self, event: &CartEvent) {
        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};
    use std::sync::Mutex;

    fn product(id: &str, price_minor: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            description: String::new(),
            detailed_description: None,
            price: Money::new(price_minor, Currency::NGN),
            image: String::new(),
            color: "Blue".to_string(),
            spec: "Standard".to_string(),
            available_colors: vec!["Blue".to_string(), "Red".to_string()],
            available_sizes: Vec::new(),
        }
    }

    fn store() -> CartStore {
        CartStore::new(SessionId::new("sess-test"))
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<CartEvent>>,
    }

    impl CartObserver for Recorder {
        fn on_event(&self, event: &CartEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_clone_shares_state() {
        let store = store();
        let handle = store.clone();

        store.add_to_cart(&product("p1", 1000), None, None).unwrap();
        assert_eq!(handle.total_items(), 1);
    }

    #[test]
    fn test_observer_receives_events() {
        let store = store();
        let recorder = Arc::new(Recorder::default());
        store.register_observer(recorder.clone());

        let p = product("p1", 1000);
        let added = store.add_to_cart(&p, None, None).unwrap();
        store.update_quantity(&added.key, 3).unwrap();
        store.remove_from_cart(&added.key);
        store.clear();

        let events = recorder.events.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], CartEvent::LineAdded { .. }));
        assert!(matches!(
            events[1],
            CartEvent::QuantityUpdated { quantity: 3, .. }
        ));
        assert!(matches!(events[2], CartEvent::LineRemoved { .. }));
        assert!(matches!(events[3], CartEvent::Cleared));
    }

    #[test]
    fn test_update_to_zero_emits_removal() {
        let store = store();
        let recorder = Arc::new(Recorder::default());
        store.register_observer(recorder.clone());

        let added = store.add_to_cart(&product("p1", 1000), None, None).unwrap();
        assert!(store.update_quantity(&added.key, 0).unwrap());

        let events = recorder.events.lock().unwrap();
        assert!(matches!(events.last(), Some(CartEvent::LineRemoved { .. })));
    }

    #[test]
    fn test_remove_absent_line_emits_nothing() {
        let store = store();
        let recorder = Arc::new(Recorder::default());
        store.register_observer(recorder.clone());

        let key = LineKey {
            product_id: ProductId::new("ghost"),
            color: "Blue".to_string(),
            size: "Standard".to_string(),
        };
        assert!(!store.remove_from_cart(&key));
        assert!(recorder.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_totals_through_store() {
        let a = product("p1", 1000);
        let b = product("p2", 500);
        let catalog = CatalogStore::from_products(vec![a.clone(), b.clone()]).unwrap();

        let store = store();
        store.add_to_cart(&a, None, None).unwrap();
        store.add_to_cart(&a, None, None).unwrap();
        store.add_to_cart(&b, None, None).unwrap();

        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(&catalog).unwrap().amount_minor, 2500);
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let store = store();
        store.add_to_cart(&product("p1", 1000), None, None).unwrap();

        let snapshot = store.snapshot();
        store.clear();

        assert_eq!(snapshot.item_count(), 1);
        assert!(store.is_empty());
    }
}
