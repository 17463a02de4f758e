//! Shop session lifecycle.

use crate::cart::{Cart, CartStore};
use crate::ids::SessionId;

/// A single shopper's session.
///
/// The session is the single owner of the cart's lifecycle: the cart is
/// created empty when the session starts and discarded when the session
/// ends. Components that need cart access receive a `CartStore` handle
/// from here rather than reaching for shared global state.
pub struct ShopSession {
    id: SessionId,
    started_at: i64,
    cart: CartStore,
}

impl ShopSession {
    /// Start a new session with a fresh, empty cart.
    pub fn start() -> Self {
        let id = SessionId::generate();
        Self {
            cart: CartStore::new(id.clone()),
            started_at: current_timestamp(),
            id,
        }
    }

    /// Resume a session under a known id (e.g., from a caller-managed
    /// cookie or token). The cart still starts empty: carts do not
    /// persist across sessions.
    pub fn with_id(id: SessionId) -> Self {
        Self {
            cart: CartStore::new(id.clone()),
            started_at: current_timestamp(),
            id,
        }
    }

    /// The session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Unix timestamp of session start.
    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// Handle to the session's cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// End the session, returning the final cart state.
    ///
    /// Outstanding `CartStore` clones keep the state alive until they
    /// are dropped, but the session that owned the lifecycle is gone.
    pub fn end(self) -> Cart {
        self.cart.snapshot()
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
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product() -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Lamp".to_string(),
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
    fn test_session_starts_with_empty_cart() {
        let session = ShopSession::start();
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().session_id(), *session.id());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = ShopSession::start();
        let b = ShopSession::start();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_end_returns_final_cart() {
        let session = ShopSession::start();
        session.cart().add_to_cart(&product(), None, None).unwrap();

        let final_cart = session.end();
        assert_eq!(final_cart.item_count(), 1);
    }

    #[test]
    fn test_resumed_session_starts_empty() {
        let id = SessionId::new("sess-known");
        let session = ShopSession::with_id(id.clone());
        assert_eq!(session.id(), &id);
        assert!(session.cart().is_empty());
    }
}
