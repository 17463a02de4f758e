//! E-commerce domain types and logic for the Maison storefront.
//!
//! This crate is the storefront's core, independent of any presentation
//! layer:
//!
//! - **Catalog**: an immutable, embedded product dataset with id lookup
//! - **Search**: a case-insensitive, order-preserving inclusion filter
//! - **Cart**: line items keyed by product + selected variant, with totals
//!   recomputed against the catalog on every read
//! - **Newsletter**: signup validation and an in-memory subscriber list
//!
//! # Example
//!
//! ```rust
//! use maison_commerce::prelude::*;
//!
//! let catalog = CatalogStore::embedded().unwrap();
//! let session = ShopSession::start();
//! let cart = session.cart();
//!
//! // Search the catalog and add the first hit to the cart.
//! let hits = catalog.search("lamp");
//! if let Some(product) = hits.first() {
//!     cart.add_to_cart(product, None, None).unwrap();
//! }
//!
//! assert_eq!(cart.total_items(), 1);
//! let total = cart.total_price(&catalog).unwrap();
//! println!("Total: {}", total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod newsletter;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::{ProductId, SessionId};
pub use money::{Currency, Money};
pub use session::ShopSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SessionId};
    pub use crate::money::{Currency, Money};
    pub use crate::session::ShopSession;

    // Catalog
    pub use crate::catalog::{CatalogStore, Product};

    // Search
    pub use crate::search::{filter, SearchQuery};

    // Cart
    pub use crate::cart::{
        AddedLine, Cart, CartEvent, CartLine, CartObserver, CartStore, LineKey,
        MAX_QUANTITY_PER_LINE,
    };

    // Newsletter
    pub use crate::newsletter::{validate_email, SubscribeOutcome, SubscriberList};
}
