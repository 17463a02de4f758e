//! Shopping cart module.
//!
//! Contains the cart aggregate, the shared cart store handle, and the
//! cart event/observer types used by the notification boundary.

mod cart;
mod events;
mod store;

pub use cart::{AddedLine, Cart, CartLine, LineKey, MAX_QUANTITY_PER_LINE};
pub use events::{CartEvent, CartObserver};
pub use store::CartStore;
