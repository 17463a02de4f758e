//! Cart events for the notification boundary.

use crate::cart::{AddedLine, LineKey};

/// A mutation that happened to the cart.
///
/// Emitted by `CartStore` after each successful mutation so the
/// presentation layer can show confirmation notifications without the
/// core knowing how they are rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A line was added or incremented.
    LineAdded { line: AddedLine },
    /// A line was removed.
    LineRemoved { key: LineKey },
    /// A line's quantity was set explicitly.
    QuantityUpdated { key: LineKey, quantity: i64 },
    /// The cart was emptied.
    Cleared,
}

/// Observer for cart events.
pub trait CartObserver: Send + Sync {
    /// Called after each successful cart mutation.
    fn on_event(&self, event: &CartEvent);
}
