//! Back-test Core Domain
//!
//! Pure domain types for the back-testing trade center.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Balance types
    AssetDelta,
    Balance,
    Holding,
    // Core trading entities
    Order,
    OrderId,
    OrderIdSequence,
    OrderType,
    Side,
    Tick,
    side_sign,
};
pub use instruments::SpotPair;
pub use values::{Price, Quantity, Symbol, Timestamp};
