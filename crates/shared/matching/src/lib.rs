//! Back-test Matching
//!
//! The matching core of the trade center:
//!
//! - [`priority`]: the price/time ordering that keeps one side of a book sorted
//! - [`fill`]: eligibility of an order against a quote and the fill arithmetic
//! - [`lock`]: balance freezes taken when an order is placed, and released on cancel
//! - [`OrderBook`]: one side of one instrument, matched against incoming quotes
//!
//! Everything here is synchronous and deterministic. All balance effects are
//! returned as [`AssetDelta`](backtest_core::AssetDelta) values for the caller
//! to forward.

pub mod fill;
pub mod lock;
mod order_book;
pub mod priority;

pub use fill::{Fill, can_match, match_order};
pub use lock::{cancel_to_free, pend_to_lock};
pub use order_book::{MatchPass, OrderBook};

// Re-export the errors from ports for convenience
pub use backtest_ports::{MatchingError, MatchingResult};
