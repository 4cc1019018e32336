//! Back-test Ports
//!
//! Port definitions (traits) for the back-testing trade center.
//! These define the boundaries between domain logic and infrastructure.

mod error;
mod ledger;

pub use error::{LedgerError, MatchingError, MatchingResult};
pub use ledger::Ledger;
