//! Instrument definitions for tradeable assets
//!
//! The trade center only simulates spot pairs: one asset quoted in one
//! capital currency.

mod spot;

pub use spot::SpotPair;
