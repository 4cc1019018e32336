use serde::{Deserialize, Serialize};

/// Order types known to the trade center
///
/// Only `Market` and `Limit` can be booked and matched; every operation on a
/// `StopLoss` order fails with an unsupported-type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute at the prevailing quote price
    Market,
    /// Execute at the specified price or better
    Limit,
    /// Market order triggered when price reaches a stop price (not supported)
    StopLoss,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopLoss => "STOP_LOSS",
        };
        f.write_str(name)
    }
}
