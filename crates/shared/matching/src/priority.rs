//! Price-time priority between resting orders of the same side
//!
//! Orders are ranked by:
//! 1. Type (market orders before limit orders)
//! 2. Best price for limit orders (highest bid, lowest ask)
//! 3. Time priority (lower id first)

use std::cmp::Ordering;

use backtest_core::{Order, OrderType};
use backtest_ports::{MatchingError, MatchingResult};

/// Compare two orders of the same side by matching priority
///
/// `Ordering::Less` means `a` matches before `b`. Two orders only compare
/// `Equal` when they carry the same id.
pub fn compare(a: &Order, b: &Order) -> MatchingResult<Ordering> {
    if a.side != b.side {
        return Err(MatchingError::CrossSideComparison {
            left: a.id,
            right: b.id,
        });
    }

    match (a.order_type, b.order_type) {
        (OrderType::Market, OrderType::Market) => Ok(a.id.cmp(&b.id)),
        (OrderType::Market, OrderType::Limit) => Ok(Ordering::Less),
        (OrderType::Limit, OrderType::Market) => Ok(Ordering::Greater),
        (OrderType::Limit, OrderType::Limit) => Ok(a
            .side_price()
            .cmp(&b.side_price())
            .then_with(|| a.id.cmp(&b.id))),
        (OrderType::StopLoss, _) => Err(MatchingError::UnsupportedOrderKind(a.order_type)),
        (_, OrderType::StopLoss) => Err(MatchingError::UnsupportedOrderKind(b.order_type)),
    }
}

/// Returns true if `a` strictly precedes `b`
pub fn precedes(a: &Order, b: &Order) -> MatchingResult<bool> {
    Ok(compare(a, b)? == Ordering::Less)
}
