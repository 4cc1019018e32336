use backtest_core::{OrderId, OrderType, Side};
use thiserror::Error;

/// Domain-level errors for matching operations
///
/// Every variant is fatal to the operation that raised it. Apart from
/// `Overflow`, they indicate data that should never have reached the book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    #[error("Unsupported order kind: {0} (only MARKET and LIMIT can be matched)")]
    UnsupportedOrderKind(OrderType),

    #[error("Cannot compare order {left} with order {right}: they are on different sides")]
    CrossSideComparison { left: OrderId, right: OrderId },

    #[error("Order {order} does not belong in the {book:?} book")]
    WrongSide { order: OrderId, book: Side },

    #[error("Order {order}: amount does not fit in a decimal")]
    Overflow { order: OrderId },
}

pub type MatchingResult<T> = std::result::Result<T, MatchingError>;

/// Errors reported by a ledger implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Ledger rejected update: {0}")]
    Rejected(String),
}
