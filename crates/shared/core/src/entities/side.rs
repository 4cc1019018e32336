use serde::{Deserialize, Serialize};

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Signed coefficient used by the price formulas, see [`side_sign`]
    pub fn sign(&self) -> i64 {
        side_sign(*self)
    }
}

/// Signed side coefficient: `-1` for buys, `+1` for sells.
///
/// Multiplying a price by this coefficient turns "better for this side"
/// into "smaller", so bids and asks share one comparison formula.
pub fn side_sign(side: Side) -> i64 {
    match side {
        Side::Buy => -1,
        Side::Sell => 1,
    }
}
