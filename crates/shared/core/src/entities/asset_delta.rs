use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Signed change to one holding, the unit of work sent to the ledger
///
/// Placing an order moves value from `free` to `locked`, a fill releases
/// `locked` on one asset and credits `free` on the other, and a cancel moves
/// `locked` back to `free`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetDelta {
    pub name: String,
    pub free: Decimal,
    pub locked: Decimal,
}

impl AssetDelta {
    pub fn new(name: impl Into<String>, free: Decimal, locked: Decimal) -> Self {
        Self {
            name: name.into(),
            free,
            locked,
        }
    }

    /// A delta that changes nothing
    pub fn zero(name: impl Into<String>) -> Self {
        Self::new(name, Decimal::ZERO, Decimal::ZERO)
    }

    /// Move `amount` from free to locked
    pub fn lock(name: impl Into<String>, amount: Decimal) -> Self {
        Self::new(name, -amount, amount)
    }

    /// Move `amount` from locked back to free
    pub fn unlock(name: impl Into<String>, amount: Decimal) -> Self {
        Self::new(name, amount, -amount)
    }

    /// Multiply both components by `factor`
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self::new(self.name.clone(), self.free * factor, self.locked * factor)
    }

    pub fn is_zero(&self) -> bool {
        self.free.is_zero() && self.locked.is_zero()
    }
}
