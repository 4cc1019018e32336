use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AssetDelta;

/// Spendable and reserved amounts of one asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub free: Decimal,
    pub locked: Decimal,
}

impl Holding {
    pub fn new(free: Decimal, locked: Decimal) -> Self {
        Self { free, locked }
    }

    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

/// Holdings per asset name
///
/// Backed by a BTreeMap so snapshots iterate in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    holdings: BTreeMap<String, Holding>,
}

impl Balance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: start with `free` units of `name`
    pub fn with_free(mut self, name: impl Into<String>, free: Decimal) -> Self {
        self.holdings.entry(name.into()).or_default().free += free;
        self
    }

    /// Add a signed delta to the matching holding
    ///
    /// Returns false, leaving the holding untouched, if either amount would
    /// overflow.
    #[must_use]
    pub fn apply(&mut self, delta: &AssetDelta) -> bool {
        let current = self.holding(&delta.name);
        let (Some(free), Some(locked)) = (
            current.free.checked_add(delta.free),
            current.locked.checked_add(delta.locked),
        ) else {
            return false;
        };
        self.holdings.insert(delta.name.clone(), Holding::new(free, locked));
        true
    }

    /// Current holding of `name`, zero if the asset was never touched
    pub fn holding(&self, name: &str) -> Holding {
        self.holdings.get(name).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Holding)> {
        self.holdings.iter().map(|(name, holding)| (name.as_str(), holding))
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
