use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Timestamp};

/// One market-data event: a trade price and the volume available at it
///
/// `id` and `date` identify the event and are carried through matching
/// unchanged. `volume` is consumed by fills within a single matching pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub id: u64,
    pub date: Timestamp,
    pub price: Price,
    pub volume: Quantity,
}

impl Tick {
    pub fn new(id: u64, date: Timestamp, price: Price, volume: Quantity) -> Self {
        Self {
            id,
            date,
            price,
            volume,
        }
    }

    /// Returns true while some volume is left to trade
    pub fn has_volume(&self) -> bool {
        self.volume > Quantity::ZERO
    }
}
