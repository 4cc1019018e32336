use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use super::{OrderType, Side};
use crate::values::{Price, Quantity, Symbol};

/// Unique identifier for an order
///
/// Ids are assigned in arrival order and double as the FIFO tie-break.
pub type OrderId = u64;

/// Full order details
///
/// Exactly one quantity field drives the fill of an order, depending on its
/// type and side (see [`Order::driving_quantity`]). That field only ever
/// decreases; the order is done once it reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// The instrument being traded
    pub symbol: Symbol,
    pub asset_name: String,
    pub capital_name: String,
    pub side: Side,
    pub order_type: OrderType,
    /// Remaining quantity in the asset (market sells and all limit orders)
    #[serde(default)]
    pub asset_quantity: Quantity,
    /// Limit price, ignored for market orders
    #[serde(default)]
    pub asset_price: Price,
    /// Remaining spend in capital (market buys)
    #[serde(default)]
    pub capital_quantity: Quantity,
}

impl Order {
    /// Create a market order
    ///
    /// A market buy is sized by the capital it may spend, a market sell by
    /// the asset it offers.
    pub fn market(
        id: OrderId,
        symbol: impl Into<Symbol>,
        asset_name: impl Into<String>,
        capital_name: impl Into<String>,
        side: Side,
        quantity: Quantity,
    ) -> Self {
        let (asset_quantity, capital_quantity) = match side {
            Side::Buy => (Decimal::ZERO, quantity),
            Side::Sell => (quantity, Decimal::ZERO),
        };
        Self {
            id,
            symbol: symbol.into(),
            asset_name: asset_name.into(),
            capital_name: capital_name.into(),
            side,
            order_type: OrderType::Market,
            asset_quantity,
            asset_price: Decimal::ZERO,
            capital_quantity,
        }
    }

    /// Create a limit order for `asset_quantity` at `asset_price`
    pub fn limit(
        id: OrderId,
        symbol: impl Into<Symbol>,
        asset_name: impl Into<String>,
        capital_name: impl Into<String>,
        side: Side,
        asset_quantity: Quantity,
        asset_price: Price,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            asset_name: asset_name.into(),
            capital_name: capital_name.into(),
            side,
            order_type: OrderType::Limit,
            asset_quantity,
            asset_price,
            capital_quantity: Decimal::ZERO,
        }
    }

    /// The remaining-size field that fills consume
    ///
    /// `None` for order types the engine does not support.
    pub fn driving_quantity(&self) -> Option<Quantity> {
        match (self.order_type, self.side) {
            (OrderType::Market, Side::Buy) => Some(self.capital_quantity),
            (OrderType::Market, Side::Sell) => Some(self.asset_quantity),
            (OrderType::Limit, _) => Some(self.asset_quantity),
            (OrderType::StopLoss, _) => None,
        }
    }

    /// Returns true once the driving quantity has been consumed
    pub fn is_filled(&self) -> bool {
        self.driving_quantity()
            .is_some_and(|remaining| remaining <= Decimal::ZERO)
    }

    /// Limit price multiplied by the side coefficient
    ///
    /// Smaller is better for both sides: the highest bid and the lowest ask
    /// have the smallest side price.
    pub fn side_price(&self) -> Decimal {
        Decimal::from(self.side.sign()) * self.asset_price
    }

    /// Validate the order based on order type requirements
    pub fn validate(&self) -> bool {
        let non_negative = !self.asset_quantity.is_sign_negative()
            && !self.capital_quantity.is_sign_negative();
        match self.order_type {
            OrderType::Market => non_negative,
            OrderType::Limit => non_negative && self.asset_price > Decimal::ZERO,
            OrderType::StopLoss => false,
        }
    }
}

/// Thread-safe source of monotonically increasing order ids
#[derive(Debug)]
pub struct OrderIdSequence {
    next: AtomicU64,
}

impl OrderIdSequence {
    /// Create a sequence whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first id is `first`
    pub fn starting_at(first: OrderId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Hand out the next id
    pub fn next_id(&self) -> OrderId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for OrderIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
