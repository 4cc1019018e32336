//! Eligibility of a resting order against a quote, and the fill arithmetic
//!
//! A fill never re-checks eligibility: callers test [`can_match`] first.
//! Limit orders always trade at their own limit price, never at the quote
//! price, so a resting order is never filled worse than it asked for.

use backtest_core::{AssetDelta, Order, OrderType, Price, Side, Tick};
use backtest_ports::{MatchingError, MatchingResult};
use rust_decimal::Decimal;

/// Outcome of matching one order against one quote
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// The order with its driving quantity reduced
    pub order: Order,
    /// The quote with its volume reduced
    pub tick: Tick,
    /// Change to the traded asset
    pub asset: AssetDelta,
    /// Change to the capital currency
    pub capital: AssetDelta,
}

impl Fill {
    fn unchanged(order: Order, tick: Tick) -> Self {
        let asset = AssetDelta::zero(order.asset_name.as_str());
        let capital = AssetDelta::zero(order.capital_name.as_str());
        Self {
            order,
            tick,
            asset,
            capital,
        }
    }

    /// The asset and capital deltas, in that order
    pub fn into_deltas(self) -> [AssetDelta; 2] {
        [self.asset, self.capital]
    }
}

/// Check whether `order` may trade at `price`
///
/// An absent order never matches. Market orders match any price; a limit
/// order matches when the price is at least as good as its limit.
pub fn can_match(order: Option<&Order>, price: Price) -> MatchingResult<bool> {
    let Some(order) = order else {
        return Ok(false);
    };
    match order.order_type {
        OrderType::Market => Ok(true),
        OrderType::Limit => Ok(limit_reached(order, price)),
        other => Err(MatchingError::UnsupportedOrderKind(other)),
    }
}

/// Match `order` against `tick`, consuming volume from both
pub fn match_order(order: Order, tick: Tick) -> MatchingResult<Fill> {
    match order.order_type {
        OrderType::Market => match_market(order, tick),
        OrderType::Limit => match_limit(order, tick),
        other => Err(MatchingError::UnsupportedOrderKind(other)),
    }
}

fn limit_reached(order: &Order, price: Price) -> bool {
    order.side_price() <= Decimal::from(order.side.sign()) * price
}

fn match_market(mut order: Order, mut tick: Tick) -> MatchingResult<Fill> {
    let overflow = MatchingError::Overflow { order: order.id };
    match order.side {
        Side::Sell => {
            let diff = order.asset_quantity.min(tick.volume);
            let proceeds = tick.price.checked_mul(diff).ok_or(overflow)?;
            tick.volume -= diff;
            order.asset_quantity -= diff;
            let asset = AssetDelta::new(order.asset_name.as_str(), Decimal::ZERO, -diff);
            let capital = AssetDelta::new(order.capital_name.as_str(), proceeds, Decimal::ZERO);
            Ok(Fill {
                order,
                tick,
                asset,
                capital,
            })
        }
        Side::Buy => {
            if tick.price <= Decimal::ZERO {
                return Ok(Fill::unchanged(order, tick));
            }
            // Spend-limited: take the whole quote if the budget covers it
            let notional = tick.volume.checked_mul(tick.price);
            let (diff, bought) = match notional {
                Some(notional) if order.capital_quantity >= notional => (notional, tick.volume),
                _ => {
                    let bought = order
                        .capital_quantity
                        .checked_div(tick.price)
                        .ok_or(overflow)?;
                    (order.capital_quantity, bought)
                }
            };
            tick.volume -= bought;
            order.capital_quantity -= diff;
            let asset = AssetDelta::new(order.asset_name.as_str(), bought, Decimal::ZERO);
            let capital = AssetDelta::new(order.capital_name.as_str(), Decimal::ZERO, -diff);
            Ok(Fill {
                order,
                tick,
                asset,
                capital,
            })
        }
    }
}

fn match_limit(mut order: Order, mut tick: Tick) -> MatchingResult<Fill> {
    if !limit_reached(&order, tick.price) {
        return Ok(Fill::unchanged(order, tick));
    }

    let diff = order.asset_quantity.min(tick.volume);
    let value = diff
        .checked_mul(order.asset_price)
        .ok_or(MatchingError::Overflow { order: order.id })?;
    let (asset, capital) = match order.side {
        Side::Sell => (
            AssetDelta::new(order.asset_name.as_str(), Decimal::ZERO, -diff),
            AssetDelta::new(order.capital_name.as_str(), value, Decimal::ZERO),
        ),
        Side::Buy => (
            AssetDelta::new(order.asset_name.as_str(), diff, Decimal::ZERO),
            AssetDelta::new(order.capital_name.as_str(), Decimal::ZERO, -value),
        ),
    };
    tick.volume -= diff;
    order.asset_quantity -= diff;
    Ok(Fill {
        order,
        tick,
        asset,
        capital,
    })
}
