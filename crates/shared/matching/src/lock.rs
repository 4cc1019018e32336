//! Balance freezes for resting orders
//!
//! Placing an order locks exactly what it may consume: capital for buys,
//! asset for sells. Cancelling releases the same amount.

use backtest_core::{AssetDelta, Order, OrderType, Quantity, Side};
use backtest_ports::{MatchingError, MatchingResult};

/// Deltas that move the order's reserved funds from free to locked
pub fn pend_to_lock(order: &Order) -> MatchingResult<Vec<AssetDelta>> {
    let (name, amount) = reserved(order)?;
    Ok(vec![AssetDelta::lock(name, amount)])
}

/// Deltas that release the order's remaining reservation back to free
pub fn cancel_to_free(order: &Order) -> MatchingResult<Vec<AssetDelta>> {
    let (name, amount) = reserved(order)?;
    Ok(vec![AssetDelta::unlock(name, amount)])
}

fn reserved(order: &Order) -> MatchingResult<(&str, Quantity)> {
    match (order.order_type, order.side) {
        (OrderType::Market, Side::Buy) => Ok((&order.capital_name, order.capital_quantity)),
        (OrderType::Market, Side::Sell) => Ok((&order.asset_name, order.asset_quantity)),
        (OrderType::Limit, Side::Buy) => order
            .asset_quantity
            .checked_mul(order.asset_price)
            .map(|notional| (order.capital_name.as_str(), notional))
            .ok_or(MatchingError::Overflow { order: order.id }),
        (OrderType::Limit, Side::Sell) => Ok((&order.asset_name, order.asset_quantity)),
        (other, _) => Err(MatchingError::UnsupportedOrderKind(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_buy_locks_capital() {
        let order = Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(10000));
        assert_eq!(
            pend_to_lock(&order).unwrap(),
            vec![AssetDelta::new("USDT", dec!(-10000), dec!(10000))]
        );
    }

    #[test]
    fn test_market_sell_locks_asset() {
        let order = Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Sell, dec!(3));
        assert_eq!(
            pend_to_lock(&order).unwrap(),
            vec![AssetDelta::new("BTC", dec!(-3), dec!(3))]
        );
    }

    #[test]
    fn test_limit_buy_locks_notional() {
        let order = Order::limit(1, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(2), dec!(100));
        assert_eq!(
            pend_to_lock(&order).unwrap(),
            vec![AssetDelta::new("USDT", dec!(-200), dec!(200))]
        );
    }

    #[test]
    fn test_limit_sell_locks_asset() {
        let order = Order::limit(1, "BTCUSDT", "BTC", "USDT", Side::Sell, dec!(5), dec!(100));
        assert_eq!(
            pend_to_lock(&order).unwrap(),
            vec![AssetDelta::new("BTC", dec!(-5), dec!(5))]
        );
    }

    #[test]
    fn test_cancel_releases_what_was_locked() {
        let orders = [
            Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(10000)),
            Order::market(2, "BTCUSDT", "BTC", "USDT", Side::Sell, dec!(1.5)),
            Order::limit(3, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(2), dec!(99.5)),
            Order::limit(4, "BTCUSDT", "BTC", "USDT", Side::Sell, dec!(7), dec!(101)),
        ];

        for order in &orders {
            let locked = pend_to_lock(order).unwrap();
            let freed = cancel_to_free(order).unwrap();
            assert_eq!(locked.len(), freed.len());
            for (lock, free) in locked.iter().zip(&freed) {
                assert_eq!(lock.name, free.name);
                assert_eq!(lock.free + free.free, Decimal::ZERO);
                assert_eq!(lock.locked + free.locked, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_cancel_market_buy() {
        let order = Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(500));
        assert_eq!(
            cancel_to_free(&order).unwrap(),
            vec![AssetDelta::new("USDT", dec!(500), dec!(-500))]
        );
    }

    #[test]
    fn test_stop_loss_cannot_be_locked() {
        let mut order = Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Sell, dec!(1));
        order.order_type = OrderType::StopLoss;
        assert_eq!(
            pend_to_lock(&order),
            Err(MatchingError::UnsupportedOrderKind(OrderType::StopLoss))
        );
        assert_eq!(
            cancel_to_free(&order),
            Err(MatchingError::UnsupportedOrderKind(OrderType::StopLoss))
        );
    }

    #[test]
    fn test_limit_buy_notional_overflow_is_an_error() {
        let huge = dec!(100000000000000000000);
        let order = Order::limit(7, "BTCUSDT", "BTC", "USDT", Side::Buy, huge, huge);
        assert_eq!(pend_to_lock(&order), Err(MatchingError::Overflow { order: 7 }));
        assert_eq!(cancel_to_free(&order), Err(MatchingError::Overflow { order: 7 }));

        // Sells reserve the asset itself, so the same figures are fine
        let sell = Order::limit(8, "BTCUSDT", "BTC", "USDT", Side::Sell, huge, huge);
        assert_eq!(
            pend_to_lock(&sell).unwrap(),
            vec![AssetDelta::new("BTC", -huge, huge)]
        );
    }
}
