use serde::{Deserialize, Serialize};

use crate::entities::Order;
use crate::values::Symbol;

/// A spot trading pair: an asset quoted in a capital currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotPair {
    /// Instrument identifier, e.g. `BTCUSDT`
    pub symbol: Symbol,
    /// The asset being bought/sold
    pub asset: String,
    /// The currency used to price the asset
    pub capital: String,
}

impl SpotPair {
    pub fn new(
        symbol: impl Into<Symbol>,
        asset: impl Into<String>,
        capital: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            asset: asset.into(),
            capital: capital.into(),
        }
    }

    /// Common crypto pairs
    pub fn btc_usdt() -> Self {
        Self::new("BTCUSDT", "BTC", "USDT")
    }

    pub fn eth_usdt() -> Self {
        Self::new("ETHUSDT", "ETH", "USDT")
    }

    /// Returns true if `order` names this pair and trades its asset
    /// against its capital
    pub fn trades(&self, order: &Order) -> bool {
        order.symbol == self.symbol
            && order.asset_name == self.asset
            && order.capital_name == self.capital
    }
}

impl Default for SpotPair {
    fn default() -> Self {
        Self::btc_usdt()
    }
}

impl std::fmt::Display for SpotPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.asset, self.capital)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Side;
    use rust_decimal_macros::dec;

    #[test]
    fn test_spot_pair_creation() {
        let pair = SpotPair::btc_usdt();
        assert_eq!(pair.symbol, "BTCUSDT");
        assert_eq!(pair.asset, "BTC");
        assert_eq!(pair.capital, "USDT");
    }

    #[test]
    fn test_spot_display() {
        assert_eq!(format!("{}", SpotPair::eth_usdt()), "ETH/USDT");
    }

    #[test]
    fn test_trades() {
        let pair = SpotPair::btc_usdt();
        let btc = Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(10));
        let eth = Order::market(2, "ETHUSDT", "ETH", "USDT", Side::Buy, dec!(10));
        assert!(pair.trades(&btc));
        assert!(!pair.trades(&eth));

        // Right currencies under another symbol
        let relabelled = Order::market(3, "ETHUSDT", "BTC", "USDT", Side::Buy, dec!(10));
        assert!(!pair.trades(&relabelled));
        let inverted = Order::market(4, "BTCUSDT", "USDT", "BTC", Side::Buy, dec!(10));
        assert!(!pair.trades(&inverted));
    }
}
