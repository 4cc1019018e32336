//! JSON wire format for topic payloads

use backtest_core::{Balance, Order, Tick};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::CodecError;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(value).map_err(CodecError::Encode)
}

pub fn decode_tick(payload: &[u8]) -> Result<Tick, CodecError> {
    decode(payload, "tick")
}

pub fn decode_order(payload: &[u8]) -> Result<Order, CodecError> {
    decode(payload, "order")
}

pub fn decode_balance(payload: &[u8]) -> Result<Balance, CodecError> {
    decode(payload, "balance")
}

fn decode<T: DeserializeOwned>(payload: &[u8], kind: &'static str) -> Result<T, CodecError> {
    serde_json::from_slice(payload).map_err(|source| CodecError::Decode { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use backtest_core::{AssetDelta, OrderType, Side};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_tick_payload() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let tick = Tick::new(7, date, dec!(42000.5), dec!(0.25));
        let decoded = decode_tick(&encode(&tick).unwrap()).unwrap();
        assert_eq!(decoded, tick);
    }

    #[test]
    fn test_order_from_hand_written_json() {
        let payload = br#"{
            "id": 3,
            "symbol": "BTCUSDT",
            "asset_name": "BTC",
            "capital_name": "USDT",
            "side": "Sell",
            "order_type": "Limit",
            "asset_quantity": "1.5",
            "asset_price": "43000"
        }"#;
        let order = decode_order(payload).unwrap();
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.asset_quantity, dec!(1.5));
        assert_eq!(order.asset_price, dec!(43000));
    }

    #[test]
    fn test_balance_payload() {
        let mut balance = Balance::new().with_free("USDT", dec!(1000));
        assert!(balance.apply(&AssetDelta::lock("USDT", dec!(250))));
        let decoded = decode_balance(&encode(&balance).unwrap()).unwrap();
        assert_eq!(decoded, balance);
    }

    #[test]
    fn test_garbage_is_a_decode_error() {
        let err = decode_tick(b"not json").unwrap_err();
        assert!(matches!(err, CodecError::Decode { kind: "tick", .. }));
        assert!(err.to_string().starts_with("Failed to decode tick"));
    }

    #[test]
    fn test_order_payload_is_not_a_tick() {
        let order = Order::market(1, "BTCUSDT", "BTC", "USDT", Side::Buy, dec!(10));
        let payload = encode(&order).unwrap();
        assert!(decode_tick(&payload).is_err());
    }
}
