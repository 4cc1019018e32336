use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
/// Denominated in the asset or in capital depending on the field it lives in
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a tradeable instrument
pub type Symbol = String;
