//! Configuration loading for the trade center
//!
//! A JSON document selects the traded instrument, the fee rate taken from
//! every fill, and the capacity of the in-process channels. Every field is
//! optional.

use backtest_core::SpotPair;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeCenterConfig {
    /// The single instrument this venue trades
    #[serde(default)]
    pub instrument: SpotPair,

    /// Fraction of every fill delta kept by the venue
    #[serde(default = "default_fee_rate")]
    pub fee_rate: Decimal,

    /// Bound of every topic channel and of the balance broadcast
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_fee_rate() -> Decimal {
    dec!(0.001)
}

fn default_channel_capacity() -> usize {
    1024
}

impl Default for TradeCenterConfig {
    fn default() -> Self {
        Self {
            instrument: SpotPair::default(),
            fee_rate: default_fee_rate(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl TradeCenterConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_instrument(mut self, instrument: SpotPair) -> Self {
        self.instrument = instrument;
        self
    }

    pub fn with_fee_rate(mut self, fee_rate: Decimal) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_rate.is_sign_negative() || self.fee_rate >= Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "fee_rate must be in [0, 1), got {}",
                self.fee_rate
            )));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Multiplier applied to fill deltas
    pub fn keep_rate(&self) -> Decimal {
        Decimal::ONE - self.fee_rate
    }
}
