//! Error types for the trade center

use backtest_ports::{LedgerError, MatchingError};
use thiserror::Error;

/// Transport-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Channel closed: {0}")]
    ChannelClosed(String),

    #[error("Topic already has a subscriber: {0}")]
    AlreadySubscribed(String),
}

/// Payload encoding errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum TradeCenterError {
    #[error("Matching error: {0}")]
    Matching(#[from] MatchingError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, TradeCenterError>;
