use async_trait::async_trait;
use backtest_core::{AssetDelta, Balance};

use crate::error::LedgerError;

/// Port for the balance ledger
///
/// The trade center only produces signed deltas; the ledger owns the
/// balance they accumulate into and republishes it to interested parties.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Apply a batch of deltas as one unit
    ///
    /// Observers must never see a state where only part of `deltas` has
    /// been applied. An empty batch is valid and leaves the balance as is.
    async fn update(&self, deltas: Vec<AssetDelta>) -> Result<(), LedgerError>;

    /// Current balance snapshot
    async fn balance(&self) -> Balance;

    /// Get the ledger's name/identifier for debugging
    fn name(&self) -> &str {
        "Ledger"
    }
}
