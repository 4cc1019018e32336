use async_trait::async_trait;
use backtest_core::{AssetDelta, Balance};
use backtest_ports::{Ledger, LedgerError};
use log::{debug, warn};
use tokio::sync::{RwLock, broadcast};

use crate::config::TradeCenterConfig;

/// Ledger keeping the balance in memory
///
/// Every applied batch, empty or not, is followed by a full balance
/// snapshot on the broadcast channel. A batch is applied whole or not at
/// all.
pub struct InMemoryLedger {
    balance: RwLock<Balance>,
    snapshots: broadcast::Sender<Balance>,
}

impl InMemoryLedger {
    pub fn new(capacity: usize) -> Self {
        Self::with_balance(Balance::new(), capacity)
    }

    /// Start from an opening balance
    pub fn with_balance(balance: Balance, capacity: usize) -> Self {
        let (snapshots, _) = broadcast::channel(capacity);
        Self {
            balance: RwLock::new(balance),
            snapshots,
        }
    }

    /// Snapshot channel sized by `channel_capacity`
    pub fn from_config(config: &TradeCenterConfig, balance: Balance) -> Self {
        Self::with_balance(balance, config.channel_capacity)
    }

    /// Subscribe to balance snapshots
    pub fn subscribe(&self) -> broadcast::Receiver<Balance> {
        self.snapshots.subscribe()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn update(&self, deltas: Vec<AssetDelta>) -> Result<(), LedgerError> {
        let snapshot = {
            let mut balance = self.balance.write().await;
            let mut next = balance.clone();
            if let Some(delta) = deltas.iter().find(|delta| !next.apply(delta)) {
                warn!("Refusing batch: {:?} overflows the {} holding", delta, delta.name);
                return Err(LedgerError::Rejected(format!(
                    "{} holding overflows",
                    delta.name
                )));
            }
            *balance = next;
            balance.clone()
        };

        debug!("Applied {} deltas", deltas.len());

        // No subscribers is not an error
        let _ = self.snapshots.send(snapshot);
        Ok(())
    }

    async fn balance(&self) -> Balance {
        self.balance.read().await.clone()
    }

    fn name(&self) -> &str {
        "InMemoryLedger"
    }
}
