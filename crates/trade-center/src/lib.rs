//! Back-testing trade center
//!
//! Subscribes to the `tick` and `order` topics, matches resting orders
//! against every quote, and settles the resulting balance changes through a
//! [`Ledger`](backtest_ports::Ledger). The ledger's snapshots are
//! republished on the `balance` topic.

// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;
pub mod transport;

// Cross-cutting concerns
pub mod codec;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use application::{LoopStats, MatchingLoop};
pub use config::TradeCenterConfig;
pub use error::{CodecError, ConfigError, Result, TradeCenterError, TransportError};
pub use infrastructure::InMemoryLedger;
pub use transport::{ChannelPubsub, Message, MessageStream, Pubsub, Topics};

use std::sync::Arc;

use backtest_core::Balance;
use log::{info, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Start a trade center on the current runtime
///
/// Subscribes to the tick and order topics, forwards ledger snapshots to the
/// balance topic, and spawns the matching loop. The returned handle resolves
/// once both input topics have closed.
pub async fn spawn_trade_center<P>(
    pubsub: Arc<P>,
    ledger: Arc<InMemoryLedger>,
    config: TradeCenterConfig,
) -> Result<JoinHandle<Result<LoopStats>>>
where
    P: Pubsub + 'static,
{
    config.validate()?;

    let ticks = pubsub.subscribe(Topics::TICK).await?;
    let orders = pubsub.subscribe(Topics::ORDER).await?;

    // Subscribe before the loop starts so the opening balance is not missed
    let snapshots = ledger.subscribe();
    tokio::spawn(publish_balances(pubsub, snapshots));

    let matching_loop = MatchingLoop::new(config, ledger);
    Ok(tokio::spawn(matching_loop.run(ticks, orders)))
}

/// Republish ledger snapshots until the ledger goes away
async fn publish_balances<P>(pubsub: Arc<P>, mut snapshots: broadcast::Receiver<Balance>)
where
    P: Pubsub + 'static,
{
    loop {
        match snapshots.recv().await {
            Ok(balance) => {
                let payload = match codec::encode(&balance) {
                    Ok(payload) => payload,
                    Err(e) => {
                        warn!("Dropping balance snapshot: {}", e);
                        continue;
                    }
                };
                if let Err(e) = pubsub.publish(Topics::BALANCE, Message::new(payload)).await {
                    info!("Balance publisher stopped: {}", e);
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!("Lagged {} balance snapshots", n);
            }
            Err(broadcast::error::RecvError::Closed) => {
                info!("Ledger closed, balance publisher stopped");
                break;
            }
        }
    }
}
