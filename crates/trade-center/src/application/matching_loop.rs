//! The trade center's event loop
//!
//! One task owns both books and processes one event at a time: a quote
//! runs a full matching pass, an order is locked and inserted. Nothing else
//! touches the books, so fills are deterministic for a given interleaving
//! of the two streams.

use std::future::Future;
use std::sync::Arc;

use backtest_core::{AssetDelta, Order, Side, Tick};
use backtest_matching::{OrderBook, pend_to_lock};
use backtest_ports::{Ledger, MatchingError};
use log::{debug, error, info, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::codec::{decode_order, decode_tick};
use crate::config::TradeCenterConfig;
use crate::error::Result;
use crate::transport::{Message, MessageStream};

/// Counters reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoopStats {
    pub ticks_processed: u64,
    pub orders_accepted: u64,
    pub orders_rejected: u64,
    pub fills: u64,
    pub batches_forwarded: u64,
    pub payloads_skipped: u64,
}

pub struct MatchingLoop {
    config: TradeCenterConfig,
    ledger: Arc<dyn Ledger>,
    buys: OrderBook,
    sells: OrderBook,
    keep: Decimal,
    stats: LoopStats,
}

impl MatchingLoop {
    pub fn new(config: TradeCenterConfig, ledger: Arc<dyn Ledger>) -> Self {
        let keep = config.keep_rate();
        Self {
            config,
            ledger,
            buys: OrderBook::new(Side::Buy),
            sells: OrderBook::new(Side::Sell),
            keep,
            stats: LoopStats::default(),
        }
    }

    pub fn buy_book(&self) -> &OrderBook {
        &self.buys
    }

    pub fn sell_book(&self) -> &OrderBook {
        &self.sells
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Run until both streams have closed
    pub async fn run(self, ticks: MessageStream, orders: MessageStream) -> Result<LoopStats> {
        self.run_until(ticks, orders, std::future::pending()).await
    }

    /// Run until both streams have closed or `shutdown` resolves
    ///
    /// On shutdown the loop returns without draining pending messages.
    pub async fn run_until<F>(
        mut self,
        ticks: MessageStream,
        orders: MessageStream,
        shutdown: F,
    ) -> Result<LoopStats>
    where
        F: Future<Output = ()>,
    {
        info!(
            "Trade center started: instrument={}, fee_rate={}, ledger={}",
            self.config.instrument,
            self.config.fee_rate,
            self.ledger.name()
        );

        // Publish the opening balance
        self.ledger.update(Vec::new()).await?;

        let mut ticks = Some(ticks);
        let mut orders = Some(orders);
        tokio::pin!(shutdown);

        while ticks.is_some() || orders.is_some() {
            let result = tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("Trade center shutdown requested");
                    break;
                }

                msg = next_message(&mut ticks) => match msg {
                    Some(msg) => self.handle_tick(msg).await,
                    None => {
                        info!("Tick stream closed");
                        ticks = None;
                        Ok(())
                    }
                },

                msg = next_message(&mut orders) => match msg {
                    Some(msg) => self.handle_order(msg).await,
                    None => {
                        info!("Order stream closed");
                        orders = None;
                        Ok(())
                    }
                },
            };

            if let Err(e) = result {
                error!("Trade center stopped: {}", e);
                return Err(e);
            }
        }

        info!("Trade center is over: {:?}", self.stats);
        Ok(self.stats)
    }

    async fn handle_tick(&mut self, mut msg: Message) -> Result<()> {
        let decoded = decode_tick(msg.payload());
        msg.ack();
        match decoded {
            Ok(tick) => self.on_tick(tick).await,
            Err(e) => {
                warn!("Skipping tick payload: {}", e);
                self.stats.payloads_skipped += 1;
                Ok(())
            }
        }
    }

    async fn handle_order(&mut self, mut msg: Message) -> Result<()> {
        let decoded = decode_order(msg.payload());
        msg.ack();
        match decoded {
            Ok(order) => self.on_order(order).await,
            Err(e) => {
                warn!("Skipping order payload: {}", e);
                self.stats.payloads_skipped += 1;
                Ok(())
            }
        }
    }

    /// Match both books against `tick`, buys first
    ///
    /// Each side consumes its own copy of the quote volume.
    pub async fn on_tick(&mut self, tick: Tick) -> Result<()> {
        self.stats.ticks_processed += 1;

        let mut deltas: Vec<AssetDelta> = Vec::new();
        for book in [&mut self.buys, &mut self.sells] {
            if book.is_empty() {
                continue;
            }
            let pass = book.match_against(tick)?;
            self.stats.fills += pass.fills as u64;
            deltas.extend(pass.deltas);
        }

        if deltas.is_empty() {
            return Ok(());
        }

        let keep = self.keep;
        let charged = deltas.iter().map(|delta| delta.scaled(keep)).collect();
        self.ledger.update(charged).await?;
        self.stats.batches_forwarded += 1;
        debug!(
            "Tick {} at {} settled {} deltas",
            tick.id,
            tick.price,
            deltas.len()
        );
        Ok(())
    }

    /// Lock the order's funds and rest it on its side of the book
    pub async fn on_order(&mut self, order: Order) -> Result<()> {
        if !self.config.instrument.trades(&order) {
            warn!(
                "Rejecting order {}: {} {}/{} is not traded here ({} {})",
                order.id,
                order.symbol,
                order.asset_name,
                order.capital_name,
                self.config.instrument.symbol,
                self.config.instrument
            );
            self.stats.orders_rejected += 1;
            return Ok(());
        }

        // Unsupported order types fail here, before touching the book
        let lock = match pend_to_lock(&order) {
            Ok(lock) => lock,
            Err(MatchingError::Overflow { .. }) => {
                warn!("Rejecting order {}: its notional does not fit", order.id);
                self.stats.orders_rejected += 1;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if !order.validate() {
            warn!("Rejecting invalid order {}: {:?}", order.id, order);
            self.stats.orders_rejected += 1;
            return Ok(());
        }

        let book = match order.side {
            Side::Buy => &mut self.buys,
            Side::Sell => &mut self.sells,
        };
        debug!(
            "Accepted order: id={}, side={:?}, type={}, asset_qty={}, price={}, capital_qty={}",
            order.id,
            order.side,
            order.order_type,
            order.asset_quantity,
            order.asset_price,
            order.capital_quantity
        );
        book.insert(order)?;
        self.ledger.update(lock).await?;
        self.stats.orders_accepted += 1;
        Ok(())
    }
}

async fn next_message(stream: &mut Option<MessageStream>) -> Option<Message> {
    match stream {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
