use std::collections::VecDeque;

use backtest_core::{AssetDelta, Order, Price, Side, Tick};
use backtest_ports::{MatchingError, MatchingResult};
use log::debug;

use crate::fill::{can_match, match_order};
use crate::priority::precedes;

/// Result of matching one side of the book against one quote
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPass {
    /// Deltas of every fill, in fill order
    pub deltas: Vec<AssetDelta>,
    /// Number of fills performed
    pub fills: usize,
    /// The quote with the volume this pass consumed removed
    pub tick: Tick,
}

/// One side of the book for one instrument
///
/// Orders are kept sorted by matching priority, so the head is always the
/// next order to trade.
#[derive(Debug, Clone)]
pub struct OrderBook {
    side: Side,
    orders: VecDeque<Order>,
}

impl OrderBook {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            orders: VecDeque::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting orders in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Insert an order behind every resident that strictly precedes it
    pub fn insert(&mut self, order: Order) -> MatchingResult<()> {
        if order.side != self.side {
            return Err(MatchingError::WrongSide {
                order: order.id,
                book: self.side,
            });
        }

        let mut position = 0;
        for resident in &self.orders {
            if !precedes(resident, &order)? {
                break;
            }
            position += 1;
        }
        self.orders.insert(position, order);
        Ok(())
    }

    /// The highest-priority order, if any
    pub fn peek_head(&self) -> Option<&Order> {
        self.orders.front()
    }

    pub fn remove_head(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Returns true if the head order may trade at `price`
    pub fn can_match(&self, price: Price) -> MatchingResult<bool> {
        can_match(self.peek_head(), price)
    }

    /// Fill resting orders against `tick` until it runs dry or the head
    /// stops matching
    ///
    /// Fully filled orders leave the book. A partially filled head stays in
    /// place: its priority does not change with its remaining size.
    pub fn match_against(&mut self, mut tick: Tick) -> MatchingResult<MatchPass> {
        let mut deltas = Vec::new();
        let mut fills = 0;

        while tick.has_volume() && self.can_match(tick.price)? {
            let Some(head) = self.orders.front() else {
                break;
            };
            // The head only leaves the book once its fill is known
            let fill = match_order(head.clone(), tick)?;
            self.orders.pop_front();
            let order = fill.order.clone();
            tick = fill.tick;
            if !fill.asset.is_zero() || !fill.capital.is_zero() {
                fills += 1;
                deltas.extend(fill.into_deltas());
            }

            if order.is_filled() {
                debug!(
                    "{:?} order {} filled at {} (tick {})",
                    order.side, order.id, tick.price, tick.id
                );
                continue;
            }
            self.orders.push_front(order);
            break;
        }

        Ok(MatchPass {
            deltas,
            fills,
            tick,
        })
    }
}
