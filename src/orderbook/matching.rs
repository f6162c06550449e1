//! The core matching logic: the crossing loop, the immediate-or-cancel
//! residue sweep and the two-phase fill-or-kill path.

use super::book::OrderBook;
use crate::errors::OrderBookError;
use crate::orders::{Order, OrderId, OrderType, Price, Quantity, Side};
use crate::trade::{Trade, TradeInfo, Trades};
use std::collections::VecDeque;
use tracing::trace;

impl OrderBook {
    /// Whether an order of `side` at `price` could execute against the
    /// current opposite side.
    pub(super) fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self.best_ask().map_or(false, |best_ask| price >= best_ask),
            Side::Sell => self.best_bid().map_or(false, |best_bid| price <= best_bid),
        }
    }

    /// Crosses the book while the best bid and best ask overlap.
    ///
    /// Within the overlap, front-of-queue pairs against front-of-queue
    /// (strict price-then-time order) for the minimum of the two remaining
    /// quantities. Filled orders leave the index and their queue; emptied
    /// levels are erased. Afterwards any immediate-or-cancel residue is
    /// cancelled: only top-of-book IOC residue can exist, because an IOC
    /// that could not match at all was rejected at admission.
    pub(super) fn match_orders(&mut self) -> Result<Trades, OrderBookError> {
        let mut trades = Trades::new();

        loop {
            let (bid_price, ask_price) = match (self.best_bid(), self.best_ask()) {
                (Some(bid), Some(ask)) => (bid, ask),
                _ => break,
            };
            if bid_price < ask_price {
                break; // No overlap, nothing can cross
            }

            loop {
                let Some(bid_id) = self.level_front(Side::Buy, bid_price) else {
                    break;
                };
                let Some(ask_id) = self.level_front(Side::Sell, ask_price) else {
                    break;
                };

                let (bid_limit, bid_remaining) = self.order_terms(bid_id)?;
                let (ask_limit, ask_remaining) = self.order_terms(ask_id)?;
                let quantity = bid_remaining.min(ask_remaining);

                trades.push(Trade::new(
                    TradeInfo::new(bid_id, bid_limit, quantity),
                    TradeInfo::new(ask_id, ask_limit, quantity),
                ));

                self.fill_resting(bid_id, quantity)?;
                self.fill_resting(ask_id, quantity)?;

                if self.is_order_filled(bid_id) {
                    self.orders.remove(&bid_id);
                    if let Some(queue) = self.bids.get_mut(&bid_price) {
                        queue.pop_front();
                    }
                }
                if self.is_order_filled(ask_id) {
                    self.orders.remove(&ask_id);
                    if let Some(queue) = self.asks.get_mut(&ask_price) {
                        queue.pop_front();
                    }
                }
            }

            if self.bids.get(&bid_price).is_some_and(VecDeque::is_empty) {
                self.bids.remove(&bid_price);
            }
            if self.asks.get(&ask_price).is_some_and(VecDeque::is_empty) {
                self.asks.remove(&ask_price);
            }
        }

        self.sweep_immediate_or_cancel();

        Ok(trades)
    }

    /// Cancels every resting immediate-or-cancel order with quantity left.
    fn sweep_immediate_or_cancel(&mut self) {
        let residue: Vec<OrderId> = self
            .orders
            .iter()
            .filter(|(_, order)| {
                order.order_type() == OrderType::ImmediateOrCancel
                    && order.remaining_quantity() > 0
            })
            .map(|(&id, _)| id)
            .collect();

        for order_id in residue {
            trace!(
                "Order book {}: cancelling IOC residue for order {}",
                self.symbol,
                order_id
            );
            self.cancel_order(order_id);
        }
    }

    /// Handles a fill-or-kill order: a non-mutating preflight collects the
    /// makers that would fill it completely, then the fills are committed.
    /// If the preflight leaves demand uncovered, the book is returned
    /// untouched with no trades. The aggressor never rests.
    pub(super) fn match_fill_or_kill(
        &mut self,
        mut order: Order,
    ) -> Result<Trades, OrderBookError> {
        let (matches, uncovered) = self.collect_fill_or_kill(&order);

        if uncovered > 0 {
            trace!(
                "Order book {}: FOK order {} cannot fill {} of {}, killing",
                self.symbol,
                order.id(),
                uncovered,
                order.remaining_quantity()
            );
            return Ok(Trades::new());
        }

        self.execute_fill_or_kill(&mut order, matches)
    }

    /// Phase 1: walks the opposite side best-to-worst, pairing demand with
    /// resting quantity while the price still crosses. Reads only; returns
    /// the planned `(maker id, quantity)` pairs and any uncovered demand.
    fn collect_fill_or_kill(&self, order: &Order) -> (Vec<(OrderId, Quantity)>, Quantity) {
        let mut matches = Vec::new();
        let mut remaining = order.remaining_quantity();

        match order.side() {
            Side::Buy => {
                'levels: for (&ask_price, queue) in self.asks.iter() {
                    if ask_price > order.price() {
                        break; // Price too high
                    }
                    for &maker_id in queue {
                        let Some(maker) = self.orders.get(&maker_id) else {
                            continue;
                        };
                        let quantity = remaining.min(maker.remaining_quantity());
                        matches.push((maker_id, quantity));
                        remaining -= quantity;
                        if remaining == 0 {
                            break 'levels;
                        }
                    }
                }
            }
            Side::Sell => {
                'levels: for (&bid_price, queue) in self.bids.iter().rev() {
                    if bid_price < order.price() {
                        break; // Price too low
                    }
                    for &maker_id in queue {
                        let Some(maker) = self.orders.get(&maker_id) else {
                            continue;
                        };
                        let quantity = remaining.min(maker.remaining_quantity());
                        matches.push((maker_id, quantity));
                        remaining -= quantity;
                        if remaining == 0 {
                            break 'levels;
                        }
                    }
                }
            }
        }

        (matches, remaining)
    }

    /// Phase 2: commits the collected fills pair by pair. Each fully filled
    /// maker is cancelled immediately, so the book invariants hold before
    /// the next pair executes.
    fn execute_fill_or_kill(
        &mut self,
        order: &mut Order,
        matches: Vec<(OrderId, Quantity)>,
    ) -> Result<Trades, OrderBookError> {
        let mut trades = Trades::with_capacity(matches.len());

        for (maker_id, quantity) in matches {
            let (maker_price, maker_filled) = {
                let maker = self
                    .orders
                    .get_mut(&maker_id)
                    .ok_or(OrderBookError::OrderNotFound(maker_id))?;
                maker.fill(quantity)?;
                (maker.price(), maker.is_filled())
            };
            order.fill(quantity)?;

            let taker_info = TradeInfo::new(order.id(), order.price(), quantity);
            let maker_info = TradeInfo::new(maker_id, maker_price, quantity);
            trades.push(match order.side() {
                Side::Buy => Trade::new(taker_info, maker_info),
                Side::Sell => Trade::new(maker_info, taker_info),
            });

            if maker_filled {
                self.cancel_order(maker_id);
            }
        }

        Ok(trades)
    }

    fn level_front(&self, side: Side, price: Price) -> Option<OrderId> {
        let levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        levels.get(&price).and_then(|queue| queue.front().copied())
    }

    fn order_terms(&self, order_id: OrderId) -> Result<(Price, Quantity), OrderBookError> {
        let order = self
            .orders
            .get(&order_id)
            .ok_or(OrderBookError::OrderNotFound(order_id))?;
        Ok((order.price(), order.remaining_quantity()))
    }

    fn fill_resting(&mut self, order_id: OrderId, quantity: Quantity) -> Result<(), OrderBookError> {
        self.orders
            .get_mut(&order_id)
            .ok_or(OrderBookError::OrderNotFound(order_id))?
            .fill(quantity)
    }

    fn is_order_filled(&self, order_id: OrderId) -> bool {
        self.orders.get(&order_id).map_or(false, Order::is_filled)
    }
}
