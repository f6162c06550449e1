//! Market-data ingress: dispatches feed messages into book mutations and
//! keeps the processing statistics current.

use super::book::OrderBook;
use crate::errors::OrderBookError;
use crate::feed::{MarketDataMessage, MarketDataStats, SnapshotLevel};
use crate::orders::{Order, OrderId, OrderModify, OrderType, Price, Quantity, Side};
use std::time::Instant;
use tracing::{trace, warn};

/// Id offset for orders synthesised from snapshot levels, so they cannot
/// collide with real feed ids.
const SYNTHETIC_ORDER_ID_BASE: OrderId = 1_000_000;

impl OrderBook {
    /// Processes one market-data message.
    ///
    /// Returns true on success. A failed dispatch increments the `errors`
    /// counter and returns false; the book is not corrupted. Latency
    /// metrics cover successful dispatches.
    pub fn process_market_data(&mut self, message: MarketDataMessage) -> bool {
        trace!(
            "Order book {}: processing {} message",
            self.symbol,
            message.kind()
        );

        let started = Instant::now();
        let result = self.dispatch_message(message);
        let latency = started.elapsed();

        match result {
            Ok(()) => {
                self.stats.messages_processed += 1;
                self.stats.total_processing_time += latency;
                if latency > self.stats.max_latency {
                    self.stats.max_latency = latency;
                }
                if latency < self.stats.min_latency {
                    self.stats.min_latency = latency;
                }
                true
            }
            Err(error) => {
                warn!(
                    "Order book {}: market data processing failed: {}",
                    self.symbol, error
                );
                self.stats.errors += 1;
                false
            }
        }
    }

    /// Processes a batch of messages in order, returning the number that
    /// succeeded. Equivalent to sequential [`OrderBook::process_market_data`]
    /// calls.
    pub fn process_market_data_batch(&mut self, messages: Vec<MarketDataMessage>) -> usize {
        let mut successes = 0;
        for message in messages {
            if self.process_market_data(message) {
                successes += 1;
            }
        }
        successes
    }

    /// Current market-data processing statistics.
    pub fn market_data_stats(&self) -> &MarketDataStats {
        &self.stats
    }

    /// Clears the market-data statistics for a new measurement period.
    pub fn reset_market_data_stats(&mut self) {
        self.stats.reset();
    }

    /// Whether an initial snapshot has been applied. Incremental updates
    /// before that may be unreliable.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Sequence number of the last applied snapshot, for gap detection.
    pub fn last_sequence_number(&self) -> u64 {
        self.last_sequence_number
    }

    fn dispatch_message(&mut self, message: MarketDataMessage) -> Result<(), OrderBookError> {
        match message {
            MarketDataMessage::NewOrder {
                order_id,
                side,
                price,
                quantity,
                order_type,
                ..
            } => self.apply_new_order(order_id, side, price, quantity, order_type),
            MarketDataMessage::CancelOrder { order_id, .. } => {
                self.cancel_order(order_id);
                self.stats.cancellations += 1;
                Ok(())
            }
            MarketDataMessage::ModifyOrder {
                order_id,
                side,
                new_price,
                new_quantity,
                ..
            } => {
                self.modify_order(OrderModify::new(order_id, side, new_price, new_quantity))?;
                self.stats.modifications += 1;
                Ok(())
            }
            MarketDataMessage::Trade { .. } => {
                // Informational; a real system would reconcile against the
                // book state
                self.stats.trades += 1;
                Ok(())
            }
            MarketDataMessage::BookSnapshot {
                bids,
                asks,
                sequence_number,
                ..
            } => self.apply_snapshot(bids, asks, sequence_number),
        }
    }

    fn apply_new_order(
        &mut self,
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        order_type: OrderType,
    ) -> Result<(), OrderBookError> {
        let order = if order_type == OrderType::Market {
            Order::new_market(order_id, side, quantity)
        } else {
            Order::new(order_type, order_id, side, price, quantity)
        };

        let trades = self.add_order(order)?;
        self.stats.new_orders += 1;
        self.stats.trades += trades.len() as u64;
        Ok(())
    }

    /// Rebuilds the book from a full snapshot. Each non-empty level becomes
    /// one synthetic good-till-cancel order carrying the aggregate quantity,
    /// with ids from a high offset to avoid colliding with real ids.
    fn apply_snapshot(
        &mut self,
        bids: Vec<SnapshotLevel>,
        asks: Vec<SnapshotLevel>,
        sequence_number: u64,
    ) -> Result<(), OrderBookError> {
        if self.is_initialized && sequence_number < self.last_sequence_number {
            return Err(OrderBookError::StaleSnapshot {
                received: sequence_number,
                last_applied: self.last_sequence_number,
            });
        }
        if self.is_initialized && sequence_number > self.last_sequence_number + 1 {
            self.stats.sequence_gaps += 1;
        }

        self.bids.clear();
        self.asks.clear();
        self.orders.clear();

        let mut synthetic_id = SYNTHETIC_ORDER_ID_BASE;

        for level in bids.iter().filter(|level| level.quantity > 0) {
            let order = Order::new(
                OrderType::GoodTillCancel,
                synthetic_id,
                Side::Buy,
                level.price,
                level.quantity,
            );
            self.bids
                .entry(level.price)
                .or_default()
                .push_back(synthetic_id);
            self.orders.insert(synthetic_id, order);
            synthetic_id += 1;
        }

        for level in asks.iter().filter(|level| level.quantity > 0) {
            let order = Order::new(
                OrderType::GoodTillCancel,
                synthetic_id,
                Side::Sell,
                level.price,
                level.quantity,
            );
            self.asks
                .entry(level.price)
                .or_default()
                .push_back(synthetic_id);
            self.orders.insert(synthetic_id, order);
            synthetic_id += 1;
        }

        self.is_initialized = true;
        self.last_sequence_number = sequence_number;
        self.stats.snapshots += 1;

        trace!(
            "Order book {}: applied snapshot seq {} ({} bid levels, {} ask levels)",
            self.symbol,
            sequence_number,
            bids.len(),
            asks.len()
        );

        Ok(())
    }
}
