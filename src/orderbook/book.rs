//! Core OrderBook state: the two price-ordered sides, the id index and the
//! aggregated depth view.

use crate::clock::DayResetClock;
use crate::depth::{BookDepth, LevelInfo};
use crate::errors::OrderBookError;
use crate::feed::MarketDataStats;
use crate::orders::{Order, OrderId, Price, Quantity, Side};
use crate::rules::ExchangeRules;
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::trace;

/// A single-instrument central limit order book.
///
/// Bids and asks are kept in price-ordered maps (best bid is the highest
/// key, best ask the lowest); each level holds a FIFO queue of order ids.
/// The orders themselves live in the id index, so cancellation is an index
/// erase plus one level-queue removal.
///
/// Not thread-safe: all mutation runs on the caller's thread and every
/// public operation restores the book invariants before returning. A caller
/// needing concurrency wraps the book behind its own synchronisation.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Buy side: price level -> FIFO queue of resting order ids. Best bid
    /// is the last key.
    pub(super) bids: BTreeMap<Price, VecDeque<OrderId>>,

    /// Sell side: price level -> FIFO queue of resting order ids. Best ask
    /// is the first key.
    pub(super) asks: BTreeMap<Price, VecDeque<OrderId>>,

    /// Id index owning the orders; each resting order appears here exactly
    /// once and in exactly one level queue.
    pub(super) orders: HashMap<OrderId, Order>,

    /// Day-reset bookkeeping for good-for-day expiry
    pub(super) clock: DayResetClock,

    /// Admission rules
    pub(super) rules: ExchangeRules,

    /// Market-data processing statistics
    pub(super) stats: MarketDataStats,

    /// Price of the most recent execution
    pub(super) last_trade_price: Option<Price>,

    /// Sequence number of the last applied snapshot
    pub(super) last_sequence_number: u64,

    /// Whether an initial snapshot has been applied
    pub(super) is_initialized: bool,
}

impl OrderBook {
    /// Creates an empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            orders: HashMap::new(),
            clock: DayResetClock::new(),
            rules: ExchangeRules::default(),
            stats: MarketDataStats::new(),
            last_trade_price: None,
            last_sequence_number: 0,
            is_initialized: false,
        }
    }

    /// Creates a book with an injected day-reset clock, so tests can drive
    /// simulated instants.
    pub fn with_clock(symbol: &str, clock: DayResetClock) -> Self {
        let mut book = Self::new(symbol);
        book.clock = clock;
        book
    }

    /// The symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of resting orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// True when no orders rest on either side.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Best (highest) bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Best (lowest) ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Midpoint of the best bid and ask.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Price of the most recent execution, if any.
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Looks up a resting order by id.
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// All resting orders at a price level on one side, oldest first.
    pub fn get_orders_at_price(&self, price: Price, side: Side) -> Vec<&Order> {
        let levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };

        levels
            .get(&price)
            .map(|queue| {
                queue
                    .iter()
                    .filter_map(|id| self.orders.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every resting order in the book, in no particular order.
    pub fn get_all_orders(&self) -> Vec<&Order> {
        self.orders.values().collect()
    }

    /// Total resting quantity per price level, bid side and ask side.
    pub fn volume_by_price(&self) -> (HashMap<Price, u64>, HashMap<Price, u64>) {
        let side_volumes = |levels: &BTreeMap<Price, VecDeque<OrderId>>| {
            levels
                .iter()
                .map(|(&price, queue)| {
                    let volume = queue
                        .iter()
                        .map(|id| {
                            self.orders
                                .get(id)
                                .map_or(0, |order| u64::from(order.remaining_quantity()))
                        })
                        .sum();
                    (price, volume)
                })
                .collect()
        };

        (side_volumes(&self.bids), side_volumes(&self.asks))
    }

    /// Replaces the admission rules.
    pub fn set_exchange_rules(&mut self, rules: ExchangeRules) {
        trace!(
            "Order book {}: setting exchange rules {:?}",
            self.symbol,
            rules
        );
        self.rules = rules;
    }

    /// Current admission rules.
    pub fn exchange_rules(&self) -> &ExchangeRules {
        &self.rules
    }

    /// Reconfigures the daily reset time for good-for-day expiry.
    pub fn set_day_reset_time(&mut self, hour: u32, minute: u32) -> Result<(), OrderBookError> {
        self.clock.set_reset_time(hour, minute)
    }

    /// Aggregated depth view: one entry per price level, bids best-first
    /// (descending) and asks best-first (ascending), quantity summed over
    /// each level's resting orders.
    pub fn depth(&self) -> BookDepth {
        let level_quantity = |queue: &VecDeque<OrderId>| -> Quantity {
            queue
                .iter()
                .map(|id| self.orders.get(id).map_or(0, Order::remaining_quantity))
                .sum()
        };

        let bids = self
            .bids
            .iter()
            .rev()
            .map(|(&price, queue)| LevelInfo {
                price,
                quantity: level_quantity(queue),
            })
            .collect();

        let asks = self
            .asks
            .iter()
            .map(|(&price, queue)| LevelInfo {
                price,
                quantity: level_quantity(queue),
            })
            .collect();

        BookDepth::new(bids, asks)
    }
}
