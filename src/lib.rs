//! # Matchbook
//!
//! A single-instrument central limit order book (CLOB) matching engine
//! written in Rust. The book maintains separate bid and ask sides in strict
//! price-time priority, validates orders against configurable exchange
//! rules, and ingests external market-data messages to rebuild or mutate
//! its state.
//!
//! ## Key Features
//!
//! - **Price-Time Priority Matching**: orders at the best price execute
//!   first; within a price level, orders execute in arrival order (FIFO).
//!
//! - **Five Order Types**: good-till-cancel, immediate-or-cancel,
//!   fill-or-kill (atomic all-or-nothing with a non-mutating preflight),
//!   market (converted to an extreme-priced limit on admission) and
//!   good-for-day (expired by a daily reset sweep).
//!
//! - **Exchange Rule Validation**: tick size, lot size, quantity range and
//!   minimum notional are enforced at admission; rejected orders leave the
//!   book untouched.
//!
//! - **Market Data Feed Integration**: incremental updates (new orders,
//!   cancellations, modifications, trades) and full book snapshots with
//!   sequence-gap detection, plus processing statistics with latency
//!   tracking.
//!
//! - **Day Reset Clock**: good-for-day expiry is pull-checked on each
//!   mutating call against an injectable clock, so no timers or background
//!   threads exist anywhere in the core.
//!
//! ## Design
//!
//! The book is deliberately single-threaded: every operation runs on the
//! caller's thread, nothing blocks, and all invariants (no crossed book, no
//! empty levels, index/side consistency) are restored before each public
//! call returns. Callers that need concurrent access put the book behind
//! their own synchronisation, typically a message queue feeding one
//! consumer.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{Order, OrderBook, OrderType, Side};
//!
//! let mut book = OrderBook::new("ACME");
//!
//! let resting = Order::new(OrderType::GoodTillCancel, 1, Side::Buy, 100, 10);
//! assert!(book.add_order(resting).unwrap().is_empty());
//!
//! let aggressor = Order::new(OrderType::GoodTillCancel, 2, Side::Sell, 100, 10);
//! let trades = book.add_order(aggressor).unwrap();
//!
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].quantity(), 10);
//! assert_eq!(book.order_count(), 0);
//! ```

mod clock;
mod depth;
mod errors;
mod feed;
mod orderbook;
mod orders;
mod rules;
mod trade;
mod utils;

pub use clock::{DayResetClock, TimeSource};
pub use depth::{BookDepth, LevelInfo};
pub use errors::OrderBookError;
pub use feed::{MarketDataMessage, MarketDataStats, SnapshotLevel};
pub use orderbook::OrderBook;
pub use orders::{
    Order, OrderId, OrderModify, OrderType, Price, Quantity, Side, INVALID_PRICE, PRICE_MAX,
    PRICE_MIN,
};
pub use rules::{ExchangeRules, OrderValidation, RejectReason};
pub use trade::{Trade, TradeInfo, Trades};
pub use utils::{current_time_millis, setup_logger};
