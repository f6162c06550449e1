use crate::orders::{OrderId, OrderType, Price, Quantity, Side};
use serde::{Deserialize, Serialize};

/// Aggregated data for one price level inside a book snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLevel {
    /// Price level
    pub price: Price,
    /// Total quantity at this level
    pub quantity: Quantity,
    /// Number of individual orders behind the aggregate
    pub order_count: u32,
}

/// One inbound market-data update.
///
/// Incremental variants mutate the book order by order; `BookSnapshot`
/// replaces the whole book state and carries a sequence number for gap
/// detection. Timestamps are exchange time in milliseconds since the UNIX
/// epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarketDataMessage {
    /// New order added to the book.
    NewOrder {
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        order_type: OrderType,
        timestamp: u64,
    },

    /// Existing order cancelled.
    CancelOrder { order_id: OrderId, timestamp: u64 },

    /// Existing order re-priced and/or re-sized (cancel-and-replace).
    ModifyOrder {
        order_id: OrderId,
        side: Side,
        new_price: Price,
        new_quantity: Quantity,
        timestamp: u64,
    },

    /// Trade print, informational only.
    Trade {
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        timestamp: u64,
    },

    /// Full book snapshot for initial construction or recovery.
    BookSnapshot {
        /// Bid levels, usually sorted high to low
        bids: Vec<SnapshotLevel>,
        /// Ask levels, usually sorted low to high
        asks: Vec<SnapshotLevel>,
        timestamp: u64,
        /// Sequence number to detect feed gaps
        sequence_number: u64,
    },
}

impl MarketDataMessage {
    /// Short tag for logging and dispatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MarketDataMessage::NewOrder { .. } => "new_order",
            MarketDataMessage::CancelOrder { .. } => "cancel_order",
            MarketDataMessage::ModifyOrder { .. } => "modify_order",
            MarketDataMessage::Trade { .. } => "trade",
            MarketDataMessage::BookSnapshot { .. } => "book_snapshot",
        }
    }
}
