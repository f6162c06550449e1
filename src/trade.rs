//! Execution records emitted by the matching loop.

use crate::orders::{OrderId, Price, Quantity};
use serde::{Deserialize, Serialize};

/// One side of an executed trade.
///
/// `price` is the order's own limit price, not a single execution price;
/// clients wanting an execution price use the resting (maker) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInfo {
    order_id: OrderId,
    price: Price,
    quantity: Quantity,
}

impl TradeInfo {
    pub fn new(order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            price,
            quantity,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// An execution between one bid and one ask. The two sides always carry the
/// same quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    bid: TradeInfo,
    ask: TradeInfo,
}

impl Trade {
    pub fn new(bid: TradeInfo, ask: TradeInfo) -> Self {
        Self { bid, ask }
    }

    /// The buy side of the execution.
    pub fn bid(&self) -> &TradeInfo {
        &self.bid
    }

    /// The sell side of the execution.
    pub fn ask(&self) -> &TradeInfo {
        &self.ask
    }

    /// Quantity exchanged, identical on both sides.
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}

/// Trades emitted in response to a single book operation, in execution order.
pub type Trades = Vec<Trade>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_sides() {
        let trade = Trade::new(TradeInfo::new(1, 100, 10), TradeInfo::new(2, 99, 10));

        assert_eq!(trade.bid().order_id(), 1);
        assert_eq!(trade.bid().price(), 100);
        assert_eq!(trade.ask().order_id(), 2);
        assert_eq!(trade.ask().price(), 99);
        assert_eq!(trade.quantity(), 10);
    }

    #[test]
    fn test_serde_round_trip() {
        let trade = Trade::new(TradeInfo::new(1, 100, 10), TradeInfo::new(2, 99, 10));
        let serialized = serde_json::to_string(&trade).unwrap();
        let deserialized: Trade = serde_json::from_str(&serialized).unwrap();
        assert_eq!(trade, deserialized);
    }
}
