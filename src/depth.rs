//! Aggregated market-depth views of the book.

use crate::orders::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Total resting quantity at one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Price level
    pub price: Price,
    /// Sum of remaining quantity over every order at this price
    pub quantity: Quantity,
}

/// Aggregated depth of both sides of the book.
///
/// Bids are sorted best (highest) price first, asks best (lowest) price
/// first, so index 0 on each side is top of book. Empty levels never appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDepth {
    /// Bid levels, best price first
    pub bids: Vec<LevelInfo>,
    /// Ask levels, best price first
    pub asks: Vec<LevelInfo>,
}

impl BookDepth {
    pub fn new(bids: Vec<LevelInfo>, asks: Vec<LevelInfo>) -> Self {
        Self { bids, asks }
    }

    /// Best bid price and quantity, if any.
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.first().map(|level| (level.price, level.quantity))
    }

    /// Best ask price and quantity, if any.
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.first().map(|level| (level.price, level.quantity))
    }

    /// Midpoint of the best bid and ask prices.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Total quantity resting on the bid side.
    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|level| u64::from(level.quantity)).sum()
    }

    /// Total quantity resting on the ask side.
    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|level| u64::from(level.quantity)).sum()
    }
}
