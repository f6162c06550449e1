use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters and latency metrics for market-data processing.
///
/// Message counters are split by type; `errors` counts dispatches that
/// failed and left the book untouched, `sequence_gaps` counts snapshots that
/// arrived with a non-unit sequence increment. Latency fields cover
/// successful dispatches only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataStats {
    /// Total messages processed successfully
    pub messages_processed: u64,
    /// New-order messages
    pub new_orders: u64,
    /// Cancel messages
    pub cancellations: u64,
    /// Modify messages
    pub modifications: u64,
    /// Trade prints seen, plus trades produced by processed new orders
    pub trades: u64,
    /// Snapshots applied
    pub snapshots: u64,
    /// Dispatch failures
    pub errors: u64,
    /// Snapshot sequence gaps detected
    pub sequence_gaps: u64,
    /// Cumulative processing time of successful dispatches
    pub total_processing_time: Duration,
    /// Slowest successful dispatch
    pub max_latency: Duration,
    /// Fastest successful dispatch
    pub min_latency: Duration,
}

impl Default for MarketDataStats {
    fn default() -> Self {
        Self {
            messages_processed: 0,
            new_orders: 0,
            cancellations: 0,
            modifications: 0,
            trades: 0,
            snapshots: 0,
            errors: 0,
            sequence_gaps: 0,
            total_processing_time: Duration::ZERO,
            max_latency: Duration::ZERO,
            min_latency: Duration::MAX,
        }
    }
}

impl MarketDataStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all counters and timing metrics for a new measurement period.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average processing latency in microseconds, 0.0 before the first
    /// successful message.
    pub fn average_latency_micros(&self) -> f64 {
        if self.messages_processed == 0 {
            return 0.0;
        }
        self.total_processing_time.as_micros() as f64 / self.messages_processed as f64
    }
}
