//! Day-reset time bookkeeping.
//!
//! The book pull-checks this clock on every mutating call; there are no
//! timers. The time zone is explicitly [`chrono::Local`], and the now-source
//! is injectable so tests can drive arbitrary instants without sleeping.

use crate::errors::OrderBookError;
use chrono::{DateTime, Local, Timelike};
use std::fmt;

/// Source of "now" for the clock. Overridable for tests.
pub type TimeSource = Box<dyn Fn() -> DateTime<Local> + Send>;

const DEFAULT_RESET_HOUR: u32 = 15;
const DEFAULT_RESET_MINUTE: u32 = 59;

/// Tracks when the daily reset (expiry of good-for-day orders) is due.
///
/// A reset is due when the last reset happened before today's configured
/// reset instant and the current time is at or past it.
pub struct DayResetClock {
    reset_hour: u32,
    reset_minute: u32,
    last_reset: DateTime<Local>,
    now_source: TimeSource,
}

impl DayResetClock {
    /// Clock with the default reset time of 15:59 local.
    pub fn new() -> Self {
        let now_source: TimeSource = Box::new(Local::now);
        let last_reset = now_source();
        Self {
            reset_hour: DEFAULT_RESET_HOUR,
            reset_minute: DEFAULT_RESET_MINUTE,
            last_reset,
            now_source,
        }
    }

    /// Clock with a custom reset time. Fails on an out-of-range hour or
    /// minute.
    pub fn with_reset_time(hour: u32, minute: u32) -> Result<Self, OrderBookError> {
        let mut clock = Self::new();
        clock.set_reset_time(hour, minute)?;
        Ok(clock)
    }

    /// Replaces the now-source. The last-reset marker is re-stamped from the
    /// new source so the clock starts consistent with it.
    pub fn with_time_source(mut self, now_source: TimeSource) -> Self {
        self.last_reset = now_source();
        self.now_source = now_source;
        self
    }

    /// Reconfigures the reset time. Fails on an out-of-range hour or minute.
    pub fn set_reset_time(&mut self, hour: u32, minute: u32) -> Result<(), OrderBookError> {
        if hour > 23 || minute > 59 {
            return Err(OrderBookError::InvalidResetTime { hour, minute });
        }
        self.reset_hour = hour;
        self.reset_minute = minute;
        Ok(())
    }

    pub fn reset_hour(&self) -> u32 {
        self.reset_hour
    }

    pub fn reset_minute(&self) -> u32 {
        self.reset_minute
    }

    pub fn last_reset(&self) -> DateTime<Local> {
        self.last_reset
    }

    fn now(&self) -> DateTime<Local> {
        (self.now_source)()
    }

    /// Whether a day reset is due right now.
    ///
    /// Today's reset instant is built from the current local date and the
    /// configured hour/minute. If a DST gap makes that local time
    /// nonexistent, no reset fires on this call.
    pub fn should_reset_day(&self) -> bool {
        let now = self.now();
        let reset_at = now
            .with_hour(self.reset_hour)
            .and_then(|t| t.with_minute(self.reset_minute))
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0));

        match reset_at {
            Some(reset_at) => self.last_reset < reset_at && now >= reset_at,
            None => false,
        }
    }

    /// Records that a reset has been performed.
    pub fn mark_reset_occurred(&mut self) {
        self.last_reset = self.now();
    }
}

impl Default for DayResetClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DayResetClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayResetClock")
            .field("reset_hour", &self.reset_hour)
            .field("reset_minute", &self.reset_minute)
            .field("last_reset", &self.last_reset)
            .finish()
    }
}
