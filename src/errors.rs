//! Order book error types

use crate::orders::{OrderId, OrderType, Quantity};
use std::fmt;

/// Errors raised by the order book.
///
/// Admission rejections (bad price, duplicate id, unfillable FOK, ...) are
/// not errors: they surface as an empty trade list and the reject reason is
/// available through validation. These variants cover contract violations
/// inside the matching logic, parsing failures and configuration mistakes.
#[derive(Debug)]
pub enum OrderBookError {
    /// A fill was attempted for more than the order's remaining quantity.
    Overfill {
        /// Order that would have been overfilled
        order_id: OrderId,
        /// Quantity the fill asked for
        requested: Quantity,
        /// Quantity actually remaining
        remaining: Quantity,
    },

    /// A market-to-limit conversion was attempted on a non-market order.
    TypeConversion {
        /// Order the conversion was attempted on
        order_id: OrderId,
        /// The order's actual type
        order_type: OrderType,
    },

    /// The id index and the price levels disagree about an order.
    OrderNotFound(OrderId),

    /// A day-reset time outside 0-23h / 0-59m was configured.
    InvalidResetTime {
        /// Requested hour
        hour: u32,
        /// Requested minute
        minute: u32,
    },

    /// A book snapshot arrived with a sequence number older than the last
    /// one applied.
    StaleSnapshot {
        /// Sequence number of the rejected snapshot
        received: u64,
        /// Sequence number of the last applied snapshot
        last_applied: u64,
    },

    /// String conversion into a domain type failed.
    ParseError {
        /// Descriptive message explaining the parsing failure
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::Overfill {
                order_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Overfill on order {}: requested {}, remaining {}",
                    order_id, requested, remaining
                )
            }
            OrderBookError::TypeConversion {
                order_id,
                order_type,
            } => {
                write!(
                    f,
                    "Cannot convert order {} to limit: type is {}",
                    order_id, order_type
                )
            }
            OrderBookError::OrderNotFound(order_id) => {
                write!(f, "Order not found: {}", order_id)
            }
            OrderBookError::InvalidResetTime { hour, minute } => {
                write!(
                    f,
                    "Invalid reset time {:02}:{:02}: hour must be 0-23, minute must be 0-59",
                    hour, minute
                )
            }
            OrderBookError::StaleSnapshot {
                received,
                last_applied,
            } => {
                write!(
                    f,
                    "Stale snapshot: sequence {} is older than last applied {}",
                    received, last_applied
                )
            }
            OrderBookError::ParseError { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for OrderBookError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_overfill_display() {
        let error = OrderBookError::Overfill {
            order_id: 7,
            requested: 100,
            remaining: 30,
        };
        assert_eq!(
            error.to_string(),
            "Overfill on order 7: requested 100, remaining 30"
        );
    }

    #[test]
    fn test_type_conversion_display() {
        let error = OrderBookError::TypeConversion {
            order_id: 3,
            order_type: OrderType::GoodTillCancel,
        };
        assert_eq!(
            error.to_string(),
            "Cannot convert order 3 to limit: type is GTC"
        );
    }

    #[test]
    fn test_invalid_reset_time_display() {
        let error = OrderBookError::InvalidResetTime {
            hour: 24,
            minute: 0,
        };
        assert!(error.to_string().contains("24:00"));
    }

    #[test]
    fn test_stale_snapshot_display() {
        let error = OrderBookError::StaleSnapshot {
            received: 5,
            last_applied: 9,
        };
        assert_eq!(
            error.to_string(),
            "Stale snapshot: sequence 5 is older than last applied 9"
        );
    }

    #[test]
    fn test_implements_error_trait() {
        let error = OrderBookError::OrderNotFound(1);
        let _: &dyn Error = &error;
        assert!(error.source().is_none());
    }
}
