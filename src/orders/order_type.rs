use crate::errors::OrderBookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Liveness policy of an order: how long it stays in the book and what
/// happens when it cannot be filled immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    /// Active until completely filled or explicitly cancelled.
    #[serde(rename(serialize = "GTC"))]
    #[serde(alias = "gtc", alias = "Gtc", alias = "GTC")]
    GoodTillCancel,

    /// Fills as far as possible against resting orders; any residue is
    /// cancelled instead of resting.
    #[serde(rename(serialize = "IOC"))]
    #[serde(alias = "ioc", alias = "Ioc", alias = "IOC")]
    ImmediateOrCancel,

    /// Executes completely and atomically or not at all. Never rests.
    #[serde(rename(serialize = "FOK"))]
    #[serde(alias = "fok", alias = "Fok", alias = "FOK")]
    FillOrKill,

    /// Takes any price. Converted to a limit order at an extreme price on
    /// admission, or rejected if the opposite side is empty.
    #[serde(rename(serialize = "MARKET"))]
    #[serde(alias = "market", alias = "Market", alias = "MARKET", alias = "MKT")]
    Market,

    /// Active until the daily reset time, then expired by the day sweep.
    #[serde(rename(serialize = "GFD"))]
    #[serde(alias = "gfd", alias = "Gfd", alias = "GFD", alias = "day", alias = "DAY")]
    GoodForDay,
}

impl OrderType {
    /// Returns true if any unfilled portion is cancelled after the initial
    /// matching attempt instead of resting.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::ImmediateOrCancel | Self::FillOrKill)
    }

    /// Returns true if the order is expired by the daily reset sweep.
    pub fn expires_daily(&self) -> bool {
        matches!(self, Self::GoodForDay)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::GoodTillCancel => write!(f, "GTC"),
            OrderType::ImmediateOrCancel => write!(f, "IOC"),
            OrderType::FillOrKill => write!(f, "FOK"),
            OrderType::Market => write!(f, "MARKET"),
            OrderType::GoodForDay => write!(f, "GFD"),
        }
    }
}

impl FromStr for OrderType {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GTC" => Ok(OrderType::GoodTillCancel),
            "IOC" => Ok(OrderType::ImmediateOrCancel),
            "FOK" => Ok(OrderType::FillOrKill),
            "MARKET" | "MKT" => Ok(OrderType::Market),
            "GFD" | "DAY" => Ok(OrderType::GoodForDay),
            _ => Err(OrderBookError::ParseError {
                message: format!("Invalid order type: {s}"),
            }),
        }
    }
}
