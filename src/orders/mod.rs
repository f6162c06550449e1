//! Order domain: scalar type aliases, sides, order types and the orders
//! themselves.

mod base;
mod modify;
mod order_type;
mod side;

pub use base::Order;
pub use modify::OrderModify;
pub use order_type::OrderType;
pub use side::Side;

/// Price in the smallest venue unit (e.g. cents). Integer so comparisons are
/// exact and fast.
pub type Price = i32;

/// Number of units in an order. Quantities cannot be negative.
pub type Quantity = u32;

/// Unique order identifier, unique across the lifetime of the book.
pub type OrderId = u64;

/// Sentinel price a converted market buy carries: crosses every resting ask.
pub const PRICE_MAX: Price = Price::MAX;

/// Sentinel price a converted market sell carries: crosses every resting bid.
pub const PRICE_MIN: Price = Price::MIN;

/// Placeholder price carried by a market order until it is converted to a
/// limit order. Never reaches validation: market orders are converted or
/// rejected first.
pub const INVALID_PRICE: Price = 0;
