use super::{OrderId, OrderType, Price, Quantity, Side, INVALID_PRICE};
use crate::errors::OrderBookError;
use serde::{Deserialize, Serialize};

/// A single order in the book.
///
/// Identity (`id`) and `side` are fixed at creation. The type and price are
/// mutable only through [`Order::to_limit`], which converts a market order
/// into a limit order on admission. `initial_quantity` never changes;
/// `remaining_quantity` decreases as fills occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_type: OrderType,
    id: OrderId,
    side: Side,
    price: Price,
    initial_quantity: Quantity,
    remaining_quantity: Quantity,
}

impl Order {
    /// Creates an order with the given type, identity and terms.
    pub fn new(
        order_type: OrderType,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            order_type,
            id,
            side,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        }
    }

    /// Creates a market order. It carries [`INVALID_PRICE`] until admission
    /// converts it to a limit order at an extreme price.
    pub fn new_market(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self::new(OrderType::Market, id, side, INVALID_PRICE, quantity)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn initial_quantity(&self) -> Quantity {
        self.initial_quantity
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    /// Quantity executed so far.
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    /// Returns true once the order has no unfilled quantity left.
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Executes `quantity` units against this order.
    ///
    /// Filling more than the remaining quantity is a logic error in the
    /// matching code, not a caller-visible rejection, so it fails with
    /// [`OrderBookError::Overfill`] and leaves the order untouched.
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OrderBookError> {
        if quantity > self.remaining_quantity {
            return Err(OrderBookError::Overfill {
                order_id: self.id,
                requested: quantity,
                remaining: self.remaining_quantity,
            });
        }
        self.remaining_quantity -= quantity;
        Ok(())
    }

    /// Converts a market order into a good-till-cancel limit order at
    /// `price`. Only market orders can be converted.
    pub fn to_limit(&mut self, price: Price) -> Result<(), OrderBookError> {
        if self.order_type != OrderType::Market {
            return Err(OrderBookError::TypeConversion {
                order_id: self.id,
                order_type: self.order_type,
            });
        }
        self.price = price;
        self.order_type = OrderType::GoodTillCancel;
        Ok(())
    }
}
