//! Order lifecycle operations: admission, cancellation and modification.

use super::book::OrderBook;
use crate::errors::OrderBookError;
use crate::orders::{Order, OrderId, OrderModify, OrderType, Side, PRICE_MAX, PRICE_MIN};
use crate::trade::Trades;
use tracing::trace;

impl OrderBook {
    /// Adds an order to the book and attempts to match it.
    ///
    /// Admission rejections (duplicate id, rule violation, market order on
    /// an empty book, IOC that cannot match, FOK that cannot fully fill)
    /// return `Ok` with an empty trade list and leave the book unchanged;
    /// the reject reason is available through [`OrderBook::validate_order`].
    /// `Err` is reserved for internal contract violations.
    pub fn add_order(&mut self, mut order: Order) -> Result<Trades, OrderBookError> {
        self.check_and_reset_day();

        trace!(
            "Order book {}: adding order {} ({} {} {} x {})",
            self.symbol,
            order.id(),
            order.order_type(),
            order.side(),
            order.price(),
            order.remaining_quantity()
        );

        // Market orders convert to a limit at an extreme price, which
        // trivially crosses any resting order; on an empty opposite side
        // they are rejected outright.
        if order.order_type() == OrderType::Market {
            let opposite_empty = match order.side() {
                Side::Buy => self.asks.is_empty(),
                Side::Sell => self.bids.is_empty(),
            };
            if opposite_empty {
                trace!(
                    "Order book {}: rejecting market order {} against empty book",
                    self.symbol,
                    order.id()
                );
                return Ok(Trades::new());
            }
            let limit = match order.side() {
                Side::Buy => PRICE_MAX,
                Side::Sell => PRICE_MIN,
            };
            order.to_limit(limit)?;
        }

        let validation = self.validate_order(&order);
        if !validation.is_valid {
            trace!(
                "Order book {}: rejecting order {}: {}",
                self.symbol,
                order.id(),
                validation.reason
            );
            return Ok(Trades::new());
        }

        // An IOC that cannot match at all never enters the book.
        if order.order_type() == OrderType::ImmediateOrCancel
            && !self.can_match(order.side(), order.price())
        {
            return Ok(Trades::new());
        }

        let side = order.side();

        let trades = if order.order_type() == OrderType::FillOrKill {
            // All-or-nothing, handled without ever resting the order
            self.match_fill_or_kill(order)?
        } else {
            let id = order.id();
            let price = order.price();
            let levels = match side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            levels.entry(price).or_default().push_back(id);
            self.orders.insert(id, order);

            self.match_orders()?
        };

        if let Some(trade) = trades.last() {
            // The maker is the opposite side of the aggressor just added
            self.last_trade_price = Some(match side {
                Side::Buy => trade.ask().price(),
                Side::Sell => trade.bid().price(),
            });
        }

        Ok(trades)
    }

    /// Removes an order from the book. A no-op if the id is unknown.
    pub fn cancel_order(&mut self, order_id: OrderId) {
        let Some(order) = self.orders.remove(&order_id) else {
            return;
        };

        trace!(
            "Order book {}: cancelling order {} at price {}",
            self.symbol,
            order_id,
            order.price()
        );

        let levels = match order.side() {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };

        if let Some(queue) = levels.get_mut(&order.price()) {
            if let Some(position) = queue.iter().position(|&id| id == order_id) {
                queue.remove(position);
            }
            if queue.is_empty() {
                levels.remove(&order.price());
            }
        }
    }

    /// Replaces an existing order with new terms, preserving its type.
    ///
    /// Implemented as cancel-and-re-add, so the replacement joins the back
    /// of its level's queue and time priority is lost. A no-op returning no
    /// trades if the id is unknown.
    pub fn modify_order(&mut self, modify: OrderModify) -> Result<Trades, OrderBookError> {
        self.check_and_reset_day();

        let Some(existing) = self.orders.get(&modify.order_id()) else {
            return Ok(Trades::new());
        };
        let order_type = existing.order_type();

        trace!(
            "Order book {}: modifying order {} to {} x {}",
            self.symbol,
            modify.order_id(),
            modify.price(),
            modify.quantity()
        );

        self.cancel_order(modify.order_id());
        self.add_order(modify.to_order(order_type))
    }
}
