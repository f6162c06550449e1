use super::book::OrderBook;
use crate::orders::{Order, OrderId, OrderType, PRICE_MAX, PRICE_MIN};
use crate::rules::{OrderValidation, RejectReason};
use tracing::debug;

impl OrderBook {
    /// Validates an order against the book state and the exchange rules.
    ///
    /// Check order: duplicate id, price, quantity, notional. A converted
    /// market order carries an extreme sentinel price, so its price and
    /// notional checks are skipped.
    pub fn validate_order(&self, order: &Order) -> OrderValidation {
        if self.orders.contains_key(&order.id()) {
            return OrderValidation::reject(RejectReason::DuplicateOrderId);
        }

        let converted_market = order.price() == PRICE_MAX || order.price() == PRICE_MIN;

        if !converted_market && !self.rules.is_valid_price(order.price()) {
            return OrderValidation::reject(RejectReason::InvalidPrice);
        }

        if !self.rules.is_valid_quantity(order.remaining_quantity()) {
            let quantity = order.remaining_quantity();
            let reason = if quantity < self.rules.min_quantity {
                RejectReason::BelowMinQuantity
            } else if quantity > self.rules.max_quantity {
                RejectReason::AboveMaxQuantity
            } else {
                RejectReason::InvalidQuantity
            };
            return OrderValidation::reject(reason);
        }

        if !converted_market
            && !self
                .rules
                .is_valid_notional(order.price(), order.remaining_quantity())
        {
            return OrderValidation::reject(RejectReason::BelowMinNotional);
        }

        OrderValidation::accept()
    }

    /// Runs the daily sweep if the clock says a reset is due.
    pub(super) fn check_and_reset_day(&mut self) {
        if self.clock.should_reset_day() {
            self.cancel_good_for_day_orders();
            self.clock.mark_reset_occurred();
        }
    }

    /// Expires every good-for-day order. The ids are collected into a local
    /// buffer first, since cancellation mutates the index being scanned.
    fn cancel_good_for_day_orders(&mut self) {
        let expired: Vec<OrderId> = self
            .orders
            .iter()
            .filter(|(_, order)| order.order_type() == OrderType::GoodForDay)
            .map(|(&id, _)| id)
            .collect();

        debug!(
            "Order book {}: day reset expiring {} good-for-day orders",
            self.symbol,
            expired.len()
        );

        for order_id in expired {
            self.cancel_order(order_id);
        }
    }
}
