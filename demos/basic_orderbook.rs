// demos/basic_orderbook.rs

use matchbook_rs::{
    setup_logger, ExchangeRules, Order, OrderBook, OrderModify, OrderType, Side,
};
use tracing::info;

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic OrderBook Example");

    // Create a new order book for a symbol
    let mut book = create_orderbook("ACME");

    // Add various types of orders to the book
    demo_adding_orders(&mut book);

    // Display current book state
    display_orderbook_state(&book);

    // Demonstrate market order submission
    demo_market_orders(&mut book);

    // Demonstrate the immediate liveness policies
    demo_immediate_orders(&mut book);

    // Demonstrate modification and cancellation
    demo_modify_and_cancel(&mut book);

    // Display final book state
    info!("\nFinal OrderBook State:");
    display_orderbook_state(&book);
}

fn create_orderbook(symbol: &str) -> OrderBook {
    info!("Creating OrderBook for symbol: {}", symbol);
    let mut book = OrderBook::new(symbol);

    // Trade in 5-cent ticks, round lots of 10, at least 10 units per order
    let rules = ExchangeRules {
        tick_size: 5,
        lot_size: 10,
        min_quantity: 10,
        ..Default::default()
    };
    book.set_exchange_rules(rules);

    // Good-for-day orders expire at 15:59 local time
    book.set_day_reset_time(15, 59).expect("valid reset time");

    book
}

fn demo_adding_orders(book: &mut OrderBook) {
    info!("\nAdding orders to the OrderBook...");

    let mut next_id = 1u64;

    // Ladder of buy limit orders below the market
    for i in 0..5 {
        let price = 9_900 + (i * 20); // 9900, 9920, 9940, 9960, 9980
        let quantity = 10 + (i as u32 * 10); // 10, 20, 30, 40, 50
        let order = Order::new(OrderType::GoodTillCancel, next_id, Side::Buy, price, quantity);
        next_id += 1;

        match book.add_order(order) {
            Ok(trades) => info!(
                "Added BUY limit order: price={}, qty={}, trades={}",
                price,
                quantity,
                trades.len()
            ),
            Err(e) => info!("Failed to add BUY limit order: {}", e),
        }
    }

    // Ladder of sell limit orders above the market
    for i in 0..5 {
        let price = 10_000 + (i * 20); // 10000, 10020, 10040, 10060, 10080
        let quantity = 10 + (i as u32 * 10);
        let order = Order::new(OrderType::GoodTillCancel, next_id, Side::Sell, price, quantity);
        next_id += 1;

        match book.add_order(order) {
            Ok(trades) => info!(
                "Added SELL limit order: price={}, qty={}, trades={}",
                price,
                quantity,
                trades.len()
            ),
            Err(e) => info!("Failed to add SELL limit order: {}", e),
        }
    }

    // An off-tick order is rejected by the exchange rules
    let off_tick = Order::new(OrderType::GoodTillCancel, next_id, Side::Buy, 9_903, 10);
    let validation = book.validate_order(&off_tick);
    info!(
        "Off-tick order would be rejected: {} ({})",
        !validation.is_valid, validation.reason
    );
    let trades = book.add_order(off_tick).expect("add never fails on rejects");
    info!("Off-tick add returned {} trades", trades.len());
}

fn demo_market_orders(book: &mut OrderBook) {
    info!("\nDemonstrating market orders...");

    // Market buy takes the best asks
    match book.add_order(Order::new_market(100, Side::Buy, 30)) {
        Ok(trades) => {
            info!("Market BUY executed {} trades", trades.len());
            for (i, trade) in trades.iter().enumerate() {
                info!(
                    "  Trade {}: maker order {} at {}, qty {}",
                    i,
                    trade.ask().order_id(),
                    trade.ask().price(),
                    trade.quantity()
                );
            }
        }
        Err(e) => info!("Market BUY failed: {}", e),
    }

    // Market sell hits the best bids
    match book.add_order(Order::new_market(101, Side::Sell, 40)) {
        Ok(trades) => info!("Market SELL executed {} trades", trades.len()),
        Err(e) => info!("Market SELL failed: {}", e),
    }

    if let Some(last) = book.last_trade_price() {
        info!("Last trade price: {}", last);
    }
}

fn demo_immediate_orders(book: &mut OrderBook) {
    info!("\nDemonstrating IOC and FOK orders...");

    // IOC crossing the spread: fills what it can, residue cancelled
    let ioc = Order::new(OrderType::ImmediateOrCancel, 200, Side::Buy, 10_020, 500);
    match book.add_order(ioc) {
        Ok(trades) => info!(
            "IOC executed {} trades, nothing rested (book size {})",
            trades.len(),
            book.order_count()
        ),
        Err(e) => info!("IOC failed: {}", e),
    }

    // FOK demanding more than the book holds: rejected atomically
    let fok = Order::new(OrderType::FillOrKill, 201, Side::Buy, 10_080, 100_000);
    match book.add_order(fok) {
        Ok(trades) if trades.is_empty() => {
            info!("FOK killed as expected, book untouched")
        }
        Ok(trades) => info!("FOK executed {} trades", trades.len()),
        Err(e) => info!("FOK failed: {}", e),
    }
}

fn demo_modify_and_cancel(book: &mut OrderBook) {
    info!("\nDemonstrating modification and cancellation...");

    book.add_order(Order::new(
        OrderType::GoodTillCancel,
        300,
        Side::Buy,
        9_850,
        30,
    ))
    .expect("add");

    // Re-price the order; it keeps its type but loses time priority
    match book.modify_order(OrderModify::new(300, Side::Buy, 9_900, 50)) {
        Ok(trades) => info!("Modified order 300, {} trades resulted", trades.len()),
        Err(e) => info!("Modify failed: {}", e),
    }

    book.cancel_order(300);
    info!(
        "Cancelled order 300, still present: {}",
        book.get_order(300).is_some()
    );

    // Cancelling an unknown id is a silent no-op
    book.cancel_order(999_999);
}

fn display_orderbook_state(book: &OrderBook) {
    info!("\nOrderBook State for {}:", book.symbol());

    match (book.best_bid(), book.best_ask()) {
        (Some(bid), Some(ask)) => {
            info!("Best bid: {}", bid);
            info!("Best ask: {}", ask);
            info!("Spread: {:?}", book.spread());
            info!("Mid price: {:.2}", (bid as f64 + ask as f64) / 2.0);
        }
        (Some(bid), None) => {
            info!("Best bid: {}", bid);
            info!("No asks present");
        }
        (None, Some(ask)) => {
            info!("No bids present");
            info!("Best ask: {}", ask);
        }
        (None, None) => {
            info!("No orders in the book");
        }
    }

    info!("Total orders: {}", book.order_count());

    let depth = book.depth();
    info!("Bids:");
    for (i, level) in depth.bids.iter().take(5).enumerate() {
        info!("  Level {}: price={}, qty={}", i, level.price, level.quantity);
    }
    info!("Asks:");
    for (i, level) in depth.asks.iter().take(5).enumerate() {
        info!("  Level {}: price={}, qty={}", i, level.price, level.quantity);
    }
}
