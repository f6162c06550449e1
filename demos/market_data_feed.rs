// demos/market_data_feed.rs

use matchbook_rs::{
    current_time_millis, setup_logger, MarketDataMessage, MarketDataStats, OrderBook, OrderType,
    Side, SnapshotLevel,
};
use tracing::info;

fn main() {
    // Set up logging
    setup_logger();
    info!("Market Data Feed Example");

    let mut book = OrderBook::new("ACME");

    // Initialize the book from a full snapshot
    demo_snapshot(&mut book);

    // Apply incremental updates on top of it
    demo_incremental_updates(&mut book);

    // Push a batch through in one call
    demo_batch_processing(&mut book);

    // Recover from a feed gap with a fresh snapshot
    demo_gap_recovery(&mut book);

    display_stats(book.market_data_stats());
}

fn level(price: i32, quantity: u32, order_count: u32) -> SnapshotLevel {
    SnapshotLevel {
        price,
        quantity,
        order_count,
    }
}

fn demo_snapshot(book: &mut OrderBook) {
    info!("\nApplying opening snapshot...");

    let snapshot = MarketDataMessage::BookSnapshot {
        bids: vec![
            level(10_000, 1_500, 8),
            level(9_999, 2_000, 12),
            level(9_998, 1_800, 10),
        ],
        asks: vec![
            level(10_001, 1_400, 7),
            level(10_002, 1_900, 11),
            level(10_003, 1_600, 9),
        ],
        timestamp: current_time_millis(),
        sequence_number: 1,
    };

    let ok = book.process_market_data(snapshot);
    info!(
        "Snapshot processed: {}, initialized: {}, orders: {}",
        ok,
        book.is_initialized(),
        book.order_count()
    );
    display_depth(book);
}

fn demo_incremental_updates(book: &mut OrderBook) {
    info!("\nApplying incremental updates...");

    // A new bid joins the best level
    book.process_market_data(MarketDataMessage::NewOrder {
        order_id: 5_001,
        side: Side::Buy,
        price: 10_000,
        quantity: 250,
        order_type: OrderType::GoodTillCancel,
        timestamp: current_time_millis(),
    });
    info!("After join: best bid {:?}", book.depth().best_bid());

    // A sell crosses and trades against the book
    book.process_market_data(MarketDataMessage::NewOrder {
        order_id: 5_002,
        side: Side::Sell,
        price: 10_000,
        quantity: 150,
        order_type: OrderType::GoodTillCancel,
        timestamp: current_time_millis(),
    });
    info!("After cross: best bid {:?}", book.depth().best_bid());

    // The join is cancelled again
    book.process_market_data(MarketDataMessage::CancelOrder {
        order_id: 5_001,
        timestamp: current_time_millis(),
    });
    info!("After cancel: best bid {:?}", book.depth().best_bid());

    // The sell was fully filled above, so this modify is a silent no-op
    book.process_market_data(MarketDataMessage::ModifyOrder {
        order_id: 5_002,
        side: Side::Sell,
        new_price: 10_004,
        new_quantity: 100,
        timestamp: current_time_millis(),
    });

    // A trade print from the venue, informational only
    book.process_market_data(MarketDataMessage::Trade {
        buy_order_id: 1,
        sell_order_id: 2,
        price: 10_000,
        quantity: 75,
        timestamp: current_time_millis(),
    });
}

fn demo_batch_processing(book: &mut OrderBook) {
    info!("\nProcessing a message batch...");

    let mut batch = Vec::new();
    for i in 0..100u64 {
        let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
        let price = if i % 2 == 0 { 9_997 } else { 10_005 };
        batch.push(MarketDataMessage::NewOrder {
            order_id: 20_000 + i,
            side,
            price,
            quantity: 50,
            order_type: OrderType::GoodTillCancel,
            timestamp: current_time_millis(),
        });
    }

    let batch_len = batch.len();
    let processed = book.process_market_data_batch(batch);
    info!("Batch: {} of {} messages processed", processed, batch_len);
    display_depth(book);
}

fn demo_gap_recovery(book: &mut OrderBook) {
    info!("\nSimulating a feed gap and recovery...");

    // The feed jumped from sequence 1 to 7: the recovery snapshot replaces
    // the whole book and the gap is counted
    let recovery = MarketDataMessage::BookSnapshot {
        bids: vec![level(9_990, 1_000, 5), level(9_989, 800, 4)],
        asks: vec![level(9_991, 900, 4), level(9_992, 700, 3)],
        timestamp: current_time_millis(),
        sequence_number: 7,
    };
    book.process_market_data(recovery);

    info!(
        "Recovered at sequence {}, gaps so far: {}",
        book.last_sequence_number(),
        book.market_data_stats().sequence_gaps
    );
    display_depth(book);

    // A stale snapshot (older sequence) is refused
    let stale = MarketDataMessage::BookSnapshot {
        bids: vec![level(9_000, 100, 1)],
        asks: vec![level(9_001, 100, 1)],
        timestamp: current_time_millis(),
        sequence_number: 3,
    };
    let ok = book.process_market_data(stale);
    info!(
        "Stale snapshot accepted: {}, errors: {}",
        ok,
        book.market_data_stats().errors
    );
}

fn display_depth(book: &OrderBook) {
    let depth = book.depth();
    info!(
        "Depth: best bid {:?}, best ask {:?}, spread {:?}, mid {:?}",
        depth.best_bid(),
        depth.best_ask(),
        depth.spread(),
        depth.mid_price()
    );
}

fn display_stats(stats: &MarketDataStats) {
    info!("\n=== Market Data Processing Statistics ===");
    info!("Total messages processed: {}", stats.messages_processed);
    info!("  - New orders: {}", stats.new_orders);
    info!("  - Cancellations: {}", stats.cancellations);
    info!("  - Modifications: {}", stats.modifications);
    info!("  - Trades: {}", stats.trades);
    info!("  - Snapshots: {}", stats.snapshots);
    info!("  - Errors: {}", stats.errors);
    info!("  - Sequence gaps: {}", stats.sequence_gaps);
    info!(
        "Latency: avg {:.3} us, min {:?}, max {:?}",
        stats.average_latency_micros(),
        stats.min_latency,
        stats.max_latency
    );
}
