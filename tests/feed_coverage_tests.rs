//! Integration tests for the market-data ingestion path: snapshots,
//! incremental updates, batches and statistics.

use matchbook_rs::{
    current_time_millis, MarketDataMessage, OrderBook, OrderType, Price, Quantity, Side,
    SnapshotLevel,
};

fn level(price: Price, quantity: Quantity, order_count: u32) -> SnapshotLevel {
    SnapshotLevel {
        price,
        quantity,
        order_count,
    }
}

fn opening_snapshot(sequence_number: u64) -> MarketDataMessage {
    MarketDataMessage::BookSnapshot {
        bids: vec![
            level(10_000, 1_500, 8),
            level(9_999, 2_000, 12),
            level(9_998, 1_800, 10),
            level(9_997, 1_200, 6),
            level(9_996, 900, 5),
        ],
        asks: vec![
            level(10_001, 1_400, 7),
            level(10_002, 1_900, 11),
            level(10_003, 1_600, 9),
            level(10_004, 1_100, 7),
            level(10_005, 800, 4),
        ],
        timestamp: current_time_millis(),
        sequence_number,
    }
}

fn new_order(
    order_id: u64,
    side: Side,
    price: Price,
    quantity: Quantity,
) -> MarketDataMessage {
    MarketDataMessage::NewOrder {
        order_id,
        side,
        price,
        quantity,
        order_type: OrderType::GoodTillCancel,
        timestamp: current_time_millis(),
    }
}

#[test]
fn test_snapshot_builds_full_depth() {
    let mut book = OrderBook::new("ACME");

    assert!(book.process_market_data(opening_snapshot(1)));

    let depth = book.depth();
    assert_eq!(depth.bids.len(), 5);
    assert_eq!(depth.asks.len(), 5);
    assert_eq!(depth.best_bid(), Some((10_000, 1_500)));
    assert_eq!(depth.best_ask(), Some((10_001, 1_400)));
    assert_eq!(depth.spread(), Some(1));
    assert_eq!(depth.mid_price(), Some(10_000.5));
    assert_eq!(depth.total_bid_volume(), 7_400);
    assert_eq!(depth.total_ask_volume(), 6_800);
}

#[test]
fn test_incremental_flow_after_snapshot() {
    let mut book = OrderBook::new("ACME");
    book.process_market_data(opening_snapshot(1));

    // Join the best bid
    book.process_market_data(new_order(5001, Side::Buy, 10_000, 250));
    assert_eq!(book.depth().best_bid(), Some((10_000, 1_750)));

    // Cross it partially; the fill consumes the front of the queue, which
    // is the synthetic snapshot order
    book.process_market_data(new_order(5002, Side::Sell, 10_000, 150));
    assert_eq!(book.depth().best_bid(), Some((10_000, 1_600)));

    // Cancel the join; its untouched 250 units disappear
    book.process_market_data(MarketDataMessage::CancelOrder {
        order_id: 5001,
        timestamp: current_time_millis(),
    });
    assert_eq!(book.depth().best_bid(), Some((10_000, 1_350)));

    let stats = book.market_data_stats();
    assert_eq!(stats.messages_processed, 4);
    assert_eq!(stats.new_orders, 2);
    assert_eq!(stats.cancellations, 1);
    assert_eq!(stats.trades, 1);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_batch_equivalent_to_sequential() {
    let mut sequential = OrderBook::new("ACME");
    let mut batched = OrderBook::new("ACME");

    let build_messages = || {
        let mut messages = vec![opening_snapshot(1)];
        for i in 0..50u64 {
            let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
            let price = if i % 2 == 0 { 9_995 } else { 10_006 };
            messages.push(new_order(2_000 + i, side, price, 10 + i as Quantity));
        }
        messages
    };

    for message in build_messages() {
        sequential.process_market_data(message);
    }
    let processed = batched.process_market_data_batch(build_messages());

    assert_eq!(processed, 51);
    assert_eq!(sequential.depth(), batched.depth());
    assert_eq!(sequential.order_count(), batched.order_count());
}

#[test]
fn test_recovery_snapshot_after_gap() {
    let mut book = OrderBook::new("ACME");

    book.process_market_data(opening_snapshot(1));
    book.process_market_data(new_order(5001, Side::Buy, 9_995, 100));
    assert_eq!(book.order_count(), 11);

    // Feed jumped; a recovery snapshot resets the whole state
    book.process_market_data(opening_snapshot(10));

    assert_eq!(book.order_count(), 10);
    assert!(book.get_order(5001).is_none());
    assert_eq!(book.last_sequence_number(), 10);
    assert_eq!(book.market_data_stats().sequence_gaps, 1);
    assert_eq!(book.market_data_stats().snapshots, 2);
}

#[test]
fn test_trading_session_simulation() {
    let mut book = OrderBook::new("ACME");
    book.process_market_data(opening_snapshot(1));

    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut rand = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut next_id = 10_000u64;
    let mut active: Vec<u64> = Vec::new();

    for _ in 0..5_000 {
        let action = if active.is_empty() { 0 } else { rand() % 3 };
        match action {
            0 => {
                next_id += 1;
                let side = if rand() % 2 == 0 { Side::Buy } else { Side::Sell };
                let price = 9_998 + (rand() % 6) as Price;
                let quantity = 10 + (rand() % 490) as Quantity;
                book.process_market_data(new_order(next_id, side, price, quantity));
                active.push(next_id);
            }
            1 => {
                let index = (rand() as usize) % active.len();
                let id = active.swap_remove(index);
                book.process_market_data(MarketDataMessage::CancelOrder {
                    order_id: id,
                    timestamp: current_time_millis(),
                });
            }
            _ => {
                let index = (rand() as usize) % active.len();
                let id = active[index];
                book.process_market_data(MarketDataMessage::ModifyOrder {
                    order_id: id,
                    side: Side::Buy,
                    new_price: 9_998 + (rand() % 4) as Price,
                    new_quantity: 10 + (rand() % 290) as Quantity,
                    timestamp: current_time_millis(),
                });
            }
        }

        // The book may never stay crossed, whatever the feed does
        if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
            assert!(bid < ask);
        }
    }

    let stats = book.market_data_stats();
    assert_eq!(stats.errors, 0);
    assert_eq!(stats.messages_processed, 5_001);
    assert!(stats.max_latency >= stats.min_latency);
}
