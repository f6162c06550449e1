use criterion::Criterion;
use matchbook_rs::{Order, OrderBook, OrderType, Side};
use std::hint::black_box;

/// Register all benchmarks for the matching path
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // Benchmark matching sells against a pre-filled bid side
    group.bench_function("match_against_deep_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for i in 0..100u64 {
                let _ = book.add_order(Order::new(
                    OrderType::GoodTillCancel,
                    i,
                    Side::Buy,
                    1_000,
                    10,
                ));
            }
            for i in 100..200u64 {
                let order = Order::new(OrderType::GoodTillCancel, i, Side::Sell, 1_000, 10);
                let _ = black_box(book.add_order(order));
            }
        })
    });

    // Benchmark a market order sweeping several levels
    group.bench_function("market_order_sweep", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for i in 0..50u64 {
                let _ = book.add_order(Order::new(
                    OrderType::GoodTillCancel,
                    i,
                    Side::Sell,
                    1_000 + (i % 10) as i32,
                    10,
                ));
            }
            let _ = black_box(book.add_order(Order::new_market(999, Side::Buy, 500)));
        })
    });

    // Benchmark the non-mutating fill-or-kill preflight on a reject
    group.bench_function("fill_or_kill_reject", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for i in 0..50u64 {
                let _ = book.add_order(Order::new(
                    OrderType::GoodTillCancel,
                    i,
                    Side::Sell,
                    1_000 + (i % 10) as i32,
                    10,
                ));
            }
            let fok = Order::new(OrderType::FillOrKill, 999, Side::Buy, 1_009, 10_000);
            let _ = black_box(book.add_order(fok));
        })
    });

    // Benchmark the aggregated depth view
    group.bench_function("depth_snapshot", |b| {
        let mut book = OrderBook::new("BENCH");
        for i in 0..1_000u64 {
            let _ = book.add_order(Order::new(
                OrderType::GoodTillCancel,
                i,
                Side::Buy,
                900 + (i % 100) as i32,
                10,
            ));
        }
        b.iter(|| {
            let _ = black_box(book.depth());
        })
    });

    group.finish();
}
