use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{Order, OrderBook, OrderType, Side};
use std::hint::black_box;

/// Register all benchmarks for adding and cancelling orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Benchmark adding passive limit orders across price levels
    group.bench_function("add_limit_orders", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for i in 0..100u64 {
                let order = Order::new(
                    OrderType::GoodTillCancel,
                    i,
                    Side::Buy,
                    1_000 + i as i32,
                    10,
                );
                let _ = black_box(book.add_order(order));
            }
        })
    });

    // Benchmark add followed by cancel
    group.bench_function("add_and_cancel_orders", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for i in 0..100u64 {
                let order = Order::new(OrderType::GoodTillCancel, i, Side::Buy, 1_000, 10);
                let _ = book.add_order(order);
            }
            for i in 0..100u64 {
                book.cancel_order(black_box(i));
            }
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut book = OrderBook::new("BENCH");
                    for i in 0..order_count {
                        let order =
                            Order::new(OrderType::GoodTillCancel, i, Side::Buy, 1_000, 10);
                        let _ = black_box(book.add_order(order));
                    }
                })
            },
        );
    }

    group.finish();
}
