use criterion::Criterion;
use matchbook_rs::{Order, OrderBook, OrderModify, OrderType, Side};
use std::hint::black_box;

/// Register benchmarks simulating mixed high-frequency flow
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    group.bench_function("hft_simulation", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            let mut state = 0x853C_49E6_748F_EA9Bu64;
            let mut rand = || {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state
            };

            let mut active: Vec<u64> = Vec::new();
            let mut next_id = 0u64;

            for _ in 0..1_000 {
                let action = if active.is_empty() { 0 } else { rand() % 3 };
                match action {
                    0 => {
                        next_id += 1;
                        let side = if rand() % 2 == 0 { Side::Buy } else { Side::Sell };
                        let price = 99 + (rand() % 3) as i32;
                        let quantity = 1 + (rand() % 10) as u32;
                        let order =
                            Order::new(OrderType::GoodTillCancel, next_id, side, price, quantity);
                        let _ = black_box(book.add_order(order));
                        if book.get_order(next_id).is_some() {
                            active.push(next_id);
                        }
                    }
                    1 => {
                        let index = (rand() as usize) % active.len();
                        let id = active.swap_remove(index);
                        book.cancel_order(black_box(id));
                    }
                    _ => {
                        let index = (rand() as usize) % active.len();
                        let id = active[index];
                        let price = 99 + (rand() % 3) as i32;
                        let quantity = 1 + (rand() % 10) as u32;
                        let _ = black_box(
                            book.modify_order(OrderModify::new(id, Side::Buy, price, quantity)),
                        );
                        if book.get_order(id).is_none() {
                            active.swap_remove(index);
                        }
                    }
                }
            }
        })
    });

    group.finish();
}
