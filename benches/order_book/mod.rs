mod add_orders;
mod match_orders;
mod mixed_operations;

use criterion::Criterion;

/// Register all order book benchmarks
pub fn register_benchmarks(c: &mut Criterion) {
    add_orders::register_benchmarks(c);
    match_orders::register_benchmarks(c);
    mixed_operations::register_benchmarks(c);
}
