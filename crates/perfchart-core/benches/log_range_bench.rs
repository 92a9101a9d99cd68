// File: crates/perfchart-core/benches/log_range_bench.rs
// Summary: Criterion benchmark for log axis range/tick selection over pooled sample arrays.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perfchart_core::{compute_range_and_ticks, DEFAULT_MARGIN_FACTOR};

fn make_samples(arrays: usize, n: usize) -> Vec<Vec<f64>> {
    (0..arrays)
        .map(|a| (0..n).map(|i| 0.5 + ((i * 7919 + a * 104_729) % 100_000) as f64 * 0.37).collect())
        .collect()
}

fn bench_log_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_range_and_ticks");
    for &n in &[1_000usize, 100_000usize] {
        let samples = make_samples(8, n);
        group.bench_function(format!("8x{n}"), |b| {
            b.iter(|| black_box(compute_range_and_ticks(black_box(&samples), DEFAULT_MARGIN_FACTOR)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_log_range);
criterion_main!(benches);
