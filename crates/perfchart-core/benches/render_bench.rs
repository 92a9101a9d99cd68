// File: crates/perfchart-core/benches/render_bench.rs
// Summary: Criterion benchmark for rendering box-plot figures to PNG bytes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perfchart_core::{compute_range_and_ticks, Axis, BoxSeries, Figure, Plot, RenderOptions};

fn build_figure(groups: usize, per_group: usize) -> Figure {
    let samples: Vec<Vec<f64>> = (0..groups)
        .map(|g| (0..per_group).map(|i| 1.0 + ((i * 7919 + g * 31) % 1000) as f64 * (g + 1) as f64).collect())
        .collect();
    let y = Axis::from_log_axis("us", compute_range_and_ticks(&samples, 0.1));
    let mut plot = Plot::new("dist", Axis::new("group", -0.5, groups as f64 - 0.5), y);
    plot.add_series(BoxSeries::from_samples(&samples));
    let mut fig = Figure::new(1, 1);
    fig.add_plot(plot);
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("boxes_8x{n}"), |b| {
            let fig = build_figure(8, n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> perfchart_core::Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
