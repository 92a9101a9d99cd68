// File: crates/perfchart/src/report.rs
// Summary: Composes the 2x2 latency/throughput report figure from a dataset and renders it to disk.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use perfchart_core::grid::{format_linear, nice_ticks, padded_range};
use perfchart_core::{
    compute_range_and_ticks, format_tick_label, Axis, BoxSeries, Colorbar, Figure, GridLines, LineSeries, Marker,
    Plot, ScatterSeries,
};

use crate::cli::{LatencyUnit, ReportConfig};
use crate::data::{Dataset, PayloadSummary};

const SIZE_LABEL: &str = "size (bytes)";
const THROUGHPUT_LABEL: &str = "throughput (req/s)";
const TICK_ROTATION: f32 = 45.0;
// quarter octave either side of the outermost payload sizes
const LOG2_PAD: f64 = 1.189_207_115_002_721;
const LINEAR_PAD: f64 = 0.08;
const LINEAR_TICKS: usize = 6;
/// Scatter marker area per payload byte (px^2).
const SCATTER_AREA_PER_BYTE: f32 = 0.1;

pub fn build_figure(data: &Dataset, cfg: &ReportConfig) -> Figure {
    let context = format!("[{}]", cfg.report_name);
    let mut fig = Figure::new(2, 2);
    fig.add_plot(latency_plot(data, cfg, &context));
    fig.add_plot(throughput_plot(data, &context));
    fig.add_plot(distribution_plot(data, cfg, &context));
    fig.add_plot(tradeoff_plot(data, cfg.latency_unit, &context));
    fig
}

/// Build, render and write `<output_dir>/<report_name>.png`.
pub fn render_report(data: &Dataset, cfg: &ReportConfig) -> Result<PathBuf> {
    let path = cfg.output_path();
    build_figure(data, cfg)
        .render_to_png(&cfg.render, &path)
        .with_context(|| format!("rendering {}", path.display()))?;
    info!("saved {}", path.display());
    Ok(path)
}

/// Log2 payload axis with one tick per payload size.
fn size_axis(rows: &[PayloadSummary]) -> Axis {
    let sizes: Vec<f64> = rows.iter().map(|r| r.size as f64).collect();
    let labels: Vec<String> = rows.iter().map(|r| r.size.to_string()).collect();
    let lo = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if lo.is_finite() && lo > 0.0 { (lo / LOG2_PAD, hi * LOG2_PAD) } else { (1.0, 2.0) };
    Axis::log2(SIZE_LABEL, lo, hi).with_ticks(sizes, labels).with_rotation(TICK_ROTATION)
}

/// Padded non-negative span around `[lo, hi]`.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let (lo, hi) = padded_range([lo, hi], LINEAR_PAD).unwrap_or((0.0, 1.0));
    (lo.max(0.0), hi)
}

fn linear_axis(label: &str, (lo, hi): (f64, f64)) -> Axis {
    let (lo, hi) = padded(lo, hi);
    Axis::new(label, lo, hi)
}

/// Linear latency axis over microsecond data with ticks chosen and labelled in `unit`.
fn latency_axis(name: &str, unit: LatencyUnit, (lo, hi): (f64, f64)) -> Axis {
    let (lo, hi) = padded(lo, hi);
    let scale = unit.scale();
    let shown = nice_ticks(lo / scale, hi / scale, LINEAR_TICKS);
    let step = if shown.len() > 1 { shown[1] - shown[0] } else { 1.0 };
    let labels: Vec<String> = shown.iter().map(|&t| format_linear(t, step)).collect();
    Axis::new(unit.axis_title(name), lo, hi).with_ticks(shown.iter().map(|t| t * scale).collect(), labels)
}

fn latency_plot(data: &Dataset, cfg: &ReportConfig, context: &str) -> Plot {
    let unit = cfg.latency_unit;
    let mut plot = Plot::new(format!("{context} latency vs size"), size_axis(&data.rows), Axis::new("", 0.0, 1.0));
    plot.legend = true;
    for &stat in &cfg.lines {
        plot.add_series(
            LineSeries::new(data.by_size(|r| stat.value(r)).into_iter().filter(|(_, y)| y.is_finite()).collect())
                .label(stat.label())
                .color(stat.color())
                .marker(stat.marker())
                .alpha(stat.alpha()),
        );
    }
    let y = plot.data_bounds().map_or((0.0, 1.0), |b| (b.2, b.3));
    plot.y_axis = latency_axis("latency", unit, y);
    plot
}

fn throughput_plot(data: &Dataset, context: &str) -> Plot {
    let mut plot = Plot::new(format!("{context} throughput vs size"), size_axis(&data.rows), Axis::new("", 0.0, 1.0));
    plot.add_series(
        LineSeries::new(data.by_size(|r| r.throughput_rps))
            .color(perfchart_core::Color::from_rgb(191, 0, 191))
            .marker(Marker::Diamond),
    );
    let y = plot.data_bounds().map_or((0.0, 1.0), |b| (b.2, b.3));
    plot.y_axis = linear_axis(THROUGHPUT_LABEL, y);
    plot
}

/// Box plots at positions `0..n`, y range and ticks from the log range selector.
fn distribution_plot(data: &Dataset, cfg: &ReportConfig, context: &str) -> Plot {
    let n = data.rows.len();
    let x = Axis::new(SIZE_LABEL, -0.5, n as f64 - 0.5)
        .with_ticks((0..n).map(|i| i as f64).collect(), data.rows.iter().map(|r| r.size.to_string()).collect::<Vec<_>>())
        .with_rotation(TICK_ROTATION);
    let mut layout = compute_range_and_ticks(&data.distributions, cfg.margin_factor);
    if layout.is_fallback() {
        warn!("no usable latency samples; distribution plot uses default range");
    }
    let unit = cfg.latency_unit;
    if unit != LatencyUnit::Us {
        layout.labels = layout.ticks.iter().map(|&t| format_tick_label(t / unit.scale())).collect();
    }
    let y = Axis::from_log_axis(unit.axis_title("latency"), layout);
    let mut plot = Plot::new(format!("{context} latency distribution"), x, y);
    plot.grid = GridLines::YOnly;
    plot.add_series(BoxSeries::from_samples(&data.distributions));
    plot
}

fn tradeoff_plot(data: &Dataset, unit: LatencyUnit, context: &str) -> Plot {
    let mut scatter = ScatterSeries::new(data.rows.iter().map(|r| (r.throughput_rps, r.p90_us)).collect());
    scatter.areas = data.rows.iter().map(|r| r.size as f32 * SCATTER_AREA_PER_BYTE).collect();
    scatter.values = data.sizes();
    scatter.annotations = data.rows.iter().map(|r| format!("{}B", r.size)).collect();

    let mut plot = Plot::new(format!("{context} p90 latency - throughput"), Axis::new("", 0.0, 1.0), Axis::new("", 0.0, 1.0));
    if let Some((min, max)) = scatter.value_range() {
        plot.colorbar = Some(Colorbar { label: SIZE_LABEL.to_string(), min, max });
    }
    plot.add_series(scatter);
    let (x0, x1, y0, y1) = plot.data_bounds().unwrap_or((0.0, 1.0, 0.0, 1.0));
    plot.x_axis = linear_axis(THROUGHPUT_LABEL, (x0, x1));
    plot.y_axis = latency_axis("p90 latency", unit, (y0, y1));
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::sample::sample_dataset;
    use clap::Parser;
    use perfchart_core::{ScaleKind, Series};

    fn sample_config() -> ReportConfig {
        Cli::parse_from(["perfchart", "wsl", "--sample"]).into_config()
    }

    #[test]
    fn figure_has_four_titled_plots() {
        let fig = build_figure(&sample_dataset(), &sample_config());
        assert_eq!((fig.rows, fig.cols), (2, 2));
        let titles: Vec<_> = fig.plots.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "[wsl] latency vs size",
                "[wsl] throughput vs size",
                "[wsl] latency distribution",
                "[wsl] p90 latency - throughput"
            ]
        );
    }

    #[test]
    fn latency_plot_draws_each_selected_statistic() {
        let fig = build_figure(&sample_dataset(), &sample_config());
        let latency = &fig.plots[0];
        assert_eq!(latency.series.len(), 6);
        assert_eq!(latency.x_axis.kind, ScaleKind::Log2);
        let ticks = latency.x_axis.resolved_ticks();
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("64"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("8192"));
        assert_eq!(ticks.len(), 8);
    }

    #[test]
    fn distribution_axis_comes_from_log_range() {
        let data = sample_dataset();
        let cfg = sample_config();
        let fig = build_figure(&data, &cfg);
        let dist = &fig.plots[2];
        let layout = compute_range_and_ticks(&data.distributions, cfg.margin_factor);
        assert_eq!(dist.y_axis.kind, ScaleKind::Log10);
        assert_eq!((dist.y_axis.min, dist.y_axis.max), (layout.range.min, layout.range.max));
        assert_eq!(dist.grid, GridLines::YOnly);
        match &dist.series[0] {
            Series::Boxes(b) => assert_eq!(b.positions, (0..8).map(|i| i as f64).collect::<Vec<_>>()),
            other => panic!("expected box series, got {other:?}"),
        }
    }

    #[test]
    fn tradeoff_scatter_scales_with_payload() {
        let fig = build_figure(&sample_dataset(), &sample_config());
        let tradeoff = &fig.plots[3];
        let cb = tradeoff.colorbar.as_ref().expect("colorbar");
        assert_eq!((cb.min, cb.max), (64.0, 8192.0));
        match &tradeoff.series[0] {
            Series::Scatter(s) => {
                assert_eq!(s.annotations[0], "64B");
                assert!((s.areas[7] - 819.2).abs() < 1e-3);
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    fn labels(axis: &Axis) -> Vec<String> {
        axis.resolved_ticks().into_iter().map(|t| t.label).collect()
    }

    #[test]
    fn sample_latency_axes_read_in_milliseconds() {
        let data = sample_dataset();
        let cfg = sample_config();
        let fig = build_figure(&data, &cfg);

        let latency = &fig.plots[0].y_axis;
        assert_eq!(latency.label, "latency (ms)");
        assert_eq!(labels(latency), vec!["0", "20", "40", "60", "80"]);
        assert_eq!(latency.resolved_ticks()[1].value, 20_000.0);

        let dist = &fig.plots[2].y_axis;
        assert_eq!(dist.label, "latency (ms)");
        let layout = compute_range_and_ticks(&data.distributions, cfg.margin_factor);
        let expected: Vec<String> = layout.ticks.iter().map(|&t| format_tick_label(t / 1000.0)).collect();
        assert_eq!(labels(dist), expected);

        let tradeoff = &fig.plots[3].y_axis;
        assert_eq!(tradeoff.label, "p90 latency (ms)");
        assert_eq!(labels(tradeoff), vec!["5", "10", "15"]);
    }

    #[test]
    fn latency_unit_flag_overrides_sample_default() {
        let cfg = Cli::parse_from(["perfchart", "wsl", "--sample", "--latency-unit", "us"]).into_config();
        let fig = build_figure(&sample_dataset(), &cfg);
        let latency = &fig.plots[0].y_axis;
        assert_eq!(latency.label, "latency (us)");
        assert_eq!(labels(latency), vec!["0", "20000", "40000", "60000", "80000"]);
        assert_eq!(fig.plots[3].y_axis.label, "p90 latency (us)");
    }

    #[test]
    fn linear_ranges_cover_plotted_data() {
        let data = sample_dataset();
        let fig = build_figure(&data, &sample_config());
        for plot in [&fig.plots[0], &fig.plots[1], &fig.plots[3]] {
            let (x0, x1, y0, y1) = plot.data_bounds().expect("series data");
            assert!(plot.y_axis.min <= y0 && y1 < plot.y_axis.max, "{}", plot.title);
            if plot.x_axis.kind == ScaleKind::Linear {
                assert!(plot.x_axis.min < x0 && x1 < plot.x_axis.max, "{}", plot.title);
            }
        }
    }
}
