// File: crates/perfchart/src/cli.rs
// Summary: Command-line flags and their conversion into a report configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::warn;
use perfchart_core::theme::{self, Theme};
use perfchart_core::types::{HEIGHT, WIDTH};
use perfchart_core::{Color, Marker, RenderOptions, DEFAULT_MARGIN_FACTOR};

use crate::data::PayloadSummary;

#[derive(Debug, Parser, Clone)]
#[command(name = "perfchart", version, about = "Generate latency/throughput charts")]
pub struct Cli {
    /// Base name used for CSV input, PNG output, and chart titles
    #[arg(default_value = "performance_summary")]
    pub report_name: String,

    /// Directory holding `<report>_sum.csv` and `<report>_<size>.csv`; the PNG is written here too
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Render the embedded sample dataset instead of reading CSVs
    #[arg(long)]
    pub sample: bool,

    /// Figure width in pixels
    #[arg(long, default_value_t = WIDTH)]
    pub width: i32,

    /// Figure height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    pub height: i32,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Decades of padding around the distribution plot's data
    #[arg(long, default_value_t = DEFAULT_MARGIN_FACTOR)]
    pub margin_factor: f64,

    /// Skip all text (titles, ticks, legends)
    #[arg(long)]
    pub no_labels: bool,

    /// Latency statistics drawn on the latency-vs-size plot
    #[arg(long, value_enum, value_delimiter = ',')]
    pub lines: Vec<LatencyStat>,

    /// Unit for latency tick labels and axis titles [default: us, or ms with --sample]
    #[arg(long, value_enum)]
    pub latency_unit: Option<LatencyUnit>,
}

/// Display unit for latency axes; data is always held in microseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LatencyUnit {
    Us,
    Ms,
}

impl LatencyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LatencyUnit::Us => "us",
            LatencyUnit::Ms => "ms",
        }
    }

    /// Microseconds per display unit.
    pub fn scale(self) -> f64 {
        match self {
            LatencyUnit::Us => 1.0,
            LatencyUnit::Ms => 1_000.0,
        }
    }

    /// `"<name> (<unit>)"`
    pub fn axis_title(self, name: &str) -> String {
        format!("{name} ({})", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LatencyStat {
    Avg,
    P50,
    P90,
    P99,
    #[value(name = "p999")]
    P999,
    Min,
    Max,
}

impl LatencyStat {
    /// Every statistic the sample dataset carries.
    pub const ALL: [LatencyStat; 6] =
        [LatencyStat::Avg, LatencyStat::P50, LatencyStat::P90, LatencyStat::P99, LatencyStat::Min, LatencyStat::Max];
    /// Lines drawn for CSV reports unless `--lines` says otherwise.
    pub const CSV_DEFAULT: [LatencyStat; 3] = [LatencyStat::P50, LatencyStat::P90, LatencyStat::Min];

    pub fn label(self) -> &'static str {
        match self {
            LatencyStat::Avg => "avg lat",
            LatencyStat::P50 => "P50 lat",
            LatencyStat::P90 => "P90 lat",
            LatencyStat::P99 => "P99 lat",
            LatencyStat::P999 => "P99.9 lat",
            LatencyStat::Min => "min lat",
            LatencyStat::Max => "max lat",
        }
    }

    pub fn marker(self) -> Marker {
        match self {
            LatencyStat::Avg => Marker::Circle,
            LatencyStat::P50 => Marker::Star,
            LatencyStat::P90 => Marker::Pentagon,
            LatencyStat::P99 => Marker::TriangleUp,
            LatencyStat::P999 => Marker::Diamond,
            LatencyStat::Min => Marker::TriangleLeft,
            LatencyStat::Max => Marker::TriangleRight,
        }
    }

    pub fn color(self) -> Color {
        match self {
            LatencyStat::Avg => Color::from_rgb(0, 0, 255),
            LatencyStat::P50 => Color::from_rgb(191, 0, 191),
            LatencyStat::P90 => Color::from_rgb(0, 191, 191),
            LatencyStat::P99 => Color::from_rgb(255, 0, 0),
            LatencyStat::P999 => Color::from_rgb(255, 165, 0),
            LatencyStat::Min => Color::from_rgb(191, 191, 0),
            LatencyStat::Max => Color::from_rgb(0, 0, 0),
        }
    }

    /// Extremes are drawn translucent so percentiles stay readable.
    pub fn alpha(self) -> f32 {
        match self {
            LatencyStat::Min | LatencyStat::Max => 0.6,
            _ => 1.0,
        }
    }

    /// Value in microseconds; NaN when the summary lacks the column.
    pub fn value(self, row: &PayloadSummary) -> f64 {
        match self {
            LatencyStat::Avg => row.avg_us,
            LatencyStat::P50 => row.p50_us,
            LatencyStat::P90 => row.p90_us,
            LatencyStat::P99 => row.p99_us,
            LatencyStat::P999 => row.p999_us.unwrap_or(f64::NAN),
            LatencyStat::Min => row.min_us,
            LatencyStat::Max => row.max_us,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Csv,
    Sample,
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub report_name: String,
    pub output_dir: PathBuf,
    pub source: DataSource,
    pub margin_factor: f64,
    pub lines: Vec<LatencyStat>,
    pub latency_unit: LatencyUnit,
    pub render: RenderOptions,
}

impl ReportConfig {
    /// `<output_dir>/<report_name>.png`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.report_name))
    }
}

impl Cli {
    pub fn into_config(self) -> ReportConfig {
        let source = if self.sample { DataSource::Sample } else { DataSource::Csv };
        let lines = match (self.lines.is_empty(), source) {
            (false, _) => self.lines,
            (true, DataSource::Csv) => LatencyStat::CSV_DEFAULT.to_vec(),
            (true, DataSource::Sample) => LatencyStat::ALL.to_vec(),
        };
        let latency_unit = self.latency_unit.unwrap_or(match source {
            DataSource::Csv => LatencyUnit::Us,
            DataSource::Sample => LatencyUnit::Ms,
        });
        ReportConfig {
            report_name: self.report_name,
            output_dir: self.output_dir,
            source,
            margin_factor: self.margin_factor,
            lines,
            latency_unit,
            render: RenderOptions {
                width: self.width,
                height: self.height,
                theme: resolve_theme(&self.theme),
                draw_labels: !self.no_labels,
                ..RenderOptions::default()
            },
        }
    }
}

fn resolve_theme(name: &str) -> Theme {
    let found = theme::find(name);
    if !found.name.eq_ignore_ascii_case(name) {
        warn!("unknown theme '{}', using {}", name, found.name);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_csv_report() {
        let cfg = Cli::parse_from(["perfchart"]).into_config();
        assert_eq!(cfg.report_name, "performance_summary");
        assert_eq!(cfg.source, DataSource::Csv);
        assert_eq!(cfg.lines, LatencyStat::CSV_DEFAULT.to_vec());
        assert_eq!(cfg.latency_unit, LatencyUnit::Us);
        assert_eq!(cfg.output_path(), PathBuf::from("output/performance_summary.png"));
        assert_eq!((cfg.render.width, cfg.render.height), (WIDTH, HEIGHT));
        assert!(cfg.render.draw_labels);
    }

    #[test]
    fn sample_mode_draws_every_statistic() {
        let cfg = Cli::parse_from(["perfchart", "wsl", "--sample", "--no-labels"]).into_config();
        assert_eq!(cfg.source, DataSource::Sample);
        assert_eq!(cfg.lines, LatencyStat::ALL.to_vec());
        assert_eq!(cfg.latency_unit, LatencyUnit::Ms);
        let cfg = Cli::parse_from(["perfchart", "--sample", "--latency-unit", "us"]).into_config();
        assert_eq!(cfg.latency_unit, LatencyUnit::Us);
        assert!(!cfg.render.draw_labels);
    }

    #[test]
    fn explicit_lines_and_theme() {
        let cfg = Cli::parse_from(["perfchart", "--lines", "p99,max", "--theme", "dark", "--margin-factor", "0.5"])
            .into_config();
        assert_eq!(cfg.lines, vec![LatencyStat::P99, LatencyStat::Max]);
        let cfg = Cli::parse_from(["perfchart", "--lines", "p999"]).into_config();
        assert_eq!(cfg.lines, vec![LatencyStat::P999]);
        assert_eq!(cfg.render.theme.name, "dark");
        assert_eq!(cfg.margin_factor, 0.5);
    }
}
