// File: crates/perfchart-core/src/lib.rs
// Summary: Core library entry point; exports the log-axis range selector and the report figure renderer.

pub mod axis;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod log_range;
pub mod marker;
pub mod plot;
pub mod scale;
pub mod series;
pub mod stats;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, ScaleKind, Tick};
pub use error::{ChartError, Result};
pub use figure::{Figure, RenderOptions};
pub use log_range::{compute_range_and_ticks, format_tick_label, AxisRange, LogAxis, RangeSource, DEFAULT_MARGIN_FACTOR};
pub use marker::Marker;
pub use plot::{Colorbar, GridLines, Plot};
pub use series::{BoxSeries, LineSeries, ScatterSeries, Series};
pub use stats::BoxStats;
pub use skia_safe::Color;
pub use theme::Theme;
