// File: crates/perfchart-core/src/series.rs
// Summary: Series model for marker lines, colormapped scatter and box-plot groups.

use skia_safe as skia;

use crate::marker::Marker;
use crate::stats::BoxStats;

#[derive(Clone, Debug)]
pub struct LineSeries {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    /// Palette color when `None`.
    pub color: Option<skia::Color>,
    pub marker: Option<Marker>,
    pub marker_size: f32,
    pub width: f32,
    pub alpha: f32,
}

impl LineSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { label: None, points, color: None, marker: None, marker_size: 10.0, width: 2.0, alpha: 1.0 }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Points whose radius follows `areas` (px^2) and whose fill follows `values`
/// through the viridis colormap.
#[derive(Clone, Debug)]
pub struct ScatterSeries {
    pub points: Vec<(f64, f64)>,
    pub areas: Vec<f32>,
    pub values: Vec<f64>,
    /// Text drawn next to each point; missing entries draw nothing.
    pub annotations: Vec<String>,
    pub alpha: f32,
}

impl ScatterSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, areas: Vec::new(), values: Vec::new(), annotations: Vec::new(), alpha: 0.7 }
    }

    /// `(min, max)` of the color values, if any are finite.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let finite = self.values.iter().copied().filter(|v| v.is_finite());
        let (lo, hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if lo.is_finite() { Some((lo, hi)) } else { None }
    }

    /// Colormap position of value `i` in `[0, 1]`.
    pub fn normalized(&self, i: usize) -> f64 {
        match (self.value_range(), self.values.get(i)) {
            (Some((lo, hi)), Some(&v)) if hi > lo => (v - lo) / (hi - lo),
            _ => 0.5,
        }
    }
}

/// Box plots, one per group, centred at `positions` on the x axis.
#[derive(Clone, Debug)]
pub struct BoxSeries {
    pub groups: Vec<BoxStats>,
    pub positions: Vec<f64>,
    /// Box width in x data units.
    pub width: f64,
}

impl BoxSeries {
    /// Summarise each sample vector; empty vectors leave a gap at their position.
    pub fn from_samples<S: AsRef<[f64]>>(samples: &[S]) -> Self {
        let mut groups = Vec::with_capacity(samples.len());
        let mut positions = Vec::with_capacity(samples.len());
        for (i, s) in samples.iter().enumerate() {
            if let Some(stats) = BoxStats::from_samples(s.as_ref()) {
                groups.push(stats);
                positions.push(i as f64);
            }
        }
        Self { groups, positions, width: 0.6 }
    }
}

#[derive(Clone, Debug)]
pub enum Series {
    Line(LineSeries),
    Scatter(ScatterSeries),
    Boxes(BoxSeries),
}

impl Series {
    /// Data extents `(x_min, x_max, y_min, y_max)`, ignoring non-finite values.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut b = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        let mut add = |x: f64, y: f64| {
            if x.is_finite() && y.is_finite() {
                b = (b.0.min(x), b.1.max(x), b.2.min(y), b.3.max(y));
            }
        };
        match self {
            Series::Line(s) => s.points.iter().for_each(|&(x, y)| add(x, y)),
            Series::Scatter(s) => s.points.iter().for_each(|&(x, y)| add(x, y)),
            Series::Boxes(s) => {
                for (g, &x) in s.groups.iter().zip(&s.positions) {
                    let (lo, hi) = g.extent();
                    add(x, lo);
                    add(x, hi);
                }
            }
        }
        if b.0.is_finite() { Some(b) } else { None }
    }
}

impl From<LineSeries> for Series {
    fn from(s: LineSeries) -> Self { Series::Line(s) }
}

impl From<ScatterSeries> for Series {
    fn from(s: ScatterSeries) -> Self { Series::Scatter(s) }
}

impl From<BoxSeries> for Series {
    fn from(s: BoxSeries) -> Self { Series::Boxes(s) }
}
