// File: crates/perfchart-core/src/log_range.rs
// Summary: Automatic log10 axis range and 1-2-5 tick selection for latency samples.

use log::debug;

/// Fractional decade of padding added on each side of the observed data.
pub const DEFAULT_MARGIN_FACTOR: f64 = 0.1;
/// Lowest value a selected range may start at.
pub const RANGE_FLOOR: f64 = 0.001;
/// Highest value a selected range may end at.
pub const RANGE_CEIL: f64 = 1e9;
/// Range used when no finite positive sample exists.
pub const FALLBACK_RANGE: AxisRange = AxisRange { min: 0.1, max: 1000.0 };

const FALLBACK_TICKS: [f64; 5] = [0.1, 1.0, 10.0, 100.0, 1000.0];
const TICK_MULTIPLES: [f64; 3] = [1.0, 2.0, 5.0];
// decades of RANGE_FLOOR and RANGE_CEIL
const FLOOR_EXP: i32 = -3;
const CEIL_EXP: i32 = 9;

/// Positive `(min, max)` pair for a logarithmic axis.
/// Contract: `min < max`, both within `[RANGE_FLOOR, RANGE_CEIL]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Whether a layout was derived from samples or is the fixed default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeSource {
    Data,
    /// No usable samples (empty input, or nothing finite and positive).
    Fallback,
}

/// Range plus ordered ticks and their labels, ready to configure a log axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LogAxis {
    pub range: AxisRange,
    pub ticks: Vec<f64>,
    pub labels: Vec<String>,
    pub source: RangeSource,
}

impl LogAxis {
    pub fn fallback() -> Self {
        let ticks = FALLBACK_TICKS.to_vec();
        let labels = ticks.iter().map(|&t| format_tick_label(t)).collect();
        Self { range: FALLBACK_RANGE, ticks, labels, source: RangeSource::Fallback }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RangeSource::Fallback
    }

    pub fn into_parts(self) -> (AxisRange, Vec<f64>, Vec<String>) {
        (self.range, self.ticks, self.labels)
    }
}

/// Pick a log10 range that bounds every finite positive value in `samples`,
/// padded by `margin_factor` decades on each side, together with 1/2/5 ticks.
///
/// Never fails: degenerate input yields [`LogAxis::fallback`]. A margin that is
/// negative or not finite is treated as zero.
pub fn compute_range_and_ticks<S: AsRef<[f64]>>(samples: &[S], margin_factor: f64) -> LogAxis {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut usable = 0usize;
    for v in samples
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .filter(|v| v.is_finite() && *v > 0.0)
    {
        y_min = y_min.min(v);
        y_max = y_max.max(v);
        usable += 1;
    }

    if usable == 0 {
        debug!("log range: no finite positive samples, using fallback {:?}", FALLBACK_RANGE);
        return LogAxis::fallback();
    }

    let margin = if margin_factor.is_finite() && margin_factor > 0.0 { margin_factor } else { 0.0 };

    let min_exp = if y_min > 0.0 { y_min.log10().floor() } else { -1.0 } - margin;
    let max_exp = if y_max > 0.0 { y_max.log10().ceil() } else { 2.0 } + margin;

    let range = bounded_range(10f64.powf(min_exp), 10f64.powf(max_exp));

    // Candidates come from the decades of the clamped range, which stay inside
    // the envelope whatever the margin.
    let first = (range.min.log10().floor() as i32).max(FLOOR_EXP);
    let last = (range.max.log10().ceil() as i32).min(CEIL_EXP);

    let ticks: Vec<f64> = (first..=last)
        .flat_map(|exp| {
            let base = decade(exp);
            TICK_MULTIPLES.iter().map(move |m| m * base)
        })
        .filter(|t| range.contains(*t))
        .collect();
    let labels = ticks.iter().map(|&t| format_tick_label(t)).collect();

    debug!(
        "log range: {} samples in [{}, {}] -> [{:.4}, {:.4}] with {} ticks",
        usable,
        y_min,
        y_max,
        range.min,
        range.max,
        ticks.len()
    );

    LogAxis { range, ticks, labels, source: RangeSource::Data }
}

/// `10^exp`, exact for the decades an axis can show.
fn decade(exp: i32) -> f64 {
    if exp >= 0 { 10f64.powi(exp) } else { 1.0 / 10f64.powi(-exp) }
}

/// Clamp both ends into the envelope and reopen a range that collapsed.
fn bounded_range(lo: f64, hi: f64) -> AxisRange {
    let mut min = lo.clamp(RANGE_FLOOR, RANGE_CEIL);
    let mut max = hi.clamp(RANGE_FLOOR, RANGE_CEIL);
    if min >= max {
        if max >= RANGE_CEIL {
            max = RANGE_CEIL;
            min = RANGE_CEIL / 10.0;
        } else {
            max = (min * 10.0).min(RANGE_CEIL);
        }
    }
    AxisRange { min, max }
}

/// Human-readable tick label with magnitude-dependent precision
/// (`0.005`, `0.05`, `0.5`, `5`, `500`, `5K`, `5M`, `5G`).
pub fn format_tick_label(value: f64) -> String {
    if value < 0.01 {
        format!("{value:.3}")
    } else if value < 0.1 {
        format!("{value:.2}")
    } else if value < 1.0 {
        format!("{value:.1}")
    } else if value < 10.0 {
        format!("{value:.0}")
    } else if value < 1_000.0 {
        format!("{}", value as i64)
    } else if value < 1e6 {
        format!("{}K", (value / 1e3) as i64)
    } else if value < 1e9 {
        format!("{}M", (value / 1e6) as i64)
    } else {
        format!("{}G", (value / 1e9) as i64)
    }
}
