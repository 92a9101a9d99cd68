// File: crates/perfchart-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and optional explicit ticks.

use crate::grid::{format_linear, nice_ticks};
use crate::log_range::{format_tick_label, LogAxis};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
    Log2,
}

impl ScaleKind {
    pub fn is_log(self) -> bool {
        !matches!(self, ScaleKind::Linear)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Explicit ticks; generated from the range when `None`.
    pub ticks: Option<Vec<Tick>>,
    /// Tick label rotation in degrees (counter-clockwise).
    pub tick_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            ticks: None,
            tick_rotation: 0.0,
        }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(label, min, max).with_kind(ScaleKind::Log10)
    }

    pub fn log2(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(label, min, max).with_kind(ScaleKind::Log2)
    }

    /// Log10 axis whose range and ticks come from the range selector.
    pub fn from_log_axis(label: impl Into<String>, layout: LogAxis) -> Self {
        let (range, values, labels) = layout.into_parts();
        Self::log10(label, range.min, range.max).with_ticks(values, labels)
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Pair `values` with `labels`; extra entries on either side are dropped.
    pub fn with_ticks<S: Into<String>>(mut self, values: Vec<f64>, labels: Vec<S>) -> Self {
        let ticks = values
            .into_iter()
            .zip(labels)
            .map(|(value, label)| Tick { value, label: label.into() })
            .collect();
        self.ticks = Some(ticks);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        v >= lo && v <= hi
    }

    /// Ticks to draw: explicit ones inside the range, or generated ones.
    pub fn resolved_ticks(&self) -> Vec<Tick> {
        if let Some(ticks) = &self.ticks {
            return ticks.iter().filter(|t| self.contains(t.value)).cloned().collect();
        }
        match self.kind {
            ScaleKind::Linear => {
                let values = nice_ticks(self.min, self.max, 6);
                let step = if values.len() > 1 { values[1] - values[0] } else { 1.0 };
                values
                    .into_iter()
                    .map(|value| Tick { value, label: format_linear(value, step) })
                    .collect()
            }
            ScaleKind::Log10 => power_ticks(self, 10.0),
            ScaleKind::Log2 => power_ticks(self, 2.0),
        }
    }
}

fn power_ticks(axis: &Axis, base: f64) -> Vec<Tick> {
    let lo = axis.min.min(axis.max);
    let hi = axis.max.max(axis.min);
    if !(lo > 0.0) || !hi.is_finite() {
        return Vec::new();
    }
    let first = lo.log(base).floor() as i32;
    let last = hi.log(base).ceil() as i32;
    (first..=last)
        .map(|e| base.powi(e))
        .filter(|v| axis.contains(*v))
        .map(|value| {
            let label = if base == 10.0 { format_tick_label(value) } else { format!("{}", value as i64) };
            Tick { value, label }
        })
        .collect()
}
