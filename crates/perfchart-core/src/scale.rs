// File: crates/perfchart-core/src/scale.rs
// Summary: Value-to-pixel transforms for linear, log10 and log2 axes.

use crate::axis::{Axis, ScaleKind};

/// Smallest value a log scale maps; anything at or below is pinned here.
const LOG_EPS: f64 = 1e-12;

/// Maps a data interval onto a pixel interval. `px_start` receives `vmin`;
/// for a vertical axis pass the bottom edge as `px_start`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub kind: ScaleKind,
    pub px_start: f32,
    pub px_end: f32,
    // endpoints in the transformed domain (log values for log kinds)
    t_min: f64,
    t_max: f64,
}

impl ValueScale {
    pub fn new(kind: ScaleKind, px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let (mut vmin, mut vmax) = (vmin, vmax);
        if kind.is_log() {
            // Ensure strictly positive range for log scale
            vmin = vmin.max(LOG_EPS);
            if vmax <= vmin { vmax = vmin * 10.0; }
        } else if (vmax - vmin).abs() < 1e-12 {
            vmax = vmin + 1.0;
        }
        Self { kind, px_start, px_end, t_min: forward(kind, vmin), t_max: forward(kind, vmax) }
    }

    pub fn for_axis(axis: &Axis, px_start: f32, px_end: f32) -> Self {
        Self::new(axis.kind, px_start, px_end, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.t_max - self.t_min;
        let frac = (forward(self.kind, v) - self.t_min) / span;
        self.px_start + (frac as f32) * (self.px_end - self.px_start)
    }

    /// Pixel length of `[a, b]` on this scale, always non-negative.
    pub fn px_len(&self, a: f64, b: f64) -> f32 {
        (self.to_px(b) - self.to_px(a)).abs()
    }
}

#[inline]
fn forward(kind: ScaleKind, v: f64) -> f64 {
    match kind {
        ScaleKind::Linear => v,
        ScaleKind::Log10 => v.max(LOG_EPS).log10(),
        ScaleKind::Log2 => v.max(LOG_EPS).log2(),
    }
}
