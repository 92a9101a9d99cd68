// File: crates/perfchart-core/src/stats.rs
// Summary: Box-plot statistics (quartiles, 1.5 IQR whiskers, fliers).

/// Whisker reach as a multiple of the inter-quartile range.
pub const WHISKER_IQR: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Most extreme samples still within `WHISKER_IQR * IQR` of the box.
    pub whisker_lo: f64,
    pub whisker_hi: f64,
    /// Samples beyond the whiskers, ascending.
    pub fliers: Vec<f64>,
    pub count: usize,
}

impl BoxStats {
    /// Summarise the finite values of `samples`; `None` when there are none.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - WHISKER_IQR * iqr;
        let hi_fence = q3 + WHISKER_IQR * iqr;

        // the box edges are interpolated, so clamp whiskers back onto them
        let whisker_lo = sorted.iter().copied().find(|&v| v >= lo_fence).unwrap_or(q1).min(q1);
        let whisker_hi = sorted.iter().rev().copied().find(|&v| v <= hi_fence).unwrap_or(q3).max(q3);
        let fliers = sorted.iter().copied().filter(|&v| v < whisker_lo || v > whisker_hi).collect();

        Some(Self { q1, median, q3, whisker_lo, whisker_hi, fliers, count: sorted.len() })
    }

    /// Smallest and largest values drawn for this box (fliers included).
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.fliers.first().copied().unwrap_or(self.whisker_lo).min(self.whisker_lo);
        let hi = self.fliers.last().copied().unwrap_or(self.whisker_hi).max(self.whisker_hi);
        (lo, hi)
    }
}

/// Linear-interpolated percentile of an ascending slice; `q` in `[0, 1]`.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}
