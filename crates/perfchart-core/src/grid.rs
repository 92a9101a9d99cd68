// File: crates/perfchart-core/src/grid.rs
// Summary: Linear tick layout helpers.

/// Step of the form 1, 2 or 5 x 10^k closest above `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() { return 1.0; }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 { 1.0 } else if frac <= 2.0 { 2.0 } else if frac <= 5.0 { 5.0 } else { 10.0 };
    nice * base
}

/// Roughly `target` evenly spaced ticks on 1/2/5 steps inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() { return Vec::new(); }
    if (hi - lo).abs() < 1e-12 { return vec![lo]; }
    let step = nice_step((hi - lo) / target.max(1) as f64);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|i| i as f64 * step)
        // snap -0.0 and float dust so labels stay clean
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Format a linear tick using as many decimals as its step needs.
pub fn format_linear(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 { 0 } else { (-step.log10().floor()) as usize };
    format!("{value:.decimals$}")
}

/// `(min, max)` of finite values, widened by `pad` of the span on each side.
/// Returns `None` when there is no finite value.
pub fn padded_range(values: impl IntoIterator<Item = f64>, pad: f64) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() { return None; }
    let span = if (hi - lo).abs() < 1e-12 { lo.abs().max(1.0) } else { hi - lo };
    Some((lo - span * pad, hi + span * pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_land_on_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(170.0, 495.0, 6), vec![200.0, 300.0, 400.0]);
    }

    #[test]
    fn linear_labels_match_step_precision() {
        assert_eq!(format_linear(400.0, 100.0), "400");
        assert_eq!(format_linear(0.25, 0.05), "0.25");
    }

    #[test]
    fn padded_range_ignores_non_finite() {
        let (lo, hi) = padded_range([f64::NAN, 10.0, 20.0], 0.1).unwrap();
        assert!((lo - 9.0).abs() < 1e-9);
        assert!((hi - 21.0).abs() < 1e-9);
        assert!(padded_range([f64::INFINITY], 0.1).is_none());
    }
}
