// File: crates/perfchart-core/src/theme.rs
// Summary: Light/Dark theming for report rendering colors, plus the viridis colormap.

use skia_safe as skia;

use crate::geometry::clamp;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub box_fill: skia::Color,
    pub whisker: skia::Color,
    pub median: skia::Color,
    pub marker_edge: skia::Color,
    /// Line colors in series order (blue, magenta, cyan, red, yellow, black).
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            box_fill: skia::Color::from_argb(179, 173, 216, 230), // lightblue, alpha 0.7
            whisker: skia::Color::from_argb(255, 128, 128, 128),
            median: skia::Color::from_argb(255, 255, 0, 0),
            marker_edge: skia::Color::from_argb(255, 0, 0, 0),
            palette: [
                skia::Color::from_argb(255, 0, 0, 255),
                skia::Color::from_argb(255, 191, 0, 191),
                skia::Color::from_argb(255, 0, 191, 191),
                skia::Color::from_argb(255, 255, 0, 0),
                skia::Color::from_argb(255, 191, 191, 0),
                skia::Color::from_argb(255, 0, 0, 0),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(220, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
            box_fill: skia::Color::from_argb(179, 64, 110, 160),
            whisker: skia::Color::from_argb(255, 150, 150, 160),
            median: skia::Color::from_argb(255, 255, 90, 90),
            marker_edge: skia::Color::from_argb(255, 235, 235, 245),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 230, 90, 230),
                skia::Color::from_argb(255, 60, 220, 220),
                skia::Color::from_argb(255, 255, 90, 90),
                skia::Color::from_argb(255, 230, 220, 60),
                skia::Color::from_argb(255, 200, 200, 210),
            ],
        }
    }

    /// Palette color for series `i`, wrapping around.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

// Viridis sampled at nine evenly spaced stops.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Viridis color at `t` in `[0, 1]` (clamped), linearly interpolated between stops.
pub fn viridis(t: f64) -> skia::Color {
    let t = clamp(if t.is_finite() { t } else { 0.0 }, 0.0, 1.0);
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let f = pos - i as f64;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    let lerp = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * f).round() as u8 };
    skia::Color::from_argb(255, lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Same color with alpha scaled by `alpha` in `[0, 1]`.
pub fn with_alpha(c: skia::Color, alpha: f32) -> skia::Color {
    let a = (c.a() as f32 * clamp(alpha, 0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), skia::Color::from_argb(255, 68, 1, 84));
        assert_eq!(viridis(1.0), skia::Color::from_argb(255, 253, 231, 37));
        assert_eq!(viridis(-3.0), viridis(0.0));
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("neon").name, "light");
    }

    #[test]
    fn alpha_scales_existing_alpha() {
        let c = with_alpha(skia::Color::from_argb(200, 1, 2, 3), 0.5);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (100, 1, 2, 3));
    }
}
