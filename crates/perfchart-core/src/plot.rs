// File: crates/perfchart-core/src/plot.rs
// Summary: One subplot: axes, grid, series, legend, annotations and colorbar drawn into a cell.

use skia_safe as skia;

use crate::axis::{Axis, Tick};
use crate::figure::RenderOptions;
use crate::geometry::RectI32;
use crate::grid::{format_linear, nice_ticks};
use crate::scale::ValueScale;
use crate::series::{BoxSeries, LineSeries, ScatterSeries, Series};
use crate::text::{Align, TextShaper};
use crate::theme::{viridis, with_alpha, Theme};

const TITLE_SIZE: f32 = 17.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 5.0;
const MIN_SCATTER_RADIUS: f32 = 2.0;
const COLORBAR_WIDTH: i32 = 18;
// horizontal room taken from the plot area for the bar, its ticks and label
const COLORBAR_RESERVE: i32 = 96;
const COLORBAR_STEPS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLines {
    Both,
    YOnly,
    Hidden,
}

/// Vertical viridis scale describing scatter colors.
#[derive(Clone, Debug)]
pub struct Colorbar {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug)]
pub struct Plot {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub legend: bool,
    pub grid: GridLines,
    pub colorbar: Option<Colorbar>,
}

impl Plot {
    pub fn new(title: impl Into<String>, x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            title: title.into(),
            x_axis,
            y_axis,
            series: Vec::new(),
            legend: false,
            grid: GridLines::Both,
            colorbar: None,
        }
    }

    pub fn add_series(&mut self, series: impl Into<Series>) {
        self.series.push(series.into());
    }

    /// Union of every series' data extents `(x_min, x_max, y_min, y_max)`.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
    }

    /// Pixel rect used by the axes once the cell's insets and the colorbar
    /// reservation are taken out.
    pub fn plot_area(&self, cell: RectI32, opts: &RenderOptions) -> RectI32 {
        let mut area = cell.inset(&opts.insets);
        if self.colorbar.is_some() {
            area.right = (area.right - COLORBAR_RESERVE).max(area.left);
        }
        area
    }

    pub fn render(&self, canvas: &skia::Canvas, cell: RectI32, opts: &RenderOptions, text: &TextShaper) {
        let theme = &opts.theme;
        let area = self.plot_area(cell, opts);
        if area.width() <= 0 || area.height() <= 0 {
            return;
        }
        let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
        let sx = ValueScale::for_axis(&self.x_axis, l, r);
        let sy = ValueScale::for_axis(&self.y_axis, b, t);
        let x_ticks = self.x_axis.resolved_ticks();
        let y_ticks = self.y_axis.resolved_ticks();

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(area.to_skia(), &bg);

        draw_grid(canvas, theme, area, &sx, &sy, &x_ticks, &y_ticks, self.grid);

        canvas.save();
        canvas.clip_rect(area.to_skia(), skia::ClipOp::Intersect, true);
        let mut line_index = 0;
        for s in &self.series {
            match s {
                Series::Line(line) => {
                    let color = line.color.unwrap_or_else(|| theme.series_color(line_index));
                    draw_line_series(canvas, &sx, &sy, line, color);
                    line_index += 1;
                }
                Series::Scatter(sc) => draw_scatter_series(canvas, theme, &sx, &sy, sc),
                Series::Boxes(bx) => draw_box_series(canvas, theme, &sx, &sy, bx),
            }
        }
        canvas.restore();

        draw_frame(canvas, theme, area, &sx, &sy, &x_ticks, &y_ticks);

        if let Some(cb) = &self.colorbar {
            draw_colorbar(canvas, theme, area, cb, opts.draw_labels.then_some(text));
        }

        if !opts.draw_labels {
            return;
        }

        self.draw_tick_labels(canvas, theme, text, area, &sx, &sy, &x_ticks, &y_ticks);

        let mid_x = (l + r) * 0.5;
        let mid_y = (t + b) * 0.5;
        text.draw(canvas, &self.x_axis.label, mid_x, cell.bottom as f32 - 14.0, LABEL_SIZE, theme.axis_label, Align::Center);
        text.draw_rotated(canvas, &self.y_axis.label, cell.left as f32 + 24.0, mid_y, LABEL_SIZE, theme.axis_label, Align::Center, 90.0);
        text.draw_styled(canvas, &self.title, mid_x, t - 14.0, TITLE_SIZE, theme.title, Align::Center, true);

        for s in &self.series {
            if let Series::Scatter(sc) = s {
                draw_annotations(canvas, theme, text, &sx, &sy, sc);
            }
        }

        if self.legend {
            self.draw_legend(canvas, theme, text, area);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tick_labels(
        &self,
        canvas: &skia::Canvas,
        theme: &Theme,
        text: &TextShaper,
        area: RectI32,
        sx: &ValueScale,
        sy: &ValueScale,
        x_ticks: &[Tick],
        y_ticks: &[Tick],
    ) {
        let (l, b) = (area.left as f32, area.bottom as f32);
        for tick in x_ticks {
            let x = sx.to_px(tick.value);
            if self.x_axis.tick_rotation.abs() > f32::EPSILON {
                text.draw_rotated(canvas, &tick.label, x + 4.0, b + TICK_LEN + TICK_SIZE, TICK_SIZE, theme.tick, Align::Right, self.x_axis.tick_rotation);
            } else {
                text.draw(canvas, &tick.label, x, b + TICK_LEN + 4.0 + TICK_SIZE, TICK_SIZE, theme.tick, Align::Center);
            }
        }
        for tick in y_ticks {
            let y = sy.to_px(tick.value);
            text.draw(canvas, &tick.label, l - TICK_LEN - 4.0, y + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Align::Right);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, theme: &Theme, text: &TextShaper, area: RectI32) {
        let entries: Vec<(usize, &LineSeries)> = self
            .series
            .iter()
            .filter_map(|s| match s { Series::Line(line) => Some(line), _ => None })
            .enumerate()
            .filter(|(_, line)| line.label.is_some())
            .collect();
        if entries.is_empty() {
            return;
        }

        let row_h = LABEL_SIZE + 8.0;
        let sample_w = 30.0;
        let text_w = entries
            .iter()
            .filter_map(|(_, line)| line.label.as_deref())
            .map(|label| text.measure_width(label, LABEL_SIZE))
            .fold(0.0f32, f32::max);
        let w = sample_w + 18.0 + text_w + 10.0;
        let h = row_h * entries.len() as f32 + 10.0;
        // upper right corner, inset from the frame
        let right = area.right as f32 - 10.0;
        let top = area.top as f32 + 10.0;
        let rect = skia::Rect::from_ltrb(right - w, top, right, top + h);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_background);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill);
        canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(theme.legend_border, 1.0));

        for (row, (i, line)) in entries.iter().enumerate() {
            let cy = top + 5.0 + row_h * (row as f32 + 0.5);
            let x0 = rect.left + 8.0;
            let color = with_alpha(line.color.unwrap_or_else(|| theme.series_color(*i)), line.alpha);
            canvas.draw_line((x0, cy), (x0 + sample_w, cy), &stroke_paint(color, line.width));
            if let Some(marker) = line.marker {
                marker.draw(canvas, x0 + sample_w * 0.5, cy, line.marker_size, &fill_paint(color));
            }
            if let Some(label) = &line.label {
                text.draw(canvas, label, x0 + sample_w + 10.0, cy + LABEL_SIZE * 0.35, LABEL_SIZE, theme.axis_label, Align::Left);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    area: RectI32,
    sx: &ValueScale,
    sy: &ValueScale,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    mode: GridLines,
) {
    if mode == GridLines::Hidden {
        return;
    }
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    if mode == GridLines::Both {
        for tick in x_ticks {
            let x = sx.to_px(tick.value);
            canvas.draw_line((x, t), (x, b), &paint);
        }
    }
    for tick in y_ticks {
        let y = sy.to_px(tick.value);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    theme: &Theme,
    area: RectI32,
    sx: &ValueScale,
    sy: &ValueScale,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_rect(area.to_skia(), &paint);

    let (l, b) = (area.left as f32, area.bottom as f32);
    let tick_paint = stroke_paint(theme.tick, 1.0);
    for tick in x_ticks {
        let x = sx.to_px(tick.value);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &tick_paint);
    }
    for tick in y_ticks {
        let y = sy.to_px(tick.value);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &tick_paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &ValueScale, sy: &ValueScale, series: &LineSeries, color: skia::Color) {
    let pts: Vec<(f32, f32)> = series
        .points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)))
        .collect();
    if pts.is_empty() {
        return;
    }
    let color = with_alpha(color, series.alpha);

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for &p in pts.iter().skip(1) {
            path.line_to(p);
        }
        canvas.draw_path(&path, &stroke_paint(color, series.width));
    }

    if let Some(marker) = series.marker {
        let fill = fill_paint(color);
        for &(x, y) in &pts {
            marker.draw(canvas, x, y, series.marker_size, &fill);
        }
    }
}

fn draw_scatter_series(canvas: &skia::Canvas, theme: &Theme, sx: &ValueScale, sy: &ValueScale, series: &ScatterSeries) {
    let edge = stroke_paint(with_alpha(theme.marker_edge, series.alpha), 1.0);
    for (i, &(x, y)) in series.points.iter().enumerate() {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        let area = series.areas.get(i).copied().unwrap_or(36.0).max(0.0);
        let radius = (area / std::f32::consts::PI).sqrt().max(MIN_SCATTER_RADIUS);
        let center = (sx.to_px(x), sy.to_px(y));
        let fill = fill_paint(with_alpha(viridis(series.normalized(i)), series.alpha));
        canvas.draw_circle(center, radius, &fill);
        canvas.draw_circle(center, radius, &edge);
    }
}

fn draw_annotations(canvas: &skia::Canvas, theme: &Theme, text: &TextShaper, sx: &ValueScale, sy: &ValueScale, series: &ScatterSeries) {
    for (&(x, y), note) in series.points.iter().zip(&series.annotations) {
        if !x.is_finite() || !y.is_finite() || note.is_empty() {
            continue;
        }
        // offset up and to the right of the point
        text.draw(canvas, note, sx.to_px(x) + 5.0, sy.to_px(y) - 5.0, TICK_SIZE, theme.axis_label, Align::Left);
    }
}

fn draw_box_series(canvas: &skia::Canvas, theme: &Theme, sx: &ValueScale, sy: &ValueScale, series: &BoxSeries) {
    let fill = fill_paint(theme.box_fill);
    let outline = stroke_paint(theme.axis_line, 1.0);
    let whisker = stroke_paint(theme.whisker, 1.5);
    let median = stroke_paint(theme.median, 2.0);
    let flier = stroke_paint(theme.axis_line, 1.0);

    for (stats, &pos) in series.groups.iter().zip(&series.positions) {
        let cx = sx.to_px(pos);
        let half = sx.px_len(pos - series.width * 0.5, pos + series.width * 0.5) * 0.5;
        let cap = half * 0.5;
        let (y_q1, y_q3) = (sy.to_px(stats.q1), sy.to_px(stats.q3));
        let (y_lo, y_hi) = (sy.to_px(stats.whisker_lo), sy.to_px(stats.whisker_hi));

        canvas.draw_line((cx, y_q1), (cx, y_lo), &whisker);
        canvas.draw_line((cx, y_q3), (cx, y_hi), &whisker);
        canvas.draw_line((cx - cap, y_lo), (cx + cap, y_lo), &whisker);
        canvas.draw_line((cx - cap, y_hi), (cx + cap, y_hi), &whisker);

        let body = skia::Rect::from_ltrb(cx - half, y_q3.min(y_q1), cx + half, y_q1.max(y_q3));
        canvas.draw_rect(body, &fill);
        canvas.draw_rect(body, &outline);

        let y_med = sy.to_px(stats.median);
        canvas.draw_line((cx - half, y_med), (cx + half, y_med), &median);

        for &v in &stats.fliers {
            canvas.draw_circle((cx, sy.to_px(v)), 3.0, &flier);
        }
    }
}

fn draw_colorbar(canvas: &skia::Canvas, theme: &Theme, area: RectI32, cb: &Colorbar, text: Option<&TextShaper>) {
    let left = (area.right + 20) as f32;
    let right = left + COLORBAR_WIDTH as f32;
    let (top, bottom) = (area.top as f32, area.bottom as f32);
    let step_h = (bottom - top) / COLORBAR_STEPS as f32;

    for i in 0..COLORBAR_STEPS {
        let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
        let y1 = bottom - step_h * i as f32;
        // overlap by a pixel so slices leave no seams
        let rect = skia::Rect::from_ltrb(left, y1 - step_h - 1.0, right, y1);
        let mut paint = skia::Paint::default();
        paint.set_color(viridis(t));
        canvas.draw_rect(rect, &paint);
    }
    canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), &stroke_paint(theme.axis_line, 1.0));

    let span = cb.max - cb.min;
    if !(span > 0.0) {
        return;
    }
    let scale = ValueScale::new(crate::axis::ScaleKind::Linear, bottom, top, cb.min, cb.max);
    let ticks = nice_ticks(cb.min, cb.max, 5);
    let step = if ticks.len() > 1 { ticks[1] - ticks[0] } else { span };
    let tick_paint = stroke_paint(theme.tick, 1.0);
    for &v in &ticks {
        let y = scale.to_px(v);
        canvas.draw_line((right, y), (right + TICK_LEN, y), &tick_paint);
        if let Some(text) = text {
            text.draw(canvas, &format_linear(v, step), right + TICK_LEN + 3.0, y + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Align::Left);
        }
    }
    if let Some(text) = text {
        let x = right + TICK_LEN + 3.0 + 44.0 + LABEL_SIZE;
        text.draw_rotated(canvas, &cb.label, x, (top + bottom) * 0.5, LABEL_SIZE, theme.axis_label, Align::Center, 90.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::BoxSeries;
    use crate::types::Insets;

    #[test]
    fn data_bounds_union_lines_and_box_fliers() {
        let mut plot = Plot::new("t", Axis::new("x", 0.0, 1.0), Axis::new("y", 0.0, 1.0));
        assert_eq!(plot.data_bounds(), None);
        plot.add_series(LineSeries::new(vec![(1.0, 5.0), (2.0, 7.0)]));
        plot.add_series(BoxSeries::from_samples(&[vec![2.0, 3.0, 3.0, 4.0, 50.0]]));
        let (x0, x1, y0, y1) = plot.data_bounds().expect("bounds");
        assert_eq!((x0, x1), (0.0, 2.0));
        assert_eq!((y0, y1), (2.0, 50.0));
    }

    #[test]
    fn colorbar_reserves_room_on_the_right() {
        let opts = RenderOptions { insets: Insets::uniform(10), ..RenderOptions::default() };
        let cell = RectI32::from_ltwh(0, 0, 400, 300);
        let mut plot = Plot::new("t", Axis::new("x", 0.0, 1.0), Axis::new("y", 0.0, 1.0));
        let plain = plot.plot_area(cell, &opts);
        plot.colorbar = Some(Colorbar { label: "size".into(), min: 0.0, max: 1.0 });
        let with_bar = plot.plot_area(cell, &opts);
        assert_eq!(plain.right - with_bar.right, COLORBAR_RESERVE);
        assert_eq!(plain.left, with_bar.left);
    }
}
