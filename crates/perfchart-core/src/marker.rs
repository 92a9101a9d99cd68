// File: crates/perfchart-core/src/marker.rs
// Summary: Point marker shapes drawn as Skia paths.

use skia_safe as skia;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Star,
    Pentagon,
    TriangleUp,
    TriangleLeft,
    TriangleRight,
    Diamond,
}

impl Marker {
    /// Closed outline centered on `(cx, cy)`; `size` is the bounding diameter.
    pub fn path(self, cx: f32, cy: f32, size: f32) -> skia::Path {
        let r = size * 0.5;
        match self {
            Marker::Circle => regular_polygon(cx, cy, r, 24, 0.0),
            Marker::Pentagon => regular_polygon(cx, cy, r, 5, -FRAC_PI_2),
            Marker::TriangleUp => regular_polygon(cx, cy, r, 3, -FRAC_PI_2),
            Marker::TriangleLeft => regular_polygon(cx, cy, r, 3, PI),
            Marker::TriangleRight => regular_polygon(cx, cy, r, 3, 0.0),
            Marker::Diamond => regular_polygon(cx, cy, r * 0.9, 4, -FRAC_PI_2),
            Marker::Star => star(cx, cy, r, r * 0.4),
        }
    }

    pub fn draw(self, canvas: &skia::Canvas, cx: f32, cy: f32, size: f32, fill: &skia::Paint) {
        canvas.draw_path(&self.path(cx, cy, size), fill);
    }
}

fn regular_polygon(cx: f32, cy: f32, r: f32, sides: usize, start: f32) -> skia::Path {
    let mut path = skia::Path::new();
    for i in 0..sides {
        let a = start + i as f32 * 2.0 * PI / sides as f32;
        let p = (cx + r * a.cos(), cy + r * a.sin());
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path.close();
    path
}

fn star(cx: f32, cy: f32, outer: f32, inner: f32) -> skia::Path {
    let mut path = skia::Path::new();
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = -FRAC_PI_2 + i as f32 * PI / 5.0;
        let p = (cx + r * a.cos(), cy + r * a.sin());
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_stay_inside_their_box() {
        for m in [Marker::Circle, Marker::Star, Marker::Pentagon, Marker::TriangleUp, Marker::TriangleLeft, Marker::TriangleRight, Marker::Diamond] {
            let b = *m.path(50.0, 50.0, 10.0).bounds();
            assert!(b.left >= 44.9 && b.right <= 55.1, "{m:?} {b:?}");
            assert!(b.top >= 44.9 && b.bottom <= 55.1, "{m:?} {b:?}");
        }
    }
}
