// File: crates/perfchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and subplot layout.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (collapses to zero size instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Split `area` into `rows x cols` cells (row-major) separated by `gap` pixels.
pub fn grid_cells(area: RectI32, rows: usize, cols: usize, gap: i32) -> Vec<RectI32> {
    if rows == 0 || cols == 0 { return Vec::new(); }
    let cell_w = ((area.width() - gap * (cols as i32 - 1)) / cols as i32).max(0);
    let cell_h = ((area.height() - gap * (rows as i32 - 1)) / rows as i32).max(0);
    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            out.push(RectI32::from_ltwh(area.left + c * (cell_w + gap), area.top + r * (cell_h + gap), cell_w, cell_h));
        }
    }
    out
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_cells_tile_the_area() {
        let cells = grid_cells(RectI32::from_ltwh(0, 0, 210, 110), 2, 2, 10);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], RectI32::from_ltwh(0, 0, 100, 50));
        assert_eq!(cells[3], RectI32::from_ltwh(110, 60, 100, 50));
    }

    #[test]
    fn inset_never_inverts() {
        let r = RectI32::from_ltwh(0, 0, 10, 10).inset(&Insets::new(8, 8, 8, 8));
        assert_eq!((r.width(), r.height()), (0, 0));
    }
}
