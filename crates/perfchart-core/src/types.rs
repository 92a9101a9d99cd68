// File: crates/perfchart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default figure width in pixels.
pub const WIDTH: i32 = 1600;
/// Default figure height in pixels.
pub const HEIGHT: i32 = 1200;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self { Self::new(v, v, v, v) }
}

impl Default for Insets {
    /// Room around one subplot's axes: tick labels left, title top,
    /// rotated tick labels plus axis label bottom.
    fn default() -> Self {
        Self::new(84, 24, 44, 96)
    }
}
