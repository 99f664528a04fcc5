// File: crates/duet-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, text metrics).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default chart height in pixels.
pub const HEIGHT: i32 = 400;

/// Horizontal room taken by each additional y-axis stacked on one side.
pub const AXIS_STACK_PX: u32 = 64;
/// Height reserved below the plot for a bottom legend.
pub const LEGEND_ROW_PX: u32 = 28;
/// Width reserved right of the plot for a side legend.
pub const LEGEND_SIDE_PX: u32 = 168;

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
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 72, 24, 56)
    }
}

/// Rough advance width used for layout decisions made without a backend.
/// Backends draw the real glyphs; this only has to be stable.
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.56
}
