// File: crates/duet-core/src/surface.rs
// Summary: Backend-agnostic drawing surface trait plus an in-memory recorder.
// Notes:
// - Real backends (e.g. the Skia raster crate) implement `DrawSurface`.
// - `RecordingSurface` keeps every call, which is what headless tests inspect.

use crate::geometry::{Point, Rect};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub dashed: bool,
}

impl Stroke {
    pub const fn solid(color: Rgba, width: f32) -> Self { Self { color, width, dashed: false } }
    pub const fn dashed(color: Rgba, width: f32) -> Self { Self { color, width, dashed: true } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub align: TextAlign,
    /// Prefer tabular digits.
    pub mono_numeric: bool,
}

impl TextStyle {
    pub const fn new(size: f32, color: Rgba) -> Self {
        Self { size, color, align: TextAlign::Left, mono_numeric: false }
    }
    pub const fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
    pub const fn numeric(mut self) -> Self {
        self.mono_numeric = true;
        self
    }
}

/// Drawing capabilities the engine relies on. Text is positioned by its baseline.
pub trait DrawSurface {
    fn size(&self) -> (i32, i32);
    fn clear(&mut self, color: Rgba);
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn polyline(&mut self, points: &[Point], stroke: &Stroke);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);
    fn text(&mut self, text: &str, at: Point, style: &TextStyle);
    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rgba),
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    FillRect { rect: Rect, color: Rgba },
    StrokeRect { rect: Rect, stroke: Stroke },
    Circle { center: Point, radius: f32, color: Rgba },
    Text { text: String, at: Point, style: TextStyle },
    PushClip(Rect),
    PopClip,
}

/// Surface that records draw calls instead of producing pixels.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self { Self { width, height, ops: Vec::new() } }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Point], &Stroke)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polyline { points, stroke } => Some((points.as_slice(), stroke)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, color, .. } => Some((*center, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool { self.texts().any(|t| t == needle) }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }
    fn clear(&mut self, color: Rgba) { self.ops.push(DrawOp::Clear(color)); }
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke: *stroke });
    }
    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), stroke: *stroke });
    }
    fn fill_rect(&mut self, rect: Rect, color: Rgba) { self.ops.push(DrawOp::FillRect { rect, color }); }
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeRect { rect, stroke: *stroke });
    }
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }
    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_owned(), at, style: *style });
    }
    fn push_clip(&mut self, rect: Rect) { self.ops.push(DrawOp::PushClip(rect)); }
    fn pop_clip(&mut self) { self.ops.push(DrawOp::PopClip); }
}
