// File: crates/duet-render-skia/src/surface.rs
// Summary: `DrawSurface` over a Skia CPU raster surface.

use anyhow::Result;
use skia_safe as skia;

use duet_core::geometry::{Point, Rect};
use duet_core::surface::{DrawSurface, Stroke, TextStyle};
use duet_core::Rgba;

use crate::text::TextShaper;

const DASH_INTERVALS: [f32; 2] = [4.0, 4.0];

fn color(c: Rgba) -> skia::Color { skia::Color::from_argb(c.a, c.r, c.g, c.b) }

fn rect(r: Rect) -> skia::Rect { skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom) }

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(color(stroke.color));
    if stroke.dashed {
        paint.set_path_effect(skia::PathEffect::dash(&DASH_INTERVALS, 0.0));
    }
    paint
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        Ok(Self { surface, width: width.max(1), height: height.max(1), shaper: TextShaper::new() })
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn read_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading {}x{} pixels failed", self.width, self.height);
        }
        Ok(pixels)
    }
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self, c: Rgba) { self.surface.canvas().clear(color(c)); }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke));
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        self.surface.canvas().draw_path(&path, &stroke_paint(stroke));
    }

    fn fill_rect(&mut self, r: Rect, c: Rgba) {
        self.surface.canvas().draw_rect(rect(r), &fill_paint(c));
    }

    fn stroke_rect(&mut self, r: Rect, stroke: &Stroke) {
        self.surface.canvas().draw_rect(rect(r), &stroke_paint(stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, c: Rgba) {
        self.surface.canvas().draw_circle((center.x, center.y), radius, &fill_paint(c));
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at.x, at.y, style.size, color(style.color), style.mono_numeric, style.align);
    }

    fn push_clip(&mut self, r: Rect) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(rect(r), skia::ClipOp::Intersect, true);
    }

    fn pop_clip(&mut self) { self.surface.canvas().restore(); }
}
