// File: crates/duet-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: renders a `Chart` to PNG bytes, PNG files, or RGBA8 buffers.

use std::path::Path;

use anyhow::Result;
use duet_core::Chart;

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

/// Raster output for a chart at its configured size.
pub trait RasterExt {
    fn render_to_png_bytes(&self) -> Result<Vec<u8>>;
    fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<()>;
    /// Returns `(pixels, width, height)`.
    fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32)>;
}

fn rasterize(chart: &Chart) -> Result<SkiaSurface> {
    let mut surface = SkiaSurface::new(chart.width(), chart.height())?;
    chart.render(&mut surface);
    Ok(surface)
}

impl RasterExt for Chart {
    fn render_to_png_bytes(&self) -> Result<Vec<u8>> { rasterize(self)?.encode_png() }

    fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32)> {
        let mut surface = rasterize(self)?;
        let pixels = surface.read_rgba8()?;
        Ok((pixels, self.width(), self.height()))
    }
}
