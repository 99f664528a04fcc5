// File: crates/duet-render-skia/tests/smoke.rs
// Purpose: End-to-end raster smoke tests: PNG file, PNG bytes, RGBA buffer.

use duet_core::{Axis, Chart, ChartConfig, ChartOptions, Series};
use duet_render_skia::RasterExt;

fn small_chart() -> Chart {
    let mut options = ChartOptions::default();
    options.width = 320;
    options.height = 200;
    let series = vec![
        Series::from_pairs("a", "left", vec![(0, Some(0.0)), (1_000, Some(2.0)), (2_000, None), (3_000, Some(3.5)), (4_000, Some(2.5))]),
        Series::from_pairs("b", "right", vec![(0, Some(40.0)), (2_000, Some(60.0)), (4_000, Some(55.0))]),
    ];
    let axes = vec![Axis::x("t", "Time"), Axis::y("left", "Left"), Axis::y("right", "Right").opposite()];
    Chart::new(ChartConfig { series, axes, options }).expect("valid config")
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (320, 200));
}

#[test]
fn rgba_buffer_matches_size_and_background() {
    let chart = small_chart();
    let (pixels, w, h) = chart.render_to_rgba8().expect("render rgba");
    assert_eq!((w, h), (320, 200));
    assert_eq!(pixels.len(), (w * h * 4) as usize);
    let bg = chart.options().theme.background;
    assert_eq!(&pixels[..4], &[bg.r, bg.g, bg.b, bg.a]);
}

#[test]
fn series_strokes_reach_the_pixels() {
    let mut chart = small_chart();
    let (with_series, _, _) = chart.render_to_rgba8().expect("render");
    chart.set_series_visible("a", false);
    chart.set_series_visible("b", false);
    let (without, _, _) = chart.render_to_rgba8().expect("render");
    assert_ne!(with_series, without);
}
