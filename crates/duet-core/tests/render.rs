// File: crates/duet-core/tests/render.rs
// Purpose: Draw pass against the recording surface: axes, legend, tooltip, fallback.

mod common;

use common::{dual_axis_chart, dual_axis_chart_with, BASELINE};
use duet_core::format::number_formatter;
use duet_core::surface::DrawOp;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use duet_core::{
    Axis, Chart, ChartConfig, ChartOptions, PointFormatter, PointItem, PointerEvent, RecordingSurface, Series,
    TooltipPlacement,
};

#[test]
fn renders_one_polyline_per_multi_point_segment() {
    let chart = dual_axis_chart();
    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    // the lone sample after the gap is a single-point segment and draws nothing
    assert_eq!(surface.polylines().count(), 4);
    assert!(matches!(surface.ops.first(), Some(DrawOp::Clear(_))));
}

#[test]
fn axis_titles_and_legend_labels_are_drawn() {
    let mut options = ChartOptions::default();
    options.toggles.show_legend_title = true;
    let chart = dual_axis_chart_with(options);
    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    for label in ["Time (UTC)", "Events", "Percentage (%)", "Legend", "Network Traffic", "Memory Usage"] {
        assert!(surface.has_text(label), "missing `{label}`");
    }
}

#[test]
fn opposite_axis_sits_right_of_plot() {
    let chart = dual_axis_chart();
    let plot = chart.plot_rect();
    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    let at = |label: &str| {
        surface.ops.iter().find_map(|op| match op {
            DrawOp::Text { text, at, .. } if text == label => Some(*at),
            _ => None,
        })
    };
    assert_eq!(at("Events").map(|p| p.x), Some(plot.left));
    assert_eq!(at("Percentage (%)").map(|p| p.x), Some(plot.right));
}

#[test]
fn hover_draws_crosshair_and_tooltip_rows() {
    let mut options = ChartOptions::default();
    options.tooltip_placement = TooltipPlacement::Outside;
    let mut chart = dual_axis_chart_with(options);
    let plot = chart.plot_rect();
    let x = chart.x_scale().to_px(BASELINE[17].0 as f64);
    chart.handle_event(PointerEvent::Move { x, y: plot.top + 12.0 });
    let mut composer = PointFormatter::new(chart.options().formatters.clone(), |item: PointItem<'_>| number_formatter(item.y()));
    chart.update_tooltip(&mut composer);

    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    assert!(surface.has_text("490.45K"));
    assert!(surface.has_text("95"));
    let dashed = surface.ops.iter().filter(|op| matches!(op, DrawOp::Line { stroke, .. } if stroke.dashed)).count();
    assert_eq!(dashed, 1);
}

#[test]
fn fallback_mode_draws_text_only() {
    let mut options = ChartOptions::default();
    options.toggles.use_fallback = true;
    options.accessibility_label = "Dual axis line chart".to_owned();
    let chart = dual_axis_chart_with(options);
    assert_eq!(chart.accessibility_label(), "Dual axis line chart");
    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    assert!(surface.has_text("Dual axis line chart"));
    assert_eq!(surface.polylines().count(), 0);
    assert_eq!(surface.texts().count(), 5);
}

#[test]
fn large_values_with_a_narrow_spread_render() {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let chart = Chart::new(ChartConfig {
            series: vec![Series::from_pairs("counter", "y", vec![(0, Some(1e16)), (1_000, Some(1e16 + 2.0))])],
            axes: vec![Axis::x("t", "Time"), Axis::y("y", "Count")],
            options: ChartOptions::default(),
        })
        .expect("valid config");
        let mut surface = RecordingSurface::new(chart.width(), chart.height());
        chart.render(&mut surface);
        let _ = tx.send(surface.polylines().count());
    });
    let polylines = rx.recv_timeout(Duration::from_secs(10)).expect("render finished");
    assert_eq!(polylines, 1);
}
