// File: crates/duet-core/tests/segments.rs
// Purpose: Gap-aware segment building: runs, breaks at absent samples, isolated points.

mod common;

use common::{dual_axis_chart, GAP_INDEX};
use duet_core::series::Sample;
use duet_core::{present_runs, Axis, Chart, ChartConfig, ChartOptions, RecordingSurface, Series};

fn samples(values: &[Option<f64>]) -> Vec<Sample> {
    values.iter().enumerate().map(|(i, v)| Sample::from_option(i as i64 * 1000, *v)).collect()
}

fn single_series_chart(values: &[Option<f64>], markers: bool) -> Chart {
    let mut options = ChartOptions::default();
    options.point_markers = markers;
    options.toggles.show_legend = false;
    Chart::new(ChartConfig {
        series: vec![Series::new("s", "y", samples(values))],
        axes: vec![Axis::x("t", "Time"), Axis::y("y", "Value")],
        options,
    })
    .expect("valid config")
}

#[test]
fn all_present_is_one_segment() {
    let chart = single_series_chart(&[Some(1.0), Some(3.0), Some(2.0), Some(5.0)], false);
    let segs = chart.segments(0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].start, 0);
    assert_eq!(segs[0].len(), 4);
}

#[test]
fn segment_count_equals_present_runs() {
    let values = [Some(1.0), None, Some(2.0), Some(2.5), None, None, Some(4.0), Some(0.0)];
    assert_eq!(present_runs(&samples(&values)), vec![0..1, 2..4, 6..8]);
    let chart = single_series_chart(&values, false);
    let segs = chart.segments(0);
    assert_eq!(segs.len(), 3);
    assert_eq!(segs.iter().map(|s| s.start).collect::<Vec<_>>(), vec![0, 2, 6]);
}

#[test]
fn leading_and_trailing_gaps_add_no_segments() {
    let values = [None, Some(1.0), Some(2.0), None];
    assert_eq!(present_runs(&samples(&values)), vec![1..3]);
}

#[test]
fn zero_and_negative_values_are_not_gaps() {
    let values = [Some(0.0), Some(-1.0), Some(0.0)];
    let chart = single_series_chart(&values, false);
    assert_eq!(chart.segments(0).len(), 1);
}

#[test]
fn baseline_fixture_splits_every_series_in_two() {
    let chart = dual_axis_chart();
    for i in 0..4 {
        let segs = chart.segments(i);
        assert_eq!(segs.len(), 2, "series {i}");
        assert_eq!(segs[0].start, 0);
        assert_eq!(segs[0].len(), GAP_INDEX);
        assert_eq!(segs[1].start, GAP_INDEX + 1);
        assert!(segs[1].is_single());
    }
}

#[test]
fn full_view_segment_spans_plot_width() {
    let chart = single_series_chart(&[Some(1.0), Some(2.0), Some(3.0)], false);
    let plot = chart.plot_rect();
    let seg = &chart.segments(0)[0];
    assert!((seg.points[0].x - plot.left).abs() < 1e-3);
    assert!((seg.points[2].x - plot.right).abs() < 1e-3);
    // min value on the floor, max on the ceiling
    assert!((seg.points[0].y - plot.bottom).abs() < 1e-3);
    assert!((seg.points[2].y - plot.top).abs() < 1e-3);
}

#[test]
fn isolated_point_draws_only_with_markers() {
    let values = [Some(1.0), None, Some(2.0), None, Some(3.0)];

    let chart = single_series_chart(&values, false);
    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    assert_eq!(surface.polylines().count(), 0);
    assert_eq!(surface.circles().count(), 0);

    let chart = single_series_chart(&values, true);
    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    assert_eq!(surface.polylines().count(), 0);
    assert_eq!(surface.circles().count(), 3);
}

#[test]
fn zoomed_segments_keep_one_neighbor_each_side() {
    let values: Vec<Option<f64>> = (0..10).map(|i| Some(i as f64)).collect();
    let mut chart = single_series_chart(&values, false);
    chart.zoom_to(duet_core::Domain::new(3000.0, 6000.0));
    let segs = chart.segments(0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].start, 2);
    assert_eq!(segs[0].len(), 6);
}
