// File: crates/duet-core/src/segment.rs
// Summary: Gap-aware segment building. Absent samples break a line; nothing is
// interpolated or held across a gap.

use std::ops::Range;

use crate::axis::Domain;
use crate::geometry::Point;
use crate::scale::{TimeScale, ValueScale};
use crate::series::{NormalizedSeries, Sample};

/// One continuous polyline in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Index of the first sample of this run in the series.
    pub start: usize,
    pub points: Vec<Point>,
}

impl Segment {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    /// Isolated present sample; drawn only as a marker.
    pub fn is_single(&self) -> bool { self.points.len() == 1 }
}

/// Maximal runs of consecutive present samples.
pub fn present_runs(samples: &[Sample]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, s) in samples.iter().enumerate() {
        match (s.is_present(), start) {
            (true, None) => start = Some(i),
            (false, Some(st)) => {
                runs.push(st..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(st) = start {
        runs.push(st..samples.len());
    }
    runs
}

/// Indices of samples inside `window`, widened by one neighbor per side so
/// lines reach the plot edge. Assumes ascending x.
pub fn visible_range(samples: &[Sample], window: &Domain) -> Range<usize> {
    let lo = samples.partition_point(|s| (s.x as f64) < window.min);
    let hi = samples.partition_point(|s| (s.x as f64) <= window.max);
    lo.saturating_sub(1)..(hi + 1).min(samples.len())
}

/// Map `series` to pixel-space segments over the scales' current domains.
pub fn build_segments(series: &NormalizedSeries, x: &TimeScale, y: &ValueScale) -> Vec<Segment> {
    let window = visible_range(&series.samples, &x.domain());
    let offset = window.start;
    present_runs(&series.samples[window])
        .into_iter()
        .map(|run| Segment {
            start: run.start + offset,
            points: series.samples[run.start + offset..run.end + offset]
                .iter()
                .filter_map(|s| s.y.map(|v| Point::new(x.to_px(s.x as f64), y.to_px(v))))
                .collect(),
        })
        .collect()
}
