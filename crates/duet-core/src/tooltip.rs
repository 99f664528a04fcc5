// File: crates/duet-core/src/tooltip.rs
// Summary: Hover resolution (nearest sample per series) and the tooltip composer contract.
// Notes:
// - Absent values reach composers as `None`; nothing is substituted.
// - Composer errors and panics are contained here and logged.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::axis::{AxisId, Domain};
use crate::error::ComposeError;
use crate::format::Formatters;
use crate::series::{NormalizedSeries, Sample, Timestamp};

/// One series' answer to a hover query.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPoint {
    pub series_index: usize,
    pub series: String,
    pub axis_id: AxisId,
    /// `None` when the series has no sample in range.
    pub sample: Option<Sample>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipQuery {
    /// Resolved time: the sample x closest to the cursor across all series.
    pub x: Timestamp,
    /// Time under the pointer.
    pub cursor: Timestamp,
    pub points: Vec<ResolvedPoint>,
}

impl TooltipQuery {
    pub fn items(&self) -> impl Iterator<Item = PointItem<'_>> {
        self.points.iter().map(|point| PointItem { point })
    }
}

/// Read-only view of one resolved point handed to composers.
#[derive(Clone, Copy, Debug)]
pub struct PointItem<'a> {
    point: &'a ResolvedPoint,
}

impl<'a> PointItem<'a> {
    pub fn series_name(&self) -> &'a str { &self.point.series }
    pub fn series_index(&self) -> usize { self.point.series_index }
    pub fn axis_id(&self) -> &'a AxisId { &self.point.axis_id }
    pub fn x(&self) -> Option<Timestamp> { self.point.sample.map(|s| s.x) }
    /// `None` means no data: either an absent sample or no sample at all.
    pub fn y(&self) -> Option<f64> { self.point.sample.and_then(|s| s.y) }
    pub fn has_sample(&self) -> bool { self.point.sample.is_some() }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipRow {
    pub series_index: usize,
    pub series: String,
    pub value: String,
}

/// Renderable tooltip content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
    pub header: String,
    pub rows: Vec<TooltipRow>,
    pub footer: Option<String>,
}

/// Caller-owned tooltip formatting.
pub trait TooltipComposer {
    fn compose(&mut self, query: &TooltipQuery) -> Result<TooltipContent, ComposeError>;
}

impl<F> TooltipComposer for F
where
    F: FnMut(&TooltipQuery) -> Result<TooltipContent, ComposeError>,
{
    fn compose(&mut self, query: &TooltipQuery) -> Result<TooltipContent, ComposeError> {
        self(query)
    }
}

/// Composer built from a per-point callback; the header comes from the date formatter.
pub struct PointFormatter<F> {
    point: F,
    formatters: Formatters,
}

impl<F> PointFormatter<F>
where
    F: FnMut(PointItem<'_>) -> String,
{
    pub fn new(formatters: Formatters, point: F) -> Self { Self { point, formatters } }
}

impl<F> TooltipComposer for PointFormatter<F>
where
    F: FnMut(PointItem<'_>) -> String,
{
    fn compose(&mut self, query: &TooltipQuery) -> Result<TooltipContent, ComposeError> {
        let rows = query
            .items()
            .map(|item| TooltipRow {
                series_index: item.series_index(),
                series: item.series_name().to_owned(),
                value: (self.point)(item),
            })
            .collect();
        Ok(TooltipContent { header: self.formatters.date(query.x), rows, footer: None })
    }
}

/// Run `composer`, containing failures. Returns `None` for a failed frame.
pub fn compose_safely(composer: &mut dyn TooltipComposer, query: &TooltipQuery) -> Option<TooltipContent> {
    match panic::catch_unwind(AssertUnwindSafe(|| composer.compose(query))) {
        Ok(Ok(content)) => Some(content),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, x = query.x, "tooltip composer failed; frame has no tooltip");
            None
        }
        Err(payload) => {
            tracing::warn!(panic = panic_message(payload.as_ref()), x = query.x, "tooltip composer panicked; frame has no tooltip");
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

/// Index of the sample nearest to `t`. Ties go to the earlier x.
/// `window` limits candidates to an x range; `tolerance` caps the distance.
pub fn nearest_sample(samples: &[Sample], t: Timestamp, window: Option<&Domain>, tolerance: Option<i64>) -> Option<usize> {
    let (lo, hi) = match window {
        Some(w) => (
            samples.partition_point(|s| (s.x as f64) < w.min),
            samples.partition_point(|s| (s.x as f64) <= w.max),
        ),
        None => (0, samples.len()),
    };
    if lo >= hi {
        return None;
    }
    let slice = &samples[lo..hi];
    let dist = |s: &Sample| (s.x as i128 - t as i128).abs();
    let after = slice.partition_point(|s| s.x < t);
    let before = after.checked_sub(1).map(|i| {
        // first of any run sharing that x
        let x = slice[i].x;
        slice.partition_point(|s| s.x < x)
    });
    let best = match (before, slice.get(after)) {
        (Some(b), Some(a)) => {
            if dist(&slice[b]) <= dist(a) { b } else { after }
        }
        (Some(b), None) => b,
        (None, Some(_)) => after,
        (None, None) => return None,
    };
    if let Some(tol) = tolerance {
        if dist(&slice[best]) > tol as i128 {
            return None;
        }
    }
    Some(lo + best)
}

/// Resolve one hover position against every visible series independently.
/// Returns `None` when no series has a sample to show.
pub fn resolve_query(
    series: &[NormalizedSeries],
    cursor: Timestamp,
    window: Option<&Domain>,
    tolerance: Option<i64>,
) -> Option<TooltipQuery> {
    let points: Vec<ResolvedPoint> = series
        .iter()
        .enumerate()
        .filter(|(_, s)| s.visible)
        .map(|(i, s)| ResolvedPoint {
            series_index: i,
            series: s.name.clone(),
            axis_id: s.axis_id.clone(),
            sample: nearest_sample(&s.samples, cursor, window, tolerance).map(|k| s.samples[k]),
        })
        .collect();
    let x = points
        .iter()
        .filter_map(|p| p.sample.map(|s| s.x))
        .min_by_key(|x| ((*x as i128 - cursor as i128).abs(), *x))?;
    Some(TooltipQuery { x, cursor, points })
}
