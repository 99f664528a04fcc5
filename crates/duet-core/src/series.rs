// File: crates/duet-core/src/series.rs
// Summary: Series model: time-stamped samples with optional values, bound to a y-axis by id.
// Notes:
// - `None` in `Sample::y` is a deliberate gap and is passed through untouched.
// - Callers own ordering; samples are never re-sorted here.

use std::collections::HashSet;

use crate::axis::{AxisId, AxisSet};
use crate::error::ConfigError;

/// Epoch milliseconds.
pub type Timestamp = i64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: Timestamp,
    pub y: Option<f64>,
}

impl Sample {
    pub const fn new(x: Timestamp, y: f64) -> Self { Self { x, y: Some(y) } }
    pub const fn absent(x: Timestamp) -> Self { Self { x, y: None } }
    pub const fn from_option(x: Timestamp, y: Option<f64>) -> Self { Self { x, y } }
    pub const fn is_present(&self) -> bool { self.y.is_some() }
}

/// Caller-supplied series definition.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub axis_id: AxisId,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>, axis_id: impl Into<AxisId>, samples: Vec<Sample>) -> Self {
        Self { name: name.into(), axis_id: axis_id.into(), samples }
    }

    /// Build from `(x, y)` pairs, `None` marking a gap.
    pub fn from_pairs(
        name: impl Into<String>,
        axis_id: impl Into<AxisId>,
        pairs: impl IntoIterator<Item = (Timestamp, Option<f64>)>,
    ) -> Self {
        let samples = pairs.into_iter().map(|(x, y)| Sample::from_option(x, y)).collect();
        Self::new(name, axis_id, samples)
    }
}

/// Validated series with its y-axis binding resolved to an index.
#[derive(Clone, Debug)]
pub struct NormalizedSeries {
    pub name: String,
    pub axis_id: AxisId,
    pub axis_index: usize,
    pub samples: Vec<Sample>,
    pub visible: bool,
}

impl NormalizedSeries {
    pub fn present_samples(&self) -> impl Iterator<Item = (Timestamp, f64)> + '_ {
        self.samples.iter().filter_map(|s| s.y.map(|y| (s.x, y)))
    }

    /// Last present value, used by fallback summaries.
    pub fn last_present(&self) -> Option<Sample> {
        self.samples.iter().rev().find(|s| s.is_present()).copied()
    }
}

/// Validate and bind `series` against `axes`. Input order and values are preserved.
pub fn normalize(series: &[Series], axes: &AxisSet) -> Result<Vec<NormalizedSeries>, ConfigError> {
    let mut names = HashSet::new();
    let mut out = Vec::with_capacity(series.len());
    for (i, s) in series.iter().enumerate() {
        if s.name.trim().is_empty() {
            return Err(ConfigError::EmptySeriesName(i));
        }
        if !names.insert(s.name.as_str()) {
            return Err(ConfigError::DuplicateSeriesName(s.name.clone()));
        }
        let axis_index = axes.y_index(&s.axis_id).ok_or_else(|| ConfigError::UnknownAxis {
            series: s.name.clone(),
            axis: s.axis_id.to_string(),
        })?;
        if s.samples.windows(2).any(|w| w[1].x < w[0].x) {
            tracing::warn!(series = %s.name, "samples are not ordered by x; rendering is undefined");
        }
        out.push(NormalizedSeries {
            name: s.name.clone(),
            axis_id: s.axis_id.clone(),
            axis_index,
            samples: s.samples.clone(),
            visible: true,
        });
    }
    Ok(out)
}
