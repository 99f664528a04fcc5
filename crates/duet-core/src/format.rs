// File: crates/duet-core/src/format.rs
// Summary: Formatter hooks for time labels and values; defaults provided, callers may replace them.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::series::Timestamp;

/// Display string for a value that has no data.
pub const ABSENT_PLACEHOLDER: &str = "\u{2014}";

pub type DateFormatFn = Arc<dyn Fn(Timestamp) -> String + Send + Sync>;
pub type NumberFormatFn = Arc<dyn Fn(Option<f64>) -> String + Send + Sync>;

/// Per-chart formatter hooks. Cloning shares the underlying functions.
#[derive(Clone)]
pub struct Formatters {
    pub date: DateFormatFn,
    pub number: NumberFormatFn,
}

impl Formatters {
    pub fn new(
        date: impl Fn(Timestamp) -> String + Send + Sync + 'static,
        number: impl Fn(Option<f64>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self { date: Arc::new(date), number: Arc::new(number) }
    }

    pub fn date(&self, t: Timestamp) -> String { (self.date)(t) }
    pub fn number(&self, v: Option<f64>) -> String { (self.number)(v) }
}

impl Default for Formatters {
    fn default() -> Self { Self::new(date_formatter, number_formatter) }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatters").finish_non_exhaustive()
    }
}

/// `Sep 24, 21:45` in UTC.
pub fn date_formatter(t: Timestamp) -> String {
    match DateTime::<Utc>::from_timestamp_millis(t) {
        Some(dt) => dt.format("%b %d, %H:%M").to_string(),
        None => t.to_string(),
    }
}

/// Compact number: `1.2K`, `3.45M`, `7G`, or up to two decimals below 1000.
/// Absent values render as `ABSENT_PLACEHOLDER`.
pub fn number_formatter(v: Option<f64>) -> String {
    let Some(v) = v else { return ABSENT_PLACEHOLDER.to_owned() };
    if !v.is_finite() {
        return v.to_string();
    }
    let abs = v.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (v / 1e9, "G")
    } else if abs >= 1e6 {
        (v / 1e6, "M")
    } else if abs >= 1e3 {
        (v / 1e3, "K")
    } else {
        (v, "")
    };
    format!("{}{}", trim_decimals(scaled), suffix)
}

fn trim_decimals(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}
