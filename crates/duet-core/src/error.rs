// File: crates/duet-core/src/error.rs
// Summary: Configuration and composer error types.

use thiserror::Error;

/// Raised synchronously while building or reconfiguring a chart.
/// Fatal to that call; the chart is never left half-configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("series `{series}` references unknown y-axis `{axis}`")]
    UnknownAxis { series: String, axis: String },
    #[error("axis id `{0}` is declared more than once")]
    DuplicateAxis(String),
    #[error("series at position {0} has an empty name")]
    EmptySeriesName(usize),
    #[error("series name `{0}` is used more than once")]
    DuplicateSeriesName(String),
    #[error("chart needs exactly one x-axis, found {0}")]
    XAxisCount(usize),
    #[error("chart needs at least one y-axis")]
    NoYAxis,
    #[error("unknown display toggle `{0}`")]
    UnknownToggle(String),
}

/// Error type returned by caller-supplied tooltip composers.
pub type ComposeError = Box<dyn std::error::Error + Send + Sync + 'static>;
