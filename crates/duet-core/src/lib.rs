// File: crates/duet-core/src/lib.rs
// Summary: Core library entry point; multi-axis time-series chart engine with a pluggable drawing surface.

pub mod axis;
pub mod chart;
pub mod domain;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod legend;
pub mod options;
mod render;
pub mod scale;
pub mod segment;
pub mod series;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisId, AxisSet, Domain, Orientation};
pub use chart::{ActiveTooltip, Chart, ChartConfig};
pub use domain::{resolve_domains, Domains, ZoomWindow};
pub use error::{ComposeError, ConfigError};
pub use format::Formatters;
pub use interaction::{PointerEvent, Transition, ZoomState};
pub use options::{ChartOptions, DisplayToggles, TooltipPlacement, ZoomMode};
pub use segment::{build_segments, present_runs, Segment};
pub use series::{normalize, NormalizedSeries, Sample, Series, Timestamp};
pub use surface::{DrawSurface, RecordingSurface};
pub use theme::{Rgba, Theme};
pub use tooltip::{PointFormatter, PointItem, TooltipComposer, TooltipContent, TooltipQuery};
