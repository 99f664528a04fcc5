// File: crates/duet-core/src/domain.rs
// Summary: Axis resolver. Shared x-domain plus one independent domain per y-axis,
// optionally restricted by an active zoom window.

use crate::axis::{AxisId, AxisSet, Domain};
use crate::series::NormalizedSeries;

/// Active zoom restriction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomWindow {
    /// Visible time range (epoch millis as f64).
    pub x: Domain,
    /// Vertical band as fractions of each y-axis' fitted domain (`y`/`xy` zoom only).
    pub y_band: Option<Domain>,
}

impl ZoomWindow {
    pub fn x_only(x: Domain) -> Self { Self { x, y_band: None } }
}

/// Resolved domains for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Domains {
    pub x: Domain,
    y: Vec<(AxisId, Domain)>,
}

impl Domains {
    pub fn y(&self, id: &AxisId) -> Option<Domain> {
        self.y.iter().find(|(a, _)| a == id).map(|(_, d)| *d)
    }

    /// Domain of the y-axis at `index` in declaration order.
    pub fn y_at(&self, index: usize) -> Domain {
        self.y.get(index).map(|(_, d)| *d).unwrap_or(Domain::DEFAULT)
    }
}

/// X extent over visible series, ignoring absent samples.
pub fn x_extent(series: &[NormalizedSeries]) -> Option<Domain> {
    let mut ext: Option<Domain> = None;
    for s in series.iter().filter(|s| s.visible) {
        for (x, _) in s.present_samples() {
            let x = x as f64;
            match ext.as_mut() {
                Some(d) => d.include(x),
                None => ext = Some(Domain::new(x, x)),
            }
        }
    }
    ext
}

/// Y extent of visible series bound to `axis_index`, limited to `x_range` when given.
pub fn y_extent(series: &[NormalizedSeries], axis_index: usize, x_range: Option<&Domain>) -> Option<Domain> {
    let mut ext: Option<Domain> = None;
    for s in series.iter().filter(|s| s.visible && s.axis_index == axis_index) {
        for (x, y) in s.present_samples() {
            if let Some(r) = x_range {
                if !r.contains(x as f64) { continue; }
            }
            match ext.as_mut() {
                Some(d) => d.include(y),
                None => ext = Some(Domain::new(y, y)),
            }
        }
    }
    ext
}

/// Compute the shared x-domain and every y-domain independently.
/// Axes without samples degrade to `Domain::DEFAULT`.
pub fn resolve_domains(series: &[NormalizedSeries], axes: &AxisSet, window: Option<&ZoomWindow>) -> Domains {
    let x = match window {
        Some(w) => w.x,
        None => x_extent(series).unwrap_or(Domain::DEFAULT),
    };
    let x_filter = window.map(|w| &w.x);
    let y = axes
        .y_axes()
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let mut d = y_extent(series, i, x_filter).unwrap_or(Domain::DEFAULT);
            if let Some(band) = window.and_then(|w| w.y_band) {
                d = Domain::new(d.lerp(band.min), d.lerp(band.max));
            }
            (axis.id.clone(), d)
        })
        .collect();
    tracing::debug!(x_min = x.min, x_max = x.max, zoomed = window.is_some(), "resolved domains");
    Domains { x, y }
}
