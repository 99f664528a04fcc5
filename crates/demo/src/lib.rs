// File: crates/demo/src/lib.rs
// Summary: Demo fixture loading and the dual-axis chart configuration shared by both demo binaries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use duet_core::format::number_formatter;
use duet_core::{
    Axis, ChartConfig, ChartOptions, DisplayToggles, Formatters, PointFormatter, PointItem, Series, Timestamp,
    TooltipPlacement, ZoomMode,
};

/// One fixture row; empty CSV cells are absent values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineRow {
    pub time: Timestamp,
    pub events: Option<f64>,
    pub percentage: Option<f64>,
}

/// Bundled fixture shipped with the crate.
pub fn default_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/baseline.csv")
}

/// Load a `time,events,percentage` CSV. Header names are matched case-insensitively.
pub fn load_baseline_csv(path: &Path) -> Result<Vec<BaselineRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "x"]).context("missing time column")?;
    let i_events = idx(&["events", "network", "traffic"]).context("missing events column")?;
    let i_pct = idx(&["percentage", "pct", "cpu"]).context("missing percentage column")?;

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading record {}", line + 1))?;
        let time = rec
            .get(i_time)
            .map(str::trim)
            .unwrap_or_default()
            .parse::<Timestamp>()
            .with_context(|| format!("bad time on record {}", line + 1))?;
        let value = |i: usize| -> Result<Option<f64>> {
            match rec.get(i).map(str::trim) {
                None | Some("") => Ok(None),
                Some(s) => s.parse::<f64>().map(Some).with_context(|| format!("bad value `{s}` on record {}", line + 1)),
            }
        };
        out.push(BaselineRow { time, events: value(i_events)?, percentage: value(i_pct)? });
    }
    tracing::info!(rows = out.len(), path = %path.display(), "loaded fixture");
    Ok(out)
}

/// Network Traffic and Request Count on `events`, CPU and Memory Usage on `percentage`.
pub fn baseline_series(rows: &[BaselineRow]) -> Vec<Series> {
    vec![
        Series::from_pairs("Network Traffic", "events", derive(rows, |r| r.events)),
        Series::from_pairs("Request Count", "events", derive(rows, |r| r.events.map(|v| v * 0.8))),
        Series::from_pairs("CPU Usage", "percentage", derive(rows, |r| r.percentage)),
        Series::from_pairs("Memory Usage", "percentage", derive(rows, |r| r.percentage.map(|v| v * 0.9))),
    ]
}

fn derive(rows: &[BaselineRow], f: impl Fn(&BaselineRow) -> Option<f64>) -> Vec<(Timestamp, Option<f64>)> {
    rows.iter().map(|r| (r.time, f(r))).collect()
}

pub fn dual_axes() -> Vec<Axis> {
    vec![
        Axis::x("time", "Time (UTC)"),
        Axis::y("events", "Events"),
        Axis::y("percentage", "Percentage (%)").opposite(),
    ]
}

/// Demo page settings: x-zoom, tooltips allowed outside the plot.
pub fn dual_axis_config(rows: &[BaselineRow], toggles: DisplayToggles) -> ChartConfig {
    let mut options = ChartOptions::default();
    options.zoom = ZoomMode::X;
    options.tooltip_placement = TooltipPlacement::Outside;
    options.accessibility_label = "Dual axis line chart".to_owned();
    options.toggles = toggles;
    ChartConfig { series: baseline_series(rows), axes: dual_axes(), options }
}

/// Tooltip rows formatted with the compact number formatter.
pub fn demo_composer(formatters: Formatters) -> PointFormatter<impl FnMut(PointItem<'_>) -> String> {
    PointFormatter::new(formatters, |item: PointItem<'_>| number_formatter(item.y()))
}

/// Apply `name=bool` arguments on top of the default toggles.
pub fn parse_toggle_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<DisplayToggles> {
    let mut toggles = DisplayToggles::default();
    for arg in args {
        let (name, value) = arg.split_once('=').with_context(|| format!("expected name=bool, got `{arg}`"))?;
        let value = value.parse::<bool>().with_context(|| format!("`{value}` is not a bool"))?;
        toggles.set(name, value)?;
    }
    Ok(toggles)
}
