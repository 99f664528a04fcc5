// File: crates/demo/src/main.rs
// Summary: Headless demo page: renders the dual-axis fixture at rest, while hovering the traffic peak,
// and after an x-zoom drag, writing PNGs to target/out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use duet_core::{theme, Chart, PointerEvent, Transition};
use duet_demo::{default_data_path, demo_composer, dual_axis_config, load_baseline_csv, parse_toggle_args};
use duet_render_skia::RasterExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [csv path] [theme=<name>] [name=bool ...]
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (path, overrides) = match args.split_first() {
        Some((first, rest)) if !first.contains('=') => (PathBuf::from(first), rest),
        _ => (default_data_path(), args.as_slice()),
    };
    let (themes, toggle_args): (Vec<&str>, Vec<&str>) =
        overrides.iter().map(String::as_str).partition(|a| a.starts_with("theme="));
    let toggles = parse_toggle_args(toggle_args)?;

    let rows = load_baseline_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if rows.is_empty() {
        anyhow::bail!("no rows loaded from {}", path.display());
    }

    let mut config = dual_axis_config(&rows, toggles);
    if let Some(name) = themes.last().and_then(|a| a.strip_prefix("theme=")) {
        config.options.theme = theme::find(name);
    }
    let mut chart = Chart::new(config)?;
    let out_dir = PathBuf::from("target/out");

    let out = out_dir.join("duet_baseline.png");
    chart.render_to_png(&out)?;
    tracing::info!(path = %out.display(), "wrote baseline");

    // Hover the busiest sample of the traffic series.
    let peak = rows
        .iter()
        .filter_map(|r| r.events.map(|v| (r.time, v)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(t, _)| t)
        .context("fixture has no traffic values")?;
    let plot = chart.plot_rect();
    let x = chart.x_scale().to_px(peak as f64);
    chart.handle_event(PointerEvent::Move { x, y: plot.top + plot.height() * 0.3 });
    let mut composer = demo_composer(chart.options().formatters.clone());
    if let Some(content) = chart.update_tooltip(&mut composer) {
        tracing::info!(header = %content.header, rows = content.rows.len(), "tooltip");
    }
    let out = out_dir.join("duet_hover.png");
    chart.render_to_png(&out)?;
    tracing::info!(path = %out.display(), "wrote hover");

    // Drag across the middle third of the plot.
    chart.handle_event(PointerEvent::Leave);
    let y = plot.top + plot.height() * 0.5;
    chart.handle_event(PointerEvent::Down { x: plot.left + plot.width() / 3.0, y });
    chart.handle_event(PointerEvent::Move { x: plot.left + plot.width() * 2.0 / 3.0, y });
    match chart.handle_event(PointerEvent::Up { x: plot.left + plot.width() * 2.0 / 3.0, y }) {
        Transition::Zoomed(window) => tracing::info!(min = window.x.min, max = window.x.max, "zoomed"),
        other => tracing::warn!(?other, "drag did not zoom"),
    }
    let out = out_dir.join("duet_zoom.png");
    chart.render_to_png(&out)?;
    tracing::info!(path = %out.display(), "wrote zoom");

    Ok(())
}
