// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that feeds winit pointer events into the chart and blits the raster
// output through softbuffer.
// Keys: R resets zoom, L flips the legend side, F toggles the text fallback, T cycles themes.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use duet_core::options::Toggle;
use duet_core::{theme, Chart, PointerEvent};
use duet_demo::{default_data_path, demo_composer, dual_axis_config, load_baseline_csv};
use duet_render_skia::RasterExt;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const DOUBLE_CLICK: Duration = Duration::from_millis(400);
const DOUBLE_CLICK_SLOP_PX: f32 = 4.0;

/// Turns left-button presses into `Down` or `DoubleClick`.
#[derive(Default)]
struct ClickTracker {
    last: Option<(Instant, f32, f32)>,
}

impl ClickTracker {
    fn press(&mut self, x: f32, y: f32) -> PointerEvent {
        let now = Instant::now();
        let double = self.last.is_some_and(|(t, lx, ly)| {
            now.duration_since(t) <= DOUBLE_CLICK
                && (x - lx).abs() <= DOUBLE_CLICK_SLOP_PX
                && (y - ly).abs() <= DOUBLE_CLICK_SLOP_PX
        });
        if double {
            self.last = None;
            PointerEvent::DoubleClick { x, y }
        } else {
            self.last = Some((now, x, y));
            PointerEvent::Down { x, y }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(default_data_path);
    let rows = load_baseline_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Duet - dual axis window demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 480.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut config = dual_axis_config(&rows, Default::default());
    let size = window.inner_size();
    config.options.width = size.width as i32;
    config.options.height = size.height as i32;
    let mut chart = Chart::new(config)?;
    let mut composer = demo_composer(chart.options().formatters.clone());
    let mut clicks = ClickTracker::default();
    let mut cursor = (0.0f32, 0.0f32);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let handled = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(new_size) => {
                        chart.resize(new_size.width as i32, new_size.height as i32);
                        Some(())
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = (position.x as f32, position.y as f32);
                        chart.handle_event(PointerEvent::Move { x: cursor.0, y: cursor.1 });
                        Some(())
                    }
                    WindowEvent::CursorLeft { .. } => {
                        chart.handle_event(PointerEvent::Leave);
                        Some(())
                    }
                    WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                        let ev = match state {
                            ElementState::Pressed => clicks.press(cursor.0, cursor.1),
                            ElementState::Released => PointerEvent::Up { x: cursor.0, y: cursor.1 },
                        };
                        let transition = chart.handle_event(ev);
                        tracing::debug!(?transition, "pointer");
                        Some(())
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => on_key(&mut chart, key),
                    _ => None,
                };
                if handled.is_some() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                chart.update_tooltip(&mut composer);
                if let Err(e) = draw(&chart, &mut surface) {
                    tracing::error!("draw failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

fn on_key(chart: &mut Chart, key: VirtualKeyCode) -> Option<()> {
    match key {
        VirtualKeyCode::R => {
            chart.handle_event(PointerEvent::Reset);
        }
        VirtualKeyCode::L | VirtualKeyCode::F => {
            let toggle = if key == VirtualKeyCode::L { Toggle::LegendPosition } else { Toggle::UseFallback };
            let mut toggles = chart.options().toggles;
            toggles.set_toggle(toggle, !toggles.get(toggle));
            chart.set_toggles(toggles);
        }
        VirtualKeyCode::T => {
            let presets = theme::presets();
            let current = presets.iter().position(|t| t.name == chart.options().theme.name).unwrap_or(0);
            if let Some(next) = presets.into_iter().cycle().nth(current + 1) {
                chart.set_theme(next);
            }
        }
        _ => return None,
    }
    Some(())
}

fn draw(chart: &Chart, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h) = chart.render_to_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w as u32), NonZeroU32::new(h as u32)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    // softbuffer wants 0RGB
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
