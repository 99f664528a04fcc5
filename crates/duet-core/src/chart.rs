// File: crates/duet-core/src/chart.rs
// Summary: Chart instance: owns validated series/axes, derived domains and layout,
// and routes pointer events through the interaction state machine.

use crate::axis::{Axis, AxisSet, Domain};
use crate::domain::{resolve_domains, Domains, ZoomWindow};
use crate::error::ConfigError;
use crate::geometry::{Point, Rect};
use crate::interaction::{Interaction, PointerEvent, Transition, Viewport, ZoomState};
use crate::layout::Layout;
use crate::legend::{LegendHit, LegendLayout};
use crate::options::{ChartOptions, DisplayToggles};
use crate::scale::{TimeScale, ValueScale};
use crate::segment::{build_segments, Segment};
use crate::series::{normalize, NormalizedSeries, Series};
use crate::theme::Theme;
use crate::tooltip::{compose_safely, resolve_query, TooltipComposer, TooltipContent, TooltipQuery};

/// Everything a chart is built from.
#[derive(Clone, Debug, Default)]
pub struct ChartConfig {
    pub series: Vec<Series>,
    pub axes: Vec<Axis>,
    pub options: ChartOptions,
}

/// Tooltip currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveTooltip {
    /// Hover frame the content was composed for.
    pub frame: u64,
    pub query: TooltipQuery,
    pub content: TooltipContent,
    pub anchor: Point,
}

pub struct Chart {
    pub(crate) axes: AxisSet,
    pub(crate) series: Vec<NormalizedSeries>,
    pub(crate) options: ChartOptions,
    pub(crate) layout: Layout,
    pub(crate) interaction: Interaction,
    global: Domains,
    pub(crate) view: Domains,
    pub(crate) tooltip: Option<ActiveTooltip>,
}

impl Chart {
    /// Validate `config` and build the derived state. Configuration problems
    /// (unknown or duplicate axis ids, bad series names) fail here.
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        let axes = AxisSet::new(config.axes)?;
        let series = normalize(&config.series, &axes)?;
        let options = config.options;
        let layout = Layout::compute(&options, &axes, &legend_labels(&series));
        let global = resolve_domains(&series, &axes, None);
        Ok(Self {
            axes,
            series,
            options,
            layout,
            interaction: Interaction::new(),
            view: global.clone(),
            global,
            tooltip: None,
        })
    }

    /// Replace all series. On error the chart keeps its previous data.
    /// Zoom and hover are discarded.
    pub fn set_series(&mut self, series: &[Series]) -> Result<(), ConfigError> {
        self.series = normalize(series, &self.axes)?;
        self.interaction = Interaction::new();
        self.tooltip = None;
        self.relayout();
        self.recompute();
        Ok(())
    }

    /// New container size; domains are kept, pixel-anchored hover and any drag
    /// in progress are dropped.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width == self.options.width && height == self.options.height {
            return;
        }
        self.options.width = width;
        self.options.height = height;
        self.relayout();
        self.interaction.cancel_drag();
        self.interaction.clear_hover();
        self.tooltip = None;
    }

    pub fn set_theme(&mut self, theme: Theme) { self.options.theme = theme; }

    pub fn set_toggles(&mut self, toggles: DisplayToggles) {
        self.options.toggles = toggles;
        self.relayout();
    }

    /// Show or hide a series by name. Returns `false` when no series has that name.
    pub fn set_series_visible(&mut self, name: &str, visible: bool) -> bool {
        let Some(s) = self.series.iter_mut().find(|s| s.name == name) else {
            return false;
        };
        s.visible = visible;
        self.tooltip = None;
        self.interaction.clear_hover();
        self.recompute();
        true
    }

    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn axes(&self) -> &AxisSet { &self.axes }
    pub fn series(&self) -> &[NormalizedSeries] { &self.series }
    pub fn width(&self) -> i32 { self.layout.width }
    pub fn height(&self) -> i32 { self.layout.height }
    pub fn plot_rect(&self) -> Rect { self.layout.plot }
    pub fn legend(&self) -> Option<&LegendLayout> { self.layout.legend.as_ref() }
    pub fn accessibility_label(&self) -> &str { &self.options.accessibility_label }

    /// Domains in effect for the current zoom state.
    pub fn domains(&self) -> &Domains { &self.view }

    /// Domains with no zoom applied.
    pub fn global_domains(&self) -> &Domains { &self.global }

    pub fn zoom_state(&self) -> &ZoomState { self.interaction.state() }

    pub fn x_scale(&self) -> TimeScale { TimeScale::for_plot(&self.layout.plot, self.view.x) }

    pub fn y_scale(&self, axis_index: usize) -> ValueScale {
        ValueScale::for_plot(&self.layout.plot, self.view.y_at(axis_index))
    }

    /// Drawable segments of the series at `index` under the current view.
    pub fn segments(&self, index: usize) -> Vec<Segment> {
        let Some(s) = self.series.get(index) else { return Vec::new() };
        build_segments(s, &self.x_scale(), &self.y_scale(s.axis_index))
    }

    pub fn zoom_to(&mut self, x: Domain) {
        self.interaction.zoom_to(ZoomWindow::x_only(x));
        self.tooltip = None;
        self.recompute();
    }

    pub fn reset_zoom(&mut self) -> Transition {
        let t = self.interaction.reset();
        if t == Transition::Reset {
            self.tooltip = None;
            self.recompute();
        }
        t
    }

    fn viewport(&self) -> Viewport { Viewport { plot: self.layout.plot, x: self.x_scale() } }

    /// Feed one pointer event. The returned transition describes the zoom effect;
    /// hover updates are picked up by `update_tooltip`.
    pub fn handle_event(&mut self, event: PointerEvent) -> Transition {
        let vp = self.viewport();
        match event {
            PointerEvent::Down { x, y } => {
                if let Some(hit) = self.layout.legend.as_ref().and_then(|l| l.hit(x, y)) {
                    return self.legend_click(hit);
                }
                let t = self.interaction.pointer_down(Point::new(x, y), &vp, self.options.zoom);
                if t == Transition::DragStarted {
                    self.tooltip = None;
                }
                t
            }
            PointerEvent::Move { x, y } => {
                let p = Point::new(x, y);
                if self.interaction.drag_to(p, &vp) {
                    return Transition::DragMoved;
                }
                if !vp.plot.contains(x, y) {
                    self.interaction.clear_hover();
                    self.tooltip = None;
                    return Transition::Unchanged;
                }
                let cursor = vp.x.from_px(x).round() as i64;
                let window = self.interaction.zoom_window().map(|w| w.x);
                let query = resolve_query(&self.series, cursor, window.as_ref(), self.options.snap_tolerance_ms);
                if query.is_none() {
                    self.tooltip = None;
                }
                self.interaction.hover_at(p, query);
                Transition::Unchanged
            }
            PointerEvent::Up { x, y } => {
                let t = self.interaction.pointer_up(
                    Point::new(x, y),
                    &vp,
                    self.options.zoom,
                    self.options.drag_threshold_px,
                );
                if matches!(t, Transition::Zoomed(_)) {
                    self.tooltip = None;
                    self.recompute();
                }
                t
            }
            PointerEvent::DoubleClick { x, y } if vp.plot.contains(x, y) => self.reset_zoom(),
            PointerEvent::DoubleClick { .. } => Transition::Unchanged,
            PointerEvent::Leave => {
                self.tooltip = None;
                self.interaction.leave()
            }
            PointerEvent::Reset => self.reset_zoom(),
        }
    }

    fn legend_click(&mut self, hit: LegendHit) -> Transition {
        match hit {
            LegendHit::ResetZoom => self.reset_zoom(),
            LegendHit::Series(i) => {
                if let Some(name) = self.series.get(i).map(|s| s.name.clone()) {
                    let visible = !self.series[i].visible;
                    self.set_series_visible(&name, visible);
                }
                Transition::Unchanged
            }
        }
    }

    /// Deliver the newest hover query to `composer`, at most once per hover frame
    /// and never while dragging. Returns the content currently on screen.
    pub fn update_tooltip(&mut self, composer: &mut dyn TooltipComposer) -> Option<&TooltipContent> {
        if self.interaction.is_dragging() {
            self.tooltip = None;
            return None;
        }
        if let Some((frame, query)) = self.interaction.take_pending() {
            let anchor = self.interaction.hover().unwrap_or_default();
            self.tooltip = compose_safely(composer, &query).map(|content| ActiveTooltip { frame, query, content, anchor });
        }
        self.tooltip.as_ref().map(|t| &t.content)
    }

    pub fn tooltip(&self) -> Option<&ActiveTooltip> { self.tooltip.as_ref() }

    fn relayout(&mut self) {
        self.layout = Layout::compute(&self.options, &self.axes, &legend_labels(&self.series));
    }

    fn recompute(&mut self) {
        self.global = resolve_domains(&self.series, &self.axes, None);
        self.view = match self.interaction.zoom_window() {
            Some(w) => resolve_domains(&self.series, &self.axes, Some(&w)),
            None => self.global.clone(),
        };
    }
}

fn legend_labels(series: &[NormalizedSeries]) -> Vec<(usize, &str)> {
    series.iter().enumerate().map(|(i, s)| (i, s.name.as_str())).collect()
}
