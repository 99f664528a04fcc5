// File: crates/duet-core/src/interaction.rs
// Summary: Pointer-driven zoom state machine and hover bookkeeping.
// States: Idle -> Dragging -> ZoomedIn (or back on a click), ZoomedIn -> Idle on reset.
// Hover is orthogonal: the newest hover query replaces any undelivered one.

use crate::axis::Domain;
use crate::domain::ZoomWindow;
use crate::geometry::{Point, Rect};
use crate::options::ZoomMode;
use crate::scale::TimeScale;
use crate::tooltip::TooltipQuery;

/// Pointer input in surface pixels, as delivered by a backend or window layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    DoubleClick { x: f32, y: f32 },
    Leave,
    /// Explicit reset control.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomState {
    Idle,
    Dragging {
        start: Point,
        current: Point,
        /// Zoom in effect when the drag began; restored on a click.
        previous: Option<ZoomWindow>,
    },
    ZoomedIn(ZoomWindow),
}

/// What a pointer event did to the zoom state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Unchanged,
    DragStarted,
    DragMoved,
    Zoomed(ZoomWindow),
    /// Pointer-up under the drag threshold.
    Click(Point),
    DragCancelled,
    Reset,
}

/// Plot geometry the state machine needs to turn pixels into domains.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub plot: Rect,
    pub x: TimeScale,
}

impl Viewport {
    /// Fraction of plot height above the bottom edge (0..=1).
    fn y_fraction(&self, py: f32) -> f64 {
        let h = self.plot.height().max(1.0);
        (((self.plot.bottom - py) / h) as f64).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct Interaction {
    state: ZoomState,
    hover: Option<Point>,
    pending: Option<(u64, TooltipQuery)>,
    frame: u64,
}

impl Default for Interaction {
    fn default() -> Self { Self::new() }
}

impl Interaction {
    pub fn new() -> Self {
        Self { state: ZoomState::Idle, hover: None, pending: None, frame: 0 }
    }

    pub fn state(&self) -> &ZoomState { &self.state }

    pub fn is_dragging(&self) -> bool { matches!(self.state, ZoomState::Dragging { .. }) }

    /// Zoom window currently applied to domains. A drag in progress keeps the
    /// window it started from.
    pub fn zoom_window(&self) -> Option<ZoomWindow> {
        match self.state {
            ZoomState::Idle => None,
            ZoomState::Dragging { previous, .. } => previous,
            ZoomState::ZoomedIn(w) => Some(w),
        }
    }

    /// Drag rectangle corners while dragging.
    pub fn drag_span(&self) -> Option<(Point, Point)> {
        match self.state {
            ZoomState::Dragging { start, current, .. } => Some((start, current)),
            _ => None,
        }
    }

    pub fn hover(&self) -> Option<Point> { self.hover }

    pub fn pointer_down(&mut self, p: Point, vp: &Viewport, mode: ZoomMode) -> Transition {
        if mode == ZoomMode::None || !vp.plot.contains(p.x, p.y) {
            return Transition::Unchanged;
        }
        let previous = self.zoom_window();
        self.state = ZoomState::Dragging { start: p, current: p, previous };
        // no tooltip while dragging
        self.clear_hover();
        Transition::DragStarted
    }

    /// Track the drag; returns `false` when no drag is active.
    pub fn drag_to(&mut self, p: Point, vp: &Viewport) -> bool {
        if let ZoomState::Dragging { current, .. } = &mut self.state {
            *current = vp.plot.clamp_point(p.x, p.y);
            true
        } else {
            false
        }
    }

    pub fn pointer_up(&mut self, p: Point, vp: &Viewport, mode: ZoomMode, threshold_px: f32) -> Transition {
        let ZoomState::Dragging { start, previous, .. } = self.state else {
            return Transition::Unchanged;
        };
        let end = vp.plot.clamp_point(p.x, p.y);
        let threshold = threshold_px.max(1.0);
        let zoom_x = mode.zooms_x() && (end.x - start.x).abs() > threshold;
        let zoom_y = mode.zooms_y() && (end.y - start.y).abs() > threshold;
        if !zoom_x && !zoom_y {
            self.state = previous.map_or(ZoomState::Idle, ZoomState::ZoomedIn);
            return Transition::Click(end);
        }
        let x = if zoom_x {
            Domain::spanning(vp.x.from_px(start.x), vp.x.from_px(end.x))
        } else {
            vp.x.domain()
        };
        let prev_band = previous.and_then(|w| w.y_band);
        let y_band = if zoom_y {
            let picked = Domain::spanning(vp.y_fraction(start.y), vp.y_fraction(end.y));
            let outer = prev_band.unwrap_or(Domain::new(0.0, 1.0));
            Some(Domain::new(outer.lerp(picked.min), outer.lerp(picked.max)))
        } else {
            prev_band
        };
        let window = ZoomWindow { x, y_band };
        tracing::debug!(x_min = x.min, x_max = x.max, "zoomed");
        self.state = ZoomState::ZoomedIn(window);
        Transition::Zoomed(window)
    }

    /// Pointer left the plot: hover goes away and a drag is abandoned.
    pub fn leave(&mut self) -> Transition {
        self.clear_hover();
        self.cancel_drag()
    }

    /// Abandon a drag in progress, restoring the state it started from.
    pub fn cancel_drag(&mut self) -> Transition {
        if let ZoomState::Dragging { previous, .. } = self.state {
            self.state = previous.map_or(ZoomState::Idle, ZoomState::ZoomedIn);
            return Transition::DragCancelled;
        }
        Transition::Unchanged
    }

    pub fn reset(&mut self) -> Transition {
        if matches!(self.state, ZoomState::Idle) {
            return Transition::Unchanged;
        }
        self.state = ZoomState::Idle;
        Transition::Reset
    }

    /// Programmatic zoom, bypassing the drag gesture.
    pub fn zoom_to(&mut self, window: ZoomWindow) {
        self.state = ZoomState::ZoomedIn(window);
    }

    /// Record a hover position and its resolved query, replacing any query not
    /// yet delivered.
    pub fn hover_at(&mut self, p: Point, query: Option<TooltipQuery>) {
        self.frame += 1;
        self.hover = Some(p);
        self.pending = query.map(|q| (self.frame, q));
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
        self.pending = None;
    }

    /// Take the newest undelivered query, if any.
    pub fn take_pending(&mut self) -> Option<(u64, TooltipQuery)> {
        if self.is_dragging() {
            return None;
        }
        self.pending.take()
    }
}
