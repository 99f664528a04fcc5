// File: crates/duet-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms between domains and plot pixels.

use crate::axis::Domain;
use crate::geometry::Rect;

/// Horizontal time scale mapping a time domain onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub tmin: f64,
    pub tmax: f64,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, domain: Domain) -> Self {
        let mut s = Self { left_px, right_px, tmin: domain.min, tmax: domain.max };
        if (s.tmax - s.tmin).abs() < 1e-9 {
            s.tmin -= 0.5;
            s.tmax += 0.5;
        }
        s
    }

    pub fn for_plot(plot: &Rect, domain: Domain) -> Self { Self::new(plot.left, plot.right, domain) }

    #[inline]
    pub fn to_px(&self, t: f64) -> f32 {
        let span = (self.tmax - self.tmin).max(1e-9);
        self.left_px + ((t - self.tmin) / span) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let width = (self.right_px - self.left_px).max(1.0);
        self.tmin + ((px - self.left_px) / width) as f64 * (self.tmax - self.tmin)
    }

    pub fn domain(&self) -> Domain { Domain::new(self.tmin, self.tmax) }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, domain: Domain) -> Self {
        let mut s = Self { top_px, bottom_px, vmin: domain.min, vmax: domain.max };
        // flat data sits mid-plot instead of on the floor
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmin -= 0.5;
            s.vmax += 0.5;
        }
        s
    }

    pub fn for_plot(plot: &Rect, domain: Domain) -> Self { Self::new(plot.top, plot.bottom, domain) }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
