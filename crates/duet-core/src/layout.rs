// File: crates/duet-core/src/layout.rs
// Summary: Pixel layout of plot area, stacked y-axes, and legend for a given chart size.

use crate::axis::AxisSet;
use crate::geometry::Rect;
use crate::legend::{LegendLayout, LegendSpec};
use crate::options::{ChartOptions, LegendPosition};
use crate::types::{AXIS_STACK_PX, LEGEND_ROW_PX, LEGEND_SIDE_PX};

/// Right margin used when no y-axis sits on the right.
const BARE_RIGHT_PX: u32 = 24;

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub plot: Rect,
    /// Pixel column of each y-axis line, indexed like `AxisSet::y_axes`.
    pub y_axis_px: Vec<f32>,
    pub legend: Option<LegendLayout>,
}

impl Layout {
    pub fn compute(options: &ChartOptions, axes: &AxisSet, labels: &[(usize, &str)]) -> Self {
        let w = options.width.max(1);
        let h = options.height.max(1);
        let ins = options.insets;
        let n_left = axes.side(false).count() as u32;
        let n_right = axes.side(true).count() as u32;

        let left = ins.left + AXIS_STACK_PX * n_left.saturating_sub(1);
        let mut right = if n_right == 0 { BARE_RIGHT_PX } else { ins.right + AXIS_STACK_PX * (n_right - 1) };
        let mut bottom = ins.bottom;
        let toggles = &options.toggles;
        let legend_pos = toggles.show_legend.then(|| toggles.legend_position());
        match legend_pos {
            Some(LegendPosition::Side) => right += LEGEND_SIDE_PX,
            Some(LegendPosition::Bottom) => bottom += LEGEND_ROW_PX,
            None => {}
        }

        let plot = Rect::from_ltrb(
            left as f32,
            ins.top as f32,
            ((w as u32).saturating_sub(right) as f32).max(left as f32 + 1.0),
            ((h as u32).saturating_sub(bottom) as f32).max(ins.top as f32 + 1.0),
        );

        let mut y_axis_px = vec![plot.left; axes.y_axes().len()];
        for (k, i) in axes.side(false).enumerate() {
            y_axis_px[i] = plot.left - (k as u32 * AXIS_STACK_PX) as f32;
        }
        for (k, i) in axes.side(true).enumerate() {
            y_axis_px[i] = plot.right + (k as u32 * AXIS_STACK_PX) as f32;
        }

        let legend = legend_pos.map(|position| {
            let area = match position {
                LegendPosition::Bottom => Rect::from_ltrb(plot.left, (h as u32 - LEGEND_ROW_PX.min(h as u32)) as f32, plot.right, h as f32),
                LegendPosition::Side => Rect::from_ltrb(
                    w as f32 - LEGEND_SIDE_PX as f32,
                    plot.top,
                    w as f32,
                    plot.bottom,
                ),
            };
            let spec = LegendSpec {
                position,
                align: toggles.legend_align(),
                title: toggles.show_legend_title.then_some(options.legend_title.as_str()),
                actions: toggles.show_legend_actions,
            };
            LegendLayout::compute(area, &spec, labels)
        });

        Self { width: w, height: h, plot, y_axis_px, legend }
    }
}
