// File: crates/duet-core/src/render.rs
// Summary: Draw pass over an abstract surface: grid, stacked axes, gap-aware series,
// zoom selection, crosshair, legend, tooltip, and the textual fallback mode.

use crate::chart::{ActiveTooltip, Chart};
use crate::geometry::{Point, Rect};
use crate::grid::{nice_ticks, time_ticks};
use crate::legend::{LegendLayout, LEGEND_FONT_PX, RESET_LABEL};
use crate::options::TooltipPlacement;
use crate::segment::build_segments;
use crate::surface::{DrawSurface, Stroke, TextAlign, TextStyle};
use crate::types::estimate_text_width;

const TICK_FONT_PX: f32 = 11.0;
const TITLE_FONT_PX: f32 = 12.0;
const TOOLTIP_FONT_PX: f32 = 12.0;
const TOOLTIP_LINE_PX: f32 = 18.0;
const TOOLTIP_PAD_PX: f32 = 8.0;
const MARKER_RADIUS_PX: f32 = 3.0;

impl Chart {
    /// Draw the current state onto `surface`.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.clear(self.options.theme.background);
        if self.options.toggles.use_fallback {
            self.draw_fallback(surface);
            return;
        }
        self.draw_grid(surface);
        self.draw_axes(surface);
        self.draw_series(surface);
        self.draw_selection(surface);
        if let Some(tip) = &self.tooltip {
            self.draw_crosshair(surface, tip);
        }
        if let Some(legend) = &self.layout.legend {
            self.draw_legend(surface, legend);
        }
        if let Some(tip) = &self.tooltip {
            self.draw_tooltip(surface, tip);
        }
    }

    fn draw_grid(&self, s: &mut dyn DrawSurface) {
        let plot = self.layout.plot;
        let stroke = Stroke::solid(self.options.theme.grid, 1.0);
        let xs = self.x_scale();
        for t in time_ticks(self.view.x, 6) {
            let px = xs.to_px(t);
            s.line(Point::new(px, plot.top), Point::new(px, plot.bottom), &stroke);
        }
        // horizontal grid follows the first y-axis only
        let ys = self.y_scale(0);
        for v in nice_ticks(self.view.y_at(0), 5) {
            let py = ys.to_px(v);
            s.line(Point::new(plot.left, py), Point::new(plot.right, py), &stroke);
        }
    }

    fn draw_axes(&self, s: &mut dyn DrawSurface) {
        let theme = &self.options.theme;
        let fmt = &self.options.formatters;
        let plot = self.layout.plot;
        let axis_stroke = Stroke::solid(theme.axis_line, 1.5);
        let tick_style = TextStyle::new(TICK_FONT_PX, theme.tick).numeric();
        let title_style = TextStyle::new(TITLE_FONT_PX, theme.axis_label).aligned(TextAlign::Center);

        s.line(Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom), &axis_stroke);
        let xs = self.x_scale();
        for t in time_ticks(self.view.x, 6) {
            let px = xs.to_px(t);
            s.line(Point::new(px, plot.bottom), Point::new(px, plot.bottom + 4.0), &axis_stroke);
            s.text(&fmt.date(t as i64), Point::new(px, plot.bottom + 18.0), &tick_style.aligned(TextAlign::Center));
        }
        let x_title = &self.axes.x().title;
        if !x_title.is_empty() {
            s.text(x_title, Point::new((plot.left + plot.right) * 0.5, plot.bottom + 38.0), &title_style);
        }

        for (i, axis) in self.axes.y_axes().iter().enumerate() {
            let ax = self.layout.y_axis_px[i];
            let ys = self.y_scale(i);
            s.line(Point::new(ax, plot.top), Point::new(ax, plot.bottom), &axis_stroke);
            let (dir, align) = if axis.opposite { (1.0, TextAlign::Left) } else { (-1.0, TextAlign::Right) };
            for v in nice_ticks(self.view.y_at(i), 5) {
                let py = ys.to_px(v);
                s.line(Point::new(ax, py), Point::new(ax + 4.0 * dir, py), &axis_stroke);
                s.text(&fmt.number(Some(v)), Point::new(ax + 7.0 * dir, py + 4.0), &tick_style.aligned(align));
            }
            if !axis.title.is_empty() {
                s.text(&axis.title, Point::new(ax, plot.top - 8.0), &title_style);
            }
        }
    }

    fn draw_series(&self, s: &mut dyn DrawSurface) {
        let theme = &self.options.theme;
        let xs = self.x_scale();
        s.push_clip(self.layout.plot);
        for (i, series) in self.series.iter().enumerate().filter(|(_, ser)| ser.visible) {
            let color = theme.series_color(i);
            let stroke = Stroke::solid(color, 2.0);
            for seg in build_segments(series, &xs, &self.y_scale(series.axis_index)) {
                if seg.len() >= 2 {
                    s.polyline(&seg.points, &stroke);
                }
                if self.options.point_markers {
                    for p in &seg.points {
                        s.fill_circle(*p, MARKER_RADIUS_PX, color);
                    }
                }
            }
        }
        s.pop_clip();
    }

    fn draw_selection(&self, s: &mut dyn DrawSurface) {
        let Some((a, b)) = self.interaction.drag_span() else { return };
        let plot = self.layout.plot;
        let zoom = self.options.zoom;
        let (left, right) = if zoom.zooms_x() { (a.x.min(b.x), a.x.max(b.x)) } else { (plot.left, plot.right) };
        let (top, bottom) = if zoom.zooms_y() { (a.y.min(b.y), a.y.max(b.y)) } else { (plot.top, plot.bottom) };
        s.fill_rect(Rect::from_ltrb(left, top, right, bottom), self.options.theme.selection);
    }

    fn draw_crosshair(&self, s: &mut dyn DrawSurface, tip: &ActiveTooltip) {
        let plot = self.layout.plot;
        let xs = self.x_scale();
        let px = xs.to_px(tip.query.x as f64);
        if px < plot.left || px > plot.right {
            return;
        }
        s.line(
            Point::new(px, plot.top),
            Point::new(px, plot.bottom),
            &Stroke::dashed(self.options.theme.crosshair, 1.0),
        );
        for point in &tip.query.points {
            let Some(sample) = point.sample else { continue };
            let Some(y) = sample.y else { continue };
            let axis = self.series[point.series_index].axis_index;
            let center = Point::new(xs.to_px(sample.x as f64), self.y_scale(axis).to_px(y));
            if plot.contains(center.x, center.y) {
                s.fill_circle(center, MARKER_RADIUS_PX + 1.0, self.options.theme.series_color(point.series_index));
            }
        }
    }

    fn draw_legend(&self, s: &mut dyn DrawSurface, legend: &LegendLayout) {
        let theme = &self.options.theme;
        let label_style = TextStyle::new(LEGEND_FONT_PX, theme.axis_label);
        if let Some((title, at)) = &legend.title {
            s.text(title, *at, &label_style);
        }
        for item in &legend.items {
            let visible = self.series.get(item.series_index).is_some_and(|ser| ser.visible);
            let (swatch, text) = if visible {
                (theme.series_color(item.series_index), theme.axis_label)
            } else {
                (theme.muted, theme.muted)
            };
            s.fill_rect(item.swatch, swatch);
            s.text(&item.label, item.text_at, &TextStyle::new(LEGEND_FONT_PX, text));
        }
        if let Some(r) = legend.reset {
            let zoomed = self.interaction.zoom_window().is_some();
            let color = if zoomed { theme.axis_label } else { theme.muted };
            s.stroke_rect(r, &Stroke::solid(color, 1.0));
            s.text(
                RESET_LABEL,
                Point::new((r.left + r.right) * 0.5, r.bottom - 6.0),
                &TextStyle::new(LEGEND_FONT_PX, color).aligned(TextAlign::Center),
            );
        }
    }

    fn draw_tooltip(&self, s: &mut dyn DrawSurface, tip: &ActiveTooltip) {
        let theme = &self.options.theme;
        let content = &tip.content;
        let row_text = |name: &str, value: &str| format!("{name}  {value}");
        let mut widest = estimate_text_width(&content.header, TOOLTIP_FONT_PX);
        for row in &content.rows {
            widest = widest.max(estimate_text_width(&row_text(&row.series, &row.value), TOOLTIP_FONT_PX) + 16.0);
        }
        if let Some(f) = &content.footer {
            widest = widest.max(estimate_text_width(f, TOOLTIP_FONT_PX));
        }
        let lines = 1 + content.rows.len() + usize::from(content.footer.is_some());
        let w = widest + 2.0 * TOOLTIP_PAD_PX;
        let h = lines as f32 * TOOLTIP_LINE_PX + TOOLTIP_PAD_PX;

        let bounds = match self.options.tooltip_placement {
            TooltipPlacement::Inline => self.layout.plot,
            TooltipPlacement::Outside => Rect::from_ltwh(0.0, 0.0, self.layout.width as f32, self.layout.height as f32),
        };
        let mut left = tip.anchor.x + 14.0;
        if left + w > bounds.right {
            left = tip.anchor.x - 14.0 - w;
        }
        let rect = Rect::from_ltwh(left, tip.anchor.y + 14.0, w, h).nudge_inside(&bounds);

        s.fill_rect(rect, theme.tooltip_background);
        s.stroke_rect(rect, &Stroke::solid(theme.tooltip_border, 1.0));
        let text_style = TextStyle::new(TOOLTIP_FONT_PX, theme.tooltip_text);
        let x0 = rect.left + TOOLTIP_PAD_PX;
        let mut baseline = rect.top + TOOLTIP_LINE_PX;
        s.text(&content.header, Point::new(x0, baseline), &text_style);
        for row in &content.rows {
            baseline += TOOLTIP_LINE_PX;
            s.fill_rect(
                Rect::from_ltwh(x0, baseline - 9.0, 8.0, 8.0),
                theme.series_color(row.series_index),
            );
            s.text(&row.series, Point::new(x0 + 14.0, baseline), &text_style);
            s.text(
                &row.value,
                Point::new(rect.right - TOOLTIP_PAD_PX, baseline),
                &text_style.aligned(TextAlign::Right).numeric(),
            );
        }
        if let Some(footer) = &content.footer {
            baseline += TOOLTIP_LINE_PX;
            s.text(footer, Point::new(x0, baseline), &text_style);
        }
    }

    /// Text-only rendition used when `useFallback` is on.
    fn draw_fallback(&self, s: &mut dyn DrawSurface) {
        let theme = &self.options.theme;
        let fmt = &self.options.formatters;
        let mut y = 28.0;
        if !self.options.accessibility_label.is_empty() {
            s.text(&self.options.accessibility_label, Point::new(16.0, y), &TextStyle::new(14.0, theme.axis_label));
            y += 24.0;
        }
        let style = TextStyle::new(12.0, theme.tick);
        for series in self.series.iter().filter(|ser| ser.visible) {
            let axis = &self.axes.y_axes()[series.axis_index];
            let last = series.last_present();
            let line = format!(
                "{} ({}): {} samples, last {} at {}",
                series.name,
                axis.title,
                series.samples.len(),
                fmt.number(last.and_then(|l| l.y)),
                last.map(|l| fmt.date(l.x)).unwrap_or_else(|| fmt.number(None)),
            );
            s.text(&line, Point::new(16.0, y), &style);
            y += 20.0;
        }
    }
}
