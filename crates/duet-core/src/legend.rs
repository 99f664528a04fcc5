// File: crates/duet-core/src/legend.rs
// Summary: Legend layout and hit testing (series visibility items, optional title and reset action).

use crate::geometry::{Point, Rect};
use crate::options::{LegendAlign, LegendPosition};
use crate::types::estimate_text_width;

pub const LEGEND_FONT_PX: f32 = 12.0;
pub const RESET_LABEL: &str = "Reset zoom";

const SWATCH_PX: f32 = 12.0;
const GAP_PX: f32 = 6.0;
const ITEM_GAP_PX: f32 = 16.0;
const ROW_PX: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub series_index: usize,
    pub label: String,
    /// Full clickable box.
    pub rect: Rect,
    pub swatch: Rect,
    /// Text baseline origin.
    pub text_at: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendHit {
    Series(usize),
    ResetZoom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub area: Rect,
    pub title: Option<(String, Point)>,
    pub items: Vec<LegendItem>,
    pub reset: Option<Rect>,
}

pub struct LegendSpec<'a> {
    pub position: LegendPosition,
    pub align: LegendAlign,
    pub title: Option<&'a str>,
    pub actions: bool,
}

impl LegendLayout {
    pub fn compute(area: Rect, spec: &LegendSpec<'_>, labels: &[(usize, &str)]) -> Self {
        match spec.position {
            LegendPosition::Bottom => Self::row(area, spec, labels),
            LegendPosition::Side => Self::column(area, spec, labels),
        }
    }

    fn row(area: Rect, spec: &LegendSpec<'_>, labels: &[(usize, &str)]) -> Self {
        let mid = area.top + area.height() * 0.5;
        let baseline = mid + LEGEND_FONT_PX * 0.35;
        let mut x = area.left;
        let title = spec.title.map(|t| {
            let at = Point::new(x, baseline);
            x += estimate_text_width(t, LEGEND_FONT_PX) + ITEM_GAP_PX;
            (t.to_owned(), at)
        });
        let mut items = Vec::with_capacity(labels.len());
        for &(series_index, label) in labels {
            let w = SWATCH_PX + GAP_PX + estimate_text_width(label, LEGEND_FONT_PX);
            items.push(LegendItem {
                series_index,
                label: label.to_owned(),
                rect: Rect::from_ltwh(x, mid - ROW_PX * 0.5, w, ROW_PX),
                swatch: Rect::from_ltwh(x, mid - SWATCH_PX * 0.5, SWATCH_PX, SWATCH_PX),
                text_at: Point::new(x + SWATCH_PX + GAP_PX, baseline),
            });
            x += w + ITEM_GAP_PX;
        }
        let reset = spec.actions.then(|| {
            let w = estimate_text_width(RESET_LABEL, LEGEND_FONT_PX) + 2.0 * GAP_PX;
            let r = Rect::from_ltwh(x, mid - ROW_PX * 0.5, w, ROW_PX);
            x += w;
            r
        });
        let mut layout = Self { area, title, items, reset };
        if spec.align == LegendAlign::Center {
            let used = (x - area.left).max(0.0);
            let shift = ((area.width() - used) * 0.5).max(0.0);
            layout.shift_x(shift);
        }
        layout
    }

    fn column(area: Rect, spec: &LegendSpec<'_>, labels: &[(usize, &str)]) -> Self {
        let left = area.left + GAP_PX;
        let mut y = area.top;
        let title = spec.title.map(|t| {
            let at = Point::new(left, y + ROW_PX * 0.5 + LEGEND_FONT_PX * 0.35);
            y += ROW_PX;
            (t.to_owned(), at)
        });
        let items = labels
            .iter()
            .map(|&(series_index, label)| {
                let mid = y + ROW_PX * 0.5;
                let w = SWATCH_PX + GAP_PX + estimate_text_width(label, LEGEND_FONT_PX);
                y += ROW_PX;
                LegendItem {
                    series_index,
                    label: label.to_owned(),
                    rect: Rect::from_ltwh(left, mid - ROW_PX * 0.5, w, ROW_PX),
                    swatch: Rect::from_ltwh(left, mid - SWATCH_PX * 0.5, SWATCH_PX, SWATCH_PX),
                    text_at: Point::new(left + SWATCH_PX + GAP_PX, mid + LEGEND_FONT_PX * 0.35),
                }
            })
            .collect();
        let reset = spec.actions.then(|| {
            let w = estimate_text_width(RESET_LABEL, LEGEND_FONT_PX) + 2.0 * GAP_PX;
            Rect::from_ltwh(left, y + GAP_PX, w, ROW_PX)
        });
        Self { area, title, items, reset }
    }

    fn shift_x(&mut self, dx: f32) {
        let mv = |r: &mut Rect| {
            r.left += dx;
            r.right += dx;
        };
        if let Some((_, at)) = self.title.as_mut() {
            at.x += dx;
        }
        for item in &mut self.items {
            mv(&mut item.rect);
            mv(&mut item.swatch);
            item.text_at.x += dx;
        }
        if let Some(r) = self.reset.as_mut() {
            mv(r);
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> Option<LegendHit> {
        if self.reset.is_some_and(|r| r.contains(x, y)) {
            return Some(LegendHit::ResetZoom);
        }
        self.items.iter().find(|i| i.rect.contains(x, y)).map(|i| LegendHit::Series(i.series_index))
    }
}
