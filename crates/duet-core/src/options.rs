// File: crates/duet-core/src/options.rs
// Summary: Per-chart configuration: size, zoom mode, tooltip placement, display toggles, formatters.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::format::Formatters;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomMode {
    None,
    #[default]
    X,
    Y,
    XY,
}

impl ZoomMode {
    pub fn zooms_x(self) -> bool { matches!(self, ZoomMode::X | ZoomMode::XY) }
    pub fn zooms_y(self) -> bool { matches!(self, ZoomMode::Y | ZoomMode::XY) }
}

impl FromStr for ZoomMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ZoomMode::None),
            "x" => Ok(ZoomMode::X),
            "y" => Ok(ZoomMode::Y),
            "xy" => Ok(ZoomMode::XY),
            other => Err(format!("unknown zoom mode `{other}`")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipPlacement {
    /// Kept inside the plot area.
    #[default]
    Inline,
    /// May extend into the chart margins.
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    Bottom,
    Side,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendAlign {
    Start,
    Center,
}

/// Named boolean display switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    ShowLegend,
    LegendPosition,
    LegendHorizontalAlign,
    ShowLegendTitle,
    ShowLegendActions,
    UseFallback,
}

impl Toggle {
    pub const ALL: [Toggle; 6] = [
        Toggle::ShowLegend,
        Toggle::LegendPosition,
        Toggle::LegendHorizontalAlign,
        Toggle::ShowLegendTitle,
        Toggle::ShowLegendActions,
        Toggle::UseFallback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Toggle::ShowLegend => "showLegend",
            Toggle::LegendPosition => "legendPosition",
            Toggle::LegendHorizontalAlign => "legendHorizontalAlign",
            Toggle::ShowLegendTitle => "showLegendTitle",
            Toggle::ShowLegendActions => "showLegendActions",
            Toggle::UseFallback => "useFallback",
        }
    }
}

impl FromStr for Toggle {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Toggle::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ConfigError::UnknownToggle(s.to_owned()))
    }
}

/// Legend and fallback switches, each independently settable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayToggles {
    pub show_legend: bool,
    /// `true` places the legend beside the plot, `false` below it.
    pub legend_side: bool,
    /// `true` centers bottom legend items, `false` aligns them to the start.
    pub legend_center: bool,
    pub show_legend_title: bool,
    pub show_legend_actions: bool,
    pub use_fallback: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_legend: true,
            legend_side: false,
            legend_center: false,
            show_legend_title: false,
            show_legend_actions: false,
            use_fallback: false,
        }
    }
}

impl DisplayToggles {
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::ShowLegend => self.show_legend,
            Toggle::LegendPosition => self.legend_side,
            Toggle::LegendHorizontalAlign => self.legend_center,
            Toggle::ShowLegendTitle => self.show_legend_title,
            Toggle::ShowLegendActions => self.show_legend_actions,
            Toggle::UseFallback => self.use_fallback,
        }
    }

    pub fn set_toggle(&mut self, toggle: Toggle, value: bool) {
        let slot = match toggle {
            Toggle::ShowLegend => &mut self.show_legend,
            Toggle::LegendPosition => &mut self.legend_side,
            Toggle::LegendHorizontalAlign => &mut self.legend_center,
            Toggle::ShowLegendTitle => &mut self.show_legend_title,
            Toggle::ShowLegendActions => &mut self.show_legend_actions,
            Toggle::UseFallback => &mut self.use_fallback,
        };
        *slot = value;
    }

    /// Set a toggle by its settings name, e.g. `"showLegendTitle"`.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        self.set_toggle(name.parse()?, value);
        Ok(())
    }

    pub fn legend_position(&self) -> LegendPosition {
        if self.legend_side { LegendPosition::Side } else { LegendPosition::Bottom }
    }

    pub fn legend_align(&self) -> LegendAlign {
        if self.legend_center { LegendAlign::Center } else { LegendAlign::Start }
    }
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub zoom: ZoomMode,
    pub tooltip_placement: TooltipPlacement,
    pub toggles: DisplayToggles,
    pub legend_title: String,
    /// Draw a dot per present sample (and for isolated samples between gaps).
    pub point_markers: bool,
    /// Minimum drag distance before pointer-up counts as a zoom.
    pub drag_threshold_px: f32,
    /// Hover resolves to nothing when the nearest sample is further than this.
    pub snap_tolerance_ms: Option<i64>,
    /// Plain-text description for assistive technology.
    pub accessibility_label: String,
    pub theme: Theme,
    pub formatters: Formatters,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            zoom: ZoomMode::default(),
            tooltip_placement: TooltipPlacement::default(),
            toggles: DisplayToggles::default(),
            legend_title: "Legend".to_owned(),
            point_markers: false,
            drag_threshold_px: 5.0,
            snap_tolerance_ms: None,
            accessibility_label: String::new(),
            theme: Theme::default(),
            formatters: Formatters::default(),
        }
    }
}
