// File: crates/duet-core/src/theme.rs
// Summary: Light/Dark palettes for chart chrome and series strokes.

/// Backend-neutral 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub crosshair: Rgba,
    pub selection: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_border: Rgba,
    pub tooltip_text: Rgba,
    pub muted: Rgba,
    /// Series strokes, assigned by series position (wrapping).
    pub palette: Vec<Rgba>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            tick: Rgba::from_argb(255, 150, 150, 160),
            crosshair: Rgba::from_argb(255, 255, 230, 70),
            selection: Rgba::from_argb(64, 64, 160, 255),
            tooltip_background: Rgba::from_argb(240, 30, 30, 36),
            tooltip_border: Rgba::from_argb(255, 90, 90, 100),
            tooltip_text: Rgba::from_argb(255, 235, 235, 245),
            muted: Rgba::from_argb(255, 100, 100, 110),
            palette: vec![
                Rgba::from_argb(255, 64, 160, 255),
                Rgba::from_argb(255, 40, 200, 120),
                Rgba::from_argb(255, 255, 150, 60),
                Rgba::from_argb(255, 220, 80, 80),
                Rgba::from_argb(255, 180, 120, 255),
                Rgba::from_argb(255, 0, 200, 200),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            grid: Rgba::from_argb(255, 230, 230, 235),
            axis_line: Rgba::from_argb(255, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            tick: Rgba::from_argb(255, 100, 100, 110),
            crosshair: Rgba::from_argb(255, 30, 120, 240),
            selection: Rgba::from_argb(56, 32, 120, 200),
            tooltip_background: Rgba::from_argb(245, 255, 255, 255),
            tooltip_border: Rgba::from_argb(255, 180, 180, 190),
            tooltip_text: Rgba::from_argb(255, 20, 20, 30),
            muted: Rgba::from_argb(255, 170, 170, 180),
            palette: vec![
                Rgba::from_argb(255, 32, 120, 200),
                Rgba::from_argb(255, 20, 160, 90),
                Rgba::from_argb(255, 220, 110, 20),
                Rgba::from_argb(255, 200, 60, 60),
                Rgba::from_argb(255, 130, 70, 200),
                Rgba::from_argb(255, 0, 150, 150),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> Rgba {
        if self.palette.is_empty() {
            return self.axis_line;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::dark)
}
