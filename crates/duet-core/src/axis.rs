// File: crates/duet-core/src/axis.rs
// Summary: Axis model (ids, orientation, placement), numeric domains, and the validated axis set.

use std::collections::HashSet;
use std::fmt;

use crate::error::ConfigError;

/// Identifier that binds series to a y-axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId(String);

impl AxisId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for AxisId {
    fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for AxisId {
    fn from(s: String) -> Self { Self(s) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    X,
    Y,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub id: AxisId,
    pub title: String,
    pub orientation: Orientation,
    /// Y only: draw on the right-hand side of the plot.
    pub opposite: bool,
}

impl Axis {
    pub fn x(id: impl Into<AxisId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), orientation: Orientation::X, opposite: false }
    }

    pub fn y(id: impl Into<AxisId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), orientation: Orientation::Y, opposite: false }
    }

    pub fn opposite(mut self) -> Self {
        self.opposite = true;
        self
    }
}

/// Closed numeric range `[min, max]` an axis scales to fit the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Fallback for axes without any bound sample.
    pub const DEFAULT: Domain = Domain { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }

    /// Build from two unordered endpoints.
    pub fn spanning(a: f64, b: f64) -> Self { Self { min: a.min(b), max: a.max(b) } }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Value at fraction `t` of the way from `min` to `max`.
    pub fn lerp(&self, t: f64) -> f64 { self.min + (self.max - self.min) * t }

    /// Grow to include `v`.
    pub fn include(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }
}

/// Validated axes of one chart: exactly one x-axis, one or more y-axes, unique ids.
#[derive(Clone, Debug)]
pub struct AxisSet {
    x: Axis,
    y: Vec<Axis>,
}

impl AxisSet {
    pub fn new(axes: Vec<Axis>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for a in &axes {
            if !seen.insert(a.id.clone()) {
                return Err(ConfigError::DuplicateAxis(a.id.to_string()));
            }
        }
        let (mut xs, y): (Vec<Axis>, Vec<Axis>) = axes.into_iter().partition(|a| a.orientation == Orientation::X);
        if xs.len() != 1 {
            return Err(ConfigError::XAxisCount(xs.len()));
        }
        if y.is_empty() {
            return Err(ConfigError::NoYAxis);
        }
        let x = xs.remove(0);
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &Axis { &self.x }

    pub fn y_axes(&self) -> &[Axis] { &self.y }

    /// Position of a y-axis by id.
    pub fn y_index(&self, id: &AxisId) -> Option<usize> {
        self.y.iter().position(|a| &a.id == id)
    }

    /// Y-axis indices drawn on the left (`false`) or right (`true`), innermost first.
    pub fn side(&self, opposite: bool) -> impl Iterator<Item = usize> + '_ {
        self.y.iter().enumerate().filter(move |(_, a)| a.opposite == opposite).map(|(i, _)| i)
    }
}
