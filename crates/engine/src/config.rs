//! Container-level layout configuration (direction, gap, padding, grid shape).

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the three spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis.
    Z,
}

impl Axis {
    /// All three axes, in x/y/z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3` (0, 1, or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Read this axis's component from a vector.
    pub fn get(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Write this axis's component on a vector.
    pub fn set(self, v: &mut Vec3, value: f32) {
        v[self.index()] = value;
    }

    /// The other two axes.
    pub fn cross(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// Layout direction: a single primary axis (linear) or a grid mode.
///
/// Deserialization is tolerant: an unrecognized string maps to
/// [`Direction::Unknown`], which the solver resolves fail-soft rather than
/// aborting an interactive edit. [`FromStr`] is the strict counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Linear along x.
    #[default]
    X,
    /// Linear along y.
    Y,
    /// Linear along z.
    Z,
    /// Two-dimensional grid in the xy plane.
    Xy,
    /// Three-dimensional grid.
    Xyz,
    /// Unrecognized direction from a host bridge; solved fail-soft.
    Unknown,
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(Direction::Unknown))
    }
}

impl Direction {
    /// The primary axis for linear directions, `None` for grids/unknown.
    pub fn primary_axis(self) -> Option<Axis> {
        match self {
            Direction::X => Some(Axis::X),
            Direction::Y => Some(Axis::Y),
            Direction::Z => Some(Axis::Z),
            _ => None,
        }
    }

    /// Whether this direction selects the grid solver.
    pub fn is_grid(self) -> bool {
        matches!(self, Direction::Xy | Direction::Xyz)
    }
}

/// Strict-parse error for direction strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout direction `{0}` (expected x, y, z, xy, or xyz)")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Direction::X),
            "y" => Ok(Direction::Y),
            "z" => Ok(Direction::Z),
            "xy" => Ok(Direction::Xy),
            "xyz" => Ok(Direction::Xyz),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// Six-sided container padding, in world units.
///
/// Sides map to axis pairs: x ↔ (left, right), y ↔ (top, bottom),
/// z ↔ (front, back). The "low" side of each axis is left / bottom / back.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Padding above the content (+y side).
    pub top: f32,
    /// Padding below the content (−y side).
    pub bottom: f32,
    /// Padding on the −x side.
    pub left: f32,
    /// Padding on the +x side.
    pub right: f32,
    /// Padding on the +z side.
    pub front: f32,
    /// Padding on the −z side.
    pub back: f32,
}

impl Padding {
    /// The same padding on all six sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
            front: value,
            back: value,
        }
    }

    /// Per-axis symmetric padding (same value on both sides of each axis).
    pub fn symmetric(x: f32, y: f32, z: f32) -> Self {
        Self {
            top: y,
            bottom: y,
            left: x,
            right: x,
            front: z,
            back: z,
        }
    }

    /// Padding on the low side of an axis (left / bottom / back).
    pub fn low(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.bottom,
            Axis::Z => self.back,
        }
    }

    /// Padding on the high side of an axis (right / top / front).
    pub fn high(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.right,
            Axis::Y => self.top,
            Axis::Z => self.front,
        }
    }

    /// Total padding consumed along an axis (low + high).
    pub fn along(&self, axis: Axis) -> f32 {
        self.low(axis) + self.high(axis)
    }
}

/// Configuration for one container's layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Placement direction (linear axis or grid mode).
    pub direction: Direction,
    /// Uniform spacing between sequential items / grid cells.
    pub gap: f32,
    /// Six-sided padding.
    pub padding: Padding,
    /// Grid column count; defaults from the item count when absent.
    pub columns: Option<usize>,
    /// Grid row count; defaults to the column count when absent.
    pub rows: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::X,
            gap: 0.0,
            padding: Padding::default(),
            columns: None,
            rows: None,
        }
    }
}

impl LayoutConfig {
    /// Create a config for the given direction with no gap or padding.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Builder: set the inter-item gap.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Builder: set the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Builder: set an explicit grid column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Builder: set an explicit grid row count.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }
}
