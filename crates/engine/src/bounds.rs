//! Axis-aligned bounds over placed items.

use crate::config::{Axis, Padding};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a set of placed items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (x, y, z).
    pub min: Vec3,
    /// Maximum corner (x, y, z).
    pub max: Vec3,
    /// Extent per axis (`max - min`).
    pub size: Vec3,
}

impl Bounds {
    /// Zero-size box at the origin.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
        size: Vec3::ZERO,
    };

    /// Unit box centered on the origin.
    pub const UNIT: Self = Self {
        min: Vec3::new(-0.5, -0.5, -0.5),
        max: Vec3::new(0.5, 0.5, 0.5),
        size: Vec3::ONE,
    };

    /// Aggregate bounds over item centers and sizes.
    ///
    /// Each item spans `position ± size/2` per axis. An empty input yields
    /// [`Bounds::UNIT`] rather than panicking; callers that want empty-layout
    /// semantics check for zero items first.
    pub fn of(positions: &[Vec3], sizes: &[Vec3]) -> Self {
        debug_assert_eq!(positions.len(), sizes.len());
        if positions.is_empty() {
            return Self::UNIT;
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for (position, size) in positions.iter().zip(sizes) {
            let half = *size * 0.5;
            min = min.min(*position - half);
            max = max.max(*position + half);
        }

        Self {
            min,
            max,
            size: max - min,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The size a hug container takes to wrap these bounds plus padding.
    ///
    /// Supports the host's bottom-up resize step: a hug container's extent is
    /// its children's bounds grown by the padding on both sides of each axis.
    pub fn hug_size(&self, padding: &Padding) -> Vec3 {
        self.size
            + Vec3::new(
                padding.along(Axis::X),
                padding.along(Axis::Y),
                padding.along(Axis::Z),
            )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_aggregate() {
        let positions = [Vec3::new(-1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
        let sizes = [Vec3::ONE, Vec3::new(2.0, 4.0, 1.0)];
        let bounds = Bounds::of(&positions, &sizes);
        assert_eq!(bounds.min, Vec3::new(-1.5, -2.0, -0.5));
        assert_eq!(bounds.max, Vec3::new(3.0, 2.0, 0.5));
        assert_eq!(bounds.size, Vec3::new(4.5, 4.0, 1.0));
        assert_eq!(bounds.center(), Vec3::new(0.75, 0.0, 0.0));
    }

    #[test]
    fn test_empty_input_is_unit_box() {
        let bounds = Bounds::of(&[], &[]);
        assert_eq!(bounds, Bounds::UNIT);
    }

    #[test]
    fn test_hug_size_adds_padding() {
        let bounds = Bounds::of(&[Vec3::ZERO], &[Vec3::new(2.0, 1.0, 1.0)]);
        let padding = Padding::symmetric(0.25, 0.5, 0.0);
        assert_eq!(bounds.hug_size(&padding), Vec3::new(2.5, 2.0, 1.0));
    }

    #[test]
    fn test_hug_size_with_asymmetric_padding() {
        let bounds = Bounds::of(&[Vec3::ZERO], &[Vec3::ONE]);
        let padding = Padding {
            left: 1.0,
            right: 0.25,
            top: 0.5,
            ..Default::default()
        };
        assert_eq!(bounds.hug_size(&padding), Vec3::new(2.25, 1.5, 1.0));
    }
}
