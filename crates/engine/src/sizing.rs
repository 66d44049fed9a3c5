//! Sizing resolver: per-item final size under the per-axis policy.

use crate::config::{Axis, Padding};
use crate::item::{LayoutItem, Sizing};
use glam::Vec3;

/// Minimum extent a `Fill` axis resolves to.
///
/// Prevents degenerate zero-size geometry downstream when the available
/// space collapses during interactive resizing.
pub const FILL_FLOOR: f32 = 0.1;

/// Resolve an item's final 3-component size.
///
/// Each axis is resolved independently:
/// - `Fixed` / `Hug` keep the base size unchanged.
/// - `Fill` on the primary axis takes `fill_share` (the per-item cut of the
///   leftover space, computed once per pass), floor-clamped.
/// - `Fill` on any other axis takes the container extent minus that axis's
///   padding pair, floor-clamped.
/// - `Fill` with no space information (hug mode) falls back to the base
///   size; there is nothing to fill against.
///
/// Pure function of its arguments; the item is never mutated.
pub fn resolve_size(
    item: &LayoutItem,
    primary_axis: Option<Axis>,
    fill_share: Option<f32>,
    container_size: Option<Vec3>,
    padding: &Padding,
) -> Vec3 {
    let mut size = item.base_size;
    for axis in Axis::ALL {
        if item.policy.get(axis) != Sizing::Fill {
            continue;
        }

        let resolved = if primary_axis == Some(axis) {
            fill_share.map(|share| share.max(FILL_FLOOR))
        } else {
            container_size.map(|container| (axis.get(container) - padding.along(axis)).max(FILL_FLOOR))
        };

        if let Some(value) = resolved {
            axis.set(&mut size, value);
        }
    }
    size
}
