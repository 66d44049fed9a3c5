//! Layout entry point: dispatches a config to the linear or grid solver.

use crate::bounds::Bounds;
use crate::config::{Direction, LayoutConfig};
use crate::grid::{solve_grid, GridMode};
use crate::item::LayoutItem;
use crate::linear::solve_linear;
use crate::result::LayoutResult;
use glam::Vec3;
use tracing::warn;

/// Compute positions, sizes, and bounds for one container's items.
///
/// The single entry point a host container manager calls per logical change
/// (property edit, child add/remove, drag-frame tick). Stateless across
/// calls; inputs are read-only and the result is freshly allocated, so
/// concurrent invocation needs no coordination.
///
/// `container_size` enables space distribution for `Fill` items; without it
/// the layout is hug mode and the returned bounds define the container's
/// natural size. The anchor (default origin) is where the final bounding box
/// is centered.
///
/// Never panics and never returns an error: misconfiguration resolves to
/// [`fallback_result`] with a logged diagnostic, since this path runs
/// continuously during live editing.
pub fn calculate_layout(
    items: &[LayoutItem],
    config: &LayoutConfig,
    container_size: Option<Vec3>,
    anchor: Option<Vec3>,
) -> LayoutResult {
    if let Some(axis) = config.direction.primary_axis() {
        return solve_linear(items, axis, config.gap, &config.padding, container_size, anchor);
    }

    match config.direction {
        Direction::Xy => solve_grid(
            items,
            GridMode::Xy,
            config.gap,
            &config.padding,
            config.columns,
            config.rows,
            anchor,
        ),
        Direction::Xyz => solve_grid(
            items,
            GridMode::Xyz,
            config.gap,
            &config.padding,
            config.columns,
            config.rows,
            anchor,
        ),
        _ => {
            warn!("unknown layout direction, returning fallback layout");
            fallback_result(items)
        }
    }
}

/// Fail-soft result: zero positions, base sizes, zero bounds.
///
/// Returned for unresolvable configuration so an interactive session keeps
/// running with stationary items instead of crashing.
pub fn fallback_result(items: &[LayoutItem]) -> LayoutResult {
    LayoutResult {
        positions: vec![Vec3::ZERO; items.len()],
        sizes: items.iter().map(|item| item.base_size).collect(),
        bounds: Bounds::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_linear() {
        let items = [LayoutItem::new(0, Vec3::ONE), LayoutItem::new(1, Vec3::ONE)];
        let config = LayoutConfig::new(Direction::Z).with_gap(1.0);
        let result = calculate_layout(&items, &config, None, None);
        assert_eq!(result.len(), 2);
        assert!((result.bounds.size.z - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_dispatch_grid() {
        let items: Vec<LayoutItem> =
            (0..4).map(|i| LayoutItem::new(i, Vec3::ONE)).collect();
        let config = LayoutConfig::new(Direction::Xy).with_columns(2);
        let result = calculate_layout(&items, &config, None, None);
        assert_eq!(result.len(), 4);
        assert!(result.bounds.center().length() < 1e-6);
    }

    #[test]
    fn test_unknown_direction_is_fail_soft() {
        let items = [LayoutItem::new(0, Vec3::new(2.0, 3.0, 4.0))];
        let config = LayoutConfig::new(Direction::Unknown);
        let result = calculate_layout(&items, &config, None, None);
        assert_eq!(result.positions, vec![Vec3::ZERO]);
        assert_eq!(result.sizes, vec![Vec3::new(2.0, 3.0, 4.0)]);
        assert_eq!(result.bounds, Bounds::ZERO);
    }
}
