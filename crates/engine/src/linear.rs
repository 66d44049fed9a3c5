//! Linear solver: sequential placement along a single primary axis.

use crate::bounds::Bounds;
use crate::config::{Axis, Padding};
use crate::item::LayoutItem;
use crate::result::LayoutResult;
use crate::sizing::resolve_size;
use glam::Vec3;
use tracing::debug;

/// Lay items out sequentially along `axis`.
///
/// Two-pass: sizes are resolved first (distributing leftover container space
/// equally across `Fill` items), then items are placed with a running cursor
/// and the whole block is re-centered so its bounding box lands on the
/// anchor. Low-side padding then shifts the centered block along the primary
/// axis.
pub fn solve_linear(
    items: &[LayoutItem],
    axis: Axis,
    gap: f32,
    padding: &Padding,
    container_size: Option<Vec3>,
    anchor: Option<Vec3>,
) -> LayoutResult {
    if items.is_empty() {
        return LayoutResult::empty();
    }

    // Categorize: fixed sizes accumulate, fill items share what remains.
    let mut total_fixed = 0.0_f32;
    let mut fill_count = 0_usize;
    for item in items {
        if item.policy.get(axis).is_fill() {
            fill_count += 1;
        } else {
            total_fixed += axis.get(item.base_size);
        }
    }

    let gap_total = gap * (items.len() - 1) as f32;
    let fill_share = match (container_size, fill_count) {
        (Some(container), n) if n > 0 => {
            let available =
                (axis.get(container) - total_fixed - gap_total - padding.along(axis)).max(0.0);
            Some(available / n as f32)
        }
        (None, n) if n > 0 => {
            // Hug container with fill children: nothing to fill against,
            // items keep their natural size.
            debug!(
                fill_count = n,
                "fill items in a hug container fall back to natural size"
            );
            None
        }
        _ => None,
    };

    let sizes: Vec<Vec3> = items
        .iter()
        .map(|item| resolve_size(item, Some(axis), fill_share, container_size, padding))
        .collect();

    // Sequential placement from a zero cursor; cross axes stay at zero here.
    let mut positions = Vec::with_capacity(items.len());
    let mut cursor = 0.0_f32;
    for size in &sizes {
        let extent = axis.get(*size);
        let mut position = Vec3::ZERO;
        axis.set(&mut position, cursor + extent * 0.5);
        cursor += extent + gap;
        positions.push(position);
    }

    // Re-center on the true extents (resolved sizes, not the raw cursor) so
    // the block's bounding box sits exactly on the anchor.
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for (position, size) in positions.iter().zip(&sizes) {
        let half = axis.get(*size) * 0.5;
        let center = axis.get(*position);
        min = min.min(center - half);
        max = max.max(center + half);
    }
    let target = anchor.map(|a| axis.get(a)).unwrap_or(0.0);
    let offset = target - (min + max) * 0.5 + padding.low(axis);
    for position in &mut positions {
        axis.set(position, axis.get(*position) + offset);
        if let Some(anchor) = anchor {
            for cross in axis.cross() {
                cross.set(position, cross.get(*position) + cross.get(anchor));
            }
        }
    }

    let bounds = Bounds::of(&positions, &sizes);
    LayoutResult {
        positions,
        sizes,
        bounds,
    }
}
