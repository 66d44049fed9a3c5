#![warn(missing_docs)]
//! Deterministic testing surfaces for the layout engine (approximate
//! assertions, scenario builders, golden snapshots).

mod snapshot;

pub use snapshot::*;

use autolayout3d_engine::{Axis, LayoutItem, LayoutResult, Sizing};
use glam::Vec3;

/// Tolerance used by the approximate assertions.
pub const EPSILON: f32 = 1e-6;

/// Assert two vectors match within [`EPSILON`].
///
/// # Panics
///
/// Panics with both values printed when any component differs by more than
/// the tolerance.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).abs().max_element() <= EPSILON,
        "vectors differ: actual {actual:?}, expected {expected:?}"
    );
}

/// Assert two scalars match within [`EPSILON`].
///
/// # Panics
///
/// Panics with both values printed when they differ by more than the
/// tolerance.
pub fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "values differ: actual {actual}, expected {expected}"
    );
}

/// Assert a result's per-item center positions, in input order.
///
/// # Panics
///
/// Panics when counts differ or any position is off by more than the
/// tolerance.
pub fn assert_positions(result: &LayoutResult, expected: &[Vec3]) {
    assert_eq!(
        result.positions.len(),
        expected.len(),
        "position count mismatch"
    );
    for (i, (actual, expected)) in result.positions.iter().zip(expected).enumerate() {
        assert!(
            (*actual - *expected).abs().max_element() <= EPSILON,
            "position {i} differs: actual {actual:?}, expected {expected:?}"
        );
    }
}

/// Build `n` unit-cube items with all-`Fixed` policy and sequential ids.
pub fn unit_items(n: usize) -> Vec<LayoutItem> {
    (0..n)
        .map(|i| LayoutItem::new(i as u64, Vec3::ONE))
        .collect()
}

/// Build one item with the given base size.
pub fn sized_item(id: u64, x: f32, y: f32, z: f32) -> LayoutItem {
    LayoutItem::new(id, Vec3::new(x, y, z))
}

/// Build one item that fills along `axis` from a unit base size.
pub fn fill_item(id: u64, axis: Axis) -> LayoutItem {
    LayoutItem::new(id, Vec3::ONE).with_sizing(axis, Sizing::Fill)
}
