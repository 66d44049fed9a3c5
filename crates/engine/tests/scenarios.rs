//! End-to-end layout scenarios through the public `calculate_layout` entry.

use autolayout3d_engine::{
    calculate_layout, Axis, Bounds, Direction, LayoutConfig, LayoutItem, Sizing,
};
use autolayout3d_testkit::{
    assert_json_snapshot, assert_near, assert_positions, assert_vec3_near, fill_item, sized_item,
    unit_items,
};
use glam::Vec3;

/// Three fixed unit cubes in a row, hug mode: centers at -1.5, 0, 1.5.
#[test]
fn linear_hug_row_is_centered() {
    let config = LayoutConfig::new(Direction::X).with_gap(0.5);
    let result = calculate_layout(&unit_items(3), &config, None, None);

    assert_positions(
        &result,
        &[
            Vec3::new(-1.5, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
        ],
    );
}

/// A fixed item and a fill item split a known container exactly.
#[test]
fn linear_fill_consumes_container() {
    let items = [sized_item(0, 2.0, 1.0, 1.0), fill_item(1, Axis::X)];
    let config = LayoutConfig::new(Direction::X);
    let result = calculate_layout(&items, &config, Some(Vec3::new(5.0, 1.0, 1.0)), None);

    assert_vec3_near(result.sizes[1], Vec3::new(3.0, 1.0, 1.0));
    assert_positions(&result, &[Vec3::new(-1.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)]);
    assert_near(result.bounds.min.x, -2.5);
    assert_near(result.bounds.max.x, 2.5);
    assert_near(result.bounds.size.x, 5.0);
}

/// 2x2 grid of unit cubes, row-major from the top-left.
#[test]
fn grid_xy_two_by_two() {
    let config = LayoutConfig::new(Direction::Xy).with_columns(2);
    let result = calculate_layout(&unit_items(4), &config, None, None);

    assert_positions(
        &result,
        &[
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
        ],
    );
}

/// Hug bounds on a y stack: width = max x, height = sum y + gaps, depth = max z.
#[test]
fn hug_bounds_wrap_stack() {
    let items = [
        sized_item(0, 1.0, 1.0, 1.0),
        sized_item(1, 2.0, 1.0, 1.0),
        sized_item(2, 1.0, 2.0, 1.0),
    ];
    let config = LayoutConfig::new(Direction::Y).with_gap(0.2);
    let result = calculate_layout(&items, &config, None, None);

    assert_vec3_near(result.bounds.size, Vec3::new(2.0, 4.4, 1.0));
}

#[test]
fn empty_item_list_is_valid() {
    let config = LayoutConfig::new(Direction::X).with_gap(1.0);
    let result = calculate_layout(&[], &config, Some(Vec3::splat(10.0)), None);

    assert!(result.is_empty());
    assert_eq!(result.bounds, Bounds::ZERO);
}

#[test]
fn unknown_direction_keeps_session_alive() {
    // Surface the engine's diagnostic when running with --nocapture.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let direction: Direction = serde_json::from_str("\"banana\"").expect("tolerant deserialize");
    let config = LayoutConfig::new(direction);
    let items = [sized_item(0, 1.0, 2.0, 3.0)];
    let result = calculate_layout(&items, &config, None, None);

    assert_eq!(result.positions, vec![Vec3::ZERO]);
    assert_eq!(result.sizes, vec![Vec3::new(1.0, 2.0, 3.0)]);
}

/// Fill items in a hug container keep their natural size (deterministic
/// resolution of the hug/fill ambiguity).
#[test]
fn fill_in_hug_container_degrades_to_natural_size() {
    let items = [sized_item(0, 2.0, 1.0, 1.0), fill_item(1, Axis::X)];
    let config = LayoutConfig::new(Direction::X).with_gap(0.5);
    let result = calculate_layout(&items, &config, None, None);

    assert_vec3_near(result.sizes[1], Vec3::ONE);
    assert_near(result.bounds.size.x, 3.5);
}

/// Identical inputs give bit-identical outputs across repeated calls.
#[test]
fn recomputation_is_stable() {
    let items = [
        sized_item(0, 1.25, 0.75, 2.0),
        fill_item(1, Axis::X),
        sized_item(2, 0.5, 3.0, 0.25),
    ];
    let config = LayoutConfig::new(Direction::X).with_gap(0.3);
    let container = Some(Vec3::new(9.0, 4.0, 4.0));
    let anchor = Some(Vec3::new(1.0, -2.0, 0.5));

    let first = calculate_layout(&items, &config, container, anchor);
    for _ in 0..16 {
        let again = calculate_layout(&items, &config, container, anchor);
        assert_eq!(first, again);
    }
}

/// Golden snapshot of a full result (fixed + fill split of a container).
#[test]
fn fill_split_matches_golden_snapshot() {
    let items = [sized_item(0, 2.0, 1.0, 1.0), fill_item(1, Axis::X)];
    let config = LayoutConfig::new(Direction::X);
    let result = calculate_layout(&items, &config, Some(Vec3::new(5.0, 1.0, 1.0)), None);

    assert_json_snapshot(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/snapshots/fill_split.json"),
        &result,
    )
    .expect("snapshot matches");
}

/// Cross-axis fill stretches to the container minus that axis's padding.
#[test]
fn cross_axis_fill_uses_container() {
    let items = [LayoutItem::new(0, Vec3::ONE).with_sizing(Axis::Y, Sizing::Fill)];
    let config = LayoutConfig::new(Direction::X);
    let result = calculate_layout(&items, &config, Some(Vec3::new(4.0, 3.0, 2.0)), None);

    assert_vec3_near(result.sizes[0], Vec3::new(1.0, 3.0, 1.0));
}
