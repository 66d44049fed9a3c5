//! Grid solver: regular 2D/3D cell placement.

use crate::bounds::Bounds;
use crate::config::Padding;
use crate::item::LayoutItem;
use crate::result::LayoutResult;
use crate::sizing::resolve_size;
use glam::Vec3;

/// Grid dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// Columns and rows in the xy plane.
    Xy,
    /// Columns, rows, and layers along z.
    Xyz,
}

/// Lay items out on a regular grid.
///
/// Column count defaults to `ceil(sqrt(n))` (xy) or `ceil(cbrt(n))` (xyz);
/// rows default to the column count. Each item is offset so its row, column,
/// and layer block is symmetric about zero, with rows stacking toward −y and
/// layers toward +z. Sizes resolve with no container: grid mode does not
/// support container-driven fill, so `Fill` behaves as `Hug` here. The
/// anchor translates the whole grid directly.
///
/// An explicit `columns` x `rows` smaller than the item count spills the
/// overflow along +z, one layer per full plane, in xy mode too; the spilled
/// layers sit forward of the plane rather than being recentered on it.
pub fn solve_grid(
    items: &[LayoutItem],
    mode: GridMode,
    gap: f32,
    padding: &Padding,
    columns: Option<usize>,
    rows: Option<usize>,
    anchor: Option<Vec3>,
) -> LayoutResult {
    if items.is_empty() {
        return LayoutResult::empty();
    }

    let n = items.len();
    let columns = columns
        .unwrap_or_else(|| match mode {
            GridMode::Xy => ceil_sqrt(n),
            GridMode::Xyz => ceil_cbrt(n),
        })
        .max(1);
    let rows = rows.unwrap_or(columns).max(1);
    let layers = match mode {
        GridMode::Xy => 1,
        GridMode::Xyz => n.div_ceil(columns * rows),
    };

    // Padding shifts the block by the per-axis half-difference; cells keep
    // their sizes (no content-area squeeze).
    let pad_offset = Vec3::new(
        (padding.left - padding.right) * 0.5,
        (padding.bottom - padding.top) * 0.5,
        (padding.back - padding.front) * 0.5,
    );
    let anchor = anchor.unwrap_or(Vec3::ZERO);

    let mut positions = Vec::with_capacity(n);
    let mut sizes = Vec::with_capacity(n);
    for (i, item) in items.iter().enumerate() {
        let size = resolve_size(item, None, None, None, padding);

        let col = i % columns;
        let row = (i / columns) % rows;
        let layer = i / (columns * rows);

        let position = Vec3::new(
            cell_coord(col, columns, size.x, gap),
            -cell_coord(row, rows, size.y, gap),
            cell_coord(layer, layers, size.z, gap),
        ) + pad_offset
            + anchor;

        positions.push(position);
        sizes.push(size);
    }

    let bounds = Bounds::of(&positions, &sizes);
    LayoutResult {
        positions,
        sizes,
        bounds,
    }
}

/// Cell center along one axis, symmetric about zero for the whole count.
fn cell_coord(index: usize, count: usize, size: f32, gap: f32) -> f32 {
    let step = size + gap;
    index as f32 * step - (count - 1) as f32 * step * 0.5
}

/// Smallest `c` with `c * c >= n` (and at least 1).
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    c.max(1)
}

/// Smallest `c` with `c^3 >= n` (and at least 1).
fn ceil_cbrt(n: usize) -> usize {
    let mut c = (n as f64).cbrt() as usize;
    while c * c * c < n {
        c += 1;
    }
    c.max(1)
}
