//! Layout pass output.

use crate::bounds::Bounds;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Output of one layout pass, freshly allocated per call.
///
/// `positions` and `sizes` keep the input item order and length; no item is
/// dropped or reordered. `bounds` is computed from the final positions and
/// sizes, never from intermediate placement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Final center position per item, in input order.
    pub positions: Vec<Vec3>,
    /// Final resolved size per item, in input order.
    pub sizes: Vec<Vec3>,
    /// Bounding box of the placed items.
    pub bounds: Bounds,
}

impl LayoutResult {
    /// Result for a container with no items.
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            sizes: Vec::new(),
            bounds: Bounds::ZERO,
        }
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the pass placed no items.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
