//! Layout items: the abstract elements a container places.
//!
//! Items carry only what the solver needs — a natural size and a per-axis
//! sizing policy. Meshes, materials, and scene-graph concerns stay on the
//! host side.

use crate::config::Axis;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-axis sizing behavior for a layout item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sizing {
    /// Keep the current/base size on this axis.
    #[default]
    Fixed,
    /// Expand to consume available space on this axis.
    Fill,
    /// Track the natural content size. Numerically identical to `Fixed`
    /// here; the distinction carries host semantics.
    Hug,
}

impl Sizing {
    /// Whether this policy competes for leftover space.
    pub fn is_fill(self) -> bool {
        matches!(self, Sizing::Fill)
    }
}

/// Sizing policy for all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingPolicy {
    /// Policy on the x axis.
    pub x: Sizing,
    /// Policy on the y axis.
    pub y: Sizing,
    /// Policy on the z axis.
    pub z: Sizing,
}

impl SizingPolicy {
    /// The same policy on every axis.
    pub fn splat(sizing: Sizing) -> Self {
        Self {
            x: sizing,
            y: sizing,
            z: sizing,
        }
    }

    /// Policy for one axis.
    pub fn get(&self, axis: Axis) -> Sizing {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Builder: override the policy on one axis.
    pub fn with(mut self, axis: Axis, sizing: Sizing) -> Self {
        match axis {
            Axis::X => self.x = sizing,
            Axis::Y => self.y = sizing,
            Axis::Z => self.z = sizing,
        }
        self
    }
}

/// One element to be placed by a layout pass.
///
/// Items are immutable inputs; the solver never mutates them and allocates
/// fresh outputs. The `id` is host-defined and used only for traceability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Opaque host identifier (not consulted by the algorithm).
    pub id: u64,
    /// Natural/unconstrained size (x, y, z). Non-negative.
    pub base_size: Vec3,
    /// Per-axis sizing policy.
    pub policy: SizingPolicy,
}

impl LayoutItem {
    /// Create an item with an all-`Fixed` policy.
    pub fn new(id: u64, base_size: Vec3) -> Self {
        Self {
            id,
            base_size,
            policy: SizingPolicy::default(),
        }
    }

    /// Builder: set the full sizing policy.
    pub fn with_policy(mut self, policy: SizingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder: set the policy on one axis.
    pub fn with_sizing(mut self, axis: Axis, sizing: Sizing) -> Self {
        self.policy = self.policy.with(axis, sizing);
        self
    }
}
