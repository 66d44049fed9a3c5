#![warn(missing_docs)]
//! 3D auto-layout engine.
//!
//! Assigns positions and sizes to items arranged inside a container along
//! one, two, or three spatial axes, under per-item sizing policies
//! (Fixed / Fill / Hug), configurable gaps and six-sided padding, and an
//! explicit centering anchor.
//!
//! The engine is a pure library boundary: no rendering, no scene graph, no
//! internal state. Every call is independent, never blocks, and resolves
//! misconfiguration fail-soft so an interactive host session keeps running.
//!
//! # Example
//!
//! ```rust
//! use autolayout3d_engine::{calculate_layout, Direction, LayoutConfig, LayoutItem};
//! use glam::Vec3;
//!
//! let items = vec![
//!     LayoutItem::new(1, Vec3::ONE),
//!     LayoutItem::new(2, Vec3::ONE),
//!     LayoutItem::new(3, Vec3::ONE),
//! ];
//! let config = LayoutConfig::new(Direction::X).with_gap(0.5);
//!
//! let result = calculate_layout(&items, &config, None, None);
//! assert_eq!(result.positions.len(), 3);
//! // The block is centered on the origin (the default anchor).
//! assert!(result.bounds.center().length() < 1e-6);
//! ```

pub mod bounds;
pub mod config;
pub mod engine;
pub mod grid;
pub mod item;
pub mod linear;
pub mod result;
pub mod sizing;

// Re-export the host-facing surface.
pub use bounds::Bounds;
pub use config::{Axis, Direction, LayoutConfig, Padding, UnknownDirection};
pub use engine::{calculate_layout, fallback_result};
pub use grid::{solve_grid, GridMode};
pub use item::{LayoutItem, Sizing, SizingPolicy};
pub use linear::solve_linear;
pub use result::LayoutResult;
pub use sizing::{resolve_size, FILL_FLOOR};

use anyhow::Result;

/// Version of the engine crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the layout engine with default settings.
pub fn init() -> Result<()> {
    tracing::info!("Initializing autolayout3d-engine v{}", VERSION);
    Ok(())
}
