//! Spatial value types
//!
//! This module contains:
//! - Subtile coordinates, quadrants and combinations
//! - Grid shapes and row-major combination grids

/// Output grid shapes and combination grids
pub mod grid;
/// Subtile coordinates and quadrant combinations
pub mod subtile;

pub use grid::{CombinationGrid, GridShape};
pub use subtile::{Combination, Quadrant, SubtileCoord};
