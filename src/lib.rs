//! Subtile combination tables for RPG-style autotiles in Tiled
//!
//! Every way of assembling a tile from four quadrant subtiles is enumerated,
//! split into wall and terrain-only sets, and reordered into the 4x4 wall and
//! 7x7 terrain grids used by Tiled tilesets. The tables drive a renderer that
//! converts autotile sheets into Tiled sheets.

#![forbid(unsafe_code)]

/// Combination generation, partitioning, remapping and rebasing
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Subtile coordinates, combinations and grids
pub mod spatial;

pub use algorithm::pipeline::{AutotileTables, subtile_combinations};
pub use io::error::{AutotileError, Result};
