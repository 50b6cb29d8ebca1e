//! Full table derivation: generate, partition, remap, rebase

use crate::algorithm::adjust::to_wall_space;
use crate::algorithm::generator::generate_combinations;
use crate::algorithm::partition::partition;
use crate::algorithm::remap::remap;
use crate::io::configuration::{REORDERING, ReorderEntry, TILED_TERRAIN_SHAPE, TILED_WALL_SHAPE};
use crate::io::error::Result;
use crate::spatial::grid::CombinationGrid;

/// Wall and terrain layouts ready for the sheet renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutotileTables {
    /// 4x4 wall grid in wall sheet coordinates
    pub wall: CombinationGrid,
    /// 7x7 terrain grid in terrain sheet coordinates
    pub terrain: CombinationGrid,
}

/// Derive both tables with the built-in reorder table
///
/// # Errors
///
/// Returns an error if the built-in constants are inconsistent
pub fn subtile_combinations() -> Result<AutotileTables> {
    build_tables(&REORDERING)
}

/// Derive both tables with a custom reorder table
///
/// The terrain grid is filled from the wall combinations followed by the
/// terrain-only ones; `table` sources must assume that order.
///
/// # Errors
///
/// Returns an error if `table` maps a source or target twice, or points
/// outside the reference grid
pub fn build_tables(table: &[ReorderEntry]) -> Result<AutotileTables> {
    let combinations = generate_combinations()?;
    let groups = partition(&combinations);

    let wall_terrain_space = remap(&groups.wall, TILED_WALL_SHAPE, table)?;
    let terrain = remap(&groups.terrain_sources(), TILED_TERRAIN_SHAPE, table)?;
    let wall = to_wall_space(&wall_terrain_space)?;

    Ok(AutotileTables { wall, terrain })
}
