//! Conversion of remapped wall combinations into wall sheet coordinates

use crate::io::configuration::TERRAIN_ONLY_ROWS;
use crate::io::error::{AutotileError, Result};
use crate::spatial::grid::CombinationGrid;
use crate::spatial::subtile::Combination;

/// Move every subtile of `combination` up by `rows`
///
/// # Errors
///
/// Returns an error if a subtile would end up above row zero
pub fn shift_combination(combination: &Combination, rows: u32) -> Result<Combination> {
    let shifted = combination
        .subtiles()
        .iter()
        .map(|&coord| {
            coord
                .shifted_up(rows)
                .ok_or(AutotileError::CoordinateUnderflow { coord, shift: rows })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Combination::from_subtiles(&shifted))
}

/// Rebase a remapped wall grid from terrain rows onto wall rows
///
/// Wall sheets lack the terrain-only rows, so every row drops by that many.
/// Padding cells stay empty.
///
/// # Errors
///
/// Returns an error if a cell holds a terrain-only subtile
pub fn to_wall_space(grid: &CombinationGrid) -> Result<CombinationGrid> {
    let cells = grid
        .iter()
        .map(|combination| shift_combination(combination, TERRAIN_ONLY_ROWS))
        .collect::<Result<Vec<_>>>()?;
    CombinationGrid::from_row_major(grid.shape(), cells)
}
