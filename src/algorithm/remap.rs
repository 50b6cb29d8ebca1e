//! Reordering of generated combinations into Tiled grid layouts
//!
//! The reorder table is written against the 7x7 terrain grid. Smaller grids
//! use the subset of entries whose target falls inside them. Cells without a
//! usable source (no entry, or a source past the end of the list) are padding.

use bitvec::prelude::{BitVec, Lsb0};

use crate::io::configuration::{REFERENCE_GRID_HEIGHT, REFERENCE_GRID_WIDTH, ReorderEntry};
use crate::io::error::{AutotileError, Result};
use crate::spatial::grid::{CombinationGrid, GridShape, flatten};
use crate::spatial::subtile::Combination;

/// One reorder entry after flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapping {
    /// Generation-order index on the reference grid
    pub source: usize,
    /// Row-major index on the reference grid
    pub target: usize,
    /// Target cell as `[x, y]`
    pub cell: [usize; 2],
}

const fn on_reference_grid(cell: [usize; 2]) -> bool {
    cell[0] < REFERENCE_GRID_WIDTH && cell[1] < REFERENCE_GRID_HEIGHT
}

// Marks `index` as used, returning whether it was already taken
fn mark(seen: &mut BitVec<usize, Lsb0>, index: usize) -> bool {
    match seen.get_mut(index) {
        Some(mut bit) => {
            let taken = *bit;
            *bit = true;
            taken
        }
        None => false,
    }
}

/// Flatten, filter, sort and validate the reorder table for `shape`
///
/// Mappings come back sorted by target index.
///
/// # Errors
///
/// Returns an error if an entry lies outside the reference grid, or if two
/// kept entries share a source or a target
pub fn index_mappings(table: &[ReorderEntry], shape: GridShape) -> Result<Vec<IndexMapping>> {
    let mut mappings = Vec::with_capacity(table.len());
    for &(source, target) in table {
        if !on_reference_grid(source) || !on_reference_grid(target) {
            return Err(AutotileError::ReorderOutOfBounds {
                entry: (source, target),
            });
        }
        if shape.contains(target) {
            mappings.push(IndexMapping {
                source: flatten(source, REFERENCE_GRID_WIDTH),
                target: flatten(target, REFERENCE_GRID_WIDTH),
                cell: target,
            });
        }
    }
    mappings.sort_by_key(|mapping| mapping.target);

    let reference_cells = REFERENCE_GRID_WIDTH * REFERENCE_GRID_HEIGHT;
    let mut seen_sources = BitVec::<usize, Lsb0>::repeat(false, reference_cells);
    let mut seen_targets = BitVec::<usize, Lsb0>::repeat(false, reference_cells);
    for mapping in &mappings {
        if mark(&mut seen_sources, mapping.source) {
            return Err(AutotileError::DuplicateSourceIndex {
                index: mapping.source,
            });
        }
        if mark(&mut seen_targets, mapping.target) {
            return Err(AutotileError::DuplicateTargetIndex {
                index: mapping.target,
            });
        }
    }

    Ok(mappings)
}

/// Place `combinations` on a grid of `shape` according to `table`
///
/// # Errors
///
/// Returns an error if the table is inconsistent for `shape`
pub fn remap(
    combinations: &[Combination],
    shape: GridShape,
    table: &[ReorderEntry],
) -> Result<CombinationGrid> {
    let mappings = index_mappings(table, shape)?;

    let mut cells = vec![Combination::empty(); shape.cell_count()];
    for mapping in &mappings {
        let placed = combinations
            .get(mapping.source)
            .cloned()
            .unwrap_or_else(Combination::empty);
        if let Some(cell) = cells.get_mut(shape.linear_index(mapping.cell)) {
            *cell = placed;
        }
    }

    CombinationGrid::from_row_major(shape, cells)
}
