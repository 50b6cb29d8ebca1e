//! Output grid shapes and row-major combination grids

use ndarray::Array2;

use crate::io::error::{AutotileError, Result};
use crate::spatial::subtile::Combination;

/// Output grid dimensions in whole tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridShape {
    /// Create a shape from its width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if the cell `[x, y]` lies inside the grid
    pub const fn contains(&self, cell: [usize; 2]) -> bool {
        cell[0] < self.width && cell[1] < self.height
    }

    /// Row-major index of `[x, y]` in this grid
    pub const fn linear_index(&self, cell: [usize; 2]) -> usize {
        flatten(cell, self.width)
    }
}

/// Row-major flattening of `[x, y]` with the given row stride
pub const fn flatten(cell: [usize; 2], stride: usize) -> usize {
    cell[0] + cell[1] * stride
}

/// Combinations laid out on a fixed-size grid
///
/// Backed by a `(rows, cols)` array; iteration is always row-major, which is
/// the placement order the sheet renderer and the text tables rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationGrid {
    cells: Array2<Combination>,
}

impl CombinationGrid {
    /// Wrap a row-major list of cells
    ///
    /// # Errors
    ///
    /// Returns an error if the number of cells does not match `shape`
    pub fn from_row_major(shape: GridShape, cells: Vec<Combination>) -> Result<Self> {
        let found = cells.len();
        let cells = Array2::from_shape_vec((shape.height, shape.width), cells).map_err(|e| {
            AutotileError::GridSizeMismatch {
                expected: shape.cell_count(),
                found,
                source: e,
            }
        })?;
        Ok(Self { cells })
    }

    /// Grid dimensions
    pub fn shape(&self) -> GridShape {
        let (height, width) = self.cells.dim();
        GridShape::new(width, height)
    }

    /// Combination at cell `[x, y]`
    pub fn get(&self, cell: [usize; 2]) -> Option<&Combination> {
        self.cells.get((cell[1], cell[0]))
    }

    /// Cells as `([x, y], combination)` in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = ([usize; 2], &Combination)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), combination)| ([col, row], combination))
    }

    /// Combinations in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Combination> + '_ {
        self.cells.iter()
    }

    /// Number of cells, padding included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Copy the cells out in row-major order
    pub fn to_row_major(&self) -> Vec<Combination> {
        self.cells.iter().cloned().collect()
    }
}
