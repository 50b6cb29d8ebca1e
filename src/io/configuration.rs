//! Static tables and runtime configuration defaults
//!
//! Every literal here is part of the reference layout consumed by Tiled, so
//! changing any of them changes the generated tables.

use crate::spatial::grid::GridShape;
use crate::spatial::subtile::SubtileCoord;

const fn at(column: u32, row: u32) -> SubtileCoord {
    SubtileCoord::new(column, row)
}

// Source sheet geometry, in whole tiles
/// Width of a wall autotile block in the source sheet
pub const AUTOTILE_WALL_WIDTH: u32 = 2;
/// Height of a wall autotile block in the source sheet
pub const AUTOTILE_WALL_HEIGHT: u32 = 2;
/// Width of a terrain autotile block in the source sheet
pub const AUTOTILE_TERRAIN_WIDTH: u32 = 2;
/// Height of a terrain autotile block in the source sheet
pub const AUTOTILE_TERRAIN_HEIGHT: u32 = 3;

// Output grid geometry, in whole tiles
/// Tiled wall grid
pub const TILED_WALL_SHAPE: GridShape = GridShape::new(4, 4);
/// Tiled terrain grid, also the reference grid of [`REORDERING`]
pub const TILED_TERRAIN_SHAPE: GridShape = GridShape::new(7, 7);
/// Row stride used to flatten [`REORDERING`] coordinates
pub const REFERENCE_GRID_WIDTH: usize = 7;
/// Number of rows covered by [`REORDERING`] coordinates
pub const REFERENCE_GRID_HEIGHT: usize = 7;

/// Subtile rows reserved for terrain-only decorations (the '+'-shaped block)
pub const TERRAIN_ONLY_ROWS: u32 = 2;

/// Highest subtile row belonging to the 2x2 '+'-shaped block
pub const PLUS_BLOCK_MAX_ROW: u32 = 1;

/// Top-left quadrant candidates, one per visually distinct subtile type
pub const TOP_LEFT_CANDIDATES: [SubtileCoord; 5] =
    [at(0, 2), at(2, 2), at(0, 4), at(2, 4), at(2, 0)];

/// Bottom-right quadrant offsets appended after every top-left candidate
pub const BOTTOM_RIGHT_OFFSETS: [SubtileCoord; 5] =
    [at(1, 3), at(3, 3), at(1, 5), at(3, 5), at(3, 1)];

// Top-right lookup: column from bottom-right, row from top-left
/// Stand-in for a bottom-right reference taken from the '+' block
pub const TOP_RIGHT_COLUMN_FALLBACK: SubtileCoord = at(1, 3);
/// Stand-in for a top-left reference taken from the '+' block
pub const TOP_RIGHT_ROW_FALLBACK: SubtileCoord = at(2, 4);
/// Full center subtile that also allows the '+' variant
pub const TOP_RIGHT_CENTER: SubtileCoord = at(1, 4);
/// '+' variant emitted next to [`TOP_RIGHT_CENTER`]
pub const TOP_RIGHT_PLUS: SubtileCoord = at(3, 0);

// Bottom-left lookup: column from top-left, row from bottom-right
/// Stand-in for a top-left reference taken from the '+' block
pub const BOTTOM_LEFT_COLUMN_FALLBACK: SubtileCoord = at(2, 4);
/// Stand-in for a bottom-right reference taken from the '+' block
pub const BOTTOM_LEFT_ROW_FALLBACK: SubtileCoord = at(1, 3);
/// Full center subtile that also allows the '+' variant
pub const BOTTOM_LEFT_CENTER: SubtileCoord = at(2, 3);
/// '+' variant emitted next to [`BOTTOM_LEFT_CENTER`]
pub const BOTTOM_LEFT_PLUS: SubtileCoord = at(2, 1);

/// Source cell and target cell, both as `[x, y]` on the 7x7 reference grid
pub type ReorderEntry = ([usize; 2], [usize; 2]);

/// Generation-order position to visual position in the Tiled grids
///
/// Sources index the wall combinations followed by the terrain-only ones.
/// The first sixteen entries target the 4x4 wall grid.
pub const REORDERING: [ReorderEntry; 49] = [
    // 3x3.
    ([0, 0], [0, 0]),
    ([4, 0], [1, 0]),
    ([5, 0], [2, 0]),
    ([1, 1], [0, 1]),
    ([5, 1], [1, 1]),
    ([6, 1], [2, 1]),
    ([3, 1], [0, 2]),
    ([0, 2], [1, 2]),
    ([1, 2], [2, 2]),
    // Single-tile vertical.
    ([1, 0], [3, 0]),
    ([2, 1], [3, 1]),
    ([4, 1], [3, 2]),
    // Single-tile horizontal.
    ([2, 0], [0, 3]),
    ([6, 0], [1, 3]),
    ([0, 1], [2, 3]),
    // Preview 1x1 tile.
    ([3, 0], [3, 3]),
    // Terrain-only from here on.
    // 3x3 with four islands.
    ([2, 4], [4, 0]),
    ([3, 4], [5, 0]),
    ([4, 3], [6, 0]),
    ([4, 4], [4, 1]),
    ([4, 6], [5, 1]),
    ([0, 5], [6, 1]),
    ([5, 3], [4, 2]),
    ([1, 5], [5, 2]),
    ([6, 4], [6, 2]),
    // 3x2 channel with two islands.
    ([5, 2], [4, 3]),
    ([6, 2], [5, 3]),
    ([3, 2], [6, 3]),
    ([1, 4], [4, 4]),
    ([6, 5], [5, 4]),
    ([5, 5], [6, 4]),
    // 2x3 channel with two islands.
    ([2, 3], [0, 4]),
    ([0, 4], [1, 4]),
    ([3, 3], [0, 5]),
    ([4, 5], [1, 5]),
    ([0, 3], [0, 6]),
    ([3, 5], [1, 6]),
    // Single diagonal island parts.
    ([1, 6], [2, 4]),
    ([6, 3], [3, 4]),
    // 2x2 with single island.
    ([2, 2], [2, 5]),
    ([4, 2], [3, 5]),
    ([1, 3], [2, 6]),
    ([0, 6], [3, 6]),
    // 2x2 with '+'-formation islands.
    ([5, 4], [4, 5]),
    ([2, 6], [5, 5]),
    ([3, 6], [4, 6]),
    ([2, 5], [5, 6]),
    // Empty patches.
    ([5, 6], [6, 5]),
    ([6, 6], [6, 6]),
];

/// Subtiles in row-major quadrant order (TL, TR, BL, BR) and the target tile `[x, y]`
pub type UnpackRecipe = ([SubtileCoord; 4], [u32; 2]);

/// Fixed terrain layout written by the unpacker, after the preview tile at `[0, 0]`
pub const UNPACK_LAYOUT: [UnpackRecipe; 13] = [
    // Outer 2x2 square.
    ([at(2, 4), at(1, 4), at(2, 3), at(3, 1)], [1, 0]),
    ([at(2, 4), at(1, 4), at(2, 1), at(1, 3)], [2, 0]),
    ([at(2, 4), at(3, 0), at(2, 3), at(1, 3)], [1, 1]),
    ([at(2, 0), at(1, 4), at(2, 3), at(1, 3)], [2, 1]),
    // Inner 3x3 square.
    ([at(0, 2), at(1, 2), at(0, 3), at(1, 3)], [0, 2]),
    ([at(2, 2), at(1, 2), at(2, 3), at(1, 3)], [1, 2]),
    ([at(2, 2), at(3, 2), at(2, 3), at(3, 3)], [2, 2]),
    ([at(0, 4), at(1, 4), at(0, 3), at(1, 3)], [0, 3]),
    ([at(2, 4), at(1, 4), at(2, 3), at(1, 3)], [1, 3]),
    ([at(2, 4), at(3, 4), at(2, 3), at(3, 3)], [2, 3]),
    ([at(0, 4), at(1, 4), at(0, 5), at(1, 5)], [0, 4]),
    ([at(2, 4), at(1, 4), at(2, 5), at(1, 5)], [1, 4]),
    ([at(2, 4), at(3, 4), at(2, 5), at(3, 5)], [2, 4]),
];

/// Width of an unpacked terrain block, in tiles
pub const UNPACKED_TERRAIN_WIDTH: u32 = 3;
/// Height of an unpacked terrain block, in tiles
pub const UNPACKED_TERRAIN_HEIGHT: u32 = 5;

// Runtime defaults
/// Edge length of a full tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 32;

// Output settings
/// Suffix for rendered wall sheets
pub const WALL_OUTPUT_SUFFIX: &str = "_wall";
/// Suffix for rendered terrain sheets
pub const TERRAIN_OUTPUT_SUFFIX: &str = "_terrain";
/// Suffix for unpacked terrain sheets
pub const UNPACK_OUTPUT_SUFFIX: &str = "_unpacked";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
