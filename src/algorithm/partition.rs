//! Split of generated combinations into wall and terrain-only sets
//!
//! Terrain sheets reserve subtile rows 0-1 for the '+' block; wall sheets
//! don't have those rows at all.

use crate::io::configuration::TERRAIN_ONLY_ROWS;
use crate::spatial::subtile::Combination;

/// Which sheet kinds can display a combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetClass {
    /// Usable by both wall and terrain sheets
    Wall,
    /// Needs the terrain-only rows
    TerrainOnly,
}

/// Classify a combination by the rows it touches
pub fn classify(combination: &Combination) -> SheetClass {
    if combination
        .subtiles()
        .iter()
        .all(|subtile| subtile.row >= TERRAIN_ONLY_ROWS)
    {
        SheetClass::Wall
    } else {
        SheetClass::TerrainOnly
    }
}

/// Generated combinations grouped by sheet class, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Combinations without terrain-only subtiles
    pub wall: Vec<Combination>,
    /// Combinations touching at least one terrain-only subtile
    pub terrain_only: Vec<Combination>,
}

impl Partition {
    /// Source list for the terrain grid: all wall combinations, then the terrain-only ones
    pub fn terrain_sources(&self) -> Vec<Combination> {
        self.wall
            .iter()
            .chain(self.terrain_only.iter())
            .cloned()
            .collect()
    }
}

/// Partition combinations, keeping their relative order inside each group
pub fn partition(combinations: &[Combination]) -> Partition {
    let mut result = Partition::default();
    for combination in combinations {
        match classify(combination) {
            SheetClass::Wall => result.wall.push(combination.clone()),
            SheetClass::TerrainOnly => result.terrain_only.push(combination.clone()),
        }
    }
    result
}
