//! Text rendering of the combination tables
//!
//! Each section is a header line followed by one combination per line,
//! separated by `,\n`. Padding cells print as `()`.

use crate::algorithm::pipeline::AutotileTables;
use crate::spatial::grid::CombinationGrid;
use clap::ValueEnum;

/// Which tables to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableSection {
    /// Only the 4x4 wall table
    Wall,
    /// Only the 7x7 terrain table
    Terrain,
    /// Wall table followed by the terrain table
    #[default]
    Both,
}

/// Format one grid under `title`, ending with a newline
pub fn format_section(title: &str, grid: &CombinationGrid) -> String {
    let entries = grid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{title}:\n{entries}\n")
}

/// Format the requested sections of `tables`
pub fn format_tables(tables: &AutotileTables, section: TableSection) -> String {
    match section {
        TableSection::Wall => format_section("Wall", &tables.wall),
        TableSection::Terrain => format_section("Terrain", &tables.terrain),
        TableSection::Both => {
            let mut text = format_section("Wall", &tables.wall);
            text.push_str(&format_section("Terrain", &tables.terrain));
            text
        }
    }
}
