//! Tests for the tuple text output of the tables

#[cfg(test)]
mod tests {
    use autotile_combos::io::format::{TableSection, format_section, format_tables};
    use autotile_combos::subtile_combinations;

    #[test]
    fn test_wall_section_layout() {
        let tables = subtile_combinations().unwrap();
        let text = format_section("Wall", &tables.wall);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines.first(), Some(&"Wall:"));
        assert_eq!(lines.get(1), Some(&"((0, 0), (1, 1), (1, 0), (0, 1)),"));
        assert_eq!(lines.last(), Some(&"((0, 0), (3, 3), (3, 0), (0, 3))"));
        assert!(text.ends_with(")\n"));
    }

    // Verified by skipping padding cells
    #[test]
    fn test_terrain_section_prints_padding() {
        let tables = subtile_combinations().unwrap();
        let text = format_tables(&tables, TableSection::Terrain);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 50);
        assert_eq!(lines.first(), Some(&"Terrain:"));
        assert_eq!(lines.get(42), Some(&"(),"));
        assert_eq!(lines.last(), Some(&"()"));
    }

    #[test]
    fn test_both_sections_in_order() {
        let tables = subtile_combinations().unwrap();
        let text = format_tables(&tables, TableSection::Both);
        let wall = text.find("Wall:").unwrap();
        let terrain = text.find("Terrain:").unwrap();
        assert!(wall < terrain);
        assert_eq!(text.lines().count(), 17 + 50);
        assert_eq!(TableSection::default(), TableSection::Both);
    }
}
