//! Tests for reorder table flattening, validation and padding

#[cfg(test)]
mod tests {
    use autotile_combos::AutotileError;
    use autotile_combos::algorithm::remap::{IndexMapping, index_mappings, remap};
    use autotile_combos::io::configuration::{
        REORDERING, ReorderEntry, TILED_TERRAIN_SHAPE, TILED_WALL_SHAPE,
    };
    use autotile_combos::spatial::{Combination, GridShape, SubtileCoord};
    use std::collections::HashSet;

    fn numbered(count: u32) -> Vec<Combination> {
        (0..count)
            .map(|i| Combination::from_quadrants([SubtileCoord::new(i, 2); 4]))
            .collect()
    }

    #[test]
    fn test_mappings_are_flattened_with_reference_stride() {
        let table: [ReorderEntry; 2] = [([3, 1], [0, 2]), ([4, 0], [1, 0])];
        let mappings = index_mappings(&table, GridShape::new(4, 4)).unwrap();
        assert_eq!(
            mappings,
            vec![
                IndexMapping {
                    source: 4,
                    target: 1,
                    cell: [1, 0],
                },
                IndexMapping {
                    source: 10,
                    target: 14,
                    cell: [0, 2],
                },
            ]
        );
    }

    // Verified by keeping targets outside the requested shape
    #[test]
    fn test_targets_outside_shape_are_dropped() {
        let wall = index_mappings(&REORDERING, TILED_WALL_SHAPE).unwrap();
        assert_eq!(wall.len(), 16);
        assert!(wall.iter().all(|m| m.cell[0] < 4 && m.cell[1] < 4));

        let terrain = index_mappings(&REORDERING, TILED_TERRAIN_SHAPE).unwrap();
        assert_eq!(terrain.len(), 49);
        assert!(terrain.windows(2).all(|w| w[0].target < w[1].target));
    }

    // Tests injectivity: no source placed twice, every in-range source placed
    #[test]
    fn test_remap_is_injective() {
        let combinations = numbered(49);
        let grid = remap(&combinations, TILED_TERRAIN_SHAPE, &REORDERING).unwrap();
        let placed: HashSet<&Combination> = grid.iter().collect();
        assert_eq!(placed.len(), 49);
        assert!(combinations.iter().all(|c| placed.contains(c)));
    }

    // Tests sources past the end of the list become padding
    // Verified by skipping the bounds check
    #[test]
    fn test_out_of_range_sources_are_padding() {
        let grid = remap(&numbered(47), TILED_TERRAIN_SHAPE, &REORDERING).unwrap();
        assert_eq!(grid.len(), 49);
        assert_eq!(grid.get([6, 5]), Some(&Combination::empty()));
        assert_eq!(grid.get([6, 6]), Some(&Combination::empty()));
        assert_eq!(grid.iter().filter(|c| c.is_empty()).count(), 2);

        let empty_input = remap(&[], TILED_WALL_SHAPE, &REORDERING).unwrap();
        assert!(empty_input.iter().all(Combination::is_empty));
    }

    // Cells without any table entry are padded too
    #[test]
    fn test_unmapped_cells_are_padding() {
        let table: [ReorderEntry; 1] = [([0, 0], [1, 1])];
        let grid = remap(&numbered(3), GridShape::new(2, 2), &table).unwrap();
        assert_eq!(grid.get([0, 0]), Some(&Combination::empty()));
        assert_eq!(grid.get([1, 1]), numbered(1).first());
    }

    // Verified by removing the duplicate source check
    #[test]
    fn test_duplicate_source_is_fatal() {
        let table: [ReorderEntry; 2] = [([2, 0], [0, 0]), ([2, 0], [1, 0])];
        let result = remap(&numbered(4), GridShape::new(2, 1), &table);
        assert!(matches!(
            result,
            Err(AutotileError::DuplicateSourceIndex { index: 2 })
        ));
    }

    // Verified by removing the duplicate target check
    #[test]
    fn test_duplicate_target_is_fatal() {
        let table: [ReorderEntry; 2] = [([0, 0], [0, 1]), ([1, 0], [0, 1])];
        let result = index_mappings(&table, GridShape::new(2, 2));
        assert!(matches!(
            result,
            Err(AutotileError::DuplicateTargetIndex { index: 7 })
        ));
    }

    // Duplicates outside the requested shape don't matter
    #[test]
    fn test_duplicates_outside_shape_are_ignored() {
        let table: [ReorderEntry; 2] = [([0, 0], [0, 0]), ([0, 0], [5, 5])];
        assert!(index_mappings(&table, GridShape::new(2, 2)).is_ok());
        assert!(index_mappings(&table, GridShape::new(7, 7)).is_err());
    }

    #[test]
    fn test_entries_off_the_reference_grid_are_rejected() {
        let table: [ReorderEntry; 1] = [([7, 0], [0, 0])];
        let result = index_mappings(&table, GridShape::new(2, 2));
        assert!(matches!(
            result,
            Err(AutotileError::ReorderOutOfBounds { .. })
        ));
    }
}
