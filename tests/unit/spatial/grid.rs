//! Tests for grid shapes and row-major combination grids

#[cfg(test)]
mod tests {
    use autotile_combos::AutotileError;
    use autotile_combos::spatial::grid::flatten;
    use autotile_combos::spatial::{Combination, CombinationGrid, GridShape, SubtileCoord};

    fn cell(i: u32) -> Combination {
        Combination::from_quadrants([SubtileCoord::new(i, 2); 4])
    }

    #[test]
    fn test_shape_helpers() {
        let shape = GridShape::new(4, 3);
        assert_eq!(shape.cell_count(), 12);
        assert!(shape.contains([3, 2]));
        assert!(!shape.contains([4, 0]));
        assert!(!shape.contains([0, 3]));
        assert_eq!(shape.linear_index([1, 2]), 9);
        assert_eq!(flatten([1, 2], 7), 15);
    }

    // Verified by swapping rows and columns in get
    #[test]
    fn test_row_major_access() {
        let grid =
            CombinationGrid::from_row_major(GridShape::new(3, 2), (0..6).map(cell).collect())
                .unwrap();

        assert_eq!(grid.shape(), GridShape::new(3, 2));
        assert_eq!(grid.get([2, 0]), Some(&cell(2)));
        assert_eq!(grid.get([0, 1]), Some(&cell(3)));
        assert_eq!(grid.get([3, 0]), None);

        let positions: Vec<[usize; 2]> = grid.iter_cells().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [2, 1]]
        );
        assert_eq!(grid.to_row_major(), (0..6).map(cell).collect::<Vec<_>>());
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let result = CombinationGrid::from_row_major(GridShape::new(2, 2), vec![cell(0)]);
        assert!(matches!(
            result,
            Err(AutotileError::GridSizeMismatch {
                expected: 4,
                found: 1,
                ..
            })
        ));
    }
}
