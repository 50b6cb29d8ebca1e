//! Tests for rebasing wall combinations onto wall sheet rows

#[cfg(test)]
mod tests {
    use autotile_combos::AutotileError;
    use autotile_combos::algorithm::adjust::{shift_combination, to_wall_space};
    use autotile_combos::spatial::{Combination, CombinationGrid, GridShape, SubtileCoord};

    fn combination(subtiles: [(u32, u32); 4]) -> Combination {
        Combination::from_quadrants(subtiles.map(SubtileCoord::from))
    }

    #[test]
    fn test_shift_moves_rows_only() {
        let shifted = shift_combination(&combination([(0, 2), (1, 3), (1, 2), (0, 3)]), 2).unwrap();
        assert_eq!(shifted, combination([(0, 0), (1, 1), (1, 0), (0, 1)]));
    }

    // Verified by shifting padding into a one-element combination
    #[test]
    fn test_padding_stays_empty() {
        let grid = CombinationGrid::from_row_major(
            GridShape::new(2, 1),
            vec![
                combination([(2, 4), (3, 5), (3, 4), (2, 5)]),
                Combination::empty(),
            ],
        )
        .unwrap();

        let wall = to_wall_space(&grid).unwrap();
        assert_eq!(wall.shape(), grid.shape());
        assert_eq!(
            wall.get([0, 0]),
            Some(&combination([(2, 2), (3, 3), (3, 2), (2, 3)]))
        );
        assert_eq!(wall.get([1, 0]), Some(&Combination::empty()));
    }

    // Tests terrain-only subtiles can't be rebased
    // Verified by saturating instead of failing
    #[test]
    fn test_terrain_only_subtile_underflows() {
        let result = shift_combination(&combination([(2, 2), (1, 3), (1, 2), (2, 1)]), 2);
        assert!(matches!(
            result,
            Err(AutotileError::CoordinateUnderflow { shift: 2, .. })
        ));
    }
}
