//! Tests for combination enumeration order and cardinality

#[cfg(test)]
mod tests {
    use autotile_combos::algorithm::generator::{
        base_combinations, expand_stage, generate_combinations,
    };
    use autotile_combos::algorithm::resolver::Stage;
    use autotile_combos::spatial::{Combination, SubtileCoord};
    use std::collections::HashSet;

    fn combination(subtiles: &[(u32, u32)]) -> Combination {
        let coords: Vec<SubtileCoord> = subtiles.iter().copied().map(SubtileCoord::from).collect();
        Combination::from_subtiles(&coords)
    }

    #[test]
    fn test_base_combinations_order() {
        let bases = base_combinations();
        assert_eq!(bases.len(), 25);
        assert_eq!(bases.first(), Some(&combination(&[(0, 2), (1, 3)])));
        assert_eq!(bases.get(4), Some(&combination(&[(0, 2), (3, 1)])));
        assert_eq!(bases.get(5), Some(&combination(&[(2, 2), (1, 3)])));
        assert_eq!(bases.last(), Some(&combination(&[(2, 0), (3, 1)])));
    }

    // Tests '+' variants are inserted right after their center sibling
    // Verified by appending variants at the end of the stage
    #[test]
    fn test_stage_expansion_counts_and_order() {
        let with_top_right = expand_stage(&base_combinations(), Stage::TopRight).unwrap();
        assert_eq!(with_top_right.len(), 34);

        // (0, 4) + (1, 3) resolves to the center, then its '+' variant
        let position = with_top_right
            .iter()
            .position(|c| *c == combination(&[(0, 4), (1, 3), (1, 4)]))
            .unwrap();
        assert_eq!(
            with_top_right.get(position + 1),
            Some(&combination(&[(0, 4), (1, 3), (3, 0)]))
        );
    }

    #[test]
    fn test_expanding_complete_combinations_fails() {
        let complete = generate_combinations().unwrap();
        assert!(expand_stage(&complete, Stage::BottomLeft).is_err());
    }

    // Verified by changing the center literal of the top-right stage
    #[test]
    fn test_generated_count_and_prefix() {
        let combinations = generate_combinations().unwrap();
        assert_eq!(combinations.len(), 47);

        let expected = [
            combination(&[(0, 2), (1, 3), (1, 2), (0, 3)]),
            combination(&[(0, 2), (3, 3), (3, 2), (0, 3)]),
            combination(&[(0, 2), (1, 5), (1, 2), (0, 5)]),
            combination(&[(0, 2), (3, 5), (3, 2), (0, 5)]),
            combination(&[(0, 2), (3, 1), (1, 2), (0, 3)]),
            combination(&[(2, 2), (1, 3), (1, 2), (2, 3)]),
            combination(&[(2, 2), (1, 3), (1, 2), (2, 1)]),
            combination(&[(2, 2), (3, 3), (3, 2), (2, 3)]),
        ];
        assert_eq!(combinations.get(..expected.len()), Some(&expected[..]));
        assert_eq!(
            combinations.last(),
            Some(&combination(&[(2, 0), (3, 1), (3, 0), (2, 1)]))
        );
    }

    #[test]
    fn test_generated_combinations_are_complete_and_unique() {
        let combinations = generate_combinations().unwrap();
        assert!(combinations.iter().all(Combination::is_complete));

        let unique: HashSet<&Combination> = combinations.iter().collect();
        assert_eq!(unique.len(), combinations.len());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(
            generate_combinations().unwrap(),
            generate_combinations().unwrap()
        );
    }
}
