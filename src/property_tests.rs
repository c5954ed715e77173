//! Property-based tests for cipher parsing and grid transformations

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::operations::{apply_operation, Operation};
    use crate::transformer::{execute, parse_cipher, transform};
    use crate::validation::validate_cipher;
    use proptest::prelude::*;

    fn numbered_grid(rows: usize, columns: usize) -> Grid<usize> {
        Grid::new(
            (0..rows)
                .map(|r| (0..columns).map(|c| r * columns + c).collect())
                .collect(),
        )
        .expect("numbered grid is valid")
    }

    fn grid_strategy() -> impl Strategy<Value = Grid<usize>> {
        (1usize..6, 1usize..8).prop_map(|(rows, columns)| numbered_grid(rows, columns))
    }

    fn operation_strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            Just(Operation::HorizontalFlip),
            Just(Operation::VerticalFlip),
            (-1000i64..1000).prop_map(Operation::Rotate),
        ]
    }

    fn render(operations: &[Operation]) -> String {
        operations.iter().map(ToString::to_string).collect()
    }

    fn qwerty_input() -> impl Strategy<Value = String> {
        let keys: Vec<char> = Grid::qwerty().cells().to_vec();
        prop::collection::vec(prop::sample::select(keys), 1..24)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn test_double_flip_is_identity(input in qwerty_input()) {
            let keyboard = Grid::qwerty();
            prop_assert_eq!(execute(&keyboard, "HH", &input).unwrap(), input.clone());
            prop_assert_eq!(execute(&keyboard, "VV", &input).unwrap(), input);
        }

        #[test]
        fn test_rotate_then_unrotate_is_identity(grid in grid_strategy(), k in -1000i64..1000) {
            let there = apply_operation(&grid, Operation::Rotate(k));
            prop_assert_eq!(apply_operation(&there, Operation::Rotate(-k)), grid);
        }

        #[test]
        fn test_rotate_is_periodic_in_column_count(
            grid in grid_strategy(),
            k in -1000i64..1000,
            m in -20i64..20,
        ) {
            let columns = grid.columns() as i64;
            prop_assert_eq!(
                apply_operation(&grid, Operation::Rotate(k)),
                apply_operation(&grid, Operation::Rotate(k + columns * m))
            );
        }

        #[test]
        fn test_transform_composes_left_to_right(
            grid in grid_strategy(),
            first in prop::collection::vec(operation_strategy(), 1..6),
            second in prop::collection::vec(operation_strategy(), 1..6),
        ) {
            let (a, b) = (render(&first), render(&second));
            let combined = transform(&grid, &format!("{a}{b}")).unwrap();
            let stepwise = transform(&transform(&grid, &a).unwrap(), &b).unwrap();
            prop_assert_eq!(combined, stepwise);
        }

        #[test]
        fn test_rendered_operations_parse_back(
            operations in prop::collection::vec(operation_strategy(), 1..10),
        ) {
            prop_assert_eq!(parse_cipher(&render(&operations)).unwrap(), operations);
        }

        #[test]
        fn test_transform_preserves_cells(
            grid in grid_strategy(),
            operations in prop::collection::vec(operation_strategy(), 1..10),
        ) {
            let transformed = transform(&grid, &render(&operations)).unwrap();
            let mut before = grid.cells().to_vec();
            let mut after = transformed.cells().to_vec();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
            prop_assert_eq!(transformed.rows(), grid.rows());
            prop_assert_eq!(transformed.columns(), grid.columns());
        }

        #[test]
        fn test_validation_is_total_and_deterministic(cipher in "[HVS0-9A~-]{0,12}") {
            let first = validate_cipher(&cipher);
            prop_assert_eq!(first.clone(), validate_cipher(&cipher));
            // Short valid ciphers always parse; their amounts fit in an i64
            if first.is_ok() {
                prop_assert!(parse_cipher(&cipher).is_ok());
            }
        }

        #[test]
        fn test_execute_preserves_length_and_alphabet(
            input in qwerty_input(),
            operations in prop::collection::vec(operation_strategy(), 1..6),
        ) {
            let keyboard = Grid::qwerty();
            let output = execute(&keyboard, &render(&operations), &input).unwrap();
            prop_assert_eq!(output.chars().count(), input.chars().count());
            prop_assert!(output.chars().all(|ch| keyboard.contains(&ch)));
        }
    }
}
