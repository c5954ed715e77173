//! Grid operations
//!
//! Each cipher operator maps to one [`Operation`]. Operations are column or row
//! permutations, so applying one never changes the set of cells in a grid.

pub mod scanner;

pub use scanner::scan_shift_amount;

use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cipher operator for a horizontal flip
pub const HORIZONTAL_FLIP: char = 'H';
/// Cipher operator for a vertical flip
pub const VERTICAL_FLIP: char = 'V';
/// Cipher operator for a column rotation
pub const SHIFT: char = 'S';
/// Sign allowed at the start of a shift amount
pub const NEGATIVE_SIGN: char = '-';

/// A single grid transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "amount", rename_all = "snake_case")]
pub enum Operation {
    /// Mirror left-right: reverse the columns of every row
    HorizontalFlip,
    /// Mirror top-bottom: reverse the order of the rows
    VerticalFlip,
    /// Shift every row's columns circularly; positive amounts move cells
    /// toward higher column indices
    Rotate(i64),
}

impl Operation {
    /// Apply this operation to a grid in place
    pub fn apply_to<T: Clone>(self, grid: &mut Grid<T>) {
        match self {
            Operation::HorizontalFlip => {
                for row in grid.rows_mut() {
                    row.reverse();
                }
            }
            Operation::VerticalFlip => {
                let cells = grid
                    .iter_rows()
                    .rev()
                    .flat_map(|row| row.iter().cloned())
                    .collect();
                grid.set_cells_unchecked(cells);
            }
            Operation::Rotate(amount) => {
                let offset = rotation_offset(amount, grid.columns());
                if offset == 0 {
                    return;
                }
                for row in grid.rows_mut() {
                    row.rotate_right(offset);
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::HorizontalFlip => write!(f, "{}", HORIZONTAL_FLIP),
            Operation::VerticalFlip => write!(f, "{}", VERTICAL_FLIP),
            Operation::Rotate(amount) => write!(f, "{}{}", SHIFT, amount),
        }
    }
}

/// Reduce a signed rotation to a right-rotation in `0..columns`
fn rotation_offset(amount: i64, columns: usize) -> usize {
    let columns = i128::try_from(columns).unwrap_or(i128::MAX);
    i128::from(amount).rem_euclid(columns) as usize
}

/// Apply `op` to a copy of `grid`
pub fn apply_operation<T: Clone>(grid: &Grid<T>, op: Operation) -> Grid<T> {
    let mut next = grid.clone();
    op.apply_to(&mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_matrix() -> Grid<u32> {
        Grid::new(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![10, 11, 12],
        ])
        .unwrap()
    }

    #[test]
    fn test_horizontal_flip() {
        let result = apply_operation(&test_matrix(), Operation::HorizontalFlip);
        assert_eq!(
            result.to_rows(),
            vec![
                vec![3, 2, 1],
                vec![6, 5, 4],
                vec![9, 8, 7],
                vec![12, 11, 10]
            ]
        );
    }

    #[test]
    fn test_vertical_flip() {
        let result = apply_operation(&test_matrix(), Operation::VerticalFlip);
        assert_eq!(
            result.to_rows(),
            vec![
                vec![10, 11, 12],
                vec![7, 8, 9],
                vec![4, 5, 6],
                vec![1, 2, 3]
            ]
        );
    }

    #[test]
    fn test_rotate_positive() {
        let result = apply_operation(&test_matrix(), Operation::Rotate(2));
        assert_eq!(
            result.to_rows(),
            vec![
                vec![2, 3, 1],
                vec![5, 6, 4],
                vec![8, 9, 7],
                vec![11, 12, 10]
            ]
        );
    }

    #[test]
    fn test_rotate_negative() {
        let result = apply_operation(&test_matrix(), Operation::Rotate(-2));
        assert_eq!(
            result.to_rows(),
            vec![
                vec![3, 1, 2],
                vec![6, 4, 5],
                vec![9, 7, 8],
                vec![12, 10, 11]
            ]
        );
    }

    #[test]
    fn test_rotate_wraps_past_column_count() {
        let grid = test_matrix();
        assert_eq!(
            apply_operation(&grid, Operation::Rotate(5)),
            apply_operation(&grid, Operation::Rotate(2))
        );
        assert_eq!(apply_operation(&grid, Operation::Rotate(3)), grid);
        assert_eq!(apply_operation(&grid, Operation::Rotate(-300)), grid);
    }

    #[test]
    fn test_rotate_extreme_amounts() {
        let grid = test_matrix();
        // i64::MIN = -9223372036854775808 ≡ 1 (mod 3)
        assert_eq!(
            apply_operation(&grid, Operation::Rotate(i64::MIN)),
            apply_operation(&grid, Operation::Rotate(1))
        );
        // i64::MAX ≡ 1 (mod 3)
        assert_eq!(
            apply_operation(&grid, Operation::Rotate(i64::MAX)),
            apply_operation(&grid, Operation::Rotate(1))
        );
    }

    #[test]
    fn test_apply_operation_leaves_source_untouched() {
        let grid = test_matrix();
        let _ = apply_operation(&grid, Operation::HorizontalFlip);
        assert_eq!(grid, test_matrix());
    }

    #[test]
    fn test_display_matches_cipher_syntax() {
        assert_eq!(Operation::HorizontalFlip.to_string(), "H");
        assert_eq!(Operation::VerticalFlip.to_string(), "V");
        assert_eq!(Operation::Rotate(-12).to_string(), "S-12");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&[Operation::HorizontalFlip, Operation::Rotate(-3)])
            .unwrap();
        assert_eq!(
            json,
            r#"[{"op":"horizontal_flip"},{"op":"rotate","amount":-3}]"#
        );
    }
}
