//! Rectangular grids of unique cells
//!
//! A [`Grid`] is the keyboard layout that ciphers operate on. Cells are stored
//! row-major; every cell value is unique so a value can always be mapped back to
//! exactly one coordinate.

use crate::error::{ErrorCode, KeycipherError};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Rows of the standard 4x10 keyboard layout
pub const QWERTY_ROWS: [&str; 4] = ["1234567890", "QWERTYUIOP", "ASDFGHJKL;", "ZXCVBNM,./"];

static QWERTY: Lazy<Grid<char>> =
    Lazy::new(|| Grid::from_rows(&QWERTY_ROWS).expect("Invalid built-in layout"));

/// Errors raised while constructing a grid
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Layout must contain at least one row")]
    Empty,

    #[error("Layout row {row} is empty")]
    EmptyRow { row: usize },

    #[error("Layout row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Layout cell at row {row}, column {column} duplicates an earlier cell")]
    DuplicateCell { row: usize, column: usize },
}

impl From<GridError> for KeycipherError {
    fn from(err: GridError) -> Self {
        let code = match &err {
            GridError::Empty | GridError::EmptyRow { .. } => ErrorCode::LAYOUT_EMPTY,
            GridError::Ragged { .. } => ErrorCode::LAYOUT_RAGGED,
            GridError::DuplicateCell { .. } => ErrorCode::LAYOUT_DUPLICATE_CELL,
        };
        KeycipherError::layout_with_code(code, err.to_string()).with_source(err)
    }
}

/// A rectangular arrangement of unique cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T: Clone + Eq + Hash> Grid<T> {
    /// Build a grid from its rows.
    ///
    /// Fails if there are no rows, if any row is empty or differs in length from
    /// the first, or if any value appears twice.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let columns = match rows.first() {
            None => return Err(GridError::Empty),
            Some(first) if first.is_empty() => return Err(GridError::EmptyRow { row: 0 }),
            Some(first) => first.len(),
        };

        let row_count = rows.len();
        let mut seen = HashMap::with_capacity(row_count * columns);
        let mut cells = Vec::with_capacity(row_count * columns);
        for (r, row) in rows.into_iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::EmptyRow { row: r });
            }
            if row.len() != columns {
                return Err(GridError::Ragged {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                if seen.insert(value.clone(), (r, c)).is_some() {
                    return Err(GridError::DuplicateCell { row: r, column: c });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: row_count,
            columns,
            cells,
        })
    }

    /// Map every value to its `(row, column)` coordinate
    pub fn index(&self) -> HashMap<T, (usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, value)| (value.clone(), (i / self.columns, i % self.columns)))
            .collect()
    }

    /// Returns true if `value` is one of the grid's cells
    pub fn contains(&self, value: &T) -> bool {
        self.cells.contains(value)
    }

    /// Coordinate of `value`, if present
    pub fn position_of(&self, value: &T) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| cell == value)
            .map(|i| (i / self.columns, i % self.columns))
    }
}

impl<T> Grid<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Value at `(row, column)`, or `None` when out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Cells of row `r`.
    ///
    /// # Panics
    /// Panics if `r >= rows()`.
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows, "row index out of bounds");
        &self.cells[r * self.columns..(r + 1) * self.columns]
    }

    /// Iterate over the rows from top to bottom
    pub fn iter_rows(&self) -> impl DoubleEndedIterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> + '_ {
        self.cells.chunks_exact_mut(self.columns)
    }

    /// Replace the cells without re-checking uniqueness. The new cells must be a
    /// permutation of the old ones.
    pub(crate) fn set_cells_unchecked(&mut self, cells: Vec<T>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the grid back out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl Grid<char> {
    /// Build a character grid from row strings, one cell per character
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    /// The standard 4x10 keyboard layout
    pub fn qwerty() -> Self {
        QWERTY.clone()
    }

    /// Rows as strings
    pub fn row_strings(&self) -> Vec<String> {
        self.iter_rows().map(|row| row.iter().collect()).collect()
    }
}

impl Default for Grid<char> {
    fn default() -> Self {
        Self::qwerty()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Grid<char> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.row_strings().serialize(serializer)
    }
}
