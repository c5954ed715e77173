//! Cipher execution
//!
//! Walks a validated cipher left to right, applies each operation to a working
//! copy of the layout, then retypes the input on the transformed layout: every
//! input character is located on the original layout and replaced by whatever
//! now sits at the same coordinate.

use crate::grid::Grid;
use crate::operations::{scan_shift_amount, Operation, HORIZONTAL_FLIP, SHIFT, VERTICAL_FLIP};
use crate::validation::{validate_cipher, validate_input, ValidationError};
use tracing::{debug, trace};

/// Parse a cipher into the operations it encodes, in application order.
///
/// The cipher is validated first. Digits and signs consumed as a shift amount
/// are never read again as operators; any other digit or sign is skipped.
pub fn parse_cipher(cipher: &str) -> Result<Vec<Operation>, ValidationError> {
    validate_cipher(cipher)?;

    let chars: Vec<char> = cipher.chars().collect();
    let mut operations = Vec::new();
    let mut position = 0;
    while position < chars.len() {
        position = match chars[position] {
            HORIZONTAL_FLIP => {
                operations.push(Operation::HorizontalFlip);
                position + 1
            }
            VERTICAL_FLIP => {
                operations.push(Operation::VerticalFlip);
                position + 1
            }
            SHIFT => {
                let (amount, next) = scan_shift_amount(&chars, position + 1)?;
                operations.push(Operation::Rotate(amount));
                next
            }
            // Stray digits and signs carry no operation
            _ => position + 1,
        };
    }

    Ok(operations)
}

/// Apply every operation in `cipher` to a copy of `grid`
pub fn transform<T: Clone>(grid: &Grid<T>, cipher: &str) -> Result<Grid<T>, ValidationError> {
    let operations = parse_cipher(cipher)?;
    Ok(apply_all(grid, &operations))
}

/// Apply `operations` in order to a copy of `grid`
pub fn apply_all<T: Clone>(grid: &Grid<T>, operations: &[Operation]) -> Grid<T> {
    let mut output = grid.clone();
    for op in operations {
        trace!(%op, "Applying operation");
        op.apply_to(&mut output);
    }
    output
}

/// Retype `input` character by character: each character is located on
/// `original` and replaced by the character at the same coordinate on
/// `transformed`.
///
/// The output has exactly as many characters as `input`; a character missing
/// from `original` is reported as [`ValidationError::CharacterNotOnGrid`].
pub fn retype(
    original: &Grid<char>,
    transformed: &Grid<char>,
    input: &str,
) -> Result<String, ValidationError> {
    let index = original.index();
    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            index
                .get(&character)
                .and_then(|&(row, column)| transformed.get(row, column))
                .copied()
                .ok_or(ValidationError::CharacterNotOnGrid {
                    position,
                    character,
                })
        })
        .collect()
}

/// Validate the cipher and input, transform the layout, and return the input
/// retyped on the transformed layout.
///
/// The cipher passes run before the input checks; shift amounts are scanned
/// only once both have passed.
pub fn execute(grid: &Grid<char>, cipher: &str, input: &str) -> Result<String, ValidationError> {
    validate_cipher(cipher)?;
    validate_input(grid, input)?;
    let operations = parse_cipher(cipher)?;

    let transformed = apply_all(grid, &operations);
    let output = retype(grid, &transformed, input)?;

    debug!(
        cipher,
        operations = operations.len(),
        input_len = input.chars().count(),
        "Retyped input on transformed layout"
    );
    Ok(output)
}
