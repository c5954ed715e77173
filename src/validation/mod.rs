//! Cipher and input validation
//!
//! A cipher is checked in three ordered passes before any transformation runs:
//!
//! 1. **legal characters**: the cipher is non-empty and only uses `H`, `V`, `S`, `-`
//!    and ASCII digits
//! 2. **shift operators**: every `S` is immediately followed by a digit or `-`
//! 3. **miscellaneous characters**: a `-` never starts or ends the cipher and is
//!    always immediately followed by a digit
//!
//! The first failure is reported; later passes do not run.

pub mod error;

pub use error::ValidationError;

use crate::grid::Grid;
use crate::operations::{HORIZONTAL_FLIP, NEGATIVE_SIGN, SHIFT, VERTICAL_FLIP};
use tracing::trace;

/// Returns true if `ch` may appear anywhere in a cipher
pub fn is_cipher_character(ch: char) -> bool {
    matches!(ch, HORIZONTAL_FLIP | VERTICAL_FLIP | SHIFT | NEGATIVE_SIGN) || ch.is_ascii_digit()
}

/// Validate the cipher
pub fn validate_cipher(cipher: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = cipher.chars().collect();
    validate_legal_characters(&chars)?;
    validate_shift_operators(&chars)?;
    validate_miscellaneous_characters(&chars)?;
    trace!(cipher, "Cipher passed validation");
    Ok(())
}

/// Verify the cipher is not empty and every character is supported.
fn validate_legal_characters(chars: &[char]) -> Result<(), ValidationError> {
    if chars.is_empty() {
        return Err(ValidationError::EmptyCipher);
    }

    match chars
        .iter()
        .enumerate()
        .find(|(_, ch)| !is_cipher_character(**ch))
    {
        Some((position, &character)) => Err(ValidationError::IllegalCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Verify every shift operator is followed by an amount.
fn validate_shift_operators(chars: &[char]) -> Result<(), ValidationError> {
    for (position, _) in positions_of(chars, SHIFT) {
        let followed_by_amount = chars
            .get(position + 1)
            .is_some_and(|next| next.is_ascii_digit() || *next == NEGATIVE_SIGN);
        if !followed_by_amount {
            return Err(ValidationError::DanglingShiftOperator { position });
        }
    }
    Ok(())
}

/// Verify negative signs only appear directly before a digit.
fn validate_miscellaneous_characters(chars: &[char]) -> Result<(), ValidationError> {
    let last = chars.len() - 1;
    if chars[0] == NEGATIVE_SIGN {
        return Err(ValidationError::MisplacedNegativeSign { position: 0 });
    }
    if chars[last] == NEGATIVE_SIGN {
        return Err(ValidationError::MisplacedNegativeSign { position: last });
    }

    for (position, _) in positions_of(chars, NEGATIVE_SIGN) {
        if !chars[position + 1].is_ascii_digit() {
            return Err(ValidationError::NegativeSignNotBeforeDigit { position });
        }
    }
    Ok(())
}

fn positions_of(chars: &[char], needle: char) -> impl Iterator<Item = (usize, char)> + '_ {
    chars
        .iter()
        .copied()
        .enumerate()
        .filter(move |(_, ch)| *ch == needle)
}

/// Verify every input character can be typed on the layout.
pub fn validate_input(grid: &Grid<char>, input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let index = grid.index();
    match input
        .chars()
        .enumerate()
        .find(|(_, ch)| !index.contains_key(ch))
    {
        Some((position, character)) => Err(ValidationError::CharacterNotOnGrid {
            position,
            character,
        }),
        None => Ok(()),
    }
}
