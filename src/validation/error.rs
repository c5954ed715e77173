//! Cipher and input validation error types

use crate::error::{ErrorCode, KeycipherError};
use thiserror::Error;

/// Errors raised while validating a cipher or an input string
///
/// Positions are zero-based character indices into the offending string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cipher cannot be empty")]
    EmptyCipher,

    #[error("Unsupported cipher character '{character}' found at position {position}")]
    IllegalCharacter { position: usize, character: char },

    #[error(
        "Invalid shift operator found at position {position}. A shift operator should always be followed by either a number or a negative sign"
    )]
    DanglingShiftOperator { position: usize },

    #[error("Negative sign found at the first or last position of the cipher (position {position})")]
    MisplacedNegativeSign { position: usize },

    #[error(
        "Invalid negative sign found at position {position}. A negative sign should only appear immediately before a number"
    )]
    NegativeSignNotBeforeDigit { position: usize },

    #[error("Shift amount starting at position {position} is out of range")]
    ShiftAmountOutOfRange { position: usize },

    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Input character '{character}' at position {position} is not on the layout")]
    CharacterNotOnGrid { position: usize, character: char },
}

impl ValidationError {
    /// Registry code for this error
    pub fn code(&self) -> u16 {
        match self {
            ValidationError::EmptyCipher => ErrorCode::VALIDATION_EMPTY_CIPHER,
            ValidationError::IllegalCharacter { .. } => ErrorCode::VALIDATION_ILLEGAL_CHARACTER,
            ValidationError::DanglingShiftOperator { .. } => ErrorCode::VALIDATION_DANGLING_SHIFT,
            ValidationError::MisplacedNegativeSign { .. } => {
                ErrorCode::VALIDATION_MISPLACED_NEGATIVE
            }
            ValidationError::NegativeSignNotBeforeDigit { .. } => {
                ErrorCode::VALIDATION_NEGATIVE_NOT_BEFORE_DIGIT
            }
            ValidationError::ShiftAmountOutOfRange { .. } => {
                ErrorCode::VALIDATION_SHIFT_OUT_OF_RANGE
            }
            ValidationError::EmptyInput => ErrorCode::VALIDATION_EMPTY_INPUT,
            ValidationError::CharacterNotOnGrid { .. } => ErrorCode::VALIDATION_NOT_ON_GRID,
        }
    }
}

/// Convert ValidationError to KeycipherError
impl From<ValidationError> for KeycipherError {
    fn from(err: ValidationError) -> Self {
        KeycipherError::validation_with_code(err.code(), err.to_string()).with_source(err)
    }
}
