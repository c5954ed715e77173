use super::*;
use crate::grid::GridError;
use crate::validation::ValidationError;
use std::error::Error as _;
use std::path::PathBuf;

#[test]
fn test_keycipher_error_construction() {
    let err = KeycipherError::config_with_code(
        ErrorCode::CONFIG_NOT_FOUND,
        "Configuration file not found",
        None,
    );
    assert!(matches!(err, KeycipherError::Config { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);

    let err = KeycipherError::layout_with_code(ErrorCode::LAYOUT_RAGGED, "Ragged layout");
    assert!(matches!(err, KeycipherError::Layout { .. }));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.code(), ErrorCode::LAYOUT_RAGGED);

    let err = KeycipherError::validation_with_code(ErrorCode::VALIDATION_EMPTY_INPUT, "empty");
    assert!(matches!(err, KeycipherError::Validation { .. }));
    assert_eq!(err.exit_code(), 8);
    assert_eq!(err.code(), ErrorCode::VALIDATION_EMPTY_INPUT);

    let err = KeycipherError::other("Unknown error");
    assert!(matches!(err, KeycipherError::Other { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.code(), ErrorCode::OTHER_GENERIC);
}

#[test]
fn test_error_display_includes_code() {
    let err = KeycipherError::config_with_code(ErrorCode::CONFIG_NOT_FOUND, "missing", None);
    assert_eq!(err.to_string(), "[E1001] Configuration error: missing");
}

#[test]
fn test_error_with_source() {
    let source_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let err = KeycipherError::config_with_code(ErrorCode::CONFIG_IO_ERROR, "Config error", None)
        .with_source(source_err);

    assert!(err.to_string().contains("[E1004]"));
    assert_eq!(err.source().unwrap().to_string(), "File not found");
}

#[test]
fn test_config_user_message_names_path() {
    let err = KeycipherError::config_with_code(
        ErrorCode::CONFIG_PARSE_ERROR,
        "bad toml",
        Some(PathBuf::from("keycipher.toml")),
    );
    assert_eq!(
        err.user_message(),
        "Configuration problem in keycipher.toml: bad toml"
    );
}

#[test]
fn test_validation_error_conversion() {
    let err: KeycipherError = ValidationError::DanglingShiftOperator { position: 4 }.into();
    assert_eq!(err.code(), ErrorCode::VALIDATION_DANGLING_SHIFT);
    assert_eq!(err.exit_code(), 8);
    assert!(err.to_string().starts_with("[E7003] Validation error:"));
    assert!(err
        .user_message()
        .starts_with("Invalid cipher or input: Invalid shift operator found at position 4"));

    let source = err
        .source()
        .and_then(|s| s.downcast_ref::<ValidationError>())
        .unwrap();
    assert_eq!(source, &ValidationError::DanglingShiftOperator { position: 4 });
}

#[test]
fn test_validation_error_without_position() {
    let err: KeycipherError = ValidationError::EmptyCipher.into();
    assert_eq!(err.code(), ErrorCode::VALIDATION_EMPTY_CIPHER);
    assert_eq!(
        err.user_message(),
        "Invalid cipher or input: Cipher cannot be empty"
    );
}

#[test]
fn test_grid_error_conversion() {
    let err: KeycipherError = GridError::DuplicateCell { row: 1, column: 2 }.into();
    assert_eq!(err.code(), ErrorCode::LAYOUT_DUPLICATE_CELL);
    assert_eq!(err.exit_code(), 3);
    assert!(err.user_message().starts_with("Layout problem:"));
}

#[test]
fn test_validation_error_codes_are_distinct() {
    let errors = [
        ValidationError::EmptyCipher,
        ValidationError::IllegalCharacter {
            position: 0,
            character: 'x',
        },
        ValidationError::DanglingShiftOperator { position: 0 },
        ValidationError::MisplacedNegativeSign { position: 0 },
        ValidationError::NegativeSignNotBeforeDigit { position: 0 },
        ValidationError::ShiftAmountOutOfRange { position: 0 },
        ValidationError::EmptyInput,
        ValidationError::CharacterNotOnGrid {
            position: 0,
            character: 'x',
        },
    ];
    let mut codes: Vec<u16> = errors.iter().map(ValidationError::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}
