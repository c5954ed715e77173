/// Error code registry for keycipher
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Layout (grid construction) errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_IO_ERROR: u16 = 1004;

    // Layout errors (3000-3999)
    pub const LAYOUT_EMPTY: u16 = 3001;
    pub const LAYOUT_RAGGED: u16 = 3002;
    pub const LAYOUT_DUPLICATE_CELL: u16 = 3003;

    // Validation errors (7000-7999)
    pub const VALIDATION_EMPTY_CIPHER: u16 = 7001;
    pub const VALIDATION_ILLEGAL_CHARACTER: u16 = 7002;
    pub const VALIDATION_DANGLING_SHIFT: u16 = 7003;
    pub const VALIDATION_MISPLACED_NEGATIVE: u16 = 7004;
    pub const VALIDATION_NEGATIVE_NOT_BEFORE_DIGIT: u16 = 7005;
    pub const VALIDATION_SHIFT_OUT_OF_RANGE: u16 = 7006;
    pub const VALIDATION_EMPTY_INPUT: u16 = 7007;
    pub const VALIDATION_NOT_ON_GRID: u16 = 7008;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",
        1004 => "Configuration I/O error",

        // Layout errors
        3001 => "Layout has no cells",
        3002 => "Layout rows have different lengths",
        3003 => "Layout contains a duplicate cell",

        // Validation errors
        7001 => "Cipher is empty",
        7002 => "Cipher contains an unsupported character",
        7003 => "Shift operator is not followed by an amount",
        7004 => "Cipher starts or ends with a negative sign",
        7005 => "Negative sign is not followed by a digit",
        7006 => "Shift amount does not fit in a 64-bit integer",
        7007 => "Input is empty",
        7008 => "Input character is not on the layout",

        9000 => "Generic error",
        _ => "Unknown error code",
    }
}
