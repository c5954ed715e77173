//! Integer-literal scanning for shift amounts
//!
//! A shift operator `S` is followed by an optional `-` and a run of ASCII
//! digits. The scan is greedy and stops at the first non-digit or at the end of
//! the cipher, so `S12S-3` yields `12` and then `-3`.

use super::NEGATIVE_SIGN;
use crate::validation::ValidationError;

/// Scan a signed integer literal starting at `start`.
///
/// `start` is the position immediately after the `S` token. Returns the parsed
/// amount and the position of the first character after the literal.
pub fn scan_shift_amount(chars: &[char], start: usize) -> Result<(i64, usize), ValidationError> {
    let mut end = start;
    if chars.get(end) == Some(&NEGATIVE_SIGN) {
        end += 1;
    }

    let digits_start = end;
    while chars.get(end).is_some_and(char::is_ascii_digit) {
        end += 1;
    }

    if end == digits_start {
        return Err(ValidationError::DanglingShiftOperator {
            position: start.saturating_sub(1),
        });
    }

    let literal: String = chars[start..end].iter().collect();
    let amount = literal
        .parse::<i64>()
        .map_err(|_| ValidationError::ShiftAmountOutOfRange { position: start })?;

    Ok((amount, end))
}
