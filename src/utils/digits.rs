use log::debug;

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `character` is not an ASCII digit. `position` is only
/// used to report where the offending character sits in its string.
pub fn digit_value(character: char, position: usize) -> Result<u32, UtilsError> {
    character.to_digit(10).ok_or_else(|| {
        debug!(
            "Rejecting non-digit character '{}' at position {}",
            character, position
        );
        UtilsError::InvalidDigit {
            character,
            position,
        }
    })
}

/// Concatenate the decimal forms of `numbers` without separators.
pub fn concat_numbers(numbers: &[u32]) -> String {
    numbers.iter().map(u32::to_string).collect()
}
