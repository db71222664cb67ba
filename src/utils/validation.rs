use log::debug;

use crate::utils::digits::digit_value;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit characters.
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if digit_string.is_empty() {
        debug!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    for (position, character) in digit_string.chars().enumerate() {
        digit_value(character, position)?;
    }

    debug!("Digit string validation successful");
    Ok(())
}

/// Checks the character count of `digit_string` against `min..=max`.
///
/// # Errors
///
/// Returns [`UtilsError::EmptyDigitString`] for an empty string and
/// [`UtilsError::LengthOutOfBounds`] when the count falls outside the range.
pub fn validate_length(digit_string: &str, min: usize, max: usize) -> Result<(), UtilsError> {
    if digit_string.is_empty() {
        debug!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    let length = digit_string.chars().count();
    if length < min || length > max {
        debug!(
            "Digit string '{}' has {} characters, outside {}..={}",
            digit_string, length, min, max
        );
        return Err(UtilsError::LengthOutOfBounds { length, min, max });
    }

    Ok(())
}
