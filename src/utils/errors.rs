use thiserror::Error;

/// Errors raised while checking raw digit strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Digit string cannot be empty")]
    EmptyDigitString,
    #[error("Character '{character}' at position {position} is not a digit")]
    InvalidDigit { character: char, position: usize },
    #[error("Digit string has {length} characters, expected between {min} and {max}")]
    LengthOutOfBounds {
        length: usize,
        min: usize,
        max: usize,
    },
}
