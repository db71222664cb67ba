//! Character and string checks shared by the partition engine and the CLI

mod digits;
mod errors;
mod validation;

pub use digits::{concat_numbers, digit_value};
pub use errors::UtilsError;
pub use validation::{validate_digit_string, validate_length};

#[cfg(test)]
mod tests;
