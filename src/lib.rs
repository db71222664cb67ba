//! Lottopick - A library for reading lottery numbers out of digit strings
//!
//! A digit string is split, left to right, into exactly seven numbers between
//! 1 and 59. Each number uses one or two consecutive characters and a zero can
//! only close a two-digit multiple of ten.

pub mod batch;
pub mod partition;
pub mod utils;

// Re-export the main public API
pub use batch::{explain_all, pick_all, try_pick};
pub use partition::{PartitionConfig, PartitionEngine, PartitionError, Picks};
pub use utils::{UtilsError, validate_digit_string};

use std::collections::HashMap;

/// Find the first way to read lottery numbers from `digits`
///
/// This is a convenience function that rejects malformed strings up front and
/// runs a default engine.
///
/// # Returns
///
/// * `Ok(Some(Picks))` - If the string splits into seven numbers
/// * `Ok(None)` - If it has the wrong length or no split exists
/// * `Err(PartitionError)` - If the string is empty or holds a non-digit
///
/// # Errors
///
/// This function will return an error if:
/// * The input digit string is empty
/// * The input digit string contains non-digit characters
///
/// # Examples
///
/// ```
/// use lottopick::find_picks;
///
/// match find_picks("4938532894754") {
///     Ok(Some(picks)) => println!("Picks: {}", picks),
///     Ok(None) => println!("No picks"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_picks(digits: &str) -> Result<Option<Picks>, PartitionError> {
    validate_digit_string(digits)?;

    let engine = PartitionEngine::default();
    Ok(engine.first_pick(digits))
}

/// Map each input that can be split to its first split, using a default engine
///
/// ```
/// use lottopick::pick_numbers;
///
/// let picked = pick_numbers(&[Some("1234567"), None, Some("42")]);
/// assert_eq!(picked.len(), 1);
/// ```
pub fn pick_numbers(inputs: &[Option<&str>]) -> HashMap<String, Picks> {
    pick_all(inputs, &PartitionEngine::default())
}
