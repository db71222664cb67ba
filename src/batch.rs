use crate::partition::{PartitionEngine, PartitionError, Picks};
use crate::utils::UtilsError;
use log::{info, warn};
use rayon::prelude::*;
use std::collections::HashMap;

/// Pick the first split of a single, possibly absent, input
///
/// # Errors
///
/// Returns the reason the input has no picks.
pub fn try_pick(input: Option<&str>, engine: &PartitionEngine) -> Result<Picks, PartitionError> {
    let digits = input.ok_or(UtilsError::EmptyDigitString)?;
    let mut picks = engine.try_partition(digits)?.into_iter();
    picks.next().ok_or(PartitionError::NoValidPartition {
        digits: digits.to_string(),
        pick_count: engine.config().pick_count(),
    })
}

/// Map every input that can be split to its first split
///
/// Absent, empty and unsplittable inputs are skipped. Inputs are processed
/// in parallel and never affect each other.
pub fn pick_all(inputs: &[Option<&str>], engine: &PartitionEngine) -> HashMap<String, Picks> {
    info!("Picking numbers for {} inputs", inputs.len());

    let picked: HashMap<String, Picks> = inputs
        .par_iter()
        .filter_map(|input| {
            let digits = (*input)?;
            match try_pick(Some(digits), engine) {
                Ok(picks) => Some((digits.to_string(), picks)),
                Err(err) => {
                    warn!("Skipping '{}': {}", digits, err);
                    None
                }
            }
        })
        .collect();

    info!("Picked numbers for {} of {} inputs", picked.len(), inputs.len());
    picked
}

/// Outcome for every input, in input order
pub fn explain_all(
    inputs: &[Option<&str>],
    engine: &PartitionEngine,
) -> Vec<(Option<String>, Result<Picks, PartitionError>)> {
    inputs
        .par_iter()
        .map(|input| (input.map(str::to_string), try_pick(*input, engine)))
        .collect()
}
