use log::debug;

use crate::partition::candidate::Candidate;
use crate::partition::config::PartitionConfig;
use crate::partition::errors::PartitionError;
use crate::partition::picks::Picks;
use crate::utils::{digit_value, validate_length};

/// Splits digit strings into every valid sequence of lottery numbers
///
/// Input is read one character at a time while a working set of candidates
/// is forked and pruned. A non-zero digit either starts a new number or
/// extends the previous single digit into a two-digit one, and both branches
/// may survive. A zero can never start a number, so it must extend the
/// previous single digit into a multiple of ten or the candidate dies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionEngine {
    config: PartitionConfig,
}

impl PartitionEngine {
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the engine configuration
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Every complete split of `digits`, in discovery order
    ///
    /// Invalid input yields an empty list; use [`Self::try_partition`] to
    /// learn why.
    pub fn partition(&self, digits: &str) -> Vec<Picks> {
        self.try_partition(digits).unwrap_or_else(|err| {
            debug!("No picks for '{}': {}", digits, err);
            Vec::new()
        })
    }

    /// The first complete split of `digits`, if any
    pub fn first_pick(&self, digits: &str) -> Option<Picks> {
        self.partition(digits).into_iter().next()
    }

    /// # Errors
    ///
    /// Returns an error if the length is outside the accepted range, a
    /// character is not a digit, a zero cannot be absorbed, or no candidate
    /// ends with exactly the configured number count.
    pub fn try_partition(&self, digits: &str) -> Result<Vec<Picks>, PartitionError> {
        validate_length(digits, self.config.min_length(), self.config.max_length())?;

        let mut candidates: Vec<Candidate> = Vec::new();
        for (position, character) in digits.chars().enumerate() {
            let digit = digit_value(character, position)?;
            candidates = self.step(candidates, position, digit)?;
            debug!(
                "After '{}' at position {}: {} candidates",
                character,
                position,
                candidates.len()
            );
            if candidates.is_empty() {
                debug!("Every candidate overflowed at position {}", position);
                break;
            }
        }

        let pick_count = self.config.pick_count();
        let picks: Vec<Picks> = candidates
            .into_iter()
            .filter(|candidate| candidate.len() == pick_count)
            .map(Picks::from)
            .collect();

        if picks.is_empty() {
            return Err(PartitionError::NoValidPartition {
                digits: digits.to_string(),
                pick_count,
            });
        }

        debug!("Found {} splits of '{}'", picks.len(), digits);
        Ok(picks)
    }

    /// Advance the working set by the digit read at `position`
    pub(crate) fn step(
        &self,
        candidates: Vec<Candidate>,
        position: usize,
        digit: u32,
    ) -> Result<Vec<Candidate>, PartitionError> {
        if digit == 0 {
            return self.absorb_zero(candidates, position);
        }

        if position == 0 {
            return Ok(vec![Candidate::start(digit, self.config.pick_count())]);
        }

        Ok(self.add_digit(&candidates, digit))
    }

    /// Turn each trailing single digit into its multiple of ten
    pub(crate) fn absorb_zero(
        &self,
        candidates: Vec<Candidate>,
        position: usize,
    ) -> Result<Vec<Candidate>, PartitionError> {
        if position == 0 || candidates.is_empty() {
            return Err(PartitionError::LeadingZero);
        }

        let merged: Vec<Candidate> = candidates
            .into_iter()
            .filter_map(|mut candidate| {
                let last = candidate.last()?;
                if !self.config.accepts_zero_after(last) {
                    return None;
                }
                candidate.replace_last(last * 10);
                Some(candidate)
            })
            .collect();

        if merged.is_empty() {
            return Err(PartitionError::UnmergeableZero { position });
        }
        Ok(merged)
    }

    /// Fork each candidate on a non-zero digit
    ///
    /// Candidates that take the digit as a new number keep their relative
    /// order and come first; candidates that merged it into a two-digit
    /// number follow in the order of their parents.
    pub(crate) fn add_digit(&self, candidates: &[Candidate], digit: u32) -> Vec<Candidate> {
        let pick_count = self.config.pick_count();
        let mut appended = Vec::with_capacity(candidates.len());
        let mut merged = Vec::new();

        for candidate in candidates {
            if let Some(last) = candidate.last()
                && let Some(value) = self.config.merged_value(last, digit)
            {
                merged.push(candidate.with_last(value));
            }

            if candidate.len() < pick_count {
                appended.push(candidate.with_appended(digit));
            }
        }

        appended.append(&mut merged);
        appended
    }
}
