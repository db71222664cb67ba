use crate::partition::errors::PartitionError;

pub const DEFAULT_PICK_COUNT: usize = 7;
pub const DEFAULT_MAX_VALUE: u32 = 59;
pub const MIN_VALUE: u32 = 1;

/// Configuration for the partition engine
///
/// `max_value` must stay two-digit so that every number is made of one or
/// two input characters. The accepted input length follows from the pick
/// count: one character per number at least, two at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionConfig {
    pick_count: usize,
    max_value: u32,
}

impl PartitionConfig {
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidConfig`] if `pick_count` is zero or
    /// too large to double, or `max_value` is not between 10 and 99.
    pub fn new(pick_count: usize, max_value: u32) -> Result<Self, PartitionError> {
        if pick_count == 0 {
            return Err(PartitionError::InvalidConfig(
                "pick count must be at least 1".to_string(),
            ));
        }
        if pick_count.checked_mul(2).is_none() {
            return Err(PartitionError::InvalidConfig(format!(
                "pick count {} is too large",
                pick_count
            )));
        }
        if !(10..=99).contains(&max_value) {
            return Err(PartitionError::InvalidConfig(format!(
                "maximum value must be between 10 and 99, got {}",
                max_value
            )));
        }
        Ok(Self {
            pick_count,
            max_value,
        })
    }

    pub fn pick_count(&self) -> usize {
        self.pick_count
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn min_length(&self) -> usize {
        self.pick_count
    }

    pub fn max_length(&self) -> usize {
        self.pick_count * 2
    }

    /// Whether a trailing zero may turn `last` into `last * 10`
    pub fn accepts_zero_after(&self, last: u32) -> bool {
        last >= MIN_VALUE && last * 10 <= self.max_value
    }

    /// The two-digit number formed by `digit` following `last`, if in range
    pub fn merged_value(&self, last: u32, digit: u32) -> Option<u32> {
        let merged = last.checked_mul(10)?.checked_add(digit)?;
        (10..=self.max_value).contains(&merged).then_some(merged)
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            pick_count: DEFAULT_PICK_COUNT,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}
