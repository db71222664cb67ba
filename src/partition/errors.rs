use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("A number cannot start with zero")]
    LeadingZero,
    #[error("Zero at position {position} cannot extend any number")]
    UnmergeableZero { position: usize },
    #[error("'{digits}' cannot be split into {pick_count} numbers")]
    NoValidPartition { digits: String, pick_count: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
