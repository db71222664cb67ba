//! Splitting digit strings into lottery numbers

mod candidate;
mod config;
mod engine;
mod errors;
mod picks;

pub use config::{DEFAULT_MAX_VALUE, DEFAULT_PICK_COUNT, MIN_VALUE, PartitionConfig};
pub use engine::PartitionEngine;
pub use errors::PartitionError;
pub use picks::Picks;
