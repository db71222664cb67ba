use std::fmt;

use crate::partition::candidate::Candidate;
use crate::utils::concat_numbers;

/// A complete split of an input string into lottery numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Picks(Vec<u32>);

impl Picks {
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digit string these numbers were read from
    pub fn concatenated(&self) -> String {
        concat_numbers(&self.0)
    }
}

impl From<Candidate> for Picks {
    fn from(candidate: Candidate) -> Self {
        Self(candidate.into_numbers())
    }
}

impl From<Picks> for Vec<u32> {
    fn from(picks: Picks) -> Self {
        picks.0
    }
}

impl fmt::Display for Picks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut numbers = self.0.iter();
        if let Some(first) = numbers.next() {
            write!(f, "{}", first)?;
        }
        for number in numbers {
            write!(f, ", {}", number)?;
        }
        Ok(())
    }
}
