/// One parse of an input prefix: the numbers read so far, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    numbers: Vec<u32>,
}

impl Candidate {
    pub(crate) fn start(digit: u32, capacity: usize) -> Self {
        let mut numbers = Vec::with_capacity(capacity);
        numbers.push(digit);
        Self { numbers }
    }

    pub(crate) fn last(&self) -> Option<u32> {
        self.numbers.last().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Copy with the last number swapped for `value`
    pub(crate) fn with_last(&self, value: u32) -> Self {
        let mut next = self.clone();
        next.replace_last(value);
        next
    }

    /// Copy with `value` read as a new trailing number
    pub(crate) fn with_appended(&self, value: u32) -> Self {
        let mut numbers = self.numbers.clone();
        numbers.push(value);
        Self { numbers }
    }

    pub(crate) fn replace_last(&mut self, value: u32) {
        if let Some(last) = self.numbers.last_mut() {
            *last = value;
        }
    }

    pub(crate) fn into_numbers(self) -> Vec<u32> {
        self.numbers
    }
}

impl From<Vec<u32>> for Candidate {
    fn from(numbers: Vec<u32>) -> Self {
        Self { numbers }
    }
}
