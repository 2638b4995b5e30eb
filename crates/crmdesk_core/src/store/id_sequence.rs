//! Monotonic id allocation for one collection.

/// Hands out strictly increasing ids above a floor.
///
/// The sequence remembers the highest id it has seen, so ids freed by a
/// removal are never handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    /// Creates a sequence whose first id is `floor + 1`.
    pub fn above(floor: u32) -> Self {
        Self { last: floor }
    }

    /// Creates a sequence above both `floor` and every id in `existing`.
    pub fn after_existing(floor: u32, existing: impl IntoIterator<Item = u32>) -> Self {
        let mut sequence = Self::above(floor);
        for id in existing {
            sequence.observe(id);
        }
        sequence
    }

    /// Records an externally assigned id so later allocations stay above it.
    pub fn observe(&mut self, id: u32) {
        self.last = self.last.max(id);
    }

    /// Allocates the next id.
    pub fn next_id(&mut self) -> u32 {
        self.last += 1;
        self.last
    }

    /// Highest id allocated or observed so far.
    pub fn last(&self) -> u32 {
        self.last
    }
}
