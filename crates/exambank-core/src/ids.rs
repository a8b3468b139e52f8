//! Explicit question id allocation.

/// Hands out question ids in increasing order starting after `base`.
///
/// Explicit ids seen via [`IdAllocator::reserve`] push the counter forward so
/// that allocated ids always exceed every id observed so far. Uniqueness of
/// the final collection is still checked by the aggregator.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    pub fn new(base: u32) -> Self {
        Self { last: base }
    }

    /// Allocate the next id, or `None` once `u32::MAX` has been handed out
    /// or reserved.
    pub fn next_id(&mut self) -> Option<u32> {
        self.last = self.last.checked_add(1)?;
        Some(self.last)
    }

    /// Record an explicitly chosen id.
    pub fn reserve(&mut self, id: u32) {
        self.last = self.last.max(id);
    }

    /// Use `explicit` if present, otherwise allocate.
    pub fn resolve(&mut self, explicit: Option<u32>) -> Option<u32> {
        match explicit {
            Some(id) => {
                self.reserve(id);
                Some(id)
            }
            None => self.next_id(),
        }
    }

    /// The highest id handed out or reserved so far.
    pub fn last(&self) -> u32 {
        self.last
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(1000)
    }
}
