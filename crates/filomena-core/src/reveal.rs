//! One-shot scroll reveal bookkeeping.

/// CSS class added to a target on its first intersection.
pub const REVEALED_CLASS: &str = "revealed";

/// Tracks which reveal targets have already been revealed.
///
/// Targets are addressed by their position in document order at load.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(targets: usize) -> Self {
        Self {
            revealed: vec![false; targets],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Feed a visibility change; returns `true` exactly once per target,
    /// on its first intersection. The host reveals and stops observing then.
    pub fn on_visibility(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(done) = self.revealed.get_mut(index) else {
            return false;
        };
        if !intersecting || *done {
            return false;
        }
        *done = true;
        true
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&done| done).count()
    }

    /// All targets revealed; the observer can be disconnected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&done| done)
    }
}
