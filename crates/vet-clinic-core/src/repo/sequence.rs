//! Per-repository id generation.

use crate::models::EntityId;

/// Monotonic id generator starting at 1.
///
/// Owned by a single repository, so two repositories (or two test fixtures)
/// never share a counter. Once `EntityId::MAX` has been handed out or
/// observed the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: Option<EntityId>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Take the next id, or `None` when the id space is used up.
    pub fn next_id(&mut self) -> Option<EntityId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Record an externally assigned id so later generated ids skip past it.
    ///
    /// Returns `false` if the sequence could not move past `id`.
    pub fn observe(&mut self, id: EntityId) -> bool {
        match self.next {
            // Exhausted: nothing will be generated that could collide
            None => true,
            Some(next) if id < next => true,
            Some(_) => match id.checked_add(1) {
                Some(after) => {
                    self.next = Some(after);
                    true
                }
                None => false,
            },
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_id(), Some(1));
        assert_eq!(seq.next_id(), Some(2));
    }

    #[test]
    fn test_observe_skips_ahead() {
        let mut seq = IdSequence::new();
        assert!(seq.observe(10));
        assert_eq!(seq.next_id(), Some(11));

        // Lower ids never move the counter back
        assert!(seq.observe(4));
        assert_eq!(seq.next_id(), Some(12));
    }

    #[test]
    fn test_observe_max_is_refused() {
        let mut seq = IdSequence::new();
        assert!(!seq.observe(EntityId::MAX));
        assert_eq!(seq.next_id(), Some(1));
    }

    #[test]
    fn test_exhausted_after_max() {
        let mut seq = IdSequence::new();
        assert!(seq.observe(EntityId::MAX - 1));
        assert_eq!(seq.next_id(), Some(EntityId::MAX));
        assert_eq!(seq.next_id(), None);
        assert!(seq.observe(3));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = IdSequence::new();
        let mut b = IdSequence::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), Some(1));
    }
}
