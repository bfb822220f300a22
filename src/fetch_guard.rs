//! Fetch Guard
//!
//! Filter changes can fire a new request while an older one is still
//! in flight, and the older response may land last. Each request takes
//! a generation number; a response is applied only while its
//! generation is still the latest.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGuard {
    generation: u32,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; everything issued earlier becomes stale
    pub fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, generation: u32) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_invalidates_older_one() {
        let mut guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // Should be: only the latest generation may apply its response
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_single_request_stays_current() {
        let mut guard = FetchGuard::new();
        let only = guard.begin();
        assert!(guard.is_current(only));
    }

    #[test]
    fn test_generation_wraps_without_panic() {
        let mut guard = FetchGuard {
            generation: u32::MAX,
        };
        let next = guard.begin();
        assert_eq!(next, 0);
        assert!(guard.is_current(next));
    }
}
