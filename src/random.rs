use rand::rngs::StdRng;
use rand::{rng, Rng, SeedableRng};
use std::sync::Mutex;

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// Source of randomness for mock data and risk polling
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `low..=high`
    fn next_in_range(&self, low: u64, high: u64) -> u64;

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn next_index(&self, len: usize) -> usize {
        self.next_in_range(0, len.saturating_sub(1) as u64) as usize
    }

    /// `digits` random lowercase hex characters
    fn hex_string(&self, digits: usize) -> String {
        (0..digits)
            .map(|_| HEX_DIGITS[self.next_index(HEX_DIGITS.len())] as char)
            .collect()
    }
}

/// Unseeded randomness backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&self, low: u64, high: u64) -> u64 {
        rng().random_range(low..=high)
    }
}

/// Deterministic randomness for reproducible output
pub struct SeededRandom {
    inner: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&self, low: u64, high: u64) -> u64 {
        // A poisoned lock still holds a usable generator
        let mut generator = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        generator.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);

        let first: Vec<u64> = (0..16).map(|_| a.next_in_range(0, 1000)).collect();
        let second: Vec<u64> = (0..16).map(|_| b.next_in_range(0, 1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn range_is_inclusive() {
        let source = SeededRandom::new(42);
        for _ in 0..500 {
            let value = source.next_in_range(3, 5);
            assert!((3..=5).contains(&value));
        }
        assert_eq!(source.next_in_range(9, 9), 9);
    }

    #[test]
    fn hex_string_has_requested_length() {
        let source = ThreadRandom;
        let hex = source.hex_string(64);
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
