//! Random number generator abstraction for determinism.
//!
//! Dataset scripts draw from a source handed to them explicitly. In
//! production this wraps a `StdRng`; in tests a scripted implementation
//! is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `i64` in the range `[min, max]` inclusive.
    ///
    /// Callers must ensure `min <= max`.
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64;

    /// Generate a random index in `[0, len)`.
    ///
    /// Callers must ensure `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    /// Create a source whose draws are fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DeterministicRng for StdRngSource {
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut first = StdRngSource::seeded(42);
        let mut second = StdRngSource::seeded(42);

        for _ in 0..32 {
            assert_eq!(first.next_i64_range(-100, 100), second.next_i64_range(-100, 100));
            assert_eq!(first.next_index(7), second.next_index(7));
            assert_eq!(first.next_f64().to_bits(), second.next_f64().to_bits());
        }
    }

    #[test]
    fn test_next_i64_range_is_inclusive_and_bounded() {
        let mut rng = StdRngSource::seeded(7);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..1_000 {
            let value = rng.next_i64_range(1, 3);
            assert!((1..=3).contains(&value));
            seen_min |= value == 1;
            seen_max |= value == 3;
        }

        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_next_i64_range_with_equal_bounds_returns_bound() {
        let mut rng = StdRngSource::seeded(1);
        assert_eq!(rng.next_i64_range(5, 5), 5);
    }

    #[test]
    fn test_next_index_stays_below_len() {
        let mut rng = StdRngSource::seeded(3);
        for _ in 0..500 {
            assert!(rng.next_index(4) < 4);
        }
    }

    #[test]
    fn test_next_f64_is_in_unit_interval() {
        let mut rng = StdRngSource::seeded(11);
        for _ in 0..1_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_entropy_source_draws_in_range() {
        let mut rng = StdRngSource::from_entropy();
        assert!((0.0..1.0).contains(&rng.next_f64()));
    }
}
