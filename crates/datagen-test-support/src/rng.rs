//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use datagen_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_i64_range`, `0` for
/// `next_index` and `0.0` for `next_f64`. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }

    fn next_index(&mut self, _len: usize) -> usize {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns integer draws from a predetermined sequence. Panics if
/// the sequence is exhausted. `next_index` consumes from the same sequence.
/// Used in tests that need specific, repeatable integer outcomes.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }

    fn next_value(&mut self) -> i64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

impl DeterministicRng for SequenceRng {
    fn next_i64_range(&mut self, _min: i64, _max: i64) -> i64 {
        self.next_value()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_index(&mut self, _len: usize) -> usize {
        self.next_value() as usize
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns real draws from a predetermined sequence and records
/// how many were taken. Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct FixedRealRng {
    values: Vec<f64>,
    index: usize,
}

impl FixedRealRng {
    /// Create a new `FixedRealRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Returns how many real draws have been consumed.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for FixedRealRng {
    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }

    fn next_index(&mut self, _len: usize) -> usize {
        0
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
