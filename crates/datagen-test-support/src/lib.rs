//! Shared test mocks and utilities for dataset generation.

mod rng;

pub use rng::{FixedRealRng, MockRng, SequenceRng};
