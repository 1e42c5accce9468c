//! The three random primitives behind the dispatcher.

use datagen_core::rng::DeterministicRng;

use crate::error::RandomError;

/// Picks one element of `population` uniformly.
///
/// # Errors
///
/// Returns `RandomError::EmptySequence` if `population` is empty.
pub fn choice<'a, T>(
    rng: &mut dyn DeterministicRng,
    population: &'a [T],
) -> Result<&'a T, RandomError> {
    if population.is_empty() {
        return Err(RandomError::EmptySequence);
    }
    Ok(&population[rng.next_index(population.len())])
}

/// Returns `a + (b - a) * u` for `u` uniform in `[0, 1)`.
///
/// The bounds may be given in either order.
#[must_use]
pub fn uniform(rng: &mut dyn DeterministicRng, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.next_f64()
}

/// Returns an integer uniformly drawn from `[a, b]`, both ends inclusive.
///
/// # Errors
///
/// Returns `RandomError::EmptyRange` if `a > b`.
pub fn randint(rng: &mut dyn DeterministicRng, a: i64, b: i64) -> Result<i64, RandomError> {
    if a > b {
        return Err(RandomError::EmptyRange { a, b });
    }
    Ok(rng.next_i64_range(a, b))
}
