//! Weighted binary chooser.

use datagen_core::rng::DeterministicRng;

use crate::domain::primitives;

/// Weight used by [`weighted_random_default`].
pub const DEFAULT_WEIGHT: f64 = 0.8;

/// Returns `priority_value` with probability `weight` and `secondary_value`
/// otherwise.
///
/// Draws `r` from the uniform primitive over `[0, 1)` and picks the priority
/// value when `r < weight`. The weight is not validated: at or above `1.0`
/// the priority value always wins, at or below `0.0` (or NaN) it never does.
#[must_use]
pub fn weighted_random<T>(
    rng: &mut dyn DeterministicRng,
    priority_value: T,
    secondary_value: T,
    weight: f64,
) -> T {
    if !(0.0..=1.0).contains(&weight) {
        tracing::debug!(weight, "Weight outside [0, 1] used as-is");
    }

    let r = primitives::uniform(rng, 0.0, 1.0);
    if r < weight {
        priority_value
    } else {
        secondary_value
    }
}

/// [`weighted_random`] with [`DEFAULT_WEIGHT`].
#[must_use]
pub fn weighted_random_default<T>(
    rng: &mut dyn DeterministicRng,
    priority_value: T,
    secondary_value: T,
) -> T {
    weighted_random(rng, priority_value, secondary_value, DEFAULT_WEIGHT)
}
