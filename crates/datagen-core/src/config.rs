//! Random source configuration.
//!
//! Settings are read from the environment. `from_lookup` takes any key
//! lookup so tests never touch the process environment.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rng::StdRngSource;

/// Environment variable holding an optional `u64` seed.
pub const SEED_ENV_VAR: &str = "DATAGEN_RANDOM_SEED";

/// Configuration for building a random source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Fixed seed for reproducible runs. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` if `DATAGEN_RANDOM_SEED` is set
    /// to something other than a `u64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// An unset or blank seed means "seed from entropy".
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` if the seed value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let seed = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidSeed {
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                Some(seed)
            }
            _ => None,
        };

        Ok(Self { seed })
    }

    /// Build the random source this configuration describes.
    #[must_use]
    pub fn build_rng(&self) -> StdRngSource {
        if let Some(seed) = self.seed {
            tracing::info!(seed, "Building seeded random source");
            StdRngSource::seeded(seed)
        } else {
            tracing::info!("Building entropy-seeded random source");
            StdRngSource::from_entropy()
        }
    }
}
