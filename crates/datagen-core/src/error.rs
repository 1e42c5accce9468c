//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading random source configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The seed variable is set but does not hold a valid `u64`.
    #[error("invalid seed {value:?}: {reason}")]
    InvalidSeed {
        /// The raw value that failed to parse.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
}
