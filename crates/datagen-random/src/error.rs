//! Random draw error types.

use thiserror::Error;

use crate::domain::mode::RandomMode;

/// Broad classification of a [`RandomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The mode selector did not name a known primitive.
    Lookup,
    /// The parameters did not fit the selected primitive.
    Argument,
}

/// Errors surfaced by the dispatcher.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RandomError {
    /// The mode selector is not one of the recognized tags.
    #[error("unknown random mode: {0:?}")]
    UnknownMode(String),

    /// A parameter required by the primitive is absent.
    #[error("{mode} is missing required parameter `{name}`")]
    MissingParameter {
        /// The selected mode.
        mode: RandomMode,
        /// The missing parameter name.
        name: &'static str,
    },

    /// The mapping holds a parameter the primitive does not accept.
    #[error("{mode} got an unexpected parameter `{name}`")]
    UnexpectedParameter {
        /// The selected mode.
        mode: RandomMode,
        /// The rejected parameter name.
        name: String,
    },

    /// A parameter is present but has the wrong type or value.
    #[error("{mode} parameter `{name}` is invalid: {reason}")]
    InvalidParameter {
        /// The selected mode.
        mode: RandomMode,
        /// The offending parameter name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// `choice` was given an empty sequence.
    #[error("cannot choose from an empty sequence")]
    EmptySequence,

    /// `randint` was given a lower bound above its upper bound.
    #[error("empty range for randint({a}, {b})")]
    EmptyRange {
        /// Lower bound.
        a: i64,
        /// Upper bound.
        b: i64,
    },
}

impl RandomError {
    /// Returns whether this is a lookup or an argument failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownMode(_) => ErrorKind::Lookup,
            Self::MissingParameter { .. }
            | Self::UnexpectedParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::EmptySequence
            | Self::EmptyRange { .. } => ErrorKind::Argument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_is_lookup_kind() {
        assert_eq!(
            RandomError::UnknownMode("bogus".to_owned()).kind(),
            ErrorKind::Lookup
        );
    }

    #[test]
    fn test_parameter_errors_are_argument_kind() {
        let errors = [
            RandomError::MissingParameter {
                mode: RandomMode::Uniform,
                name: "a",
            },
            RandomError::UnexpectedParameter {
                mode: RandomMode::Choice,
                name: "k".to_owned(),
            },
            RandomError::InvalidParameter {
                mode: RandomMode::RandInt,
                name: "b",
                reason: "expected an integer".to_owned(),
            },
            RandomError::EmptySequence,
            RandomError::EmptyRange { a: 3, b: 1 },
        ];

        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Argument, "{err}");
        }
    }

    #[test]
    fn test_messages_name_mode_and_parameter() {
        let err = RandomError::MissingParameter {
            mode: RandomMode::RandInt,
            name: "b",
        };
        assert_eq!(err.to_string(), "randint is missing required parameter `b`");

        let err = RandomError::UnknownMode("bogus".to_owned());
        assert_eq!(err.to_string(), "unknown random mode: \"bogus\"");
    }
}
