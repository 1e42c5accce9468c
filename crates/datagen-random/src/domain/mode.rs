//! Mode selector for the random dispatcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RandomError;

/// The closed set of random primitives the dispatcher can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomMode {
    /// Uniform choice of one element from a sequence.
    Choice,
    /// Uniform real number between two bounds.
    Uniform,
    /// Uniform integer between two inclusive bounds.
    RandInt,
}

impl RandomMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Choice, Self::Uniform, Self::RandInt];

    /// Returns the string tag for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Choice => "choice",
            Self::Uniform => "uniform",
            Self::RandInt => "randint",
        }
    }

    /// Returns the named parameters this mode's primitive accepts.
    #[must_use]
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Choice => &["seq"],
            Self::Uniform | Self::RandInt => &["a", "b"],
        }
    }
}

impl fmt::Display for RandomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RandomMode {
    type Err = RandomError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == tag)
            .ok_or_else(|| RandomError::UnknownMode(tag.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_every_tag_parses_back_to_its_mode() {
        for mode in RandomMode::ALL {
            assert_eq!(mode.as_str().parse::<RandomMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_tag_is_lookup_error() {
        let err = "bogus".parse::<RandomMode>().unwrap_err();
        assert_eq!(err, RandomError::UnknownMode("bogus".to_owned()));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("Uniform".parse::<RandomMode>().is_err());
        assert!("RANDINT".parse::<RandomMode>().is_err());
    }

    #[test]
    fn test_serde_uses_string_tags() {
        let json = serde_json::to_string(&RandomMode::RandInt).unwrap();
        assert_eq!(json, "\"randint\"");

        let mode: RandomMode = serde_json::from_str("\"choice\"").unwrap();
        assert_eq!(mode, RandomMode::Choice);
    }
}
