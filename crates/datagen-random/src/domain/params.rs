//! Named-argument bundle forwarded to a primitive.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from parameter name to value.
///
/// Built fresh for each call; the empty default is never shared or mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this mapping with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Iterates over the parameter names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        let params = Params::default();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_with_does_not_affect_other_mappings() {
        let base = Params::new();
        let bounded = base.clone().with("a", 0).with("b", 1);

        assert!(base.is_empty());
        assert_eq!(bounded.get("a"), Some(&json!(0)));
        assert_eq!(bounded.get("b"), Some(&json!(1)));
    }

    #[test]
    fn test_deserializes_from_json_object() {
        let params: Params = serde_json::from_value(json!({"seq": ["x", "y"]})).unwrap();
        assert_eq!(params.get("seq"), Some(&json!(["x", "y"])));
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["seq"]);
    }

    #[test]
    fn test_collects_from_pairs() {
        let params: Params = [("a", json!(1)), ("b", json!(6))].into_iter().collect();
        assert_eq!(params.len(), 2);
    }
}
