//! Typed result of a single random draw.

use serde_json::{Number, Value};

/// The value produced by one primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    /// An element picked by `choice`.
    Element(Value),
    /// A real number produced by `uniform`.
    Real(f64),
    /// An integer produced by `randint`.
    Integer(i64),
}

impl Draw {
    /// Converts the draw into a JSON value.
    ///
    /// Non-finite reals cannot be represented in JSON and become `null`;
    /// requests built through `RandomRequest::from_params` never yield one.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Element(value) => value,
            Self::Real(real) => Number::from_f64(real).map_or(Value::Null, Value::Number),
            Self::Integer(int) => Value::from(int),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_is_returned_verbatim() {
        let element = json!({"name": "alice", "tags": [1, 2]});
        assert_eq!(Draw::Element(element.clone()).into_value(), element);
    }

    #[test]
    fn test_real_becomes_float_number() {
        let value = Draw::Real(0.25).into_value();
        assert!(value.is_f64());
        assert_eq!(value.as_f64(), Some(0.25));
    }

    #[test]
    fn test_integer_becomes_integer_number() {
        assert_eq!(Draw::Integer(-4).into_value(), json!(-4));
    }

    #[test]
    fn test_non_finite_real_becomes_null() {
        assert_eq!(Draw::Real(f64::INFINITY).into_value(), Value::Null);
    }
}
