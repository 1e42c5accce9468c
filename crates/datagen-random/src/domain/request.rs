//! Validated request for a single random draw.
//!
//! A `RandomRequest` is the typed form of a mode selector plus its
//! parameter mapping. Building one checks the named arguments the way the
//! selected primitive expects them; dispatching one cannot hit a lookup
//! failure.

use serde_json::Value;

use super::mode::RandomMode;
use super::params::Params;
use crate::error::RandomError;

/// A draw request for one of the three primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomRequest {
    /// Pick one element of `population`.
    Choice {
        /// Candidate elements.
        population: Vec<Value>,
    },
    /// Draw a real number between `a` and `b`.
    Uniform {
        /// First bound.
        a: f64,
        /// Second bound.
        b: f64,
    },
    /// Draw an integer in `[a, b]`.
    RandInt {
        /// Lower bound, inclusive.
        a: i64,
        /// Upper bound, inclusive.
        b: i64,
    },
}

impl RandomRequest {
    /// Returns the mode this request targets.
    #[must_use]
    pub fn mode(&self) -> RandomMode {
        match self {
            Self::Choice { .. } => RandomMode::Choice,
            Self::Uniform { .. } => RandomMode::Uniform,
            Self::RandInt { .. } => RandomMode::RandInt,
        }
    }

    /// Builds a request from a mode and its named parameters.
    ///
    /// `choice` takes `seq` (an array, or a string treated as its
    /// characters). `uniform` takes numeric `a` and `b`. `randint` takes
    /// integer `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::UnexpectedParameter` for keys the primitive
    /// does not accept, `RandomError::MissingParameter` for absent keys and
    /// `RandomError::InvalidParameter` for values of the wrong type.
    pub fn from_params(mode: RandomMode, params: &Params) -> Result<Self, RandomError> {
        let accepted = mode.parameter_names();
        if let Some(name) = params
            .names()
            .find(|name| !accepted.iter().any(|known| known == name))
        {
            return Err(RandomError::UnexpectedParameter {
                mode,
                name: name.to_owned(),
            });
        }

        match mode {
            RandomMode::Choice => Ok(Self::Choice {
                population: population(mode, "seq", required(mode, params, "seq")?)?,
            }),
            RandomMode::Uniform => {
                let a = real(mode, "a", required(mode, params, "a")?)?;
                let b = real(mode, "b", required(mode, params, "b")?)?;
                if !(b - a).is_finite() {
                    return Err(RandomError::InvalidParameter {
                        mode,
                        name: "b",
                        reason: "span between bounds overflows f64".to_owned(),
                    });
                }
                Ok(Self::Uniform { a, b })
            }
            RandomMode::RandInt => Ok(Self::RandInt {
                a: integer(mode, "a", required(mode, params, "a")?)?,
                b: integer(mode, "b", required(mode, params, "b")?)?,
            }),
        }
    }
}

fn required<'a>(
    mode: RandomMode,
    params: &'a Params,
    name: &'static str,
) -> Result<&'a Value, RandomError> {
    params
        .get(name)
        .ok_or(RandomError::MissingParameter { mode, name })
}

fn invalid(mode: RandomMode, name: &'static str, reason: String) -> RandomError {
    RandomError::InvalidParameter { mode, name, reason }
}

fn population(
    mode: RandomMode,
    name: &'static str,
    value: &Value,
) -> Result<Vec<Value>, RandomError> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        Value::String(text) => Ok(text
            .chars()
            .map(|c| Value::String(c.to_string()))
            .collect()),
        other => Err(invalid(
            mode,
            name,
            format!("expected an array or string, found {}", type_name(other)),
        )),
    }
}

fn real(mode: RandomMode, name: &'static str, value: &Value) -> Result<f64, RandomError> {
    match value.as_f64() {
        Some(real) if real.is_finite() => Ok(real),
        Some(real) => Err(invalid(mode, name, format!("expected a finite number, found {real}"))),
        None => Err(invalid(
            mode,
            name,
            format!("expected a number, found {}", type_name(value)),
        )),
    }
}

fn integer(mode: RandomMode, name: &'static str, value: &Value) -> Result<i64, RandomError> {
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| {
            let reason = if number.is_u64() {
                format!("{number} is out of range for a 64-bit signed integer")
            } else {
                format!("expected an integer, found float {number}")
            };
            invalid(mode, name, reason)
        }),
        other => Err(invalid(
            mode,
            name,
            format!("expected an integer, found {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
