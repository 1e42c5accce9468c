//! Random dispatcher.
//!
//! Maps a mode to its primitive and invokes it. `random_utility` is the
//! string-tagged entry point used by scripts; `dispatch` is the typed one.

use datagen_core::rng::DeterministicRng;
use serde_json::Value;

use crate::domain::draw::Draw;
use crate::domain::mode::RandomMode;
use crate::domain::params::Params;
use crate::domain::primitives;
use crate::domain::request::RandomRequest;
use crate::error::RandomError;

/// Invokes the primitive a request targets.
///
/// # Errors
///
/// Returns `RandomError::EmptySequence` for a `Choice` with no elements and
/// `RandomError::EmptyRange` for a `RandInt` whose lower bound exceeds its
/// upper bound.
pub fn dispatch(
    rng: &mut dyn DeterministicRng,
    request: &RandomRequest,
) -> Result<Draw, RandomError> {
    tracing::debug!(mode = %request.mode(), "Dispatching random draw");

    match request {
        RandomRequest::Choice { population } => {
            primitives::choice(rng, population).map(|element| Draw::Element(element.clone()))
        }
        RandomRequest::Uniform { a, b } => Ok(Draw::Real(primitives::uniform(rng, *a, *b))),
        RandomRequest::RandInt { a, b } => primitives::randint(rng, *a, *b).map(Draw::Integer),
    }
}

/// Draws a value using the primitive named by `mode` with `params` as its
/// named arguments.
///
/// Returns the chosen element for `"choice"`, a float for `"uniform"` and
/// an integer for `"randint"`.
///
/// # Errors
///
/// Returns `RandomError::UnknownMode` if `mode` is not a recognized tag,
/// or an argument error if `params` does not fit the selected primitive.
pub fn random_utility(
    rng: &mut dyn DeterministicRng,
    mode: &str,
    params: &Params,
) -> Result<Value, RandomError> {
    let mode: RandomMode = mode.parse()?;
    let request = RandomRequest::from_params(mode, params)?;
    Ok(dispatch(rng, &request)?.into_value())
}
