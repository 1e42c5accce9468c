//! Datagen Random — random draws for dataset generation scripts.
//!
//! Provides a dispatcher over a closed set of three random primitives
//! (`choice`, `uniform`, `randint`) and a weighted binary chooser built on
//! the uniform primitive. Every draw consumes an explicitly injected
//! [`DeterministicRng`](datagen_core::rng::DeterministicRng).

pub mod application;
pub mod domain;
pub mod error;

pub use application::dispatcher::{dispatch, random_utility};
pub use application::weighted::{DEFAULT_WEIGHT, weighted_random, weighted_random_default};
pub use domain::draw::Draw;
pub use domain::mode::RandomMode;
pub use domain::params::Params;
pub use domain::request::RandomRequest;
pub use error::{ErrorKind, RandomError};
