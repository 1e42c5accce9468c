//! Domain types for random draws: modes, parameters, requests and results.

pub mod draw;
pub mod mode;
pub mod params;
pub mod primitives;
pub mod request;
