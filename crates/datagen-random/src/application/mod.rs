//! Entry points used by dataset generation scripts.

pub mod dispatcher;
pub mod weighted;
