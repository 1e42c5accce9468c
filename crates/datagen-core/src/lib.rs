//! Datagen Core — random source abstraction and configuration.
//!
//! This crate defines the random source that every draw consumes and the
//! configuration used to build one. It contains no sampling logic.

pub mod config;
pub mod error;
pub mod rng;
