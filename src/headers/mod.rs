//! Typed HTTP headers.

pub mod authorization;
pub mod errors;
