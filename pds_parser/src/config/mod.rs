//! Configuration module for the PDS parser
//!
//! Compile-time limits live in `constants`; user-facing preferences read from
//! the environment live in `runtime`.

pub mod constants;
pub mod runtime;
