//! Shared utility types for the PDS parser

pub mod span;

pub use span::{Position, Span};
