//! Token definitions for the PDS schema language

pub mod token;

pub use token::{classify_word, Token, TokenClass};
