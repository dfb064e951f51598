//! Lexical analysis module for PDS source text
//!
//! Provides the pull-based scanner that feeds the grammar builders one token
//! at a time.

pub mod analyzer;

use crate::config::runtime::LexicalPreferences;

pub use analyzer::{Lexer, LexerError, LexicalMetrics};

/// Create a scanner over a source string with default preferences
pub fn create_lexer(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Create a scanner with custom runtime preferences
pub fn create_lexer_with_preferences(source: &str, preferences: LexicalPreferences) -> Lexer<'_> {
    Lexer::with_preferences(source, preferences)
}
