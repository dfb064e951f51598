//! Builders that produce AST nodes by driving a token source

pub mod constant;

pub use constant::{numeric_value, parse_constant};

use crate::lexical::LexerError;
use crate::tokens::Token;
use crate::utils::Position;

/// The seam between builders and whatever feeds them tokens
///
/// Builders consume this as `&mut dyn TokenSource`; the scanner in
/// `lexical::analyzer` is the production implementation. Every operation may
/// fail if the underlying input runs out or is malformed below the token
/// level, and such failures pass through builders untouched.
pub trait TokenSource {
    /// Consume and classify the next token
    fn advance(&mut self) -> Result<Token, LexerError>;

    /// Exact lexeme of the current token
    fn text(&self) -> &str;

    /// Position immediately preceding the current token
    fn previous_position(&self) -> Position;

    /// Position immediately following everything consumed so far
    fn current_position(&self) -> Position;

    /// Consume a dotted name continuation; when the flag is set the
    /// continuation must begin with a separator dot
    fn dotted_identifier(&mut self, must_lead_with_dot: bool) -> Result<String, LexerError>;
}
