//! Constant recognition front end for the PDS schema language
//!
//! PDS ("Protocol Definition Schema") is a protocol-buffer-style IDL. This
//! crate scans schema source text and recognizes scalar constant literals:
//! strings, booleans, numbers (including the non-finite `inf`/`nan` forms),
//! and dotted identifiers. Recognized constants keep their exact source
//! lexeme, so re-serialization is byte-exact regardless of how the derived
//! value came out.

// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::ast::{AstNode, Constant, ConstantDump, ConstantValue, LiteralKind, NodeVisitor};
pub use grammar::builders::{numeric_value, parse_constant, TokenSource};
pub use grammar::keywords::Keyword;
pub use lexical::{Lexer, LexerError};
pub use syntax::{recognize_constant, SyntaxError, SyntaxResult};
pub use tokens::Token;
pub use utils::{Position, Span};
