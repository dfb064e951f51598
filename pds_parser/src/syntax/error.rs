//! Error types for constant recognition
//!
//! One recognizer-level failure exists: the next token cannot begin a
//! constant. Scanner failures are a different animal and travel through
//! untouched; the transparent variant keeps their message and code intact.

use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unrecognized token '{found}' at {span}: expected a constant")]
    UnrecognizedToken { found: String, span: Span },

    #[error(transparent)]
    Lexical(#[from] LexerError),
}

impl SyntaxError {
    /// Get error code for the global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnrecognizedToken { .. } => codes::syntax::UNRECOGNIZED_TOKEN,
            Self::Lexical(inner) => inner.error_code(),
        }
    }

    /// Get span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnrecognizedToken { span, .. } => Some(*span),
            Self::Lexical(_) => None,
        }
    }
}
