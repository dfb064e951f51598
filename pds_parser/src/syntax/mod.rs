//! Syntax layer: drive the scanner through the grammar builders with global
//! logging integration

pub mod error;

pub use error::{SyntaxError, SyntaxResult};

use crate::grammar::ast::Constant;
use crate::grammar::builders::parse_constant;
use crate::lexical::Lexer;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};

/// Recognize the constant at the start of `source`.
///
/// Convenience entry point wiring a scanner to the constant builder. Input
/// after the constant is left unconsumed and ignored.
pub fn recognize_constant(source: &str) -> SyntaxResult<Constant> {
    log_debug!("Recognizing constant", "bytes" => source.len());

    let mut lexer = Lexer::new(source);
    match parse_constant(&mut lexer) {
        Ok(constant) => {
            log_success!(codes::success::CONSTANT_RECOGNIZED, "Constant recognized",
                "kind" => constant.kind(),
                "raw" => constant.raw()
            );
            Ok(constant)
        }
        Err(error) => {
            match error.span() {
                Some(span) => {
                    log_error!(error.error_code(), "Constant recognition failed",
                        span = span,
                        "error" => error
                    );
                }
                None => {
                    log_error!(error.error_code(), "Constant recognition failed",
                        "error" => error
                    );
                }
            }
            Err(error)
        }
    }
}
