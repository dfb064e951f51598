//! Constant builder: classify one literal and convert its lexeme
//!
//! One linear classification pass per call, at most one token of lookahead
//! (for signed non-finite numerics), no retries. Numeric conversion failure
//! is not an error: the node is still built and its value degrades to null,
//! which keeps "could not lex a literal" (fatal) apart from "literal has no
//! representable scalar value" (in-band).

use super::TokenSource;
use crate::grammar::ast::constant::{Constant, ConstantValue, LiteralKind};
use crate::grammar::keywords::Keyword;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::Token;
use crate::utils::Span;

/// Parse a single constant from the token source.
///
/// Consumes exactly the tokens composing one literal: usually one, plus a
/// lookahead token for `+inf`/`-inf` or a dotted continuation for qualified
/// identifiers. The node's span covers everything consumed.
pub fn parse_constant(src: &mut dyn TokenSource) -> SyntaxResult<Constant> {
    let token = src.advance()?;
    let start = src.previous_position();
    let mut raw = src.text().to_string();

    let (kind, value) = match &token {
        Token::StringLiteral(_) => {
            // Interior bytes between the delimiters, no escape decoding
            let content = raw[1..raw.len() - 1].to_string();
            (LiteralKind::String, ConstantValue::String(content))
        }
        Token::Identifier(name) if name == "true" || name == "false" => (
            LiteralKind::Boolean,
            ConstantValue::Boolean(name == "true"),
        ),
        Token::Identifier(_) => {
            let continuation = src.dotted_identifier(false)?;
            raw.push_str(&continuation);
            (LiteralKind::Identifier, ConstantValue::String(raw.clone()))
        }
        Token::Integer(_) => (LiteralKind::Int, numeric_constant(&raw)),
        Token::Float(_) => (LiteralKind::Float, numeric_constant(&raw)),
        Token::Plus | Token::Minus => {
            let next = src.advance()?;
            if next.is_keyword(Keyword::Inf) {
                raw.push_str(src.text());
                (LiteralKind::Int, numeric_constant(&raw))
            } else {
                // A sign followed by anything but `inf` cannot start a
                // constant
                return Err(SyntaxError::UnrecognizedToken {
                    found: next.as_pds_string(),
                    span: Span::new(src.previous_position(), src.current_position()),
                });
            }
        }
        Token::Keyword(keyword) if keyword.is_numeric() => {
            // Bare `inf` / `nan` ride the same numeric conversion as any
            // other integer lexeme and come out null
            (LiteralKind::Int, numeric_constant(&raw))
        }
        _ => {
            return Err(SyntaxError::UnrecognizedToken {
                found: token.as_pds_string(),
                span: Span::new(start, src.current_position()),
            });
        }
    };

    let span = Span::new(start, src.current_position());
    Ok(Constant::new(kind, raw, value, span))
}

/// Convert a numeric lexeme to a finite double, if it has one.
///
/// Hex lexemes go through a radix-16 parse with the sign applied afterwards;
/// everything else goes through the standard float parse. Overflow, malformed
/// digits, and the non-finite keywords all come back as `None`.
pub fn numeric_value(text: &str) -> Option<f64> {
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16).ok().map(|v| sign * v as f64);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

fn numeric_constant(text: &str) -> ConstantValue {
    match numeric_value(text) {
        Some(number) => ConstantValue::Number(number),
        None => ConstantValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::{Lexer, LexerError};
    use assert_matches::assert_matches;

    fn recognize(source: &str) -> SyntaxResult<Constant> {
        let mut lexer = Lexer::new(source);
        parse_constant(&mut lexer)
    }

    #[test]
    fn test_round_trip_is_byte_exact() {
        let lexemes = [
            "\"hello\"",
            "'x'",
            "true",
            "false",
            "42",
            "-12",
            "0x2A",
            "1.5",
            "3e8",
            "inf",
            "nan",
            "-inf",
            "+inf",
            "my.Enum.VALUE",
        ];
        for lexeme in lexemes {
            let constant = recognize(lexeme).expect(lexeme);
            assert_eq!(constant.as_pds_string(), lexeme, "lexeme {}", lexeme);
        }
    }

    #[test]
    fn test_string_strips_exactly_the_delimiters() {
        let constant = recognize("\"hello\"").expect("string");
        assert_eq!(constant.kind(), LiteralKind::String);
        assert_eq!(constant.value().as_str(), Some("hello"));
        assert_eq!(constant.raw(), "\"hello\"");
    }

    #[test]
    fn test_string_escapes_are_not_decoded() {
        let constant = recognize(r#""a\nb""#).expect("string");
        assert_eq!(constant.value().as_str(), Some(r"a\nb"));
    }

    #[test]
    fn test_boolean_recognition() {
        let yes = recognize("true").expect("true");
        assert_eq!(yes.kind(), LiteralKind::Boolean);
        assert_eq!(yes.value().as_bool(), Some(true));

        let no = recognize("false").expect("false");
        assert_eq!(no.kind(), LiteralKind::Boolean);
        assert_eq!(no.value().as_bool(), Some(false));
    }

    #[test]
    fn test_integer_conversion() {
        let constant = recognize("42").expect("int");
        assert_eq!(constant.kind(), LiteralKind::Int);
        assert_eq!(constant.value().as_number(), Some(42.0));

        assert_eq!(recognize("-12").expect("int").value().as_number(), Some(-12.0));
        assert_eq!(recognize("0x2A").expect("hex").value().as_number(), Some(42.0));
        assert_eq!(
            recognize("-0x10").expect("hex").value().as_number(),
            Some(-16.0)
        );
    }

    #[test]
    fn test_float_conversion() {
        let constant = recognize("1.5").expect("float");
        assert_eq!(constant.kind(), LiteralKind::Float);
        assert_eq!(constant.value().as_number(), Some(1.5));

        assert_eq!(recognize("3e8").expect("float").value().as_number(), Some(3e8));
    }

    #[test]
    fn test_overflow_degrades_to_null() {
        let constant = recognize("1e999").expect("float");
        assert_eq!(constant.kind(), LiteralKind::Float);
        assert!(constant.value().is_null());
        assert_eq!(constant.raw(), "1e999");
    }

    #[test]
    fn test_bare_nan_is_int_with_null_value() {
        let constant = recognize("nan").expect("nan");
        assert_eq!(constant.kind(), LiteralKind::Int);
        assert!(constant.value().is_null());
    }

    #[test]
    fn test_bare_inf_is_int_with_null_value() {
        let constant = recognize("inf").expect("inf");
        assert_eq!(constant.kind(), LiteralKind::Int);
        assert!(constant.value().is_null());
    }

    #[test]
    fn test_signed_infinity_spans_both_tokens() {
        let constant = recognize("-inf").expect("-inf");
        assert_eq!(constant.kind(), LiteralKind::Int);
        assert_eq!(constant.raw(), "-inf");
        assert!(constant.value().is_null());
        assert_eq!(constant.span().start.column, 1);
        assert_eq!(constant.span().end.column, 5);
        assert_eq!(constant.span().end.offset, 4);

        let plus = recognize("+inf").expect("+inf");
        assert_eq!(plus.raw(), "+inf");
    }

    #[test]
    fn test_signed_infinity_with_interior_space() {
        let constant = recognize("- inf").expect("- inf");
        // Token accumulation, not a source slice: the trivia drops out
        assert_eq!(constant.raw(), "-inf");
        assert_eq!(constant.span().end.column, 6);
    }

    #[test]
    fn test_sign_without_inf_is_unrecognized() {
        assert_matches!(
            recognize("- foo"),
            Err(SyntaxError::UnrecognizedToken { found, .. }) if found == "foo"
        );
        assert_matches!(
            recognize("-nan"),
            Err(SyntaxError::UnrecognizedToken { found, .. }) if found == "nan"
        );
    }

    #[test]
    fn test_structural_symbol_is_unrecognized() {
        assert_matches!(
            recognize("{"),
            Err(SyntaxError::UnrecognizedToken { found, .. }) if found == "{"
        );
    }

    #[test]
    fn test_keyword_is_unrecognized() {
        assert_matches!(
            recognize("message"),
            Err(SyntaxError::UnrecognizedToken { found, .. }) if found == "message"
        );
    }

    #[test]
    fn test_end_of_input_is_unrecognized() {
        assert_matches!(
            recognize(""),
            Err(SyntaxError::UnrecognizedToken { found, .. }) if found == "<EOF>"
        );
    }

    #[test]
    fn test_dotted_identifier_constant() {
        let constant = recognize("my.Enum.VALUE").expect("identifier");
        assert_eq!(constant.kind(), LiteralKind::Identifier);
        assert_eq!(constant.value().as_str(), Some("my.Enum.VALUE"));
        assert_eq!(constant.span().end.offset, "my.Enum.VALUE".len());
    }

    #[test]
    fn test_bare_identifier_constant() {
        let constant = recognize("FOO_BAR").expect("identifier");
        assert_eq!(constant.kind(), LiteralKind::Identifier);
        assert_eq!(constant.value().as_str(), Some("FOO_BAR"));
    }

    #[test]
    fn test_span_accounts_for_leading_trivia() {
        let constant = recognize("  42").expect("int");
        assert_eq!(constant.span().start.column, 3);
        assert_eq!(constant.span().end.column, 5);
    }

    #[test]
    fn test_scanner_errors_pass_through() {
        assert_matches!(
            recognize("\"open"),
            Err(SyntaxError::Lexical(LexerError::UnterminatedString))
        );
        assert_matches!(
            recognize("@"),
            Err(SyntaxError::Lexical(LexerError::InvalidCharacter { .. }))
        );
    }

    #[test]
    fn test_kind_and_value_stay_consistent() {
        let cases = [
            ("\"s\"", LiteralKind::String),
            ("name", LiteralKind::Identifier),
            ("true", LiteralKind::Boolean),
            ("7", LiteralKind::Int),
            ("7.5", LiteralKind::Float),
            ("nan", LiteralKind::Int),
            ("1e999", LiteralKind::Float),
        ];
        for (lexeme, kind) in cases {
            let constant = recognize(lexeme).expect(lexeme);
            assert_eq!(constant.kind(), kind);
            match constant.kind() {
                LiteralKind::Boolean => assert!(constant.value().as_bool().is_some()),
                LiteralKind::String | LiteralKind::Identifier => {
                    assert!(constant.value().as_str().is_some())
                }
                LiteralKind::Int | LiteralKind::Float => assert!(
                    constant.value().as_number().is_some() || constant.value().is_null()
                ),
            }
        }
    }

    #[test]
    fn test_numeric_value_policy() {
        assert_eq!(numeric_value("42"), Some(42.0));
        assert_eq!(numeric_value("+42"), Some(42.0));
        assert_eq!(numeric_value("-1.5"), Some(-1.5));
        assert_eq!(numeric_value("0x10"), Some(16.0));
        assert_eq!(numeric_value("-0x10"), Some(-16.0));
        assert_eq!(numeric_value("inf"), None);
        assert_eq!(numeric_value("-inf"), None);
        assert_eq!(numeric_value("nan"), None);
        assert_eq!(numeric_value("1e999"), None);
        assert_eq!(numeric_value("0xZZ"), None);
        assert_eq!(numeric_value("not a number"), None);
    }
}
