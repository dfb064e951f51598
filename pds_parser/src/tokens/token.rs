//! Token system for PDS with dedicated symbol tokens
//!
//! All punctuation gets a dedicated variant and grammatical decisions happen
//! in the builders, not in the tokenizer. Literal tokens carry their raw
//! lexeme: converting a lexeme into a typed value is constant recognition's
//! job, and keeping the exact source text here is what makes re-serialization
//! byte-exact.
use crate::grammar::keywords::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The PDS token system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    // === WORDS ===
    /// Structural keyword
    Keyword(Keyword),
    /// User-defined name; a single segment, dotted continuations are consumed
    /// separately
    Identifier(String),

    // === LITERALS (RAW LEXEMES) ===
    /// String literal, quote characters included
    StringLiteral(String),
    /// Integer literal (decimal or hex), sign included when directly attached
    Integer(String),
    /// Float literal (decimal point and/or exponent), sign included when
    /// directly attached
    Float(String),

    // === DEDICATED SYMBOL TOKENS ===
    Semicolon, // ;
    Comma,     // ,
    Equals,    // =
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]
    LParen,    // (
    RParen,    // )
    LAngle,    // <
    RAngle,    // >
    Dot,       // .
    Plus,      // +
    Minus,     // -
    Colon,     // :
    Slash,     // /

    /// End of input marker
    Eof,
}

impl Token {
    /// Check if this token is a literal lexeme
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral(_) | Self::Integer(_) | Self::Float(_)
        )
    }

    /// Check if this token is an identifier
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// Check if this token is a numeric sign symbol
    pub fn is_sign(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Get identifier text if this token is an identifier
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Get keyword if this token is a keyword
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Check if this token matches a specific keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(kw) if *kw == keyword)
    }

    /// Get the token as it should appear in PDS source
    pub fn as_pds_string(&self) -> String {
        match self {
            Self::Keyword(kw) => kw.as_str().to_string(),
            Self::Identifier(name) => name.clone(),
            Self::StringLiteral(raw) | Self::Integer(raw) | Self::Float(raw) => raw.clone(),
            Self::Semicolon => ";".to_string(),
            Self::Comma => ",".to_string(),
            Self::Equals => "=".to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::LBracket => "[".to_string(),
            Self::RBracket => "]".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::LAngle => "<".to_string(),
            Self::RAngle => ">".to_string(),
            Self::Dot => ".".to_string(),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Colon => ":".to_string(),
            Self::Slash => "/".to_string(),
            Self::Eof => "<EOF>".to_string(),
        }
    }

    /// Get the classification of this token
    pub fn token_class(&self) -> TokenClass {
        match self {
            Self::Keyword(_) => TokenClass::Structural,
            Self::Identifier(_) => TokenClass::Identifier,
            Self::StringLiteral(_) | Self::Integer(_) | Self::Float(_) => TokenClass::Literal,
            Self::Eof => TokenClass::Special,
            _ => TokenClass::Punctuation,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_pds_string())
    }
}

/// Token classification for metrics and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Structural tokens (keywords)
    Structural,
    /// Literal lexemes
    Literal,
    /// Identifiers
    Identifier,
    /// Punctuation and symbols
    Punctuation,
    /// Special tokens (EOF)
    Special,
}

/// Classify a word as either keyword or identifier
///
/// "true" and "false" fall through to identifiers on purpose; constant
/// recognition classifies them by text.
pub fn classify_word(word: &str) -> Token {
    if let Some(keyword) = Keyword::from_str(word) {
        Token::Keyword(keyword)
    } else {
        Token::Identifier(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_classify_word() {
        assert_matches!(classify_word("message"), Token::Keyword(Keyword::Message));
        assert_matches!(classify_word("inf"), Token::Keyword(Keyword::Inf));
        assert_matches!(classify_word("my_field"), Token::Identifier(name) if name == "my_field");
    }

    #[test]
    fn test_booleans_classify_as_identifiers() {
        assert_matches!(classify_word("true"), Token::Identifier(_));
        assert_matches!(classify_word("false"), Token::Identifier(_));
    }

    #[test]
    fn test_as_pds_string_round_trips() {
        assert_eq!(Token::LBrace.as_pds_string(), "{");
        assert_eq!(Token::Minus.as_pds_string(), "-");
        assert_eq!(
            Token::StringLiteral("\"hi\"".to_string()).as_pds_string(),
            "\"hi\""
        );
        assert_eq!(Token::Integer("0x2A".to_string()).as_pds_string(), "0x2A");
    }

    #[test]
    fn test_token_class() {
        assert_eq!(
            Token::Keyword(Keyword::Enum).token_class(),
            TokenClass::Structural
        );
        assert_eq!(
            Token::Float("1.5".to_string()).token_class(),
            TokenClass::Literal
        );
        assert_eq!(Token::Semicolon.token_class(), TokenClass::Punctuation);
        assert_eq!(Token::Eof.token_class(), TokenClass::Special);
    }

    #[test]
    fn test_sign_predicate() {
        assert!(Token::Plus.is_sign());
        assert!(Token::Minus.is_sign());
        assert!(!Token::Dot.is_sign());
    }
}
