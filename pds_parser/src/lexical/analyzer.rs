//! Core lexical analyzer for PDS source text
//!
//! Pull-based scanner: nothing is tokenized until a builder asks for the next
//! token, and the exact lexeme of the token just produced stays retrievable
//! until the next pull. That contract is what lets constant recognition
//! accumulate byte-exact raw text across lookahead and dotted continuations.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::grammar::builders::TokenSource;
use crate::log_debug;
use crate::logging::codes;
use crate::tokens::{classify_word, Token, TokenClass};
use crate::utils::Position;

/// Lexical analysis errors with compile-time limits baked into the messages
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unterminated block comment")]
    UnterminatedComment,

    #[error("Invalid number format: '{text}'")]
    InvalidNumber { text: String },

    #[error("Identifier too long: {length} characters (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize },

    #[error("String too large: {size} bytes (max {MAX_STRING_SIZE})")]
    StringTooLarge { size: usize },

    #[error("Comment too long: {length} characters (max {MAX_COMMENT_LENGTH})")]
    CommentTooLong { length: usize },

    #[error("Number too long: {length} characters (max {MAX_NUMBER_LENGTH})")]
    NumberTooLong { length: usize },

    #[error("Expected identifier segment at line {line}, column {column}")]
    ExpectedIdentifier { line: u32, column: u32 },

    #[error("Expected '.' at line {line}, column {column}")]
    ExpectedDot { line: u32, column: u32 },

    #[error("Dotted name has too many segments: {count} (max {MAX_DOTTED_SEGMENTS})")]
    TooManySegments { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString => codes::lexical::UNTERMINATED_STRING,
            LexerError::UnterminatedComment => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::NumberTooLong { .. } => codes::lexical::NUMBER_TOO_LONG,
            LexerError::ExpectedIdentifier { .. } => codes::lexical::EXPECTED_IDENTIFIER,
            LexerError::ExpectedDot { .. } => codes::lexical::EXPECTED_DOT,
            LexerError::TooManySegments { .. } => codes::lexical::TOO_MANY_SEGMENTS,
        }
    }
}

/// Essential lexical analysis metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub literal_tokens: usize,
    pub symbol_tokens: usize,
    pub max_string_length: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;
        match token.token_class() {
            TokenClass::Structural => self.keyword_tokens += 1,
            TokenClass::Identifier => self.identifier_tokens += 1,
            TokenClass::Literal => self.literal_tokens += 1,
            TokenClass::Punctuation => self.symbol_tokens += 1,
            TokenClass::Special => {}
        }
    }

    fn record_string_length(&mut self, length: usize) {
        self.max_string_length = self.max_string_length.max(length);
    }
}

/// Pull-based scanner over PDS source text
pub struct Lexer<'a> {
    source: &'a str,
    /// Cursor; position immediately after the current token
    pos: Position,
    /// Position immediately before the current token (after trivia)
    token_start: Position,
    /// Exact lexeme of the current token
    text: String,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_preferences(source, LexicalPreferences::default())
    }

    pub fn with_preferences(source: &'a str, preferences: LexicalPreferences) -> Self {
        Self {
            source,
            pos: Position::start(),
            token_start: Position::start(),
            text: String::new(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Metrics collected so far
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Exact lexeme of the most recently produced token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position immediately before the most recently produced token
    pub fn previous_position(&self) -> Position {
        self.token_start
    }

    /// Position immediately after everything consumed so far
    pub fn current_position(&self) -> Position {
        self.pos
    }

    // === CHARACTER CURSOR ===

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos.offset..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos.offset..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos = self.pos.advance(ch);
        Some(ch)
    }

    // === TOKEN PRODUCTION ===

    /// Skip trivia, then produce exactly one token
    pub fn advance(&mut self) -> Result<Token, LexerError> {
        self.skip_trivia()?;
        self.token_start = self.pos;
        self.text.clear();

        let token = match self.peek_char() {
            None => {
                if self.preferences.log_token_metrics {
                    log_debug!("Scanner reached end of input",
                        "total_tokens" => self.metrics.total_tokens,
                        "identifiers" => self.metrics.identifier_tokens,
                        "literals" => self.metrics.literal_tokens
                    );
                }
                Token::Eof
            }
            Some(quote @ ('"' | '\'')) => self.lex_string(quote)?,
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.lex_word()?,
            Some(c) if c.is_ascii_digit() => self.lex_number()?,
            Some('.') if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.lex_number()?
            }
            Some('+' | '-') if self.sign_starts_number() => self.lex_number()?,
            Some(c) => self.lex_symbol(c)?,
        };

        self.metrics.record_token(&token);
        Ok(token)
    }

    fn sign_starts_number(&self) -> bool {
        match self.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn skip_trivia(&mut self) -> Result<(), LexerError> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.peek_nth(1) == Some('/') => {
                    let mut length = 0;
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                        length += 1;
                        if length > MAX_COMMENT_LENGTH {
                            return Err(LexerError::CommentTooLong { length });
                        }
                    }
                }
                Some('/') if self.peek_nth(1) == Some('*') => {
                    self.bump();
                    self.bump();
                    let mut length = 0;
                    loop {
                        match self.peek_char() {
                            None => return Err(LexerError::UnterminatedComment),
                            Some('*') if self.peek_nth(1) == Some('/') => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            Some(_) => {
                                self.bump();
                                length += 1;
                                if length > MAX_COMMENT_LENGTH {
                                    return Err(LexerError::CommentTooLong { length });
                                }
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn lex_word(&mut self) -> Result<Token, LexerError> {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if self.text.len() > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong {
                length: self.text.len(),
            });
        }
        Ok(classify_word(&self.text))
    }

    /// Scan a string literal. Backslash escapes are honored only to locate the
    /// closing delimiter; the lexeme keeps every byte verbatim, quotes
    /// included.
    fn lex_string(&mut self, quote: char) -> Result<Token, LexerError> {
        self.bump();
        self.text.push(quote);
        loop {
            match self.peek_char() {
                None | Some('\n') => return Err(LexerError::UnterminatedString),
                Some('\\') => {
                    self.bump();
                    self.text.push('\\');
                    match self.bump() {
                        Some(c) => self.text.push(c),
                        None => return Err(LexerError::UnterminatedString),
                    }
                }
                Some(c) => {
                    self.bump();
                    self.text.push(c);
                    if c == quote {
                        break;
                    }
                }
            }
            if self.text.len() > MAX_STRING_SIZE {
                return Err(LexerError::StringTooLarge {
                    size: self.text.len(),
                });
            }
        }
        self.metrics.record_string_length(self.text.len());
        if self.preferences.log_string_statistics {
            log_debug!("String literal scanned",
                "length" => self.text.len(),
                "max_so_far" => self.metrics.max_string_length
            );
        }
        Ok(Token::StringLiteral(self.text.clone()))
    }

    /// Scan a numeric literal. A sign directly attached to digits is part of
    /// the lexeme, so a bare sign token only ever reaches the builders ahead
    /// of non-numeric input.
    fn lex_number(&mut self) -> Result<Token, LexerError> {
        if matches!(self.peek_char(), Some('+' | '-')) {
            let sign = self.bump().expect("sign was peeked");
            self.text.push(sign);
        }

        // Hex integers: 0x prefix with at least one hex digit
        if self.peek_char() == Some('0') && matches!(self.peek_nth(1), Some('x' | 'X')) {
            let digit = self.bump().expect("digit was peeked");
            self.text.push(digit);
            let prefix = self.bump().expect("prefix was peeked");
            self.text.push(prefix);
            let mut digits = 0;
            while let Some(c) = self.peek_char() {
                if c.is_ascii_hexdigit() {
                    self.text.push(c);
                    self.bump();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                return Err(LexerError::InvalidNumber {
                    text: self.text.clone(),
                });
            }
            self.check_number_length()?;
            return Ok(Token::Integer(self.text.clone()));
        }

        let mut is_float = false;
        self.consume_digits();

        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.text.push('.');
            self.bump();
            self.consume_digits();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) && self.exponent_follows() {
            is_float = true;
            let exponent = self.bump().expect("exponent was peeked");
            self.text.push(exponent);
            if matches!(self.peek_char(), Some('+' | '-')) {
                let sign = self.bump().expect("sign was peeked");
                self.text.push(sign);
            }
            self.consume_digits();
        }

        self.check_number_length()?;
        if is_float {
            Ok(Token::Float(self.text.clone()))
        } else {
            Ok(Token::Integer(self.text.clone()))
        }
    }

    fn exponent_follows(&self) -> bool {
        match self.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.text.push(c);
                self.bump();
            } else {
                break;
            }
        }
    }

    fn check_number_length(&self) -> Result<(), LexerError> {
        if self.text.len() > MAX_NUMBER_LENGTH {
            return Err(LexerError::NumberTooLong {
                length: self.text.len(),
            });
        }
        Ok(())
    }

    fn lex_symbol(&mut self, c: char) -> Result<Token, LexerError> {
        let token = match c {
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            '=' => Token::Equals,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '<' => Token::LAngle,
            '>' => Token::RAngle,
            '.' => Token::Dot,
            '+' => Token::Plus,
            '-' => Token::Minus,
            ':' => Token::Colon,
            '/' => Token::Slash,
            _ => {
                return Err(LexerError::InvalidCharacter {
                    character: c,
                    line: self.pos.line,
                    column: self.pos.column,
                })
            }
        };
        self.bump();
        self.text.push(c);
        Ok(token)
    }

    /// Consume a dotted name continuation: zero or more immediately adjacent
    /// `.segment` pairs. Segments must butt up against their dots so the
    /// accumulated text equals the source slice.
    pub fn dotted_identifier(&mut self, must_lead_with_dot: bool) -> Result<String, LexerError> {
        if must_lead_with_dot && self.peek_char() != Some('.') {
            return Err(LexerError::ExpectedDot {
                line: self.pos.line,
                column: self.pos.column,
            });
        }

        let mut name = String::new();
        let mut segments = 0;
        while self.peek_char() == Some('.') {
            self.bump();
            name.push('.');
            let segment = self.ident_segment()?;
            name.push_str(&segment);
            segments += 1;
            if segments > MAX_DOTTED_SEGMENTS {
                return Err(LexerError::TooManySegments { count: segments });
            }
        }
        Ok(name)
    }

    fn ident_segment(&mut self) -> Result<String, LexerError> {
        match self.peek_char() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => {
                return Err(LexerError::ExpectedIdentifier {
                    line: self.pos.line,
                    column: self.pos.column,
                })
            }
        }
        let mut segment = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                segment.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if segment.len() > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong {
                length: segment.len(),
            });
        }
        Ok(segment)
    }
}

impl TokenSource for Lexer<'_> {
    fn advance(&mut self) -> Result<Token, LexerError> {
        Lexer::advance(self)
    }

    fn text(&self) -> &str {
        Lexer::text(self)
    }

    fn previous_position(&self) -> Position {
        Lexer::previous_position(self)
    }

    fn current_position(&self) -> Position {
        Lexer::current_position(self)
    }

    fn dotted_identifier(&mut self, must_lead_with_dot: bool) -> Result<String, LexerError> {
        Lexer::dotted_identifier(self, must_lead_with_dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::keywords::Keyword;
    use assert_matches::assert_matches;

    fn all_tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.advance().expect("lexing failed");
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_basic_token_sequence() {
        let tokens = all_tokens("option answer = 42;");
        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Option),
                Token::Identifier("answer".to_string()),
                Token::Equals,
                Token::Integer("42".to_string()),
                Token::Semicolon,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_text_is_exact_lexeme() {
        let mut lexer = Lexer::new("  \"a b\"  ");
        assert_matches!(lexer.advance(), Ok(Token::StringLiteral(_)));
        assert_eq!(lexer.text(), "\"a b\"");
    }

    #[test]
    fn test_positions_surround_token() {
        let mut lexer = Lexer::new("  foo");
        lexer.advance().expect("identifier");
        assert_eq!(lexer.previous_position().column, 3);
        assert_eq!(lexer.current_position().column, 6);
        assert_eq!(lexer.previous_position().line, 1);
    }

    #[test]
    fn test_newlines_advance_lines() {
        let mut lexer = Lexer::new("foo\n  bar");
        lexer.advance().expect("foo");
        lexer.advance().expect("bar");
        assert_eq!(lexer.previous_position().line, 2);
        assert_eq!(lexer.previous_position().column, 3);
    }

    #[test]
    fn test_comments_are_trivia() {
        let tokens = all_tokens("// header\n1 /* mid */ 2");
        assert_eq!(
            tokens,
            vec![
                Token::Integer("1".to_string()),
                Token::Integer("2".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut lexer = Lexer::new("/* never closed");
        assert_matches!(lexer.advance(), Err(LexerError::UnterminatedComment));
    }

    #[test]
    fn test_string_escapes_do_not_terminate() {
        let mut lexer = Lexer::new(r#""a\"b""#);
        assert_matches!(lexer.advance(), Ok(Token::StringLiteral(raw)) if raw == r#""a\"b""#);
    }

    #[test]
    fn test_single_quoted_string() {
        let mut lexer = Lexer::new("'hello'");
        assert_matches!(lexer.advance(), Ok(Token::StringLiteral(raw)) if raw == "'hello'");
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("\"open");
        assert_matches!(lexer.advance(), Err(LexerError::UnterminatedString));

        let mut lexer = Lexer::new("\"line\nbreak\"");
        assert_matches!(lexer.advance(), Err(LexerError::UnterminatedString));
    }

    #[test]
    fn test_number_forms() {
        let mut lexer = Lexer::new("7 0x2A 1.5 .5 3e8 1e-3 -12 +4.0");
        assert_matches!(lexer.advance(), Ok(Token::Integer(t)) if t == "7");
        assert_matches!(lexer.advance(), Ok(Token::Integer(t)) if t == "0x2A");
        assert_matches!(lexer.advance(), Ok(Token::Float(t)) if t == "1.5");
        assert_matches!(lexer.advance(), Ok(Token::Float(t)) if t == ".5");
        assert_matches!(lexer.advance(), Ok(Token::Float(t)) if t == "3e8");
        assert_matches!(lexer.advance(), Ok(Token::Float(t)) if t == "1e-3");
        assert_matches!(lexer.advance(), Ok(Token::Integer(t)) if t == "-12");
        assert_matches!(lexer.advance(), Ok(Token::Float(t)) if t == "+4.0");
    }

    #[test]
    fn test_sign_before_word_stays_a_symbol() {
        let mut lexer = Lexer::new("-inf");
        assert_matches!(lexer.advance(), Ok(Token::Minus));
        assert_matches!(lexer.advance(), Ok(Token::Keyword(Keyword::Inf)));
    }

    #[test]
    fn test_hex_without_digits() {
        let mut lexer = Lexer::new("0x");
        assert_matches!(lexer.advance(), Err(LexerError::InvalidNumber { .. }));
    }

    #[test]
    fn test_dot_then_word_is_not_a_number() {
        let tokens = all_tokens(".foo");
        assert_eq!(
            tokens,
            vec![
                Token::Dot,
                Token::Identifier("foo".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_dotted_identifier_continuation() {
        let mut lexer = Lexer::new("my.Enum.VALUE");
        assert_matches!(lexer.advance(), Ok(Token::Identifier(name)) if name == "my");
        let rest = lexer.dotted_identifier(false).expect("continuation");
        assert_eq!(rest, ".Enum.VALUE");
        assert_eq!(lexer.current_position().offset, "my.Enum.VALUE".len());
    }

    #[test]
    fn test_dotted_identifier_empty_continuation() {
        let mut lexer = Lexer::new("name =");
        lexer.advance().expect("identifier");
        assert_eq!(lexer.dotted_identifier(false).expect("empty"), "");
    }

    #[test]
    fn test_dotted_identifier_anchored() {
        let mut lexer = Lexer::new("name");
        lexer.advance().expect("identifier");
        assert_matches!(
            lexer.dotted_identifier(true),
            Err(LexerError::ExpectedDot { .. })
        );
    }

    #[test]
    fn test_dotted_identifier_requires_segment() {
        let mut lexer = Lexer::new("a.1");
        lexer.advance().expect("identifier");
        assert_matches!(
            lexer.dotted_identifier(false),
            Err(LexerError::ExpectedIdentifier { .. })
        );
    }

    #[test]
    fn test_identifier_length_limit() {
        let long = "x".repeat(MAX_IDENTIFIER_LENGTH + 1);
        let mut lexer = Lexer::new(&long);
        assert_matches!(lexer.advance(), Err(LexerError::IdentifierTooLong { .. }));
    }

    #[test]
    fn test_invalid_character() {
        let mut lexer = Lexer::new("@");
        assert_matches!(
            lexer.advance(),
            Err(LexerError::InvalidCharacter { character: '@', .. })
        );
    }

    #[test]
    fn test_metrics_accumulate() {
        let mut lexer = Lexer::new("enum x { }");
        while lexer.advance().expect("token") != Token::Eof {}
        let metrics = lexer.metrics();
        assert_eq!(metrics.keyword_tokens, 1);
        assert_eq!(metrics.identifier_tokens, 1);
        assert_eq!(metrics.symbol_tokens, 2);
        assert_eq!(metrics.total_tokens, 5);
    }
}
