//! Diagnostic codes and classification for the PDS parser
//!
//! Single source of truth for all error and success codes plus their metadata.

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E001");
    pub const UNTERMINATED_STRING: Code = Code::new("E002");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E003");
    pub const INVALID_NUMBER: Code = Code::new("E004");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E005");
    pub const STRING_TOO_LARGE: Code = Code::new("E006");
    pub const COMMENT_TOO_LONG: Code = Code::new("E007");
    pub const NUMBER_TOO_LONG: Code = Code::new("E008");
    pub const EXPECTED_IDENTIFIER: Code = Code::new("E009");
    pub const EXPECTED_DOT: Code = Code::new("E010");
    pub const TOO_MANY_SEGMENTS: Code = Code::new("E011");
}

/// Syntax transformation error codes
pub mod syntax {
    use super::Code;

    pub const UNRECOGNIZED_TOKEN: Code = Code::new("E020");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const LOGGING_INITIALIZED: Code = Code::new("S001");
    pub const CONSTANT_RECOGNIZED: Code = Code::new("S010");
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High = 0,
    Medium = 1,
    Low = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Get the severity classification for a code
pub fn get_severity(code: &str) -> Severity {
    match code {
        "E001" | "E002" | "E003" | "E004" | "E009" | "E010" | "E020" => Severity::High,
        "E005" | "E006" | "E007" | "E008" | "E011" => Severity::Medium,
        _ => Severity::Low,
    }
}

/// Get a human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    match code {
        "E001" => "Character is not part of the PDS token alphabet",
        "E002" => "String literal is missing its closing delimiter",
        "E003" => "Block comment is missing its closing delimiter",
        "E004" => "Numeric literal is malformed at the token level",
        "E005" => "Identifier exceeds the maximum segment length",
        "E006" => "String literal exceeds the maximum size",
        "E007" => "Comment exceeds the maximum length",
        "E008" => "Numeric literal exceeds the maximum length",
        "E009" => "Expected an identifier segment after a dot",
        "E010" => "Expected a leading dot in an anchored dotted name",
        "E011" => "Dotted name has too many segments",
        "E020" => "Token cannot begin a constant",
        "S001" => "Global logging system initialized",
        "S010" => "Constant recognized",
        _ => "Unknown code",
    }
}
