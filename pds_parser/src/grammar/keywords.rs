//! Keyword system for the PDS schema language
//!
//! Structural keywords only. `true` and `false` are deliberately NOT keywords:
//! the tokenizer yields them as identifiers and constant recognition promotes
//! them to boolean literals by text, so boolean handling stays in one place.
use serde::{Deserialize, Serialize};

/// PDS structural keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === SCHEMA STRUCTURE ===
    Syntax,
    Package,
    Import,
    Option,
    Message,
    Enum,
    Service,
    Rpc,
    Returns,
    Stream,

    // === FIELD MODIFIERS ===
    Repeated,
    Optional,
    Map,
    Oneof,

    // === RANGES ===
    Reserved,
    To,
    Max,

    // === NUMERIC KEYWORDS ===
    Inf,
    Nan,
}

impl Keyword {
    /// Get the exact string representation as it appears in PDS source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Package => "package",
            Self::Import => "import",
            Self::Option => "option",
            Self::Message => "message",
            Self::Enum => "enum",
            Self::Service => "service",
            Self::Rpc => "rpc",
            Self::Returns => "returns",
            Self::Stream => "stream",
            Self::Repeated => "repeated",
            Self::Optional => "optional",
            Self::Map => "map",
            Self::Oneof => "oneof",
            Self::Reserved => "reserved",
            Self::To => "to",
            Self::Max => "max",
            Self::Inf => "inf",
            Self::Nan => "nan",
        }
    }

    /// Parse keyword from string with exact case matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "syntax" => Some(Self::Syntax),
            "package" => Some(Self::Package),
            "import" => Some(Self::Import),
            "option" => Some(Self::Option),
            "message" => Some(Self::Message),
            "enum" => Some(Self::Enum),
            "service" => Some(Self::Service),
            "rpc" => Some(Self::Rpc),
            "returns" => Some(Self::Returns),
            "stream" => Some(Self::Stream),
            "repeated" => Some(Self::Repeated),
            "optional" => Some(Self::Optional),
            "map" => Some(Self::Map),
            "oneof" => Some(Self::Oneof),
            "reserved" => Some(Self::Reserved),
            "to" => Some(Self::To),
            "max" => Some(Self::Max),
            "inf" => Some(Self::Inf),
            "nan" => Some(Self::Nan),
            // All other words become identifiers, including "true"/"false"
            _ => None,
        }
    }

    /// Check if this keyword names a non-finite numeric literal
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Inf | Self::Nan)
    }

    /// Check if this keyword starts a declaration
    pub const fn is_declaration(self) -> bool {
        matches!(
            self,
            Self::Syntax
                | Self::Package
                | Self::Import
                | Self::Option
                | Self::Message
                | Self::Enum
                | Self::Service
                | Self::Rpc
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate the complete list of reserved keywords
pub fn reserved_keywords() -> &'static [&'static str] {
    &[
        "syntax", "package", "import", "option", "message", "enum", "service", "rpc", "returns",
        "stream", "repeated", "optional", "map", "oneof", "reserved", "to", "max", "inf", "nan",
    ]
}

/// Check if a string is a reserved keyword
pub fn is_reserved_keyword(s: &str) -> bool {
    Keyword::from_str(s).is_some()
}
