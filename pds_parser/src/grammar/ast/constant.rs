//! Constant node: a scalar literal written directly in schema source
//!
//! A `Constant` is immutable once built and is only built by the constant
//! builder. It keeps three views of one literal: the exact source lexeme
//! (`raw`, the single source of truth for re-serialization), the resolved
//! literal kind, and the derived scalar value. The value may be null for
//! numeric kinds whose lexeme has no finite representation; that is a
//! documented state, not an error.

use super::visitor::{AstNode, NodeVisitor};
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of literal kinds a constant can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Identifier,
    String,
    Int,
    Float,
    Boolean,
}

impl LiteralKind {
    /// Lower-case tag as used by structured dumps
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived scalar value of a constant
///
/// Serializes untagged: a bare JSON scalar, or `null` for `Null`. `Null`
/// means "kind is known but no usable scalar could be derived", which is
/// distinct from an unknown kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl ConstantValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A recognized constant literal
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    kind: LiteralKind,
    raw: String,
    value: ConstantValue,
    span: Span,
}

impl Constant {
    /// Only the constant builder constructs nodes
    pub(crate) fn new(kind: LiteralKind, raw: String, value: ConstantValue, span: Span) -> Self {
        debug_assert!(
            kind_matches_value(kind, &value),
            "constant kind {:?} is inconsistent with value {:?}",
            kind,
            value
        );
        Self {
            kind,
            raw,
            value,
            span,
        }
    }

    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// Exact source lexeme, delimiters included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &ConstantValue {
        &self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Re-serialize to PDS source. Always returns the exact original lexeme,
    /// independent of the derived value.
    pub fn as_pds_string(&self) -> &str {
        &self.raw
    }

    /// One-way snapshot for external tooling; cannot reconstruct a node
    pub fn structured_dump(&self) -> ConstantDump {
        ConstantDump {
            node_type: "Constant",
            start: self.span.start.line_col(),
            end: self.span.end.line_col(),
            literal_type: self.kind,
            raw: self.raw.clone(),
            value: self.value.clone(),
        }
    }

    /// Invoke the visitor's generic hook, then its constant hook. A constant
    /// is a leaf: there are no children to walk into.
    pub fn accept(&self, visitor: &mut dyn NodeVisitor) {
        visitor.visit_node(self);
        visitor.visit_constant(self);
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AstNode for Constant {
    fn span(&self) -> Span {
        self.span
    }

    fn node_type(&self) -> &'static str {
        "Constant"
    }
}

fn kind_matches_value(kind: LiteralKind, value: &ConstantValue) -> bool {
    match kind {
        LiteralKind::Boolean => matches!(value, ConstantValue::Boolean(_)),
        LiteralKind::String | LiteralKind::Identifier => matches!(value, ConstantValue::String(_)),
        LiteralKind::Int | LiteralKind::Float => {
            matches!(value, ConstantValue::Number(_) | ConstantValue::Null)
        }
    }
}

/// Flat serializable snapshot of a constant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantDump {
    #[serde(rename = "type")]
    pub node_type: &'static str,
    pub start: (u32, u32),
    pub end: (u32, u32),
    #[serde(rename = "literalType")]
    pub literal_type: LiteralKind,
    pub raw: String,
    pub value: ConstantValue,
}
