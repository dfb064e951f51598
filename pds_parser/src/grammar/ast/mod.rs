//! AST node definitions for the PDS constant grammar

pub mod constant;
pub mod visitor;

pub use constant::{Constant, ConstantDump, ConstantValue, LiteralKind};
pub use visitor::{AstNode, NodeVisitor};
