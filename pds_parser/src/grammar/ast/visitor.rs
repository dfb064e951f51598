//! Visitor support for AST traversal
//!
//! Visitors opt into the hooks they care about; the defaulted no-op bodies
//! stand in for absent capabilities, so a visitor may implement either hook,
//! both, or neither. Nodes invoke the generic hook before the node-specific
//! one.

use super::constant::Constant;
use crate::utils::Span;

/// Minimal capability surface every AST node exposes
pub trait AstNode {
    /// Half-open source span of every token this node consumed
    fn span(&self) -> Span;

    /// Stable node-type tag, matching the structured dump
    fn node_type(&self) -> &'static str;
}

/// Traversal visitor with two independently optional hooks
pub trait NodeVisitor {
    /// Generic hook, invoked for every visited node
    fn visit_node(&mut self, _node: &dyn AstNode) {}

    /// Constant-specific hook
    fn visit_constant(&mut self, _constant: &Constant) {}
}
