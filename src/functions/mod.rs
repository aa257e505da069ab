//! Function dispatch: the catalog of recognized unary functions
//!
//! Each function carries its numeric kernel, its chain-rule derivative
//! formula, and its argument-pattern simplification rules, all keyed by the
//! function id in a process-wide registry.

use crate::Node;

pub(crate) mod definitions;
pub mod registry;

// Helpers for building derivative expressions

/// Create a function call expression
pub(crate) fn func(id: &str, arg: Node) -> Node {
    Node::func(id, arg)
}

/// Negate an expression
pub(crate) fn neg(e: Node) -> Node {
    Node::mul(Node::number(-1.0), e)
}

/// Square an expression
pub(crate) fn square(e: Node) -> Node {
    Node::pow(e, Node::number(2.0))
}
