//! Parser module - converts strings to expression trees

mod descent;
pub(crate) mod lexer;
pub(crate) mod tokens;

pub use descent::Parser;
pub use lexer::tokenize;
pub use tokens::{Token, TokenKind};

use crate::Node;

/// Parse a formula string into an expression tree.
///
/// Failures (syntax errors, unbalanced parentheses, unknown functions) are
/// reported as in-band [`Node::Error`] values rather than through a result
/// type, so they flow through the same absorption rules as every other
/// symbolic operation.
///
/// # Example
/// ```
/// use symcalc::{functions::registry, parser};
///
/// registry::init();
/// let expr = parser::parse("x^2 + sin(x)");
/// assert!(!expr.is_error());
/// ```
pub fn parse(input: &str) -> Node {
    let tokens = lexer::tokenize(input);
    Parser::new(&tokens).parse_expression()
}
