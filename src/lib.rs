//! Symbolic calculus on expression trees
//!
//! A focused library for symbolic manipulation of single- and multi-variable
//! real-valued expressions: parse text into an expression tree, then
//! differentiate with respect to a named variable, simplify, evaluate under a
//! variable binding, or pretty-print.
//!
//! # Features
//! - Registry-driven lexing: registered functions and constants shape what
//!   the lexer recognizes
//! - Chain-rule differentiation with per-function derivative kernels
//! - Bottom-up simplification: identities, constant folding, limited
//!   distribution
//! - Quiet-NaN evaluation, with in-band error nodes for symbolic failures
//!
//! # Usage Examples
//!
//! ## String-based API
//! ```
//! let result = symcalc::diff("x^2", "x").unwrap();
//! assert_eq!(result, "2x");
//! ```
//!
//! ## Tree-based API
//! ```
//! use symcalc::{Node, functions::registry, parser};
//!
//! registry::init();
//! let expr = parser::parse("4*sin(x^2)");
//! let derivative = expr.differentiate("x").simplify();
//! println!("{}", derivative);
//! ```

mod ast;
mod differentiation;
mod display;
mod error;
pub mod functions;
pub mod parser;
mod simplification;

#[cfg(test)]
mod tests;

pub use ast::Node;
pub use error::ExprError;
pub use functions::registry::FunctionDef;

use log::debug;
use std::collections::HashMap;

use crate::functions::registry;

/// Differentiate a formula with respect to a variable and return the
/// simplified derivative as a string.
///
/// Seeds the registry if needed, parses, differentiates, and runs one
/// simplification pass over the result.
///
/// # Example
/// ```
/// let result = symcalc::diff("sin(x)", "x").unwrap();
/// assert_eq!(result, "cos(x)");
/// ```
pub fn diff(formula: &str, respect_to: &str) -> Result<String, ExprError> {
    registry::init();
    if formula.trim().is_empty() {
        return Err(ExprError::EmptyFormula);
    }
    debug!("differentiating {:?} with respect to {}", formula, respect_to);

    let expr = parser::parse(formula);
    into_result(expr.differentiate(respect_to).simplify())
}

/// Simplify a formula and return it as a string.
///
/// # Example
/// ```
/// let result = symcalc::simplify("x + 0").unwrap();
/// assert_eq!(result, "x");
/// ```
pub fn simplify(formula: &str) -> Result<String, ExprError> {
    registry::init();
    if formula.trim().is_empty() {
        return Err(ExprError::EmptyFormula);
    }
    debug!("simplifying {:?}", formula);

    into_result(parser::parse(formula).simplify())
}

/// Parse a formula and evaluate it under the given variable bindings.
///
/// Parse failures are reported as [`ExprError`]; numeric failures (unbound
/// variables, out-of-domain arguments) follow IEEE-754 and surface as NaN or
/// infinity in the returned value.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// let vars: HashMap<&str, f64> = [("a", 2.0), ("b", 3.0)].into_iter().collect();
/// let value = symcalc::evaluate_str("a*b", &vars).unwrap();
/// assert_eq!(value, 6.0);
/// ```
pub fn evaluate_str(formula: &str, vars: &HashMap<&str, f64>) -> Result<f64, ExprError> {
    registry::init();
    if formula.trim().is_empty() {
        return Err(ExprError::EmptyFormula);
    }

    let expr = parser::parse(formula);
    if let Some(message) = expr.error_message() {
        return Err(ExprError::Syntax(message.to_string()));
    }
    Ok(expr.evaluate(vars))
}

fn into_result(node: Node) -> Result<String, ExprError> {
    match node.error_message() {
        Some(message) => Err(ExprError::Syntax(message.to_string())),
        None => Ok(node.to_string()),
    }
}
