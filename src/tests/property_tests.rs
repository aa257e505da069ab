//! Property-based tests
//!
//! Uses quickcheck for parser robustness (fuzzing) and for the laws the
//! symbolic operations must uphold on randomly generated expressions.

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use std::collections::HashMap;

use crate::functions::registry;
use crate::{Node, parser};

/// Generate a random well-formed expression string
fn random_expr_string(g: &mut Gen, depth: usize) -> String {
    if depth == 0 {
        // base cases: variables or small positive literals
        match u8::arbitrary(g) % 5 {
            0 => "x".to_string(),
            1 => "y".to_string(),
            2 => "z".to_string(),
            3 => format!("{}", (u8::arbitrary(g) % 9) + 1),
            _ => format!("{}.5", (u8::arbitrary(g) % 9) + 1),
        }
    } else {
        match u8::arbitrary(g) % 8 {
            0..=3 => {
                let ops = ["+", "-", "*", "/"];
                let op = ops[usize::arbitrary(g) % ops.len()];
                format!(
                    "({} {} {})",
                    random_expr_string(g, depth - 1),
                    op,
                    random_expr_string(g, depth - 1)
                )
            }
            // small integer exponents keep powf away from NaN territory
            4 => format!(
                "({} ^ {})",
                random_expr_string(g, depth - 1),
                (u8::arbitrary(g) % 3) + 1
            ),
            5 | 6 => {
                let fns = ["sin", "cos", "exp", "abs", "sinh", "tanh"];
                let f = fns[usize::arbitrary(g) % fns.len()];
                format!("{}({})", f, random_expr_string(g, depth - 1))
            }
            _ => random_expr_string(g, depth - 1),
        }
    }
}

#[derive(Clone, Debug)]
struct ExprString(String);

impl Arbitrary for ExprString {
    fn arbitrary(g: &mut Gen) -> Self {
        ExprString(random_expr_string(g, 3))
    }
}

fn sample_env() -> HashMap<&'static str, f64> {
    [("x", 0.7), ("y", 1.3), ("z", 2.1)].into_iter().collect()
}

#[test]
fn prop_parser_never_panics_on_arbitrary_input() {
    fn prop(input: String) -> bool {
        let _ = parser::parse(&input);
        true
    }
    registry::init();
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn prop_generated_expressions_parse() {
    fn prop(expr: ExprString) -> bool {
        registry::init();
        !parser::parse(&expr.0).is_error()
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(ExprString) -> bool);
}

#[test]
fn prop_simplify_preserves_value() {
    fn prop(expr: ExprString) -> TestResult {
        registry::init();
        let tree = parser::parse(&expr.0);
        if tree.is_error() {
            return TestResult::discard();
        }

        let vars = sample_env();
        let before = tree.evaluate(&vars);
        if !before.is_finite() {
            return TestResult::discard();
        }
        let after = tree.simplify().evaluate(&vars);

        // distribution reassociates products, so allow for rounding drift
        TestResult::from_bool((before - after).abs() <= 1e-6 * before.abs().max(1.0))
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(ExprString) -> TestResult);
}

#[test]
fn prop_double_simplify_preserves_value() {
    fn prop(expr: ExprString) -> TestResult {
        registry::init();
        let tree = parser::parse(&expr.0);
        if tree.is_error() {
            return TestResult::discard();
        }

        let vars = sample_env();
        let before = tree.evaluate(&vars);
        if !before.is_finite() {
            return TestResult::discard();
        }
        let after = tree.simplify().simplify().evaluate(&vars);
        TestResult::from_bool((before - after).abs() <= 1e-6 * before.abs().max(1.0))
    }
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(ExprString) -> TestResult);
}

#[test]
fn prop_error_subtrees_absorb() {
    fn prop(expr: ExprString) -> TestResult {
        registry::init();
        let tree = parser::parse(&expr.0);
        if tree.is_error() {
            return TestResult::discard();
        }

        let poisoned = Node::mul(tree, Node::func("nosuchfn", Node::variable("x")));
        let vars = sample_env();
        TestResult::from_bool(
            poisoned.differentiate("x").is_error()
                && poisoned.simplify().is_error()
                && poisoned.evaluate(&vars).is_nan(),
        )
    }
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(ExprString) -> TestResult);
}

#[test]
fn prop_derivative_trees_still_print() {
    fn prop(expr: ExprString) -> TestResult {
        registry::init();
        let tree = parser::parse(&expr.0);
        if tree.is_error() {
            return TestResult::discard();
        }

        // the derivative of an error-free tree renders without panicking
        let derivative = tree.differentiate("x").simplify();
        let _ = derivative.to_string();
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(ExprString) -> TestResult);
}
