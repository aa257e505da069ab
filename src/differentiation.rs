//! Differentiation engine - applies calculus rules
//!
//! Operator nodes carry the sum, product, quotient and power rules here;
//! per-function chain-rule kernels live in the dispatch table. Every rule
//! returns a freshly built tree and absorbs error nodes found in child
//! derivatives.

use log::trace;

use crate::Node;
use crate::functions::registry;

impl Node {
    /// Differentiate this expression with respect to a named variable.
    ///
    /// Differentiating a variable other than `respect_to` produces a
    /// [`Node::Differential`] placeholder rather than zero, since nothing is
    /// known about the relationship between the two variables.
    ///
    /// # Example
    /// ```
    /// use symcalc::{Node, functions::registry};
    ///
    /// registry::init();
    /// let expr = Node::pow(Node::variable("x"), Node::number(2.0));
    /// let derivative = expr.differentiate("x");
    /// assert_eq!(derivative.simplify().to_string(), "2x");
    /// ```
    pub fn differentiate(&self, respect_to: &str) -> Node {
        match self {
            Node::Number(_) | Node::Constant { .. } => Node::number(0.0),

            Node::Variable(name) => {
                if name == respect_to {
                    Node::number(1.0)
                } else {
                    Node::differential(name.clone(), respect_to, 1)
                }
            }

            // d/dw (d^n v / d u^n): same variable bumps the order, a different
            // one chains through du/dw
            Node::Differential {
                var,
                respect_to: inner_respect,
                order,
            } => {
                if inner_respect == respect_to {
                    Node::differential(var.clone(), inner_respect.clone(), order + 1)
                } else {
                    Node::mul(
                        Node::differential(var.clone(), inner_respect.clone(), order + 1),
                        Node::differential(inner_respect.clone(), respect_to, 1),
                    )
                }
            }

            Node::Equals { left, right } => {
                let left_prime = left.differentiate(respect_to);
                if left_prime.is_error() {
                    return left_prime;
                }
                let right_prime = right.differentiate(respect_to);
                if right_prime.is_error() {
                    return right_prime;
                }
                Node::equals(left_prime, right_prime)
            }

            Node::Function { id, arg } => {
                if arg.is_error() {
                    return (**arg).clone();
                }
                let Some(def) = registry::get_function(id) else {
                    return Node::error(format!("Could not find function {}", id));
                };
                let arg_prime = arg.differentiate(respect_to);
                if arg_prime.is_error() {
                    return arg_prime;
                }
                (def.derivative)(arg, arg_prime)
            }

            Node::Operator { op, left, right } => {
                let result = differentiate_operator(*op, left, right, respect_to);
                trace!("d/d{}: {} => {}", respect_to, self, result);
                result
            }

            Node::Error(message) => Node::error(message.clone()),
        }
    }
}

fn differentiate_operator(op: char, left: &Node, right: &Node, respect_to: &str) -> Node {
    let left_prime = left.differentiate(respect_to);
    if left_prime.is_error() {
        return left_prime;
    }
    let right_prime = right.differentiate(respect_to);
    if right_prime.is_error() {
        return right_prime;
    }

    match op {
        // (L op R)' = L' op R'
        '+' | '-' => Node::binary(op, left_prime, right_prime),

        // (L * R)' = L' * R + L * R'
        '*' => Node::add(
            Node::mul(left_prime, right.clone()),
            Node::mul(left.clone(), right_prime),
        ),

        '/' => {
            // constant numerator: (a / R)' = -a * (R' / R^2)
            if matches!(left, Node::Number(_) | Node::Constant { .. }) {
                return Node::mul(
                    Node::number(-1.0),
                    Node::mul(
                        left.clone(),
                        Node::div(right_prime, Node::pow(right.clone(), Node::number(2.0))),
                    ),
                );
            }

            // constant denominator: (L / a)' = L' / a
            if matches!(right, Node::Number(_) | Node::Constant { .. }) {
                return Node::div(left_prime, right.clone());
            }

            // quotient rule: (R * L' - L * R') / R^2
            Node::div(
                Node::sub(
                    Node::mul(right.clone(), left_prime),
                    Node::mul(left.clone(), right_prime),
                ),
                Node::pow(right.clone(), Node::number(2.0)),
            )
        }

        '^' => {
            if matches!(left, Node::Variable(_)) {
                if let Some(n) = right.as_number() {
                    if n == 1.0 {
                        return Node::number(1.0);
                    }
                    if n == 0.0 {
                        return Node::number(0.0);
                    }
                    // power rule: n * L^(n-1)
                    return Node::mul(
                        Node::number(n),
                        Node::pow(left.clone(), Node::number(n - 1.0)),
                    );
                }
                if matches!(right, Node::Constant { .. }) {
                    // power rule with a named constant: c * L^(c-1)
                    return Node::mul(
                        right.clone(),
                        Node::pow(left.clone(), Node::sub(right.clone(), Node::number(1.0))),
                    );
                }
            }

            // constant base: (a^R)' = ln(a) * a^R * R'
            if matches!(left, Node::Number(_) | Node::Constant { .. }) {
                return Node::mul(
                    Node::func("ln", left.clone()),
                    Node::mul(Node::pow(left.clone(), right.clone()), right_prime),
                );
            }

            // general: L^R * (R * L'/L + ln(L) * R')
            let base_fraction = Node::div(left_prime, left.clone());
            let first_term = Node::mul(right.clone(), base_fraction);
            let second_term = Node::mul(Node::func("ln", left.clone()), right_prime);
            Node::mul(
                Node::pow(left.clone(), right.clone()),
                Node::add(first_term, second_term),
            )
        }

        other => Node::error(format!("Unknown operator {}", other)),
    }
}
