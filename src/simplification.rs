//! Simplification engine - reduces expressions
//!
//! A single bottom-up pass: children are simplified first, then the node
//! applies arithmetic identities, constant folding, the squaring fold, and
//! limited distributive expansion. The pass does not iterate to a fixed
//! point, so a second `simplify()` call may reduce a tree further.

use log::trace;
use std::sync::Arc;

use crate::Node;
use crate::functions::registry;

impl Node {
    /// Simplify this expression, returning a freshly built tree.
    ///
    /// # Example
    /// ```
    /// use symcalc::{Node, functions::registry};
    ///
    /// registry::init();
    /// let expr = Node::add(Node::variable("x"), Node::number(0.0));
    /// assert_eq!(expr.simplify(), Node::variable("x"));
    /// ```
    pub fn simplify(&self) -> Node {
        match self {
            Node::Number(_)
            | Node::Variable(_)
            | Node::Constant { .. }
            | Node::Differential { .. }
            | Node::Error(_) => self.clone(),

            Node::Equals { left, right } => {
                let left = left.simplify();
                if left.is_error() {
                    return left;
                }
                let right = right.simplify();
                if right.is_error() {
                    return right;
                }
                Node::equals(left, right)
            }

            Node::Function { id, arg } => {
                if arg.is_error() {
                    return (**arg).clone();
                }
                let simplified = arg.simplify();
                if simplified.is_error() {
                    return simplified;
                }
                match registry::get_function(id) {
                    Some(def) => (def.simplify)(simplified),
                    None => Node::error(format!("Could not find function {}", id)),
                }
            }

            Node::Operator { op, left, right } => {
                let result = simplify_operator(*op, left, right);
                trace!("simplify: {} => {}", self, result);
                result
            }
        }
    }
}

fn simplify_operator(op: char, left: &Node, right: &Node) -> Node {
    let left = left.simplify();
    if left.is_error() {
        return left;
    }
    let right = right.simplify();
    if right.is_error() {
        return right;
    }

    match op {
        '+' => {
            if let Some(l) = left.as_number() {
                if l == 0.0 {
                    return right;
                }
                if let Some(r) = right.as_number() {
                    return Node::number(l + r);
                }
            }
            if right.is_zero_num() {
                return left;
            }
        }

        '-' => {
            if let Some(l) = left.as_number() {
                if l == 0.0 {
                    return Node::mul(Node::number(-1.0), right);
                }
                if let Some(r) = right.as_number() {
                    return Node::number(l - r);
                }
            }
            if right.is_zero_num() {
                return left;
            }
        }

        '*' => {
            if let Some(l) = left.as_number() {
                if l == 1.0 {
                    return right;
                }
                if l == 0.0 {
                    return left;
                }
            }
            if let Some(r) = right.as_number() {
                if r == 1.0 {
                    return left;
                }
                if r == 0.0 {
                    return right;
                }
            }

            // squaring fold: two equal symbols collapse to a power
            if let (Node::Constant { name: a, .. }, Node::Constant { name: b, .. }) =
                (&left, &right)
                && a == b
            {
                return Node::pow(left.clone(), Node::number(2.0));
            }
            if let (Node::Variable(a), Node::Variable(b)) = (&left, &right)
                && a == b
            {
                return Node::pow(left.clone(), Node::number(2.0));
            }

            // distributive expansion
            if let Node::Operator {
                op: right_op,
                left: c,
                right: d,
            } = &right
                && (*right_op == '+' || *right_op == '-')
            {
                if let Node::Operator {
                    op: left_op,
                    left: a,
                    right: b,
                } = &left
                    && (*left_op == '+' || *left_op == '-')
                {
                    return expand_product(*left_op, a, b, *right_op, c, d);
                }
                if is_distributable_factor(&left) {
                    // k * (C ± D) = k*C ± k*D
                    return Node::binary(
                        *right_op,
                        Node::mul(left.clone(), (**c).clone()),
                        Node::mul(left.clone(), (**d).clone()),
                    );
                }
            }
            if let Node::Operator {
                op: left_op,
                left: a,
                right: b,
            } = &left
                && (*left_op == '+' || *left_op == '-')
                && is_distributable_factor(&right)
            {
                // (A ± B) * k = k*A ± k*B; the factor lands on the left of
                // both products so the printer renders them uniformly
                return Node::binary(
                    *left_op,
                    Node::mul(right.clone(), (**a).clone()),
                    Node::mul(right.clone(), (**b).clone()),
                );
            }
        }

        '/' => {
            if right.is_one_num() {
                return left;
            }
            if left.is_zero_num() {
                return left;
            }
        }

        '^' => {
            if let Some(l) = left.as_number() {
                if l == 0.0 {
                    // 0^R is 0, except 0^0 which is left as written
                    match right.as_number() {
                        None => return Node::number(0.0),
                        Some(r) if r != 0.0 => return Node::number(0.0),
                        _ => {}
                    }
                }
                if l == 1.0 {
                    return Node::number(1.0);
                }
            }
            if let Some(r) = right.as_number() {
                if r == 1.0 {
                    return left;
                }
                if r == 0.0 {
                    return Node::number(1.0);
                }
            }
        }

        _ => {}
    }

    Node::binary(op, left, right)
}

/// Factors that distribute over a sum: numbers, named constants, and
/// function calls
fn is_distributable_factor(node: &Node) -> bool {
    matches!(
        node,
        Node::Number(_) | Node::Constant { .. } | Node::Function { .. }
    )
}

/// Expand `(A lop B) * (C rop D)` into its four products, signs per the
/// lop/rop combination.
fn expand_product(
    lop: char,
    a: &Arc<Node>,
    b: &Arc<Node>,
    rop: char,
    c: &Arc<Node>,
    d: &Arc<Node>,
) -> Node {
    let prod = |x: &Arc<Node>, y: &Arc<Node>| Node::mul((**x).clone(), (**y).clone());

    match (lop, rop) {
        // (a + b)(c + d) = (ac + ad) + (bc + bd)
        ('+', '+') => Node::add(
            Node::add(prod(a, c), prod(a, d)),
            Node::add(prod(b, c), prod(b, d)),
        ),
        // (a + b)(c - d) = (ac - ad) + (bc - bd)
        ('+', '-') => Node::add(
            Node::sub(prod(a, c), prod(a, d)),
            Node::sub(prod(b, c), prod(b, d)),
        ),
        // (a - b)(c + d) = (ac - bc) + (ad - bd)
        ('-', '+') => Node::add(
            Node::sub(prod(a, c), prod(b, c)),
            Node::sub(prod(a, d), prod(b, d)),
        ),
        // (a - b)(c - d) = (ac - ad) + (bd - bc)
        _ => Node::add(
            Node::sub(prod(a, c), prod(a, d)),
            Node::sub(prod(b, d), prod(b, c)),
        ),
    }
}
