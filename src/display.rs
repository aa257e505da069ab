//! Display formatting for expression trees
//!
//! Renders multiplication in implicit style: atomic factors juxtapose
//! (`ab`), composite factors are parenthesized, and an atomic factor is
//! written to the left of a parenthesized composite regardless of its
//! source-order side. An error node anywhere in a printed position prints
//! its message verbatim and suppresses the surrounding structure.

use crate::Node;
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e10 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }

            Node::Variable(name) => write!(f, "{}", name),

            Node::Constant { name, .. } => write!(f, "{}", name),

            Node::Operator { op, left, right } => {
                if let Some(message) = left.error_message() {
                    return write!(f, "{}", message);
                }
                if let Some(message) = right.error_message() {
                    return write!(f, "{}", message);
                }

                match op {
                    '*' => {
                        let left_is_op = matches!(**left, Node::Operator { .. });
                        let right_is_op = matches!(**right, Node::Operator { .. });
                        match (left_is_op, right_is_op) {
                            (true, true) => write!(f, "({})({})", left, right),
                            // atomic factor goes on the left of the composite
                            (true, false) => write!(f, "{}({})", right, left),
                            (false, true) => write!(f, "{}({})", left, right),
                            (false, false) => write!(f, "{}{}", left, right),
                        }
                    }
                    '/' => write!(f, "({} / {})", left, right),
                    '+' | '-' => write!(f, "{} {} {}", left, op, right),
                    '^' => write!(f, "{}^{}", left, right),
                    other => write!(f, "({} {} {})", left, other, right),
                }
            }

            Node::Function { id, arg } => {
                if let Some(message) = arg.error_message() {
                    return write!(f, "{}", message);
                }
                write!(f, "{}({})", id, arg)
            }

            Node::Equals { left, right } => {
                if let Some(message) = left.error_message() {
                    return write!(f, "{}", message);
                }
                if let Some(message) = right.error_message() {
                    return write!(f, "{}", message);
                }
                write!(f, "{} = {}", left, right)
            }

            Node::Differential {
                var,
                respect_to,
                order,
            } => {
                if *order == 1 {
                    write!(f, "d{}/d{}", var, respect_to)
                } else {
                    write!(f, "d^{}{}/d{}^{}", order, var, respect_to, order)
                }
            }

            Node::Error(message) => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Node;
    use crate::functions::registry;

    #[test]
    fn test_number_formatting() {
        assert_eq!(Node::number(3.0).to_string(), "3");
        assert_eq!(Node::number(-2.0).to_string(), "-2");
        assert_eq!(Node::number(3.25).to_string(), "3.25");
        assert_eq!(Node::number(f64::NAN).to_string(), "NaN");
        assert_eq!(Node::number(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn test_implicit_multiplication_of_atoms() {
        let expr = Node::mul(Node::variable("a"), Node::variable("b"));
        assert_eq!(expr.to_string(), "ab");

        let expr = Node::mul(Node::number(2.0), Node::variable("x"));
        assert_eq!(expr.to_string(), "2x");
    }

    #[test]
    fn test_composite_factors_are_parenthesized() {
        let sum = || Node::add(Node::variable("x"), Node::variable("y"));

        // both composite
        let expr = Node::mul(sum(), sum());
        assert_eq!(expr.to_string(), "(x + y)(x + y)");

        // composite on the left: the atomic factor is written first
        let expr = Node::mul(sum(), Node::variable("z"));
        assert_eq!(expr.to_string(), "z(x + y)");

        // composite on the right
        let expr = Node::mul(Node::variable("z"), sum());
        assert_eq!(expr.to_string(), "z(x + y)");
    }

    #[test]
    fn test_function_factor_is_atomic() {
        registry::init();
        let expr = Node::mul(Node::number(4.0), Node::func("sin", Node::variable("x")));
        assert_eq!(expr.to_string(), "4sin(x)");
    }

    #[test]
    fn test_division_always_parenthesized() {
        let expr = Node::div(Node::variable("x"), Node::variable("y"));
        assert_eq!(expr.to_string(), "(x / y)");
    }

    #[test]
    fn test_additive_and_power_forms() {
        let expr = Node::add(Node::variable("x"), Node::number(1.0));
        assert_eq!(expr.to_string(), "x + 1");

        let expr = Node::sub(Node::variable("x"), Node::number(1.0));
        assert_eq!(expr.to_string(), "x - 1");

        let expr = Node::pow(Node::variable("x"), Node::number(2.0));
        assert_eq!(expr.to_string(), "x^2");
    }

    #[test]
    fn test_unknown_operator_fallback() {
        let expr = Node::binary('%', Node::variable("x"), Node::number(2.0));
        assert_eq!(expr.to_string(), "(x % 2)");
    }

    #[test]
    fn test_equals_and_differential() {
        let expr = Node::equals(Node::variable("y"), Node::variable("x"));
        assert_eq!(expr.to_string(), "y = x");

        assert_eq!(Node::differential("y", "x", 1).to_string(), "dy/dx");
        assert_eq!(Node::differential("y", "x", 3).to_string(), "d^3y/dx^3");
    }

    #[test]
    fn test_error_child_suppresses_structure() {
        registry::init();
        // a function with a poisoned argument prints only the message
        let poisoned = Node::func("mystery", Node::variable("x"));
        assert_eq!(poisoned.to_string(), "Could not find function mystery");

        // an error directly under an operator suppresses the operator
        let wrapped = Node::add(Node::error("boom"), Node::variable("x"));
        assert_eq!(wrapped.to_string(), "boom");

        let equation = Node::equals(Node::variable("y"), Node::error("boom"));
        assert_eq!(equation.to_string(), "boom");
    }
}
