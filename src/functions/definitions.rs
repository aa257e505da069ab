//! Standard function definitions for the registry
//!
//! Evaluation kernels, chain-rule derivative formulas, and argument-pattern
//! simplification rules for the built-in unary functions. Derivative formulas
//! follow standard calculus; the reciprocal trig and hyperbolic kernels are
//! expressed through their defining quotients.

use super::registry::FunctionDef;
use super::{func, neg, square};
use crate::Node;

/// Return the standard definitions for seeding the registry
pub(crate) fn standard_definitions() -> Vec<FunctionDef> {
    vec![
        // Trigonometric
        FunctionDef {
            name: "sin",
            eval: |x| x.sin(),
            derivative: |u, u_prime| {
                // d/dv sin(u) = u' * cos(u)
                Node::mul(u_prime, func("cos", u.clone()))
            },
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(0.0);
                }
                func("sin", arg)
            },
        },
        FunctionDef {
            name: "cos",
            eval: |x| x.cos(),
            derivative: |u, u_prime| {
                // d/dv cos(u) = -u' * sin(u)
                neg(Node::mul(u_prime, func("sin", u.clone())))
            },
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(1.0);
                }
                func("cos", arg)
            },
        },
        FunctionDef {
            name: "tan",
            eval: |x| x.tan(),
            derivative: |u, u_prime| {
                // d/dv tan(u) = u' * sec(u)^2
                Node::mul(u_prime, square(func("sec", u.clone())))
            },
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(0.0);
                }
                func("tan", arg)
            },
        },
        FunctionDef {
            name: "cot",
            eval: |x| x.cos() / x.sin(),
            derivative: |u, u_prime| {
                // d/dv cot(u) = -u' * csc(u)^2
                neg(Node::mul(u_prime, square(func("csc", u.clone()))))
            },
            simplify: |arg| func("cot", arg),
        },
        FunctionDef {
            name: "sec",
            eval: |x| 1.0 / x.cos(),
            derivative: |u, u_prime| {
                // d/dv sec(u) = u' * tan(u) * sec(u)
                Node::mul(
                    u_prime,
                    Node::mul(func("tan", u.clone()), func("sec", u.clone())),
                )
            },
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(1.0);
                }
                func("sec", arg)
            },
        },
        FunctionDef {
            name: "csc",
            eval: |x| 1.0 / x.sin(),
            derivative: |u, u_prime| {
                // d/dv csc(u) = -u' * cot(u) * csc(u)
                neg(Node::mul(
                    u_prime,
                    Node::mul(func("cot", u.clone()), func("csc", u.clone())),
                ))
            },
            simplify: |arg| func("csc", arg),
        },
        // Hyperbolic
        FunctionDef {
            name: "sinh",
            eval: |x| x.sinh(),
            derivative: |u, u_prime| Node::mul(u_prime, func("cosh", u.clone())),
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(0.0);
                }
                func("sinh", arg)
            },
        },
        FunctionDef {
            name: "cosh",
            eval: |x| x.cosh(),
            derivative: |u, u_prime| Node::mul(u_prime, func("sinh", u.clone())),
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(1.0);
                }
                func("cosh", arg)
            },
        },
        FunctionDef {
            name: "tanh",
            eval: |x| x.tanh(),
            derivative: |u, u_prime| {
                // d/dv tanh(u) = u' * sech(u)^2
                Node::mul(u_prime, square(func("sech", u.clone())))
            },
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(0.0);
                }
                func("tanh", arg)
            },
        },
        FunctionDef {
            name: "coth",
            eval: |x| x.cosh() / x.sinh(),
            derivative: |u, u_prime| {
                // d/dv coth(u) = -u' * csch(u)^2
                neg(Node::mul(u_prime, square(func("csch", u.clone()))))
            },
            simplify: |arg| func("coth", arg),
        },
        FunctionDef {
            name: "sech",
            eval: |x| 1.0 / x.cosh(),
            derivative: |u, u_prime| {
                // d/dv sech(u) = -u' * tanh(u) * sech(u)
                neg(Node::mul(
                    u_prime,
                    Node::mul(func("tanh", u.clone()), func("sech", u.clone())),
                ))
            },
            simplify: |arg| {
                if arg.is_zero_num() {
                    return Node::number(1.0);
                }
                func("sech", arg)
            },
        },
        FunctionDef {
            name: "csch",
            eval: |x| 1.0 / x.sinh(),
            derivative: |u, u_prime| {
                // d/dv csch(u) = -u' * coth(u) * csch(u)
                neg(Node::mul(
                    u_prime,
                    Node::mul(func("coth", u.clone()), func("csch", u.clone())),
                ))
            },
            simplify: |arg| func("csch", arg),
        },
        // Logarithms and exponentials
        FunctionDef {
            name: "log",
            eval: |x| x.log10(),
            derivative: |u, u_prime| {
                // d/dv log10(u) = u' / (ln(10) * u)
                Node::div(
                    u_prime,
                    Node::mul(func("ln", Node::number(10.0)), u.clone()),
                )
            },
            simplify: |arg| {
                match arg.as_number() {
                    Some(n) if n == 1.0 => return Node::number(0.0),
                    Some(n) if n == 10.0 => return Node::number(1.0),
                    _ => {}
                }
                func("log", arg)
            },
        },
        FunctionDef {
            name: "ln",
            eval: |x| x.ln(),
            derivative: |u, u_prime| Node::div(u_prime, u.clone()),
            simplify: |arg| {
                match &arg {
                    Node::Number(n) if *n == 1.0 => return Node::number(0.0),
                    Node::Number(n) if *n == std::f64::consts::E => return Node::number(1.0),
                    Node::Constant { name, .. } if name == "e" => return Node::number(1.0),
                    _ => {}
                }
                func("ln", arg)
            },
        },
        FunctionDef {
            name: "exp",
            eval: |x| x.exp(),
            derivative: |u, u_prime| Node::mul(u_prime, func("exp", u.clone())),
            simplify: |arg| {
                match arg.as_number() {
                    Some(n) if n == 1.0 => return Node::constant("e"),
                    Some(n) if n == 0.0 => return Node::number(1.0),
                    _ => {}
                }
                func("exp", arg)
            },
        },
        FunctionDef {
            name: "sqrt",
            eval: |x| x.sqrt(),
            derivative: |u, u_prime| {
                // d/dv sqrt(u) = u' / (2 * sqrt(u))
                Node::div(
                    u_prime,
                    Node::mul(Node::number(2.0), func("sqrt", u.clone())),
                )
            },
            simplify: |arg| {
                if let Some(n) = arg.as_number() {
                    let root = n.sqrt();
                    if root.fract() == 0.0 {
                        return Node::number(root);
                    }
                }
                func("sqrt", arg)
            },
        },
        FunctionDef {
            name: "abs",
            eval: |x| x.abs(),
            derivative: |u, u_prime| {
                // d/dv |u| = u * u' / |u|
                Node::div(Node::mul(u.clone(), u_prime), func("abs", u.clone()))
            },
            simplify: |arg| {
                if let Some(n) = arg.as_number() {
                    return Node::number(if n < 0.0 { -n } else { n });
                }
                func("abs", arg)
            },
        },
    ]
}
