//! Process-wide registry of functions and named constants
//!
//! The registry determines what the lexer recognizes as `Function` and
//! `Constant` tokens and how `Function` nodes dispatch. It is expected to be
//! populated during initialization and treated as read-only afterwards;
//! callers wanting concurrent registration must serialize it themselves.

use log::debug;
use rustc_hash::FxHashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::Node;
use crate::functions::definitions;

/// Definition of a function: numeric kernel plus symbolic rules
#[derive(Clone)]
pub struct FunctionDef {
    /// Canonical id of the function (e.g. "sin", "ln")
    pub name: &'static str,

    /// Point evaluation in IEEE-754 double precision
    pub eval: fn(f64) -> f64,

    /// Chain-rule derivative: receives the argument and the argument's
    /// derivative, returns the derivative tree
    pub derivative: fn(&Node, Node) -> Node,

    /// Argument-pattern reduction: receives the already-simplified argument,
    /// returns either a reduced node or the rebuilt call
    pub simplify: fn(Node) -> Node,
}

// FxHashMap: lookups are keyed by short function/constant names
static FUNCTIONS: RwLock<Option<FxHashMap<&'static str, FunctionDef>>> = RwLock::new(None);
static CONSTANTS: RwLock<Option<FxHashMap<String, f64>>> = RwLock::new(None);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Seed the registry with the standard function set and the constants
/// `e` and `pi`. Idempotent; a call after [`shutdown`] reseeds.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    for def in definitions::standard_definitions() {
        add_function(def);
    }
    add_constant("e", std::f64::consts::E);
    add_constant("pi", std::f64::consts::PI);

    debug!("seeded function registry with the standard set");
}

/// Clear all registered functions and constants.
pub fn shutdown() {
    *FUNCTIONS.write().unwrap() = None;
    *CONSTANTS.write().unwrap() = None;
    INITIALIZED.store(false, Ordering::SeqCst);
}

/// Register a function definition. The first registration of an id wins;
/// later ones are ignored.
pub fn add_function(def: FunctionDef) {
    let mut guard = FUNCTIONS.write().unwrap();
    let map = guard.get_or_insert_with(FxHashMap::default);
    map.entry(def.name).or_insert(def);
}

/// Register a named constant. The first registration of a name wins.
pub fn add_constant(name: &str, value: f64) {
    let mut guard = CONSTANTS.write().unwrap();
    let map = guard.get_or_insert_with(FxHashMap::default);
    map.entry(name.to_string()).or_insert(value);
}

/// Look up a function definition by id.
pub fn get_function(id: &str) -> Option<FunctionDef> {
    FUNCTIONS
        .read()
        .unwrap()
        .as_ref()
        .and_then(|map| map.get(id).cloned())
}

/// Resolve a constant name to its value; NaN for unknown names.
pub fn get_constant_value(name: &str) -> f64 {
    CONSTANTS
        .read()
        .unwrap()
        .as_ref()
        .and_then(|map| map.get(name).copied())
        .unwrap_or(f64::NAN)
}

/// Snapshot of the registered function ids, for the lexer.
pub fn function_names() -> Vec<String> {
    FUNCTIONS
        .read()
        .unwrap()
        .as_ref()
        .map(|map| map.keys().map(|name| name.to_string()).collect())
        .unwrap_or_default()
}

/// Snapshot of the registered constant names, for the lexer.
pub fn constant_names() -> Vec<String> {
    CONSTANTS
        .read()
        .unwrap()
        .as_ref()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_seeds_standard_set() {
        init();
        assert!(get_function("sin").is_some());
        assert!(get_function("csch").is_some());
        assert!(get_function("exp").is_some());
        assert!(get_function("nope").is_none());
        assert_eq!(get_constant_value("pi"), std::f64::consts::PI);
        assert!(get_constant_value("nope").is_nan());
    }

    // The registry is process-wide and unit tests run in parallel, so this
    // test only adds entries; shutdown() is never called here because every
    // other test depends on the standard set staying seeded.
    #[test]
    fn test_extension_points() {
        init();

        // first registration wins: "sin" is already registered
        add_function(FunctionDef {
            name: "sin",
            eval: |_| 42.0,
            derivative: |_, _| Node::number(42.0),
            simplify: |arg| arg,
        });
        let def = get_function("sin").unwrap();
        assert_eq!((def.eval)(0.0), 0.0);

        add_constant("e", 2.0);
        assert_eq!(get_constant_value("e"), std::f64::consts::E);

        // extension point
        add_function(FunctionDef {
            name: "double",
            eval: |x| 2.0 * x,
            derivative: |_, u_prime| Node::mul(Node::number(2.0), u_prime),
            simplify: |arg| Node::func("double", arg),
        });
        assert_eq!((get_function("double").unwrap().eval)(3.0), 6.0);

        // registration is visible to the lexer's recognizer
        let tokens = crate::parser::lexer::tokenize("double");
        assert_eq!(tokens[0].kind, crate::parser::tokens::TokenKind::Function);
    }
}
