//! Runtime environment managing lexical bindings

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// One scope: its own bindings plus the scope it is nested in.
#[derive(Default)]
struct Scope {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A chained name → value mapping implementing lexical scoping.
///
/// `Environment` is a cheap handle: cloning it shares the same scope.
/// Closures hold such a handle to their defining scope, which keeps the
/// scope alive for as long as the closure is reachable and lets every
/// call observe later bindings made through it.
///
/// The handle is single-threaded (`Rc`/`RefCell`); one evaluation at a
/// time may use a given environment graph.
///
/// # Example
///
/// ```
/// use quickbeam::{Environment, Value};
///
/// let global = Environment::new();
/// global.set("x", Value::Integer(1));
///
/// let inner = Environment::new_enclosed(&global);
/// inner.set("x", Value::Integer(10)); // Shadows outer x
/// inner.set("y", Value::Integer(2));
///
/// assert_eq!(inner.get("x"), Some(Value::Integer(10)));
/// assert_eq!(global.get("x"), Some(Value::Integer(1)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Create a new empty top-level environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh empty scope chained to `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by name.
    ///
    /// Returns the nearest binding walking outward through enclosing
    /// scopes, or `None` if no scope in the chain binds `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let next = {
                let scope = current.0.borrow();
                if let Some(value) = scope.store.get(name) {
                    return Some(value.clone());
                }
                scope.outer.clone()
            };
            current = next?;
        }
    }

    /// Check if a binding exists anywhere in the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check if a binding exists in the current (innermost) scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.0.borrow().store.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Create or overwrite a binding in the current scope.
    ///
    /// Never touches enclosing scopes: a same-named outer binding is
    /// shadowed, not mutated. Returns the stored value.
    ///
    /// Any value may be bound. Evaluation itself never binds an `Error`,
    /// because a faulting `let` stops before it stores anything.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// The enclosing scope, if any.
    pub fn outer(&self) -> Option<Environment> {
        self.0.borrow().outer.clone()
    }

    /// Number of scopes in the chain, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.outer();
        while let Some(env) = current {
            depth += 1;
            current = env.outer();
        }
        depth
    }

    /// Check if we're at the top-level scope.
    pub fn is_global_scope(&self) -> bool {
        self.0.borrow().outer.is_none()
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Get all binding names in the current scope, sorted.
    pub fn names_in_current_scope(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().store.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of bindings in the current scope.
    pub fn len(&self) -> usize {
        self.0.borrow().store.len()
    }

    /// Check if the current scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().store.is_empty()
    }
}

// Values may hold closures over this very environment, so only names
// are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names_in_current_scope())
            .field("depth", &self.depth())
            .finish()
    }
}
