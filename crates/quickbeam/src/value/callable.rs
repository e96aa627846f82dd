//! Callable value types: closures and builtins

use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::ast::{BlockStatement, FunctionLiteral};
use crate::environment::Environment;

/// Type alias for builtin function pointers to reduce complexity
pub type BuiltinFnPtr = Rc<dyn Fn(&[Value]) -> Result<Value, String>>;

/// A user-defined function: the literal it came from plus the environment
/// that was current when the literal was evaluated.
///
/// The environment is shared, not copied, so every call of the closure
/// sees bindings made through it after the closure was created.
#[derive(Clone)]
pub struct FunctionValue {
    /// Parameter names
    pub parameters: Rc<[String]>,

    /// The function body, shared with the syntax tree
    pub body: Rc<BlockStatement>,

    /// Captured defining environment
    pub env: Environment,
}

impl FunctionValue {
    /// Close a function literal over `env`.
    pub fn new(literal: &FunctionLiteral, env: Environment) -> Self {
        Self {
            parameters: Rc::clone(&literal.parameters),
            body: Rc::clone(&literal.body),
            env,
        }
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

// The captured environment may contain this very function, so it is
// left out of the debug output.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}

/// A built-in native function.
///
/// These are Rust functions exposed to the interpreter. A builtin reports
/// a fault either by returning `Err(message)` or an `Error` value.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Function name (for display/debugging)
    pub name: String,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl BuiltinFn {
    /// Wrap a native function.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + 'static,
    {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// Invoke the native function.
    pub fn call(&self, args: &[Value]) -> Result<Value, String> {
        (self.func)(args)
    }
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}
