//! Control flow mechanism for early return

use crate::Value;

/// Control flow signal for non-local jumps.
///
/// When `return` is evaluated, it doesn't produce a normal
/// `Ok(Value)`. Instead, it yields an `Err(EvalError::ControlFlow(...))`
/// that passes unchanged through every enclosing block until the function
/// call that applied the body unwraps it, or the program boundary does.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    /// Return from a function with a value.
    Return {
        /// Value to return from the function
        value: Value,
    },
}

impl ControlFlow {
    /// Create a return.
    pub fn return_value(value: Value) -> Self {
        ControlFlow::Return { value }
    }

    /// The value being carried.
    pub fn into_value(self) -> Value {
        match self {
            ControlFlow::Return { value } => value,
        }
    }
}
