//! Error types for evaluation

use thiserror::Error;

use crate::ast::{InfixOperator, PrefixOperator};
use crate::eval::ControlFlow;
use crate::value::{Value, ValueKind};

/// Everything that stops normal evaluation.
///
/// Language faults carry the exact message a user sees. `ControlFlow`
/// carries an in-flight `return` up to the nearest function call (or the
/// program boundary). `StackOverflow` and `Interrupted` are raised on
/// behalf of the host rather than by the program's semantics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Prefix operator not defined for the operand kind
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator
        operator: PrefixOperator,
        /// Operand kind
        operand: ValueKind,
    },

    /// Infix operator not defined for two operands of the same kind
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Left operand kind
        left: ValueKind,
        /// The operator
        operator: InfixOperator,
        /// Right operand kind
        right: ValueKind,
    },

    /// Infix operands of two different kinds
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Left operand kind
        left: ValueKind,
        /// The operator
        operator: InfixOperator,
        /// Right operand kind
        right: ValueKind,
    },

    /// Name absent from the scope chain and the builtins
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name
        name: String,
    },

    /// Call target is neither a function nor a builtin
    #[error("not a function: {kind}")]
    NotAFunction {
        /// Kind of the callee
        kind: ValueKind,
    },

    /// A value without a hash key used as a hash key or index
    #[error("unusable as hash key: {kind}")]
    UnusableHashKey {
        /// Kind of the offending key
        kind: ValueKind,
    },

    /// Index expression on a value that cannot be indexed
    #[error("index operator not supported: {kind}")]
    IndexNotSupported {
        /// Kind of the indexed value
        kind: ValueKind,
    },

    /// Function called with the wrong number of arguments
    #[error("wrong number of arguments. got={got}, want={expected}")]
    ArityMismatch {
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },

    /// Integer division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Fault reported by a builtin; the message is shown verbatim
    #[error("{message}")]
    Builtin {
        /// Builtin name
        name: String,
        /// Message reported by the builtin
        message: String,
    },

    /// Call depth exceeded the configured limit
    #[error("stack overflow: call depth {depth} exceeds limit {max}")]
    StackOverflow {
        /// Depth reached
        depth: usize,
        /// Configured limit
        max: usize,
    },

    /// Evaluation was interrupted by the host
    #[error("evaluation interrupted")]
    Interrupted,

    /// In-flight control flow (not a fault)
    #[error("unhandled control flow: {0:?}")]
    ControlFlow(ControlFlow),
}

impl EvalError {
    /// Whether this is a fault rather than an in-flight `return`.
    pub fn is_fault(&self) -> bool {
        !matches!(self, EvalError::ControlFlow(_))
    }

    /// Whether the host, not the program, caused this error.
    pub fn is_host_fault(&self) -> bool {
        matches!(
            self,
            EvalError::StackOverflow { .. } | EvalError::Interrupted
        )
    }

    /// Collapse into the visible result of a program.
    ///
    /// A pending `return` yields its value; any fault becomes an
    /// `Error` value carrying the fault's message.
    pub fn into_value(self) -> Value {
        match self {
            EvalError::ControlFlow(ControlFlow::Return { value }) => value,
            fault => Value::error(fault.to_string()),
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EvalError::UnknownPrefixOperator {
            operator: PrefixOperator::Minus,
            operand: ValueKind::Boolean,
        };
        assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");

        let err = EvalError::TypeMismatch {
            left: ValueKind::Integer,
            operator: InfixOperator::Plus,
            right: ValueKind::Boolean,
        };
        assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");

        let err = EvalError::ArityMismatch {
            expected: 2,
            got: 1,
        };
        assert_eq!(err.to_string(), "wrong number of arguments. got=1, want=2");
    }

    #[test]
    fn test_into_value() {
        let ret = EvalError::ControlFlow(ControlFlow::return_value(Value::Integer(3)));
        assert!(!ret.is_fault());
        assert_eq!(ret.into_value(), Value::Integer(3));

        let err = EvalError::IdentifierNotFound {
            name: "foo".to_string(),
        };
        assert_eq!(err.into_value(), Value::error("identifier not found: foo"));
    }

    #[test]
    fn test_host_faults() {
        assert!(EvalError::Interrupted.is_host_fault());
        assert!(!EvalError::DivisionByZero.is_host_fault());
    }
}
