//! Value representation for runtime values

mod callable;
mod display;
mod hashable;
mod impls;

pub use callable::{BuiltinFn, BuiltinFnPtr, FunctionValue};
pub use hashable::{HashKey, HashPair, HashPairs};

use std::fmt;
use std::rc::Rc;

/// Runtime value produced by the evaluator.
///
/// The set of kinds is closed. Compound kinds are `Rc`-wrapped so that
/// cloning a value never copies its contents; identity comparisons
/// (see [`Value::identical`]) rely on that sharing.
///
/// Early returns are not a value kind: they travel as
/// [`crate::ControlFlow::Return`] inside the error channel of the
/// evaluator's `Result`. `Error` only appears as the visible outcome of a
/// program (or as a builtin's way of reporting a fault).
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// `true` or `false`
    Boolean(bool),

    /// Immutable text
    String(Rc<str>),

    /// The single absence value
    Null,

    /// Ordered sequence of values
    Array(Rc<Vec<Value>>),

    /// Key/value mapping in insertion order
    Hash(Rc<HashPairs>),

    /// User-defined function with its captured environment
    Function(Rc<FunctionValue>),

    /// Native callable
    Builtin(BuiltinFn),

    /// A runtime fault rendered as a message
    Error(Rc<str>),
}

/// The canonical `true` value.
pub const TRUE: Value = Value::Boolean(true);

/// The canonical `false` value.
pub const FALSE: Value = Value::Boolean(false);

/// The canonical null value.
pub const NULL: Value = Value::Null;

/// Kind tag of a [`Value`], used for dispatch and in fault messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer
    Integer,
    /// Boolean
    Boolean,
    /// String
    String,
    /// Null
    Null,
    /// Array
    Array,
    /// Hash
    Hash,
    /// Function
    Function,
    /// Builtin
    Builtin,
    /// Error
    Error,
}

impl ValueKind {
    /// Upper-case tag as shown in fault messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "INTEGER",
            ValueKind::Boolean => "BOOLEAN",
            ValueKind::String => "STRING",
            ValueKind::Null => "NULL",
            ValueKind::Array => "ARRAY",
            ValueKind::Hash => "HASH",
            ValueKind::Function => "FUNCTION",
            ValueKind::Builtin => "BUILTIN",
            ValueKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
