//! # Quickbeam
//!
//! A tree-walking evaluator for a small dynamically-typed scripting
//! language with integers, booleans, strings, arrays, hashes, first-class
//! functions and closures.
//!
//! Quickbeam consumes an already-built syntax tree ([`ast::Program`]) and
//! computes a [`Value`] by walking it. Source text is turned into a tree
//! by a [`LanguageFrontend`]; the bundled [`frontends::RustFrontend`]
//! accepts a Rust-flavoured surface syntax parsed with `syn`.
//!
//! ## Architecture
//!
//! - **Value Model** ([`value`]): the closed set of runtime kinds, with
//!   display and hash-key contracts
//! - **Environment** ([`environment`]): shared, chained scopes that give
//!   closures their captured bindings
//! - **Evaluator** ([`eval`]): one [`Evaluate`] impl per node kind; faults
//!   and early returns travel in the `Err` channel as [`EvalError`]
//!
//! ## Example
//!
//! ```
//! use quickbeam::{Evaluator, Value};
//!
//! let mut session = Evaluator::new();
//! let result = session
//!     .run("let max = |a, b| { if a > b { a } else { b } }; max(3, 7)")
//!     .unwrap();
//! assert_eq!(result, Value::Integer(7));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod builtins;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod frontend;
pub mod frontends;
pub mod value;

// Re-export main types
pub use builtins::Builtins;
pub use context::{CallGuard, EvalContext};
pub use environment::Environment;
pub use error::{EvalError, Result};
pub use eval::{eval_block, eval_program, evaluate, ControlFlow, Evaluate};
pub use evaluator::Evaluator;
pub use frontend::{LanguageFrontend, ParseError, SourceLocation};
pub use value::{
    BuiltinFn, BuiltinFnPtr, FunctionValue, HashKey, HashPair, HashPairs, Value, ValueKind,
    FALSE, NULL, TRUE,
};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
