//! Evaluation sessions
//!
//! An [`Evaluator`] owns a long-lived top-level environment, so that
//! bindings made by one input are visible to the next, the way a REPL
//! accumulates state.

use std::fmt;

use crate::ast::Program;
use crate::eval::eval_program;
use crate::frontend::{LanguageFrontend, ParseError};
use crate::frontends::RustFrontend;
use crate::{Environment, EvalContext, EvalError, Value};

/// A persistent evaluation session.
///
/// # Example
///
/// ```
/// use quickbeam::{Evaluator, Value};
///
/// let mut session = Evaluator::new();
/// session.run("let adder = |x| { |y| { x + y } };").unwrap();
/// session.run("let add5 = adder(5);").unwrap();
/// assert_eq!(session.run("add5(3)").unwrap(), Value::Integer(8));
/// ```
pub struct Evaluator {
    env: Environment,
    ctx: EvalContext,
    frontend: Box<dyn LanguageFrontend>,
}

impl Evaluator {
    /// Create a session with a fresh global scope, default settings and
    /// the Rust-syntax frontend.
    pub fn new() -> Self {
        Self::with_context(EvalContext::default())
    }

    /// Create a session with custom evaluation settings.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            ctx,
            frontend: Box::new(RustFrontend::new()),
        }
    }

    /// Replace the frontend used by [`Evaluator::run`] (builder style).
    pub fn with_frontend(mut self, frontend: impl LanguageFrontend + 'static) -> Self {
        self.frontend = Box::new(frontend);
        self
    }

    /// The session's global scope.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// The session's evaluation settings.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// The frontend used by [`Evaluator::run`].
    pub fn frontend(&self) -> &dyn LanguageFrontend {
        self.frontend.as_ref()
    }

    /// Evaluate a program, turning any fault into an `Error` value.
    pub fn eval(&mut self, program: &Program) -> Value {
        self.try_eval(program).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "program evaluation faulted");
            err.into_value()
        })
    }

    /// Evaluate a program, keeping faults as errors.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped the program.
    pub fn try_eval(&mut self, program: &Program) -> Result<Value, EvalError> {
        let result = eval_program(program, &self.env, &self.ctx);
        // Clear only once the input has seen the interrupt
        self.ctx.reset_interrupt();
        result
    }

    /// Parse `source` with the session's frontend and evaluate it.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source cannot be parsed. Evaluation
    /// faults are not errors here; they come back as `Error` values.
    pub fn run(&mut self, source: &str) -> Result<Value, ParseError> {
        let program = self.frontend.parse(source)?;
        Ok(self.eval(&program))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("env", &self.env)
            .field("ctx", &self.ctx)
            .field("frontend", &self.frontend.name())
            .finish()
    }
}
