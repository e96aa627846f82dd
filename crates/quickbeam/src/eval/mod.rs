//! Expression evaluation

pub mod array;
pub mod binary;
pub mod call;
pub mod control;
pub mod function;
pub mod hash;
pub mod identifier;
pub mod if_expr;
pub mod index;
pub mod stmt;
pub mod unary;

use crate::ast::{Expression, Program};
use crate::{Environment, EvalContext, EvalError, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
/// `Ok` is a finished value; `Err` is either a fault or an in-flight
/// `return` ([`ControlFlow`]), and both short-circuit through `?` until
/// something handles them.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

/// Remaining stack below which evaluation switches to a fresh segment.
const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated on demand.
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

impl Evaluate for Expression {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Every level of user recursion passes through here, so the host
        // stack grows with it up to `max_call_depth`
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            eval_expression(self, env, ctx)
        })
    }
}

fn eval_expression(
    expr: &Expression,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    // Check for interruption before each expression
    if ctx.is_interrupted() {
        return Err(EvalError::Interrupted);
    }

    match expr {
        Expression::Integer(n) => Ok(Value::Integer(*n)),
        Expression::Boolean(b) => Ok(Value::from_bool(*b)),
        Expression::String(s) => Ok(Value::string(s)),
        Expression::Identifier(name) => identifier::eval_identifier(name, env, ctx),

        Expression::Prefix { operator, right } => {
            let operand = right.eval(env, ctx)?;
            unary::eval_prefix(*operator, operand)
        }
        Expression::Infix {
            left,
            operator,
            right,
        } => binary::eval_infix_expr(left, *operator, right, env, ctx),

        Expression::If {
            condition,
            consequence,
            alternative,
        } => if_expr::eval_if(condition, consequence, alternative.as_ref(), env, ctx),

        Expression::Function(literal) => literal.eval(env, ctx),
        Expression::Call {
            function,
            arguments,
        } => call::eval_call(function, arguments, env, ctx),

        Expression::Array(elements) => array::eval_array(elements, env, ctx),
        Expression::Index { left, index } => index::eval_index_expr(left, index, env, ctx),
        Expression::Hash(pairs) => hash::eval_hash(pairs, env, ctx),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Entry Point
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a program against `env` with a default context.
///
/// This is the host-facing entry point: the result is always a value.
/// A `return` at top level yields its value and a fault yields an
/// `Error` value carrying the fault's message.
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    let ctx = EvalContext::default();
    stmt::eval_program(program, env, &ctx).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "program evaluation faulted");
        err.into_value()
    })
}

// Re-export for use by other modules
pub use call::apply_function;
pub use control::ControlFlow;
pub use stmt::{eval_block, eval_program};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ast::Program;
    use crate::frontend::LanguageFrontend;
    use crate::frontends::RustFrontend;
    use crate::{evaluate, Environment, Value};

    pub(crate) fn parse(src: &str) -> Program {
        RustFrontend::new().parse(src).expect("parse failed")
    }

    /// Parse and evaluate `src` in a fresh environment.
    pub(crate) fn run(src: &str) -> Value {
        evaluate(&parse(src), &Environment::new())
    }
}
