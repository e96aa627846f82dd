//! Statement evaluation

use crate::ast::{BlockStatement, Program, Statement};
use crate::{Environment, EvalContext, EvalError, Value, NULL};

use super::control::ControlFlow;
use super::Evaluate;

impl Evaluate for Statement {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        match self {
            Statement::Expression(expr) => expr.eval(env, ctx),

            // Binding produces no meaningful result of its own
            Statement::Let { name, value } => {
                let value = value.eval(env, ctx)?;
                env.set(name.as_str(), value);
                Ok(NULL)
            }

            Statement::Return(expr) => {
                let value = expr.eval(env, ctx)?;
                Err(EvalError::ControlFlow(ControlFlow::return_value(value)))
            }
        }
    }
}

/// Evaluate a block in `env`.
///
/// Blocks do not open a scope; only function application does. A pending
/// `return` leaves the block untouched, as an `Err`, so that it reaches
/// the function call (or program) that owns it.
///
/// # Errors
///
/// Returns the first fault or `return` raised by a statement.
pub fn eval_block(
    block: &BlockStatement,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    eval_block_stmts(&block.statements, env, ctx)
}

/// Evaluate statements in order, yielding the last statement's value.
///
/// # Errors
///
/// Returns errors from statement evaluation.
pub fn eval_block_stmts(
    stmts: &[Statement],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let mut last_value = NULL;

    for stmt in stmts {
        // Check for interruption
        if ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        last_value = stmt.eval(env, ctx)?;
    }

    Ok(last_value)
}

/// Evaluate a top-level program.
///
/// Unlike a block, a `return` here is unwrapped: it ends the program with
/// its value. Faults are passed through as `Err`.
///
/// # Errors
///
/// Returns the first fault raised by the program.
pub fn eval_program(
    program: &Program,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let mut last_value = NULL;

    for (index, stmt) in program.statements.iter().enumerate() {
        if ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        tracing::trace!(index, statement = %stmt, "evaluating top-level statement");

        last_value = match stmt.eval(env, ctx) {
            Ok(value) => value,
            Err(EvalError::ControlFlow(flow)) => return Ok(flow.into_value()),
            Err(fault) => return Err(fault),
        };
    }

    Ok(last_value)
}
