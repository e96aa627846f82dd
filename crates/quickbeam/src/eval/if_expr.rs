//! If expression evaluation

use crate::ast::{BlockStatement, Expression};
use crate::{Environment, EvalContext, EvalError, Value, NULL};

use super::stmt::eval_block;
use super::Evaluate;

/// Evaluate a conditional.
///
/// The chosen branch runs in the current environment. Without an
/// `else`, a falsy condition yields null.
///
/// # Errors
///
/// Returns errors from the condition or the chosen branch.
pub fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let condition = condition.eval(env, ctx)?;

    if condition.is_truthy() {
        eval_block(consequence, env, ctx)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env, ctx)
    } else {
        Ok(NULL)
    }
}
