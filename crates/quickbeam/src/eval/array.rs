//! Array literal evaluation

use crate::ast::Expression;
use crate::{Environment, EvalContext, EvalError, Value};

use super::call::eval_expressions;

/// Evaluate an array literal, left to right.
///
/// # Errors
///
/// Returns the first element error; later elements are not evaluated.
pub fn eval_array(
    elements: &[Expression],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let values = eval_expressions(elements, env, ctx)?;
    Ok(Value::array(values))
}
