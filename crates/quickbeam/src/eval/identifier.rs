//! Identifier resolution

use crate::{Environment, EvalContext, EvalError, Value};

/// Resolve a name through the scope chain, then the builtins.
///
/// # Errors
///
/// Returns `IdentifierNotFound` if neither knows the name.
pub fn eval_identifier(
    name: &str,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    env.get(name)
        .or_else(|| ctx.builtins.get(name))
        .ok_or_else(|| EvalError::IdentifierNotFound {
            name: name.to_string(),
        })
}
