//! Hash literal evaluation

use crate::ast::Expression;
use crate::{Environment, EvalContext, EvalError, HashPair, HashPairs, Value};

use super::Evaluate;

/// Evaluate a hash literal pair by pair, in source order.
///
/// Each key is evaluated and checked before its value is evaluated. A
/// later duplicate key replaces the earlier value but keeps its position.
///
/// # Errors
///
/// Returns the first error from a key or value, or `UnusableHashKey`.
pub fn eval_hash(
    pairs: &[(Expression, Expression)],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let mut entries = HashPairs::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = key_expr.eval(env, ctx)?;
        let hash_key = key
            .hash_key()
            .ok_or(EvalError::UnusableHashKey { kind: key.kind() })?;
        let value = value_expr.eval(env, ctx)?;

        entries.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::hash(entries))
}
