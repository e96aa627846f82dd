//! Prefix operator evaluation

use crate::ast::PrefixOperator;
use crate::{EvalError, Value};

/// Apply a prefix operator to an evaluated operand.
///
/// # Errors
///
/// Returns `UnknownPrefixOperator` when `-` is applied to a non-integer.
pub fn eval_prefix(operator: PrefixOperator, operand: Value) -> Result<Value, EvalError> {
    match operator {
        PrefixOperator::Bang => Ok(eval_bang(&operand)),
        PrefixOperator::Minus => eval_minus(operand),
    }
}

/// `!x` never faults and always yields a canonical boolean.
fn eval_bang(operand: &Value) -> Value {
    Value::from_bool(!operand.is_truthy())
}

fn eval_minus(operand: Value) -> Result<Value, EvalError> {
    match operand {
        Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
        other => Err(EvalError::UnknownPrefixOperator {
            operator: PrefixOperator::Minus,
            operand: other.kind(),
        }),
    }
}
