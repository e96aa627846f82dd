//! Infix operation evaluation

use crate::ast::{Expression, InfixOperator};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

/// Evaluate both operands, left first, then apply the operator.
///
/// The right operand is never evaluated if the left one faults.
///
/// # Errors
///
/// Returns operand errors, or the operator's own fault.
pub fn eval_infix_expr(
    left: &Expression,
    operator: InfixOperator,
    right: &Expression,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let left = left.eval(env, ctx)?;
    let right = right.eval(env, ctx)?;
    eval_infix(operator, &left, &right)
}

/// Apply an infix operator to two evaluated operands.
///
/// Integers and strings get their own operator tables. Any other pairing
/// supports only `==` and `!=`, which compare by identity and never fault,
/// even across kinds.
///
/// # Errors
///
/// Returns `TypeMismatch` for other operators on operands of different
/// kinds, `UnknownInfixOperator` when the kind lacks the operator, and
/// `DivisionByZero` for integer division by zero.
pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r)
            .ok_or_else(|| unknown_operator(operator, left, right)),

        _ => match operator {
            InfixOperator::Eq => Ok(Value::from_bool(left.identical(right))),
            InfixOperator::NotEq => Ok(Value::from_bool(!left.identical(right))),
            _ if left.kind() != right.kind() => Err(EvalError::TypeMismatch {
                left: left.kind(),
                operator,
                right: right.kind(),
            }),
            _ => Err(unknown_operator(operator, left, right)),
        },
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Integer Operations
// ═══════════════════════════════════════════════════════════════════════

/// Arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_infix(operator: InfixOperator, l: i64, r: i64) -> Result<Value, EvalError> {
    let value = match operator {
        InfixOperator::Plus => Value::Integer(l.wrapping_add(r)),
        InfixOperator::Minus => Value::Integer(l.wrapping_sub(r)),
        InfixOperator::Asterisk => Value::Integer(l.wrapping_mul(r)),
        InfixOperator::Slash => {
            if r == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::Integer(l.wrapping_div(r))
        }
        InfixOperator::Lt => Value::from_bool(l < r),
        InfixOperator::Gt => Value::from_bool(l > r),
        InfixOperator::Eq => Value::from_bool(l == r),
        InfixOperator::NotEq => Value::from_bool(l != r),
    };
    Ok(value)
}

// ═══════════════════════════════════════════════════════════════════════
// String Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_string_infix(operator: InfixOperator, l: &str, r: &str) -> Option<Value> {
    match operator {
        InfixOperator::Plus => {
            let mut joined = String::with_capacity(l.len() + r.len());
            joined.push_str(l);
            joined.push_str(r);
            Some(Value::string(joined))
        }
        InfixOperator::Eq => Some(Value::from_bool(l == r)),
        InfixOperator::NotEq => Some(Value::from_bool(l != r)),
        _ => None,
    }
}

fn unknown_operator(operator: InfixOperator, left: &Value, right: &Value) -> EvalError {
    EvalError::UnknownInfixOperator {
        left: left.kind(),
        operator,
        right: right.kind(),
    }
}
