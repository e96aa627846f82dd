//! Function call evaluation

use crate::ast::Expression;
use crate::eval::control::ControlFlow;
use crate::{BuiltinFn, Environment, EvalContext, EvalError, FunctionValue, Value};

use super::stmt::eval_block;
use super::Evaluate;

/// Evaluate a call: the callee, then the arguments left to right.
///
/// # Errors
///
/// Returns the first error from the callee or an argument (later
/// arguments are not evaluated), or the error raised by the call itself.
pub fn eval_call(
    function: &Expression,
    arguments: &[Expression],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let callee = function.eval(env, ctx)?;
    let args = eval_expressions(arguments, env, ctx)?;
    apply_function(&callee, args, ctx)
}

/// Evaluate expressions in order, stopping at the first error.
///
/// # Errors
///
/// Returns the first error raised.
pub fn eval_expressions(
    exprs: &[Expression],
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Vec<Value>, EvalError> {
    exprs.iter().map(|expr| expr.eval(env, ctx)).collect()
}

/// Apply a callable value to evaluated arguments.
///
/// # Errors
///
/// Returns `NotAFunction` if the value is not callable.
/// Returns `ArityMismatch` if the argument count doesn't match.
#[tracing::instrument(level = "debug", skip_all, fields(callee = %callee.kind(), argc = args.len()))]
pub fn apply_function(
    callee: &Value,
    args: Vec<Value>,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    match callee {
        Value::Function(f) => call_function(f, args, ctx),
        Value::Builtin(f) => call_builtin(f, &args),
        other => Err(EvalError::NotAFunction { kind: other.kind() }),
    }
}

/// Call a user-defined function.
fn call_function(
    func: &FunctionValue,
    args: Vec<Value>,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    // Check arity
    if args.len() != func.arity() {
        return Err(EvalError::ArityMismatch {
            expected: func.arity(),
            got: args.len(),
        });
    }

    // Track call depth (stack overflow protection)
    let _guard = ctx.enter_call()?;

    // The body sees the captured scope, never the caller's
    let call_env = Environment::new_enclosed(&func.env);
    for (param, arg) in func.parameters.iter().zip(args) {
        call_env.set(param.as_str(), arg);
    }

    // Handle return control flow
    match eval_block(&func.body, &call_env, ctx) {
        Ok(value) => Ok(value),
        Err(EvalError::ControlFlow(ControlFlow::Return { value })) => Ok(value),
        Err(e) => Err(e),
    }
}

/// Call a built-in function.
fn call_builtin(func: &BuiltinFn, args: &[Value]) -> Result<Value, EvalError> {
    let fault = |message: String| EvalError::Builtin {
        name: func.name.clone(),
        message,
    };

    match func.call(args) {
        Ok(Value::Error(message)) => Err(fault(message.to_string())),
        Ok(value) => Ok(value),
        Err(message) => Err(fault(message)),
    }
}
