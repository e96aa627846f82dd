//! Function literal evaluation

use std::rc::Rc;

use crate::ast::FunctionLiteral;
use crate::{Environment, EvalContext, EvalError, FunctionValue, Value};

use super::Evaluate;

/// A function literal evaluates to a closure over the current
/// environment. Nothing in the body runs yet.
impl Evaluate for FunctionLiteral {
    fn eval(&self, env: &Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        Ok(Value::Function(Rc::new(FunctionValue::new(self, env.clone()))))
    }
}
