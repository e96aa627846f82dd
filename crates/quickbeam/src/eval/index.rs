//! Index expression evaluation

use crate::ast::Expression;
use crate::{Environment, EvalContext, EvalError, Value, NULL};

use super::Evaluate;

/// Evaluate `left[index]`, left first.
///
/// # Errors
///
/// Returns operand errors, or the fault raised by [`eval_index`].
pub fn eval_index_expr(
    left: &Expression,
    index: &Expression,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let left = left.eval(env, ctx)?;
    let index = index.eval(env, ctx)?;
    eval_index(&left, &index)
}

/// Index into an evaluated value.
///
/// Out-of-bounds array positions (negative included) and missing hash
/// keys are not faults; they yield null.
///
/// # Errors
///
/// Returns `UnusableHashKey` if a hash is indexed by a value without a
/// hash key, and `IndexNotSupported` if the base value cannot be indexed.
pub fn eval_index(left: &Value, index: &Value) -> Result<Value, EvalError> {
    match (left, index) {
        (Value::Array(items), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(NULL)),

        (Value::Hash(pairs), key) => {
            let hash_key = key
                .hash_key()
                .ok_or(EvalError::UnusableHashKey { kind: key.kind() })?;
            Ok(pairs
                .get(&hash_key)
                .map(|pair| pair.value.clone())
                .unwrap_or(NULL))
        }

        _ => Err(EvalError::IndexNotSupported { kind: left.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::test_support::run;

    #[test]
    fn test_array_index() {
        assert_eq!(run("[1, 2, 3][0]"), Value::Integer(1));
        assert_eq!(run("[1, 2, 3][1 + 1]"), Value::Integer(3));
        assert_eq!(run("let i = 0; [1][i]"), Value::Integer(1));
        assert_eq!(
            run("let a = [1, 2, 3]; a[0] + a[1] + a[2]"),
            Value::Integer(6)
        );
    }

    #[test]
    fn test_array_out_of_bounds_is_null() {
        assert_eq!(run("[1, 2, 3][3]"), NULL);
        assert_eq!(run("[1, 2, 3][5]"), NULL);
        assert_eq!(run("[1, 2, 3][-1]"), NULL);
    }

    #[test]
    fn test_hash_index() {
        assert_eq!(run(r#"(hash!{"a" => 1})["a"]"#), Value::Integer(1));
        assert_eq!(run(r#"(hash!{"a" => 1})["b"]"#), NULL);
        assert_eq!(run(r#"let key = "foo"; (hash!{"foo" => 5})[key]"#), Value::Integer(5));
        assert_eq!(run("let h = hash!{5 => 5}; h[5]"), Value::Integer(5));
        assert_eq!(run("let h = hash!{true => 5}; h[true]"), Value::Integer(5));
        assert_eq!(run("let h = hash!{}; h[0]"), NULL);
    }

    #[test]
    fn test_unusable_hash_key() {
        let hash = Value::hash(Default::default());
        let key = Value::array(vec![]);
        assert_eq!(
            eval_index(&hash, &key).unwrap_err().to_string(),
            "unusable as hash key: ARRAY"
        );
    }

    #[test]
    fn test_index_not_supported() {
        assert_eq!(
            eval_index(&Value::Integer(1), &Value::Integer(0))
                .unwrap_err()
                .to_string(),
            "index operator not supported: INTEGER"
        );
        // Arrays need an integer index
        assert_eq!(
            eval_index(&Value::array(vec![]), &Value::string("a"))
                .unwrap_err()
                .to_string(),
            "index operator not supported: ARRAY"
        );
    }
}
