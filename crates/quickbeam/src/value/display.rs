//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),

            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }

            Value::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            }

            Value::Function(func) => {
                write!(f, "fn({}) {{\n{}\n}}", func.parameters.join(", "), func.body)
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug quotes strings and keeps nested structure unambiguous
        match self {
            Value::String(s) => write!(f, "{:?}", s.as_ref()),

            Value::Array(items) => f.debug_list().entries(items.iter()).finish(),

            Value::Hash(pairs) => f
                .debug_map()
                .entries(pairs.values().map(|p| (&p.key, &p.value)))
                .finish(),

            Value::Function(func) => write!(f, "<fn({})>", func.parameters.join(", ")),
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name),
            Value::Error(message) => write!(f, "Error({:?})", message.as_ref()),

            _ => fmt::Display::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BlockStatement, Expression, FunctionLiteral, InfixOperator};
    use crate::Environment;

    #[test]
    fn test_display_primitives() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(TRUE.to_string(), "true");
        assert_eq!(NULL.to_string(), "null");
        assert_eq!(Value::string("hi").to_string(), "hi");
    }

    #[test]
    fn test_display_array_and_hash() {
        let arr = Value::array(vec![Value::Integer(1), Value::string("two")]);
        assert_eq!(arr.to_string(), "[1, two]");
        assert_eq!(format!("{:?}", arr), r#"[1, "two"]"#);

        let hash = Value::hash_from_pairs(vec![
            (Value::string("a"), Value::Integer(1)),
            (Value::Integer(2), FALSE),
        ])
        .unwrap();
        assert_eq!(hash.to_string(), "{a: 1, 2: false}");
    }

    #[test]
    fn test_display_function() {
        let body = BlockStatement::new(vec![Expression::infix(
            Expression::ident("x"),
            InfixOperator::Plus,
            Expression::Integer(2),
        )
        .into()]);
        let func = FunctionValue::new(&FunctionLiteral::new(["x"], body), Environment::new());
        let value = Value::Function(std::rc::Rc::new(func));
        assert_eq!(value.to_string(), "fn(x) {\n(x + 2)\n}");
        assert_eq!(format!("{:?}", value), "<fn(x)>");
    }

    #[test]
    fn test_display_error() {
        let err = Value::error("identifier not found: x");
        assert_eq!(err.to_string(), "ERROR: identifier not found: x");
    }
}
