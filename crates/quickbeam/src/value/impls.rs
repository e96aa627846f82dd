//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::rc::Rc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Rc::from(s.as_ref()))
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(items))
    }

    /// Create a hash value from already-keyed entries
    pub fn hash(pairs: HashPairs) -> Self {
        Value::Hash(Rc::new(pairs))
    }

    /// Create a hash value from key/value pairs.
    ///
    /// Later duplicates overwrite earlier ones. Returns `None` if a key
    /// is not hashable.
    pub fn hash_from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Option<Self> {
        let mut map = HashPairs::new();
        for (key, value) in pairs {
            let hash_key = key.hash_key()?;
            map.insert(hash_key, HashPair { key, value });
        }
        Some(Value::hash(map))
    }

    /// Create an error value carrying `message`
    pub fn error(message: impl AsRef<str>) -> Self {
        Value::Error(Rc::from(message.as_ref()))
    }

    /// The canonical boolean for `b`
    pub fn from_bool(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Kind and Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Hash(_) => ValueKind::Hash,
            Value::Function(_) => ValueKind::Function,
            Value::Builtin(_) => ValueKind::Builtin,
            Value::Error(_) => ValueKind::Error,
        }
    }

    /// Truthiness: only `null` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if value is callable (function or builtin)
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Builtin(_))
    }

    /// Identity comparison used by `==`/`!=` outside the integer and
    /// string cases.
    ///
    /// Booleans and null compare by state (each state has one canonical
    /// value). Integers and strings compare by content. Every other kind
    /// is identical only to a clone of the same allocation, and values of
    /// different kinds are never identical.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => Rc::ptr_eq(&a.func, &b.func),
            (Value::Error(a), Value::Error(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Extract array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Look up `key` in a hash value
    pub fn hash_get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Hash(pairs) => key
                .hash_key()
                .and_then(|k| pairs.get(&k))
                .map(|pair| &pair.value),
            _ => None,
        }
    }

    /// Extract the message of an error value
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Value::Error(message) => Some(&**message),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

/// Structural equality, for hosts and tests.
///
/// This is not the language's `==`: arrays and hashes compare by
/// contents here, while functions and builtins still compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => self.identical(other),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
