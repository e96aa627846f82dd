//! Hash keys derived from values

use std::rc::Rc;

use indexmap::IndexMap;

use super::{Value, ValueKind};

/// Key under which a Hash stores an entry.
///
/// Only integers, booleans and strings derive a key. Two values produce
/// equal keys iff they have the same kind and the same content, so
/// `"a"` built twice lands on the same entry while `1` and `"1"` do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// Key of an integer
    Integer(i64),
    /// Key of a boolean
    Boolean(bool),
    /// Key of a string
    String(Rc<str>),
}

impl HashKey {
    /// Kind of the value this key was derived from.
    pub fn kind(&self) -> ValueKind {
        match self {
            HashKey::Integer(_) => ValueKind::Integer,
            HashKey::Boolean(_) => ValueKind::Boolean,
            HashKey::String(_) => ValueKind::String,
        }
    }
}

/// An entry of a Hash: the original key value and the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as it was written
    pub key: Value,

    /// The stored value
    pub value: Value,
}

/// Contents of a Hash value.
pub type HashPairs = IndexMap<HashKey, HashPair>;

impl Value {
    /// Derive the hash key of this value, if it has one.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey::Integer(*n)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String(Rc::clone(s))),
            _ => None,
        }
    }

    /// Check if a value can be used as a hash key
    pub fn is_hashable(&self) -> bool {
        matches!(
            self,
            Value::Integer(_) | Value::Boolean(_) | Value::String(_)
        )
    }
}
