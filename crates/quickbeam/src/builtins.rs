//! Standard builtins and the registry that resolves them

use std::fmt;

use indexmap::IndexMap;

use crate::value::{BuiltinFn, Value, NULL};

/// Named registry of builtin functions.
///
/// The evaluator consults it only after a name is not found in any
/// scope, so user bindings always shadow builtins.
#[derive(Clone, Default)]
pub struct Builtins {
    table: IndexMap<String, BuiltinFn>,
}

impl Builtins {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard builtins.
    pub fn standard() -> Self {
        let mut builtins = Self::new();
        builtins.load_standard();
        builtins
    }

    /// Load the standard builtins into this registry.
    pub fn load_standard(&mut self) {
        // Collections
        self.register(BuiltinFn::new("len", builtin_len));
        self.register(BuiltinFn::new("first", builtin_first));
        self.register(BuiltinFn::new("last", builtin_last));
        self.register(BuiltinFn::new("rest", builtin_rest));
        self.register(BuiltinFn::new("push", builtin_push));

        // Printing
        self.register(BuiltinFn::new("puts", builtin_puts));
    }

    /// Register a builtin, replacing any builtin with the same name.
    pub fn register(&mut self, builtin: BuiltinFn) {
        self.table.insert(builtin.name.clone(), builtin);
    }

    /// Resolve `name` to a builtin value.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.table.get(name).cloned().map(Value::Builtin)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl fmt::Debug for Builtins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Function Implementations
// ═══════════════════════════════════════════════════════════════════════

fn expect_args(args: &[Value], want: usize) -> Result<(), String> {
    if args.len() != want {
        return Err(format!(
            "wrong number of arguments. got={}, want={}",
            args.len(),
            want
        ));
    }
    Ok(())
}

fn expect_array<'a>(name: &str, value: &'a Value) -> Result<&'a [Value], String> {
    value
        .as_array()
        .ok_or_else(|| format!("argument to `{}` must be ARRAY, got {}", name, value.kind()))
}

fn builtin_len(args: &[Value]) -> Result<Value, String> {
    expect_args(args, 1)?;

    match &args[0] {
        Value::String(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(items) => Ok(Value::Integer(items.len() as i64)),
        other => Err(format!(
            "argument to `len` not supported, got {}",
            other.kind()
        )),
    }
}

fn builtin_first(args: &[Value]) -> Result<Value, String> {
    expect_args(args, 1)?;
    let items = expect_array("first", &args[0])?;
    Ok(items.first().cloned().unwrap_or(NULL))
}

fn builtin_last(args: &[Value]) -> Result<Value, String> {
    expect_args(args, 1)?;
    let items = expect_array("last", &args[0])?;
    Ok(items.last().cloned().unwrap_or(NULL))
}

fn builtin_rest(args: &[Value]) -> Result<Value, String> {
    expect_args(args, 1)?;
    let items = expect_array("rest", &args[0])?;
    match items.split_first() {
        Some((_, rest)) => Ok(Value::array(rest.to_vec())),
        None => Ok(NULL),
    }
}

fn builtin_push(args: &[Value]) -> Result<Value, String> {
    expect_args(args, 2)?;
    let items = expect_array("push", &args[0])?;

    let mut pushed = Vec::with_capacity(items.len() + 1);
    pushed.extend_from_slice(items);
    pushed.push(args[1].clone());
    Ok(Value::array(pushed))
}

fn builtin_puts(args: &[Value]) -> Result<Value, String> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(NULL)
}
