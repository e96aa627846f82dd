//! Builtin functions and host-registered callables

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use quickbeam::*;

fn eval(src: &str) -> Value {
    Evaluator::new().run(src).expect("parse failed")
}

fn ints(ns: &[i64]) -> Value {
    Value::array(ns.iter().copied().map(Value::Integer).collect())
}

#[test]
fn test_len() {
    let cases = [
        (r#"len("")"#, Value::Integer(0)),
        (r#"len("four")"#, Value::Integer(4)),
        (r#"len("hello world")"#, Value::Integer(11)),
        ("len([1, 2, 3])", Value::Integer(3)),
        ("len([])", Value::Integer(0)),
        (
            "len(1)",
            Value::error("argument to `len` not supported, got INTEGER"),
        ),
        (
            r#"len("one", "two")"#,
            Value::error("wrong number of arguments. got=2, want=1"),
        ),
    ];
    for (src, expected) in cases {
        assert_eq!(eval(src), expected, "source: {}", src);
    }
}

#[test]
fn test_array_builtins() {
    let cases = [
        ("first([1, 2, 3])", Value::Integer(1)),
        ("first([])", NULL),
        (
            "first(1)",
            Value::error("argument to `first` must be ARRAY, got INTEGER"),
        ),
        ("last([1, 2, 3])", Value::Integer(3)),
        ("last([])", NULL),
        (
            "last(1)",
            Value::error("argument to `last` must be ARRAY, got INTEGER"),
        ),
        ("rest([1, 2, 3])", ints(&[2, 3])),
        ("rest([1])", ints(&[])),
        ("rest([])", NULL),
        ("push([], 1)", ints(&[1])),
        (
            "push(1, 1)",
            Value::error("argument to `push` must be ARRAY, got INTEGER"),
        ),
    ];
    for (src, expected) in cases {
        assert_eq!(eval(src), expected, "source: {}", src);
    }
}

#[test]
fn test_push_does_not_modify_its_argument() {
    assert_eq!(
        eval("let a = [1]; let b = push(a, 2); [a, b]"),
        Value::array(vec![ints(&[1]), ints(&[1, 2])])
    );
}

#[test]
fn test_puts_returns_null() {
    assert_eq!(eval(r#"puts("hello", 1)"#), NULL);
}

#[test]
fn test_builtin_fault_stops_program() {
    assert_eq!(
        eval("let x = first(5); 10"),
        Value::error("argument to `first` must be ARRAY, got INTEGER")
    );
}

#[test]
fn test_builtins_are_first_class() {
    assert_eq!(
        eval("let apply = |f, x| { f(x) }; apply(len, [1, 2])"),
        Value::Integer(2)
    );
}

#[test]
fn test_host_registered_builtin() {
    let output = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&output);

    // A `puts` that writes to a buffer instead of stdout
    let mut builtins = Builtins::standard();
    builtins.register(BuiltinFn::new("puts", move |args| {
        let mut sink = sink.borrow_mut();
        sink.extend(args.iter().map(ToString::to_string));
        Ok(NULL)
    }));

    let mut session = Evaluator::with_context(EvalContext::default().with_builtins(builtins));
    session
        .run(r#"puts("hello", [1, 2]); puts(hash!{"k" => true})"#)
        .unwrap();

    assert_eq!(
        *output.borrow(),
        vec!["hello".to_string(), "[1, 2]".to_string(), "{k: true}".to_string()]
    );
}

#[test]
fn test_empty_registry_has_no_builtins() {
    let mut session = Evaluator::with_context(EvalContext::default().with_builtins(Builtins::new()));
    assert_eq!(
        session.run("len([])").unwrap(),
        Value::error("identifier not found: len")
    );
}

#[test]
fn test_builtin_error_value_is_a_fault() {
    let mut builtins = Builtins::new();
    builtins.register(BuiltinFn::new("fail", |_| Ok(Value::error("custom failure"))));

    let mut session = Evaluator::with_context(EvalContext::default().with_builtins(builtins));
    assert_eq!(
        session.run("[fail(), 1]").unwrap(),
        Value::error("custom failure")
    );
}
