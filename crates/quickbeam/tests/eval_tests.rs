//! End-to-end evaluation tests

use pretty_assertions::assert_eq;
use quickbeam::ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement};
use quickbeam::frontends::RustFrontend;
use quickbeam::*;

fn eval(src: &str) -> Value {
    let program = RustFrontend::new().parse(src).expect("parse failed");
    evaluate(&program, &Environment::new())
}

fn check_all(cases: &[(&str, Value)]) {
    for (src, expected) in cases {
        assert_eq!(&eval(src), expected, "source: {}", src);
    }
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

// ═══════════════════════════════════════════════════════════════════════
// Literals and Operators
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_integer_expressions() {
    check_all(&[
        ("5", int(5)),
        ("10", int(10)),
        ("-5", int(-5)),
        ("-10", int(-10)),
        ("5 + 5 + 5 + 5 - 10", int(10)),
        ("2 * 2 * 2 * 2 * 2", int(32)),
        ("-50 + 100 + -50", int(0)),
        ("5 * 2 + 10", int(20)),
        ("5 + 2 * 10", int(25)),
        ("20 + 2 * -10", int(0)),
        ("50 / 2 * 2 + 10", int(60)),
        ("2 * (5 + 10)", int(30)),
        ("3 * 3 * 3 + 10", int(37)),
        ("3 * (3 * 3) + 10", int(37)),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", int(50)),
    ]);
}

#[test]
fn test_boolean_expressions() {
    check_all(&[
        ("true", TRUE),
        ("false", FALSE),
        ("1 < 2", TRUE),
        ("1 > 2", FALSE),
        ("1 < 1", FALSE),
        ("1 > 1", FALSE),
        ("1 == 1", TRUE),
        ("1 != 1", FALSE),
        ("1 == 2", FALSE),
        ("1 != 2", TRUE),
        ("true == true", TRUE),
        ("false == false", TRUE),
        ("true == false", FALSE),
        ("true != false", TRUE),
        ("false != true", TRUE),
        ("(1 < 2) == true", TRUE),
        ("(1 < 2) == false", FALSE),
        ("(1 > 2) == true", FALSE),
        ("(1 > 2) == false", TRUE),
    ]);
}

#[test]
fn test_bang_operator() {
    check_all(&[
        ("!true", FALSE),
        ("!false", TRUE),
        ("!5", FALSE),
        ("!!true", TRUE),
        ("!!false", FALSE),
        ("!!5", TRUE),
    ]);
}

#[test]
fn test_string_expressions() {
    check_all(&[
        (r#""Hello World!""#, Value::string("Hello World!")),
        (r#""Hello" + " " + "World!""#, Value::string("Hello World!")),
        (r#""ab" == "ab""#, TRUE),
        (r#""ab" != "ab""#, FALSE),
        (r#""a" == "b""#, FALSE),
    ]);
}

#[test]
fn test_if_else_expressions() {
    check_all(&[
        ("if true { 10 }", int(10)),
        ("if false { 10 }", NULL),
        ("if 1 { 10 }", int(10)),
        ("if 1 < 2 { 10 }", int(10)),
        ("if 1 > 2 { 10 }", NULL),
        ("if 1 > 2 { 10 } else { 20 }", int(20)),
        ("if 1 < 2 { 10 } else { 20 }", int(10)),
    ]);
}

#[test]
fn test_return_statements() {
    check_all(&[
        ("return 10;", int(10)),
        ("return 10; 9;", int(10)),
        ("return 2 * 5; 9;", int(10)),
        ("9; return 2 * 5; 9;", int(10)),
        ("if 10 > 1 { if 10 > 1 { return 10; } return 1; }", int(10)),
        ("let f = |x| { return x; x + 10; }; f(10);", int(10)),
        (
            "let f = |x| { let result = x + 10; return result; return 10; }; f(10);",
            int(20),
        ),
    ]);
}

// ═══════════════════════════════════════════════════════════════════════
// Faults
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_error_handling() {
    check_all(&[
        ("5 + true;", Value::error("type mismatch: INTEGER + BOOLEAN")),
        ("5 + true; 5;", Value::error("type mismatch: INTEGER + BOOLEAN")),
        ("-true", Value::error("unknown operator: -BOOLEAN")),
        ("true + false;", Value::error("unknown operator: BOOLEAN + BOOLEAN")),
        (
            "5; true + false; 5",
            Value::error("unknown operator: BOOLEAN + BOOLEAN"),
        ),
        (
            "if 10 > 1 { true + false; }",
            Value::error("unknown operator: BOOLEAN + BOOLEAN"),
        ),
        (
            "if 10 > 1 { if 10 > 1 { return true + false; } return 1; }",
            Value::error("unknown operator: BOOLEAN + BOOLEAN"),
        ),
        ("foobar", Value::error("identifier not found: foobar")),
        (
            r#""Hello" - "World""#,
            Value::error("unknown operator: STRING - STRING"),
        ),
        (
            r#"let h = hash!{"name" => "Monkey"}; h[|x| { x }]"#,
            Value::error("unusable as hash key: FUNCTION"),
        ),
        ("1[0]", Value::error("index operator not supported: INTEGER")),
        ("1 / 0", Value::error("division by zero")),
        ("true(1)", Value::error("not a function: BOOLEAN")),
    ]);
}

#[test]
fn test_mismatched_equality_never_faults() {
    check_all(&[
        (r#"1 == "1""#, FALSE),
        (r#"1 != "1""#, TRUE),
        ("true == 1", FALSE),
        ("[1] == [1]", FALSE),
        ("let a = [1]; a == a", TRUE),
    ]);
}

// ═══════════════════════════════════════════════════════════════════════
// Bindings and Functions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_let_statements() {
    check_all(&[
        ("let a = 5; a;", int(5)),
        ("let a = 5 * 5; a;", int(25)),
        ("let a = 5; let b = a; b;", int(5)),
        ("let a = 5; let b = a; let c = a + b + 5; c;", int(15)),
        ("let a = 5;", NULL),
        ("", NULL),
    ]);
}

#[test]
fn test_function_object() {
    let value = eval("|x| { x + 2 }");
    let Value::Function(func) = &value else {
        panic!("expected function, got {:?}", value);
    };
    assert_eq!(&func.parameters[..], &["x".to_string()]);
    assert_eq!(func.body.to_string(), "(x + 2)");
    assert_eq!(value.to_string(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn test_function_application() {
    check_all(&[
        ("let identity = |x| { x }; identity(5);", int(5)),
        ("let identity = |x| { return x; }; identity(5);", int(5)),
        ("let double = |x| { x * 2 }; double(5);", int(10)),
        ("let add = |x, y| { x + y }; add(5, 5);", int(10)),
        ("let add = |x, y| { x + y }; add(5 + 5, add(5, 5));", int(20)),
        ("(|x| { x })(5)", int(5)),
    ]);
}

#[test]
fn test_enclosing_environments() {
    let src = "
        let first = 10;
        let second = 10;
        let third = 10;

        let ourFunction = |first| {
            let second = 20;
            first + second + third
        };

        ourFunction(20) + first + second
    ";
    assert_eq!(eval(src), int(70));
}

#[test]
fn test_closures() {
    let src = "
        let newAdder = |x| { |y| { x + y } };
        let addTwo = newAdder(2);
        addTwo(2);
    ";
    assert_eq!(eval(src), int(4));
}

#[test]
fn test_recursion() {
    let src = "
        let fib = |n| { if n < 2 { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15)
    ";
    assert_eq!(eval(src), int(610));
}

#[test]
fn test_higher_order_functions() {
    let src = "
        let map = |arr, f| {
            let iter = |arr, accumulated| {
                if len(arr) == 0 {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, [])
        };
        let double = |x| { x * 2 };
        map([1, 2, 3, 4], double)
    ";
    assert_eq!(eval(src), Value::array(vec![int(2), int(4), int(6), int(8)]));

    let src = "
        let reduce = |arr, initial, f| {
            let iter = |arr, result| {
                if len(arr) == 0 { result } else { iter(rest(arr), f(result, first(arr))) }
            };
            iter(arr, initial)
        };
        let sum = |arr| { reduce(arr, 0, |initial, el| { initial + el }) };
        sum([1, 2, 3, 4, 5])
    ";
    assert_eq!(eval(src), int(15));
}

// ═══════════════════════════════════════════════════════════════════════
// Arrays and Hashes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_array_literals() {
    assert_eq!(
        eval("[1, 2 * 2, 3 + 3]"),
        Value::array(vec![int(1), int(4), int(6)])
    );
}

#[test]
fn test_array_index_expressions() {
    check_all(&[
        ("[1, 2, 3][0]", int(1)),
        ("[1, 2, 3][1]", int(2)),
        ("[1, 2, 3][2]", int(3)),
        ("let i = 0; [1][i];", int(1)),
        ("[1, 2, 3][1 + 1];", int(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", int(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            int(6),
        ),
        ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", int(2)),
        ("[1, 2, 3][3]", NULL),
        ("[1, 2, 3][-1]", NULL),
    ]);
}

#[test]
fn test_hash_index_expressions() {
    check_all(&[
        (r#"let h = hash!{"foo" => 5}; h["foo"]"#, int(5)),
        (r#"let h = hash!{"foo" => 5}; h["bar"]"#, NULL),
        (r#"let key = "foo"; let h = hash!{"foo" => 5}; h[key]"#, int(5)),
        (r#"let h = hash!{}; h["foo"]"#, NULL),
        ("let h = hash!{5 => 5}; h[5]", int(5)),
        ("let h = hash!{true => 5}; h[true]", int(5)),
        ("let h = hash!{false => 5}; h[false]", int(5)),
    ]);
}

#[test]
fn test_nested_data() {
    let src = r#"
        let people = [
            hash!{"name" => "Alice", "age" => 24},
            hash!{"name" => "Anna", "age" => 28},
        ];
        let getName = |person| { person["name"] };
        getName(people[0]) + " and " + getName(people[1])
    "#;
    assert_eq!(eval(src), Value::string("Alice and Anna"));
}

// ═══════════════════════════════════════════════════════════════════════
// Hand-built Trees
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_hand_built_program() {
    // let double = fn(x) { x * 2 }; -double(21)
    let double = Expression::function(
        ["x"],
        BlockStatement::new(vec![Expression::infix(
            Expression::ident("x"),
            InfixOperator::Asterisk,
            Expression::Integer(2),
        )
        .into()]),
    );
    let program = Program::new(vec![
        Statement::let_("double", double),
        Expression::prefix(
            PrefixOperator::Minus,
            Expression::call(Expression::ident("double"), vec![Expression::Integer(21)]),
        )
        .into(),
    ]);

    assert_eq!(evaluate(&program, &Environment::new()), int(-42));
}

#[test]
fn test_top_level_environment_is_reused() {
    let env = Environment::new();
    let frontend = RustFrontend::new();

    let first = frontend.parse("let x = 20;").unwrap();
    let second = frontend.parse("x + 1").unwrap();

    assert_eq!(evaluate(&first, &env), NULL);
    assert_eq!(evaluate(&second, &env), int(21));
}
