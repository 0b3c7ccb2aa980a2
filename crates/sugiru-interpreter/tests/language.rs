//! End-to-end language tests: source → parser → evaluator.

use sugiru_interpreter::{FALSE, Interpreter, NULL, RuntimeError, TRUE, Value, evaluate};

/// Parses and evaluates `source`, failing the test on parse errors.
fn run(source: &str) -> Result<Option<Value>, RuntimeError> {
    let (program, errors) = sugiru_syntax::parse(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    evaluate(&program)
}

fn value_of(source: &str) -> Value {
    match run(source) {
        Ok(Some(value)) => value,
        other => panic!("expected a value for {source:?}, got {other:?}"),
    }
}

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(value_of("5 + 5 * 2"), Value::Integer(15));
}

#[test]
fn test_bang_yields_canonical_false() {
    assert_eq!(value_of("!true"), FALSE);
    assert_eq!(value_of("!5"), FALSE);
    assert_eq!(value_of("!false"), TRUE);
}

#[test]
fn test_minus_on_boolean_is_null() {
    assert_eq!(value_of("-true"), NULL);
}

#[test]
fn test_program_value_is_last_statement() {
    assert_eq!(value_of("1; 2; 3"), Value::Integer(3));
    assert_eq!(run("1; let x = 2;"), Ok(None));
}

#[test]
fn test_higher_order_functions() {
    let source = r"
        let twice = fn(f, x) { f(f(x)) };
        let inc = fn(n) { n + 1 };
        twice(inc, 40);
    ";
    assert_eq!(value_of(source), Value::Integer(42));
}

#[test]
fn test_counter_closures_are_independent() {
    let source = r"
        let make = fn(base) { fn(step) { base + step } };
        let ten = make(10);
        let hundred = make(100);
        ten(1) + hundred(1);
    ";
    assert_eq!(value_of(source), Value::Integer(112));
}

#[test]
fn test_closure_sees_later_global_bindings() {
    let source = r"
        let show = fn() { late };
        let late = 7;
        show();
    ";
    assert_eq!(value_of(source), Value::Integer(7));
}

#[test]
fn test_return_from_nested_blocks() {
    let source = r"
        let classify = fn(n) {
            if (n < 0) { return -1; }
            if (n == 0) { return 0; }
            1
        };
        classify(-5) + classify(0) * 10 + classify(9) * 100;
    ";
    assert_eq!(value_of(source), Value::Integer(99));
}

#[test]
fn test_return_inside_call_does_not_stop_caller() {
    let source = "let f = fn() { return 1; }; let a = f(); a + 1";
    assert_eq!(value_of(source), Value::Integer(2));
}

#[test]
fn test_recursive_factorial() {
    let source = r"
        let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } };
        fact(20);
    ";
    assert_eq!(value_of(source), Value::Integer(2_432_902_008_176_640_000));
}

#[test]
fn test_runtime_errors_are_reported() {
    assert_eq!(run("10 / (5 - 5)"), Err(RuntimeError::DivisionByZero));
    assert_eq!(
        run("undefined + 1"),
        Err(RuntimeError::UnknownIdentifier("undefined".to_string()))
    );
    assert_eq!(run("let x = 1; x(2)"), Err(RuntimeError::NotAFunction("INTEGER")));
    assert_eq!(
        run("let id = fn(x) { x }; id()"),
        Err(RuntimeError::ArityMismatch { expected: 1, found: 0 })
    );
}

#[test]
fn test_session_persists_bindings_across_programs() {
    let mut interpreter = Interpreter::new();
    let lines = [
        ("let base = 10;", None),
        ("let add = fn(x) { base + x };", None),
        ("add(5)", Some(Value::Integer(15))),
        ("let base = 20;", None),
        ("add(5)", Some(Value::Integer(25))),
    ];

    for (line, expected) in lines {
        let (program, errors) = sugiru_syntax::parse(line);
        assert!(errors.is_empty());
        assert_eq!(interpreter.eval_program(&program), Ok(expected), "line: {line}");
    }
}

#[test]
fn test_function_value_display() {
    let value = value_of("fn(a, b) { a * b }");
    assert_eq!(value.type_name(), "FUNCTION");
    assert_eq!(value.to_string(), "fn(a, b) (a * b)");
}
