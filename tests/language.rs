use std::fs;

use monkey::interpreter::{
    environment::Environment, evaluator::core::Evaluator, value::core::Value,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs a script in a fresh environment, returning its result and whatever
/// it wrote with `puts`.
fn run(src: &str) -> (Value, String) {
    let program = monkey::parse(src).unwrap_or_else(|e| panic!("Script failed to parse:\n{e}"));
    let mut evaluator = Evaluator::with_output(Vec::new());
    let value = evaluator.evaluate(&program, &Environment::new_shared());
    let output = String::from_utf8(evaluator.into_output()).expect("output is UTF-8");
    (value, output)
}

fn assert_value(src: &str, expected: &str) {
    let (value, _) = run(src);
    if let Value::Error(e) = &value {
        panic!("Script failed: {e}\n{src}");
    }
    assert_eq!(value.inspect(), expected, "{src}");
}

fn assert_failure(src: &str, message: &str) {
    match run(src).0 {
        Value::Error(e) => assert_eq!(e.to_string(), message, "{src}"),
        other => panic!("Script succeeded with {} but was expected to fail", other.inspect()),
    }
}

#[test]
fn scripts_produce_expected_output() {
    let mut count = 0;

    let is_script = |e: &walkdir::DirEntry| e.path().extension().is_some_and(|x| x == "monkey");
    let scripts = WalkDir::new("tests/scripts").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(is_script);

    for entry in scripts {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        let (value, mut output) = run(&source);
        output.push_str(&value.inspect());
        output.push('\n');

        count += 1;
        assert_eq!(output, expected, "script {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn end_to_end_scenarios() {
    assert_value("let x = 5; x + 3;", "8");
    assert_value("fn(x){ x * 2; }(10);", "20");
    assert_value("len([1,2,3])", "3");
    assert_failure("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_value("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
                 "5");
    assert_value("if (false) { 10 }", "null");
}

#[test]
fn bindings_persist_across_evaluations() {
    let env = Environment::new_shared();
    let mut evaluator = Evaluator::with_output(Vec::new());

    for (line, expected) in [("let a = 2;", "null"),
                             ("let double = fn(x) { x * a };", "null"),
                             ("let a = 10;", "null"),
                             ("double(4)", "40"),
                             ("double", "fn (x) { (x * a) }")]
    {
        let program = monkey::parse(line).unwrap();
        assert_eq!(evaluator.evaluate(&program, &env).inspect(), expected, "{line}");
    }
}

#[test]
fn parse_errors_prevent_evaluation() {
    let env = Environment::new_shared();
    let errors = monkey::run("let a = 1; let b 2; puts(a)", &env).unwrap_err();

    assert_eq!(errors.to_string(),
               "Error on line 1: expected next token to be =, got INT instead");
    assert_eq!(env.borrow().get("a"), None);
}

#[test]
fn closures_outlive_their_calls() {
    assert_value("let counter = fn(start) { fn() { start } };
                  let a = counter(1);
                  let b = counter(2);
                  let c = counter(3);
                  [a(), b(), c(), a()]",
                 "[1, 2, 3, 1]");
}

#[test]
fn errors_abort_enclosing_evaluation() {
    assert_failure("let f = fn() { [1, 2][\"x\"] }; puts(f()); 1",
                   "index operator not supported: ARRAY");
    assert_failure("let g = fn(x) { if (x) { missing } else { 1 } }; g(true) + 1",
                   "identifier not found: missing");
    assert_failure("{\"a\": 1}[[1]]", "unusable as hash key: ARRAY");
    assert_failure("let x = 1; x(2)", "not a function: INTEGER");
}

#[test]
fn puts_writes_display_forms() {
    let (value, output) = run(r#"puts("hello", 1 + 1, true, [1, "two"], {"k": "v"}, fn(a) { a })"#);
    assert_eq!(value, Value::Null);
    assert_eq!(output, "hello\n2\ntrue\n[1, two]\n{k:v}\nfn (a) { a }\n");
}

#[test]
fn hashes_round_trip_through_functions() {
    assert_value(r#"let people = [{"name": "Alice", "age": 24}, {"name": "Anna", "age": 28}];
                    let getName = fn(person) { person["name"] };
                    getName(people[0]) + " and " + getName(people[1])"#,
                 "Alice and Anna");
}
