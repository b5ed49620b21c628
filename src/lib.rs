//! # monkey
//!
//! monkey is an interpreter for the Monkey programming language written in
//! Rust. It tokenizes, parses and evaluates programs with integers, booleans,
//! strings, arrays, hashes, first-class functions and closures.
//!
//! ```
//! use monkey::interpreter::{environment::Environment, value::core::Value};
//!
//! let env = Environment::new_shared();
//! monkey::run("let newAdder = fn(x) { fn(y) { x + y } };", &env).unwrap();
//!
//! let result = monkey::run("let addTwo = newAdder(2); addTwo(3);", &env).unwrap();
//! assert_eq!(result, Value::Integer(5));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseErrors,
    interpreter::{
        environment::Env, evaluator::core::Evaluator, lexer::Lexer, parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Renders every node to a canonical, fully parenthesized text form.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Parse errors are accumulated and reported together; runtime errors travel
/// as ordinary values.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and environments to provide a complete runtime for source
/// code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe integer conversion.
pub mod util;

/// Parses source text into a program.
///
/// # Errors
/// Returns every recorded parse error as one [`ParseErrors`] failure. No
/// program is returned alongside errors.
///
/// # Examples
/// ```
/// let program = monkey::parse("let x = 1 * 2 + 3;").unwrap();
/// assert_eq!(program.to_string(), "let x = ((1 * 2) + 3);");
///
/// let errors = monkey::parse("let = 1;").unwrap_err();
/// assert_eq!(errors.errors().len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    Parser::new(Lexer::new(source)).parse()
}

/// Evaluates a program against `env`, writing `puts` output to standard
/// output.
///
/// Bindings made by the program stay in `env`, so successive calls with the
/// same environment see each other's definitions.
#[must_use]
pub fn evaluate(program: &Program, env: &Env) -> Value {
    Evaluator::new().evaluate(program, env)
}

/// Parses and evaluates source text against `env`.
///
/// A runtime failure is not an `Err`: it comes back as
/// [`Value::Error`].
///
/// # Errors
/// Returns the parse errors when the source is malformed; nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// use monkey::interpreter::environment::Environment;
///
/// let env = Environment::new_shared();
/// let result = monkey::run("5 + true;", &env).unwrap();
/// assert_eq!(result.inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
///
/// assert!(monkey::run("let x 5;", &env).is_err());
/// ```
pub fn run(source: &str, env: &Env) -> Result<Value, ParseErrors> {
    let program = parse(source)?;
    Ok(evaluate(&program, env))
}
