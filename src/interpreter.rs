/// The token module defines the lexical categories of the language.
///
/// Each token pairs a kind with its literal source text. The kinds double as
/// the `logos` patterns the lexer is generated from, with a fixed keyword
/// table resolving letter runs.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters and keywords. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   line.
/// - Turns bytes that start no token into `Illegal` tokens instead of failing.
/// - Repeats the end-of-input token once the source is exhausted.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST using precedence climbing: every token kind maps to an optional
/// prefix handler and an optional infix handler.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records malformed productions with their source line and keeps going.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced during execution: integers,
/// booleans, null, strings, arrays, hashes, functions, builtins, and the
/// transient return and error wrappers.
///
/// # Responsibilities
/// - Defines the `Value` enum and its kind tags.
/// - Computes hash keys for values usable as hash keys.
/// - Renders values for output.
pub mod value;
/// The environment module implements lexical scope.
///
/// An environment is a frame of bindings chained to its enclosing frame.
/// Functions capture the frame they are defined in, which is the whole
/// closure mechanism.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies functions and builtins, and produces values. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes against an environment.
/// - Reports runtime errors such as type mismatches or unknown identifiers as
///   error values.
pub mod evaluator;
