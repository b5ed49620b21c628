/// Core evaluation logic.
///
/// Contains the `Evaluator`, the result type shared by every evaluation
/// routine, and the dispatch over programs, statements and expressions.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` and unary `-`.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparison, string concatenation and
/// identity equality.
pub mod binary;

/// Collection evaluation.
///
/// Builds arrays and hashes and evaluates index expressions.
pub mod collection;

/// Function evaluation.
///
/// Handles user-defined and builtin function calls and holds the builtin
/// table.
pub mod function;
