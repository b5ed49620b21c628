/// Builtin lookup and function application.
///
/// Holds the fixed builtin table and applies user-defined functions and
/// builtins to evaluated arguments.
pub mod core;

/// Collection builtins.
///
/// `len`, `first`, `last`, `rest` and `push`. None of them modifies its
/// argument.
pub mod builtin;

/// The `puts` builtin.
///
/// Writes the display form of its arguments to the evaluator's output.
pub mod print;
