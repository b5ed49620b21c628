/// Parser state, precedence table and the expression loop.
///
/// Holds the current and lookahead tokens, accumulates parse errors and
/// drives precedence climbing.
pub mod core;

/// Statement parsing.
///
/// Handles `let`, `return` and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and function
/// bodies.
pub mod block;

/// Prefix handlers.
///
/// Parses everything that can start an expression: identifiers, literals,
/// unary operators, grouping, `if` and function literals.
pub mod prefix;

/// Infix handlers.
///
/// Parses binary operators, calls and index expressions.
pub mod infix;

/// Utility functions for the parser.
///
/// Provides the shared comma-separated list helper and token-to-operator
/// mapping.
pub mod utils;
