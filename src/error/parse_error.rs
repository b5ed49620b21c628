use std::fmt;

use thiserror::Error;

use crate::interpreter::token::TokenKind;

/// Represents a single malformed production found while parsing.
///
/// Parsing does not stop at the first error; the parser records one of these
/// and carries on with the next token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The next token was not the one the grammar requires.
    #[error("Error on line {line}: expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the grammar requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line of the offending token.
        line:     usize,
    },
    /// No expression can start with this token.
    #[error("Error on line {line}: no prefix parse function for {kind} found")]
    NoPrefixParseFunction {
        /// The token kind that cannot start an expression.
        kind: TokenKind,
        /// The source line of the offending token.
        line: usize,
    },
    /// A digit run that does not fit in a 64-bit signed integer.
    #[error("Error on line {line}: could not parse {literal:?} as integer")]
    InvalidIntegerLiteral {
        /// The literal digit run.
        literal: String,
        /// The source line of the literal.
        line:    usize,
    },
}

/// All errors recorded while parsing one source text, reported as a single
/// failure.
///
/// Renders one error per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Returns the individual errors in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
