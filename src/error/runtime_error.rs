use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ValueKind,
};

/// Represents every failure that can occur during evaluation.
///
/// The `Display` form is the message carried by the `Error` runtime value and
/// shown to the user after `ERROR: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An infix operator applied to operands of different kinds.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Kind of the left operand.
        left:     ValueKind,
        /// The operator.
        operator: InfixOperator,
        /// Kind of the right operand.
        right:    ValueKind,
    },
    /// An infix operator that is not defined for its operand kinds.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Kind of the left operand.
        left:     ValueKind,
        /// The operator.
        operator: InfixOperator,
        /// Kind of the right operand.
        right:    ValueKind,
    },
    /// A prefix operator that is not defined for its operand kind.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Kind of the operand.
        operand:  ValueKind,
    },
    /// A name bound neither in scope nor as a builtin.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A call whose callee is neither a function nor a builtin.
    #[error("not a function: {kind}")]
    NotAFunction {
        /// Kind of the callee.
        kind: ValueKind,
    },
    /// A hash key of a kind that cannot be hashed.
    #[error("unusable as hash key: {kind}")]
    UnusableHashKey {
        /// Kind of the key.
        kind: ValueKind,
    },
    /// An index expression on a value that cannot be indexed.
    #[error("index operator not supported: {kind}")]
    IndexNotSupported {
        /// Kind of the indexed value.
        kind: ValueKind,
    },
    /// A builtin called with the wrong number of arguments.
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount {
        /// Number of arguments supplied.
        got:  usize,
        /// Number of arguments expected.
        want: usize,
    },
    /// A builtin called with an argument kind it does not accept.
    #[error("argument to `{builtin}` not supported, got {kind}")]
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Kind of the argument.
        kind:    ValueKind,
    },
    /// An array builtin called with something other than an array.
    #[error("argument to `{builtin}` must be ARRAY, got {kind}")]
    ExpectedArray {
        /// Name of the builtin.
        builtin: &'static str,
        /// Kind of the argument.
        kind:    ValueKind,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// A length too large to be represented as an integer value.
    #[error("integer overflow: length {length} does not fit in INTEGER")]
    LengthOverflow {
        /// The length that did not fit.
        length: usize,
    },
    /// The output collaborator refused a write.
    #[error("could not write output: {message}")]
    Output {
        /// The underlying I/O error message.
        message: String,
    },
}

impl From<std::io::Error> for RuntimeError {
    fn from(error: std::io::Error) -> Self {
        Self::Output { message: error.to_string() }
    }
}
