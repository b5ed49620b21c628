/// Parsing errors.
///
/// Defines the structured errors recorded while parsing source text, and the
/// combined [`ParseErrors`] failure a parse with any errors is reported as.
pub mod parse_error;
/// Runtime errors.
///
/// Defines the failures that can occur during evaluation. They never unwind
/// the host: each one travels as the payload of an `Error` runtime value.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
