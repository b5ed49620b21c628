use std::io::Write;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Writes each argument's display form on its own line and returns `null`.
///
/// Accepts any number of arguments; with none, nothing is written.
///
/// # Errors
/// `Output` when the output collaborator fails to accept the text.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::print::puts, value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// let result = puts(&[Value::from("hello"), Value::Integer(42)], &mut out).unwrap();
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(String::from_utf8(out).unwrap(), "hello\n42\n");
/// ```
pub fn puts(args: &[Value], out: &mut dyn Write) -> EvalResult<Value> {
    for arg in args {
        writeln!(out, "{arg}")?;
    }
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::RuntimeError,
        interpreter::{environment::Environment, evaluator::core::Evaluator},
    };

    struct Refusing;

    impl Write for Refusing {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_until_an_argument_fails() {
        let source = r#"puts("a", [1, "b"], {1: true}); puts(); puts(missing)"#;
        let program = crate::parse(source).unwrap();
        let mut evaluator = Evaluator::with_output(Vec::new());
        let result = evaluator.evaluate(&program, &Environment::new_shared());

        assert_eq!(result.inspect(), "ERROR: identifier not found: missing");
        assert_eq!(String::from_utf8(evaluator.into_output()).unwrap(), "a\n[1, b]\n{1:true}\n");
    }

    #[test]
    fn returns_null() {
        let program = crate::parse("puts(1)").unwrap();
        let mut evaluator = Evaluator::with_output(Vec::new());
        assert_eq!(evaluator.evaluate(&program, &Environment::new_shared()), Value::Null);
    }

    #[test]
    fn reports_refused_writes() {
        let result = puts(&[Value::Integer(1)], &mut Refusing);
        assert_eq!(result, Err(RuntimeError::Output { message: "closed".to_string() }));
    }
}
