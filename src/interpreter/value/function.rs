use std::{fmt, io::Write, rc::Rc};

use crate::{
    ast::BlockStatement,
    error::RuntimeError,
    interpreter::{environment::Env, evaluator::core::EvalResult, value::core::Value},
};

/// A user-defined function: parameters, body and the environment it was
/// defined in.
///
/// The captured environment is shared, not copied, so every closure created
/// in one frame sees the same bindings.
pub struct Function {
    /// Parameter names in order.
    pub parameters: Rc<[String]>,
    /// The function body.
    pub body:       Rc<BlockStatement>,
    /// The environment active where the function literal was evaluated.
    pub env:        Env,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment may contain this very function.
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body.to_string())
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn ({}) {{ {} }}", self.parameters.join(", "), self.body)
    }
}

/// Signature of a native builtin.
///
/// A builtin receives its evaluated arguments and the output collaborator
/// (used by `puts`).
pub type BuiltinFn = fn(&[Value], &mut dyn Write) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts any number, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

impl Arity {
    /// Checks an argument count against this arity.
    pub fn check(self, got: usize) -> EvalResult<()> {
        match self {
            Self::Exact(want) if got != want => {
                Err(RuntimeError::WrongArgumentCount { got, want })
            },
            _ => Ok(()),
        }
    }
}

/// A native function from the fixed builtin table.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is resolved by.
    pub name:  &'static str,
    /// The accepted argument count.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl Builtin {
    /// Checks the arity, then invokes the builtin.
    ///
    /// A count mismatch is reported as an error value, never a fault.
    pub fn call(&self, args: &[Value], out: &mut dyn Write) -> EvalResult<Value> {
        self.arity.check(args.len())?;
        (self.func)(args, out)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// Builtins are identified by name; the table holds each name once.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
