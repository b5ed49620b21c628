use std::{io::Write, rc::Rc};

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, print},
        },
        value::{
            core::Value,
            function::{Arity, Builtin, Function},
        },
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Any,      func: print::puts },
}

/// Looks up a builtin by name.
///
/// Builtins are consulted only after the environment chain, so a binding
/// named like a builtin shadows it.
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("len").map(|b| b.name), Some("len"));
/// assert!(lookup_builtin("print").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
}

impl<W: Write> Evaluator<W> {
    /// Applies a callee to evaluated arguments.
    ///
    /// # Errors
    /// `NotAFunction` if the callee is neither a function nor a builtin, or
    /// whatever the call itself fails with.
    pub(crate) fn apply_function(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => self.call_user_defined_function(function, args),
            Value::Builtin(builtin) => {
                debug!(name = builtin.name, args = args.len(), "calling builtin");
                builtin.call(&args, &mut self.out)
            },
            other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// A fresh frame enclosed by the function's captured environment receives
    /// the parameters, bound positionally. Surplus arguments are ignored and
    /// parameters without an argument stay unbound. A `return` inside the
    /// body is unwrapped here; without one the body's last value is the
    /// result.
    #[tracing::instrument(level = "trace",
                          skip_all,
                          fields(arity = function.parameters.len(), args = args.len()))]
    fn call_user_defined_function(&mut self,
                                  function: &Rc<Function>,
                                  args: Vec<Value>)
                                  -> EvalResult<Value> {
        let env = Environment::new_enclosed(Rc::clone(&function.env));
        {
            let mut frame = env.borrow_mut();
            for (name, value) in function.parameters.iter().zip(args) {
                trace!(parameter = %name, %value, "bind");
                frame.set(name.as_str(), value);
            }
        }

        let result = self.eval_block(&function.body, &env)?;
        Ok(result.unwrap_return())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn eval(source: &str) -> Value {
        let program = crate::parse(source).unwrap();
        Evaluator::with_output(Vec::new()).evaluate(&program, &Environment::new_shared())
    }

    #[test]
    fn table_names_are_unique() {
        for name in BUILTIN_FUNCTIONS {
            assert_eq!(BUILTIN_FUNCTIONS.iter().filter(|n| *n == name).count(), 1, "{name}");
            assert!(lookup_builtin(name).is_some());
        }
    }

    #[test]
    fn applies_functions() {
        let cases = [("let identity = fn(x) { x; }; identity(5);", 5),
                     ("let identity = fn(x) { return x; }; identity(5);", 5),
                     ("let double = fn(x) { x * 2; }; double(5);", 10),
                     ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                     ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                     ("fn(x) { x; }(5)", 5),
                     ("fn(x){ x * 2; }(10);", 20)];

        for (source, expected) in cases {
            assert_eq!(eval(source), Value::Integer(expected), "{source}");
        }
    }

    #[test]
    fn function_values_render_their_source() {
        assert_eq!(eval("fn(x) { x + 2; };").inspect(), "fn (x) { (x + 2) }");
        assert_eq!(eval("len").inspect(), "builtin function");
    }

    #[test]
    fn closures_capture_the_defining_frame() {
        let source = "let newAdder = fn(x) { fn(y) { x + y } };
                      let addTwo = newAdder(2);
                      let addTen = newAdder(10);
                      addTwo(3) + addTen(0);";
        assert_eq!(eval(source), Value::Integer(15));
    }

    #[test]
    fn closures_share_a_frame() {
        let source = "let pair = fn(x) { [fn() { x }, fn() { x * 2 }] };
                      let fs = pair(21);
                      fs[0]() + fs[1]();";
        assert_eq!(eval(source), Value::Integer(63));
    }

    #[test]
    fn let_in_a_body_shadows_instead_of_mutating() {
        assert_eq!(eval("let x = 1; let f = fn() { let x = 2; x }; f() * 10 + x"),
                   Value::Integer(21));
    }

    #[test]
    fn recursion_resolves_through_the_enclosing_frame() {
        let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                      fib(15);";
        assert_eq!(eval(source), Value::Integer(610));
    }

    #[test]
    fn argument_count_is_not_checked_for_user_functions() {
        assert_eq!(eval("fn(x) { x }(1, 2, 3)"), Value::Integer(1));
        assert_eq!(eval("let x = 7; fn(x) { x }()"), Value::Integer(7));
    }

    #[test]
    fn bindings_shadow_builtins() {
        assert_eq!(eval("let len = fn(x) { 42 }; len([1])"), Value::Integer(42));
    }

    #[test]
    fn builtin_arity_is_checked() {
        assert_eq!(eval("len(1, 2)").inspect(),
                   "ERROR: wrong number of arguments. got=2, want=1");
        assert_eq!(eval("push([])").inspect(),
                   "ERROR: wrong number of arguments. got=1, want=2");
    }
}
