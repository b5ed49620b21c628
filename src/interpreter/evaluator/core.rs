use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{BlockStatement, Expr, Node, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{binary::eval_infix, collection::eval_index, function::core::lookup_builtin,
                    unary::eval_prefix},
        value::{core::Value, function::Function},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. `?` gives the short-circuit:
/// the first error abandons every enclosing evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// Holds the output collaborator that `puts` writes to. All binding state
/// lives in the [`Env`] passed to each call, so one evaluator can serve any
/// number of environments and a caller keeps its top-level environment alive
/// across calls to preserve bindings.
///
/// ## Usage
///
/// ```
/// use monkey::interpreter::{
///     environment::Environment, evaluator::core::Evaluator, value::core::Value,
/// };
///
/// let env = Environment::new_shared();
/// let mut evaluator = Evaluator::with_output(Vec::new());
///
/// let program = monkey::parse("let x = 5; puts(x); x + 3").unwrap();
/// assert_eq!(evaluator.evaluate(&program, &env), Value::Integer(8));
///
/// let program = monkey::parse("x * 2").unwrap();
/// assert_eq!(evaluator.evaluate(&program, &env), Value::Integer(10));
/// assert_eq!(evaluator.output(), b"5\n");
/// ```
pub struct Evaluator<W = io::Stdout> {
    pub(super) out: W,
}

impl Evaluator<io::Stdout> {
    /// Creates an evaluator writing `puts` output to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for Evaluator<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Evaluator<W> {
    /// Creates an evaluator writing `puts` output to `out`.
    #[must_use]
    pub const fn with_output(out: W) -> Self {
        Self { out }
    }

    /// Returns the output collaborator.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the evaluator, returning the output collaborator.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates any AST node against `env` and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Failures are not
    /// reported separately: they come back as [`Value::Error`].
    ///
    /// # Parameters
    /// - `node`: A `&Program`, `&Statement`, `&BlockStatement` or `&Expr`.
    /// - `env`: The environment to resolve and bind names in.
    ///
    /// # Returns
    /// The value of the node. A program yields the value of its last
    /// statement (`null` if it has none), or the value of the first `return`.
    pub fn evaluate<'a>(&mut self, node: impl Into<Node<'a>>, env: &Env) -> Value {
        let result = match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expr) => self.eval(expr, env),
        };

        result.unwrap_or_else(Value::Error)
    }

    /// Evaluates top-level statements in order.
    ///
    /// A `return` stops the program and its value is unwrapped here.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;
            if let Value::ReturnValue(inner) = result {
                return Ok(*inner);
            }
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// A `return` stops the block but stays wrapped, so that it also stops
    /// every enclosing block up to the function call or program.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
            if matches!(result, Value::ReturnValue(_)) {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` binds in the frame of `env` and yields `null`; `return` wraps its
    /// value (or `null`) in a `ReturnValue`.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().set(name.as_str(), value);
                Ok(Value::Null)
            },
            Statement::Return { value } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Null,
                };
                Ok(Value::ReturnValue(Box::new(value)))
            },
            Statement::Expression(expr) => self.eval(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant. Operands,
    /// arguments and elements are evaluated left to right.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        match expr {
            Expr::Identifier(name) => Self::eval_identifier(name, env),
            Expr::Integer(value) => Ok(Value::Integer(*value)),
            Expr::String(text) => Ok(Value::from(text.as_str())),
            Expr::Boolean(value) => Ok(Value::Boolean(*value)),
            Expr::Prefix { operator, right } => {
                let right = self.eval(right, env)?;
                eval_prefix(*operator, &right)
            },
            Expr::Infix { left,
                          operator,
                          right, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                eval_infix(*operator, &left, &right)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                self.eval_if(condition, consequence, alternative.as_ref(), env)
            },
            Expr::Function { parameters, body } => {
                Ok(Value::Function(Rc::new(Function { parameters: Rc::clone(parameters),
                                                      body:       Rc::clone(body),
                                                      env:        Rc::clone(env), })))
            },
            Expr::Call { function,
                         arguments, } => {
                let callee = self.eval(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&callee, arguments)
            },
            Expr::Array(elements) => Ok(Value::from(self.eval_expressions(elements, env)?)),
            Expr::Index { left, index } => {
                let left = self.eval(left, env)?;
                let index = self.eval(index, env)?;
                eval_index(&left, &index)
            },
            Expr::Hash(pairs) => self.eval_hash_literal(pairs, env),
        }
    }

    /// Resolves a name: the environment chain first, then the builtin table.
    fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
        let bound = env.borrow().get(name);
        if let Some(value) = bound {
            return Ok(value);
        }

        let not_found = || RuntimeError::IdentifierNotFound { name: name.to_string() };
        lookup_builtin(name).map(Value::Builtin).ok_or_else(not_found)
    }

    /// Evaluates the consequence when the condition is truthy, otherwise the
    /// alternative, otherwise `null`.
    fn eval_if(&mut self,
               condition: &Expr,
               consequence: &BlockStatement,
               alternative: Option<&BlockStatement>,
               env: &Env)
               -> EvalResult<Value> {
        if self.eval(condition, env)?.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }
}
