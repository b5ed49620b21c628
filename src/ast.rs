use std::{fmt, rc::Rc};

/// The root of a parsed source text: its top-level statements in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited statement sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement node.
///
/// Statements and expressions are disjoint; an expression enters statement
/// position only through [`Statement::Expression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  String,
        /// The bound value.
        value: Expr,
    },
    /// `return [<value>];`
    Return {
        /// The returned value, absent for a bare `return`.
        value: Option<Expr>,
    },
    /// An expression evaluated for its value.
    Expression(Expr),
    /// A nested block.
    Block(BlockStatement),
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, without its quotes.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `!x` or `-x`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } [else { ... }]`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<parameters>) { ... }`
    ///
    /// Parameters and body are shared so that function values created from
    /// this literal outlive the program they were parsed from.
    Function {
        /// Parameter names in order.
        parameters: Rc<[String]>,
        /// The function body.
        body:       Rc<BlockStatement>,
    },
    /// `<function>(<arguments>)`
    Call {
        /// The callee.
        function:  Box<Self>,
        /// Arguments in order.
        arguments: Vec<Self>,
    },
    /// `[<elements>]`
    Array(Vec<Self>),
    /// `<left>[<index>]`
    Index {
        /// The indexed collection.
        left:  Box<Self>,
        /// The index.
        index: Box<Self>,
    },
    /// `{<key>: <value>, ...}`, pairs in source order.
    Hash(Vec<(Self, Self)>),
}

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!`)
    Not,
    /// Arithmetic negation (`-`)
    Negate,
}

/// An infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// A borrowed view of any AST node, accepted by
/// [`Evaluator::evaluate`](crate::interpreter::evaluator::core::Evaluator::evaluate).
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A whole program.
    Program(&'a Program),
    /// A single statement.
    Statement(&'a Statement),
    /// A block.
    Block(&'a BlockStatement),
    /// A single expression.
    Expression(&'a Expr),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Self::Expression(expr)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Canonical rendering: statements concatenated, no separators.
///
/// # Example
/// ```
/// use monkey::ast::{Expr, Program, Statement};
///
/// let program = Program { statements: vec![Statement::Let {
///     name:  "myVar".to_string(),
///     value: Expr::Identifier("anotherVar".to_string()),
/// }] };
///
/// assert_eq!(program.to_string(), "let myVar = anotherVar;");
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression(expr) => write!(f, "{expr}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

/// Canonical rendering: every prefix and infix operation is fully
/// parenthesized, so the text reflects the parsed tree exactly.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(text) => write!(f, "{text}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fn({}) {{{body}}}", parameters.join(", "))
            },
            Self::Call { function,
                         arguments, } => write!(f, "{function}({})", join(arguments)),
            Self::Array(elements) => write!(f, "[{}]", join(elements)),
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Hash(pairs) => {
                let pairs: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}:{v}")).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
        }
    }
}

fn join(exprs: &[Expr]) -> String {
    exprs.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ident(name: &str) -> Box<Expr> {
        Box::new(Expr::Identifier(name.to_string()))
    }

    fn block_of(expr: Box<Expr>) -> BlockStatement {
        BlockStatement { statements: vec![Statement::Expression(*expr)] }
    }

    #[test]
    fn renders_let_statement() {
        let program = Program { statements: vec![Statement::Let { name:  "myVar".to_string(),
                                                                  value: *ident("anotherVar"), }] };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn renders_operations_fully_parenthesized() {
        let expr = Expr::Infix { left:     Box::new(Expr::Prefix { operator: PrefixOperator::Negate,
                                                                   right:    ident("a"), }),
                                 operator: InfixOperator::Mul,
                                 right:    ident("b"), };
        assert_eq!(expr.to_string(), "((-a) * b)");
    }

    #[test]
    fn renders_compound_expressions() {
        let body = BlockStatement { statements: vec![Statement::Expression(Expr::Infix {
            left:     ident("x"),
            operator: InfixOperator::Add,
            right:    ident("y"),
        })] };
        let function = Expr::Function { parameters: vec!["x".to_string(), "y".to_string()].into(),
                                        body:       Rc::new(body), };
        assert_eq!(function.to_string(), "fn(x, y) {(x + y)}");

        let call = Expr::Call { function:  ident("add"),
                                arguments: vec![Expr::Integer(1), Expr::Integer(2)], };
        assert_eq!(call.to_string(), "add(1, 2)");

        let index = Expr::Index { left:  ident("xs"),
                                  index: Box::new(Expr::Integer(0)), };
        assert_eq!(index.to_string(), "(xs[0])");

        let hash = Expr::Hash(vec![(Expr::String("one".into()), Expr::Integer(1))]);
        assert_eq!(hash.to_string(), "{one:1}");

        let ret = Statement::Return { value: None };
        assert_eq!(ret.to_string(), "return;");
    }

    #[test]
    fn rendering_is_stable() {
        let expr = Expr::If { condition:   Box::new(Expr::Infix { left:     ident("x"),
                                                                  operator: InfixOperator::Less,
                                                                  right:    ident("y"), }),
                              consequence: block_of(ident("x")),
                              alternative: Some(block_of(ident("y"))), };
        let first = expr.to_string();
        assert_eq!(first, "if (x < y) x else y");
        assert_eq!(first, expr.to_string());
    }

    #[test]
    fn if_keyword_stays_apart_from_a_bare_condition() {
        let expr = Expr::If { condition:   ident("ready"),
                              consequence: block_of(Box::new(Expr::Integer(1))),
                              alternative: None, };
        assert_eq!(expr.to_string(), "if ready 1");
    }
}
