use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::{ParseError, ParseErrors},
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Binding strength of an operator, weakest first.
///
/// Equal strength folds to the left: `a - b - c` parses as `((a - b) - c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `-x`, `!x`
    Prefix,
    /// `f(x)`, `a[i]`
    Call,
}

impl Precedence {
    /// The strength with which a token binds as an infix operator.
    ///
    /// Tokens that never appear in infix position are `Lowest`, which stops
    /// the expression loop.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen | TokenKind::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// A precedence-climbing parser over a [`Lexer`].
///
/// The parser holds the current token and one token of lookahead. Malformed
/// productions never abort parsing: each records a [`ParseError`] and the
/// parser resumes at the next token. A program returned alongside errors may
/// be missing statements and must not be evaluated.
pub struct Parser<'s> {
    lexer:           Lexer<'s>,
    pub(super) cur:  Token,
    pub(super) peek: Token,
    errors:          Vec<ParseError>,
}

impl<'s> Parser<'s> {
    /// Creates a parser and primes the current and lookahead tokens.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("let x = 1 + 2;"));
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "let x = (1 + 2);");
    /// ```
    #[must_use]
    pub fn new(mut lexer: Lexer<'s>) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               cur,
               peek,
               errors: Vec::new() }
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out; the reason is recorded in
    /// [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Program { statements }
    }

    /// Returns the errors recorded so far. Empty means well-formed input.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses a whole program, reporting any recorded errors as one failure.
    ///
    /// # Errors
    /// Returns [`ParseErrors`] when at least one production was malformed.
    pub fn parse(mut self) -> Result<Program, ParseErrors> {
        let program = self.parse_program();
        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(ParseErrors(self.errors))
        }
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix handler for the current token produces the left operand;
    /// then, as long as the lookahead is an infix operator binding tighter
    /// than `precedence`, the operand is folded into a larger expression.
    /// On return the current token is the last token of the expression.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let Some(prefix) = Self::prefix_handler(self.cur.kind) else {
            self.record(ParseError::NoPrefixParseFunction { kind: self.cur.kind,
                                                            line: self.cur.line, });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_handler(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Advances by one token.
    pub(super) fn next_token(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(super) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.is(kind)
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the lookahead is of the given kind; otherwise records an
    /// `UnexpectedToken` error and stays put.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.record(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek.kind,
                                                      line:     self.peek.line, });
            None
        }
    }

    pub(super) const fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    pub(super) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(super) fn record(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }
}
