use std::rc::Rc;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{Parser, Precedence},
        token::TokenKind,
    },
};

/// A handler for a token in prefix position: it starts at the current token
/// and leaves the parser on the last token of the expression it built.
pub(super) type PrefixFn<'s> = fn(&mut Parser<'s>) -> Option<Expr>;

impl<'s> Parser<'s> {
    /// Looks up the prefix handler registered for a token kind.
    pub(super) fn prefix_handler(kind: TokenKind) -> Option<PrefixFn<'s>> {
        let handler: PrefixFn<'s> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(handler)
    }

    fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(self.cur.literal.clone()))
    }

    /// Parses a digit run. Values outside the `i64` range are recorded as
    /// `InvalidIntegerLiteral`.
    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.cur.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Integer(value)),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral { literal: self.cur.literal.clone(),
                                                                line:    self.cur.line, });
                None
            },
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expr> {
        Some(Expr::String(self.cur.literal.clone()))
    }

    fn parse_boolean(&mut self) -> Option<Expr> {
        Some(Expr::Boolean(self.cur_is(TokenKind::True)))
    }

    /// Grammar: `prefix := ("!" | "-") expression`
    ///
    /// The operand binds with `Prefix` strength, so `-a * b` is `((-a) * b)`.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = if self.cur_is(TokenKind::Bang) {
            PrefixOperator::Not
        } else {
            PrefixOperator::Negate
        };
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { operator,
                            right: Box::new(right) })
    }

    /// Grammar: `group := "(" expression ")"`
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    /// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
    fn parse_if_expression(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Grammar: `function := "fn" "(" (IDENT ("," IDENT)*)? ")" block`
    fn parse_function_literal(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_list(TokenKind::RParen, Self::parse_parameter)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Some(Expr::Function { parameters: parameters.into(),
                              body:       Rc::new(body), })
    }

    /// Grammar: `array := "[" (expression ("," expression)*)? "]"`
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_list(TokenKind::RBracket, Self::parse_list_element)?;
        Some(Expr::Array(elements))
    }

    /// Grammar: `hash := "{" (expression ":" expression ("," ...)*)? "}"`
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let pairs = self.parse_list(TokenKind::RBrace, Self::parse_hash_pair)?;
        Some(Expr::Hash(pairs))
    }
}
