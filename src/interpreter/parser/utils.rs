use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by call arguments, array literals, function
    /// parameters and hash literals. It is entered with the opening delimiter
    /// as the current token and leaves the parser on the closing one. An
    /// immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token kind that terminates the list (e.g. `]` or `)`).
    /// - `parse_item`: Parses one element, starting at its first token.
    ///
    /// # Returns
    /// The parsed items, or `None` after recording an error.
    pub(super) fn parse_list<T>(&mut self,
                                closing: TokenKind,
                                parse_item: fn(&mut Self) -> Option<T>)
                                -> Option<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Some(items)
    }

    /// List item for call arguments and array elements.
    pub(super) fn parse_list_element(&mut self) -> Option<Expr> {
        self.parse_expression(Precedence::Lowest)
    }

    /// List item for function parameters: a plain identifier.
    pub(super) fn parse_parameter(&mut self) -> Option<String> {
        if self.cur_is(TokenKind::Ident) {
            return Some(self.cur.literal.clone());
        }

        self.record(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                  found:    self.cur.kind,
                                                  line:     self.cur.line, });
        None
    }

    /// List item for hash literals: `key ":" value`.
    pub(super) fn parse_hash_pair(&mut self) -> Option<(Expr, Expr)> {
        let key = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Colon)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        Some((key, value))
    }
}

/// Maps an operator token to the infix operator it denotes.
pub(super) const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
