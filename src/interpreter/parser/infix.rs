use crate::{
    ast::Expr,
    interpreter::{
        parser::{core::Parser, utils::infix_operator},
        token::TokenKind,
    },
};

/// A handler for a token in infix position: it receives the already parsed
/// left operand with the operator as the current token.
pub(super) type InfixFn<'s> = fn(&mut Parser<'s>, Expr) -> Option<Expr>;

impl<'s> Parser<'s> {
    /// Looks up the infix handler registered for a token kind.
    ///
    /// `(` continues an expression as a call and `[` as an index.
    pub(super) fn infix_handler(kind: TokenKind) -> Option<InfixFn<'s>> {
        let handler: InfixFn<'s> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(handler)
    }

    /// Grammar: `infix := expression operator expression`
    ///
    /// The right operand is parsed at the operator's own strength, which
    /// makes operators of equal strength left-associative.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = infix_operator(self.cur.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix { left: Box::new(left),
                           operator,
                           right: Box::new(right) })
    }

    /// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_list(TokenKind::RParen, Self::parse_list_element)?;
        Some(Expr::Call { function: Box::new(function),
                          arguments })
    }

    /// Grammar: `index := expression "[" expression "]"`
    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_list_element()?;
        self.expect_peek(TokenKind::RBracket)?;
        Some(Expr::Index { left:  Box::new(left),
                           index: Box::new(index), })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::{Expr, InfixOperator, Statement};

    fn render(source: &str) -> String {
        crate::parse(source).unwrap().to_string()
    }

    #[test]
    fn parses_each_infix_operator() {
        let cases = [("5 + 5;", InfixOperator::Add),
                     ("5 - 5;", InfixOperator::Sub),
                     ("5 * 5;", InfixOperator::Mul),
                     ("5 / 5;", InfixOperator::Div),
                     ("5 > 5;", InfixOperator::Greater),
                     ("5 < 5;", InfixOperator::Less),
                     ("5 == 5;", InfixOperator::Equal),
                     ("5 != 5;", InfixOperator::NotEqual)];

        for (source, operator) in cases {
            let program = crate::parse(source).unwrap();
            let expected = Expr::Infix { left: Box::new(Expr::Integer(5)),
                                         operator,
                                         right: Box::new(Expr::Integer(5)) };
            assert_eq!(program.statements, vec![Statement::Expression(expected)], "{source}");
        }
    }

    #[test]
    fn respects_operator_precedence() {
        let cases = [("-a * b", "((-a) * b)"),
                     ("!-a", "(!(-a))"),
                     ("a + b + c", "((a + b) + c)"),
                     ("a + b - c", "((a + b) - c)"),
                     ("a * b * c", "((a * b) * c)"),
                     ("a * b / c", "((a * b) / c)"),
                     ("a + b / c", "(a + (b / c))"),
                     ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                     ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                     ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                     ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                     ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                     ("true", "true"),
                     ("3 > 5 == false", "((3 > 5) == false)"),
                     ("3 < 5 == true", "((3 < 5) == true)"),
                     ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                     ("(5 + 5) * 2", "((5 + 5) * 2)"),
                     ("2 / (5 + 5)", "(2 / (5 + 5))"),
                     ("-(5 + 5)", "(-(5 + 5))"),
                     ("!(true == true)", "(!(true == true))"),
                     ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                     ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                      "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                     ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                     ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                     ("add(a * b[2], b[1], 2 * [1, 2][1])",
                      "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

        for (source, expected) in cases {
            assert_eq!(render(source), expected, "{source}");
        }
    }

    #[test]
    fn parses_calls_and_indexes() {
        assert_eq!(render("add(1, 2 * 3, 4 + 5);"), "add(1, (2 * 3), (4 + 5))");
        assert_eq!(render("add()"), "add()");
        assert_eq!(render("myArray[1 + 1]"), "(myArray[(1 + 1)])");
        assert_eq!(render("fn(x) { x }(5)"), "fn(x) {x}(5)");
    }
}
