use crate::{
    ast::Statement,
    interpreter::{
        parser::core::{Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses the statement starting at the current token.
    ///
    /// `let` and `return` introduce their own statements; any other token
    /// starts an expression statement. On return the current token is the
    /// last token of the statement, including its `;` if present.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Grammar: `let := "let" IDENT "=" expression ";"?`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.cur.literal.clone();

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    /// Grammar: `return := "return" expression? ";"?`
    ///
    /// The value is absent when `return` is directly followed by `;`, `}` or
    /// end of input.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
            return Some(Statement::Return { value: None });
        }
        if self.peek_is(TokenKind::RBrace) || self.peek_is(TokenKind::Eof) {
            return Some(Statement::Return { value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return { value: Some(value) })
    }

    /// Grammar: `exprStmt := expression ";"?`
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Some(Statement::Expression(expr))
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::{Expr, InfixOperator, Statement};

    fn ident(name: &str) -> Box<Expr> {
        Box::new(Expr::Identifier(name.to_string()))
    }

    fn statements(source: &str) -> Vec<Statement> {
        crate::parse(source).unwrap().statements
    }

    #[test]
    fn parses_let_statements() {
        let parsed = statements("let x = 5;\nlet y = true;\nlet foobar = y;");
        assert_eq!(parsed,
                   vec![Statement::Let { name:  "x".to_string(),
                                         value: Expr::Integer(5), },
                        Statement::Let { name:  "y".to_string(),
                                         value: Expr::Boolean(true), },
                        Statement::Let { name:  "foobar".to_string(),
                                         value: Expr::Identifier("y".to_string()), }]);
    }

    #[test]
    fn parses_return_statements() {
        let parsed = statements("return 5; return x + y; return;");
        assert_eq!(parsed,
                   vec![Statement::Return { value: Some(Expr::Integer(5)) },
                        Statement::Return { value: Some(Expr::Infix { left:     ident("x"),
                                                                      operator: InfixOperator::Add,
                                                                      right:    ident("y"), }) },
                        Statement::Return { value: None }]);
    }

    #[test]
    fn bare_return_before_brace_or_end() {
        assert_eq!(statements("return"), vec![Statement::Return { value: None }]);
        assert_eq!(crate::parse("fn() { return }").unwrap().to_string(), "fn() {return;}");
    }

    #[test]
    fn semicolons_are_optional() {
        assert_eq!(crate::parse("let a = 1 let b = 2 a").unwrap().to_string(),
                   "let a = 1;let b = 2;a");
    }
}
