use crate::{
    ast::BlockStatement,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Entered with `{` as the current token. Statements are collected until
    /// the closing `}` or end of input, whichever comes first; a block left
    /// open at end of input is accepted as is.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }
}
