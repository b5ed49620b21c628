use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// A pull-based, forward-only tokenizer over source text.
///
/// Pattern matching is delegated to the `logos` automaton derived on
/// [`TokenKind`]; this wrapper adds the end-of-input contract, illegal
/// tokens, string literal unquoting and line tracking.
///
/// An unrecognized character becomes one `Illegal` token carrying the whole
/// character, so a multi-byte character is never split.
pub struct Lexer<'s> {
    inner:    logos::Lexer<'s, TokenKind>,
    source:   &'s str,
    /// Byte offset up to which newlines have been counted.
    counted:  usize,
    line:     usize,
    finished: bool,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { inner: TokenKind::lexer(source),
               source,
               counted: 0,
               line: 1,
               finished: false }
    }

    /// Consumes and returns the next token.
    ///
    /// Whitespace (space, tab, newline, carriage return) is skipped before
    /// each token. Once the end of input has been reached, every further call
    /// returns an [`TokenKind::Eof`] token without advancing.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
    ///
    /// let mut lexer = Lexer::new("let x");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Let);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof();
        }

        let Some(result) = self.inner.next() else {
            self.finished = true;
            return self.eof();
        };

        let line = self.advance_line();
        let slice = self.inner.slice();

        match result {
            Ok(TokenKind::String) => Token::new(TokenKind::String, unquote(slice), line),
            Ok(kind) => Token::new(kind, slice, line),
            Err(()) => Token::new(TokenKind::Illegal, slice, line),
        }
    }

    /// Brings the line counter up to the start of the current token.
    fn advance_line(&mut self) -> usize {
        let start = self.inner.span().start;
        self.line += self.source[self.counted..start].bytes()
                                                     .filter(|&b| b == b'\n')
                                                     .count();
        self.counted = start;
        self.line
    }

    fn eof(&mut self) -> Token {
        let end = self.source.len();
        if self.counted < end {
            self.line += self.source[self.counted..].bytes().filter(|&b| b == b'\n').count();
            self.counted = end;
        }
        Token::new(TokenKind::Eof, "", self.line)
    }
}

/// Yields tokens up to, but not including, end of input.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

/// Strips the opening quote and, when present, the closing quote.
fn unquote(slice: &str) -> &str {
    let body = &slice[1..];
    body.strip_suffix('"').unwrap_or(body)
}
