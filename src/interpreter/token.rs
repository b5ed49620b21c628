use std::fmt;

use logos::Logos;

/// The lexical category of a [`Token`].
///
/// Keywords are resolved by the fixed `#[token]` table below: a letter run
/// that spells a keyword exactly becomes that keyword, every other letter run
/// is an [`TokenKind::Ident`]. `Illegal` and `Eof` are never matched by a
/// pattern; the [`Lexer`](crate::interpreter::lexer::Lexer) produces them
/// itself.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r]+")]
pub enum TokenKind {
    /// A byte that starts no other token.
    Illegal,
    /// End of input. Repeats forever once reached.
    Eof,

    /// Identifier tokens such as `x` or `new_adder`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literal tokens such as `42`. Lexical only: no sign.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens. An unterminated literal runs to end of input.
    #[regex(r#""[^"]*"?"#)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,

    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
        };
        write!(f, "{name}")
    }
}

/// A minimal lexical unit: its kind plus the literal source text.
///
/// For string literals `literal` holds the text between the quotes; for
/// every other kind it is the matched source slice (empty at end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind:    TokenKind,
    /// The literal text payload.
    pub literal: String,
    /// The 1-based source line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Ident, "x", 1);
    /// assert_eq!(token.literal, "x");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }

    /// Tests whether the token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}
