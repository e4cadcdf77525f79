//! A lexical token from a source buffer

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source buffer.
///
/// Tokens are immutable once produced. Concatenating the lexemes of every token produced from a
/// source buffer, trivia included, yields the buffer again.
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Creates the end of input sentinel, positioned at `span`
    pub fn eof(span: Span) -> Self {
        Self::new(span, TokenKind::Eof, "")
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the exact source text of this token
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Whitespace and comments, which carry no meaning for the parser
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.lexeme)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            kind => write!(f, "{kind} {:?}", self.lexeme),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

/// The kind for this token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    // literals
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    ColourLiteral,

    // punctuation
    /// {
    LCurly,
    /// }
    RCurly,
    /// (
    LParen,
    /// )
    RParen,
    /// [
    LBracket,
    /// ]
    RBracket,
    Colon,
    Semicolon,
    Comma,
    /// the single `=` of assignments and initializers
    Equal,

    // operator classes
    AdditiveOp,
    MultiplicativeOp,
    RelationalOp,

    Identifier,
    TypeName,
    Keyword,
    Whitespace,
    Comment,

    /// End of input, never produced by the lexer
    Eof,
    /// The one character a scan could not match
    Error,
}
