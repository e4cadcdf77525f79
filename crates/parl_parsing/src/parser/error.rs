use parl_tokens::spanned::Span;
use parl_tokens::token::Token;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// Where the error was found, `None` if it has no position in the source
    pub location: Option<Span>,
    /// The non terminals being parsed when the error occurred, outermost first
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        location: impl Into<Option<Span>>,
        non_terminals: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            kind,
            location: location.into(),
            non_terminal_stack: non_terminals.into_iter().collect(),
        }
    }

    /// The 1-based line and 0-based column of this error within `source`
    pub fn line_col(&self, source: &str) -> Option<(usize, usize)> {
        self.location.map(|span| span.line_col(source))
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)?;
        if let Some(location) = self.location {
            write!(f, " at byte {}", location.offset())?;
        }
        if !self.non_terminal_stack.is_empty() {
            writeln!(f)?;
            writeln!(f, "non terminal stack:")?;
            for (idx, non_terminal) in self.non_terminal_stack.iter().enumerate() {
                writeln!(f, "  {}: {}", idx, non_terminal)?;
            }
        }
        Ok(())
    }
}

impl From<ErrorKind> for SyntaxError {
    fn from(value: ErrorKind) -> Self {
        Self::new(value, None, [])
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected {expected}, found {found}")]
    ExpectedToken { expected: String, found: Token },
    #[error("unexpected {0} in statement position")]
    UnexpectedToken(Token),
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(String),
    #[error("statement must be terminated by ';', found {0}")]
    MissingTerminator(Token),
    #[error("unclosed {open}, found {found}")]
    UnclosedGroup { open: Token, found: Token },
    #[error("'else' without a preceding 'if'")]
    DanglingElse,
    #[error("'as' must follow the expression being cast")]
    MisplacedCast,
    #[error("invalid literal {lexeme:?}: {reason}")]
    InvalidLiteral { lexeme: String, reason: String },
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl ErrorKind {
    pub fn expected_token(expected: impl AsRef<str>, found: Token) -> Self {
        Self::ExpectedToken {
            expected: expected.as_ref().to_string(),
            found,
        }
    }

    pub fn invalid_literal(lexeme: impl AsRef<str>, reason: impl Display) -> Self {
        Self::InvalidLiteral {
            lexeme: lexeme.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type SyntaxResult<T = ()> = Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use parl_tokens::token::TokenKind;
    use test_log::test;

    #[test]
    fn test_display_lists_non_terminals() {
        let error = SyntaxError::new(
            ErrorKind::MissingTerminator(Token::eof(Span::new(5, 0))),
            Span::new(5, 0),
            ["program", "statement"],
        );
        assert_eq!(
            error.to_string(),
            "syntax error: statement must be terminated by ';', found end of input at byte 5\n\
             non terminal stack:\n  0: program\n  1: statement\n"
        );
    }

    #[test]
    fn test_line_col() {
        let found = Token::new(Span::new(6, 1), TokenKind::Semicolon, ";");
        let error = SyntaxError::new(ErrorKind::expected_token("expression", found), Span::new(6, 1), []);
        assert_eq!(error.line_col("x = 1\n;"), Some((2, 0)));
        assert_eq!(SyntaxError::from(ErrorKind::DanglingElse).line_col("else"), None);
    }
}
