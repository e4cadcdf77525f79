//! Recursive descent parser from tokens to the syntax tree.
//!
//! The parser reads a complete token sequence. Whitespace and comments are skipped transparently,
//! and reading past the last token yields an end of input sentinel. Parsing is fail fast: the
//! first violation of the grammar aborts the whole parse.

use parl_ast::program::Program;
use parl_tokens::spanned::{Span, Spanned};
use parl_tokens::token::{Token, TokenKind};
use parl_tokens::vocabulary::{Keyword, PrimitiveType};
use std::str::FromStr;
use tracing::{debug, trace};

mod error;
mod expr;
mod statement;

pub use error::*;

/// How many groups, calls, unary operators and blocks may enclose one another
pub const MAX_NESTING: usize = 64;

/// Parses a token sequence into a [Program]
pub fn parse(tokens: &[Token]) -> SyntaxResult<Program> {
    let program = Parser::new(tokens).parse_program()?;
    debug!("parsed {} top level statements", program.statements.len());
    Ok(program)
}

/// Creates the syntax tree from a token sequence
#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    eof: Token,
    non_terminals: Vec<&'static str>,
    depth: usize,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over `tokens`
    pub fn new(tokens: &'t [Token]) -> Self {
        let end = tokens.last().map(|t| t.span().end()).unwrap_or_default();
        let mut parser = Self {
            tokens,
            cursor: 0,
            eof: Token::eof(end),
            non_terminals: vec![],
            depth: 0,
        };
        parser.skip_trivia();
        parser
    }

    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.cursor)
            .is_some_and(|token| token.is_trivia())
        {
            self.cursor += 1;
        }
    }

    /// The current lookahead, the end of input sentinel once every token is consumed
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.eof)
    }

    /// The keyword at the lookahead, if it is one
    pub fn peek_keyword(&self) -> Option<Keyword> {
        let token = self.peek();
        match token.kind() {
            TokenKind::Keyword => Keyword::from_str(token.lexeme()).ok(),
            _ => None,
        }
    }

    /// Consumes the lookahead. At the end of input this keeps returning the sentinel.
    pub fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
            self.skip_trivia();
        }
        trace!("consumed {token:?}");
        token
    }

    /// Consumes the lookahead only if it passes the predicate
    pub fn consume_if<F>(&mut self, predicate: F) -> Option<Token>
    where
        F: FnOnce(&Token) -> bool,
    {
        if predicate(self.peek()) {
            Some(self.consume())
        } else {
            None
        }
    }

    /// Consumes a token of `kind`, or fails naming `expected`
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> SyntaxResult<Token> {
        match self.consume_if(|token| token.kind() == kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(expected)),
        }
    }

    /// Consumes the given keyword
    pub fn expect_keyword(&mut self, keyword: Keyword) -> SyntaxResult<Token> {
        if self.peek_keyword() == Some(keyword) {
            Ok(self.consume())
        } else {
            Err(self.unexpected(format!("'{keyword}'")))
        }
    }

    /// Consumes a primitive type name
    pub fn expect_type(&mut self) -> SyntaxResult<(PrimitiveType, Span)> {
        let token = self.expect(TokenKind::TypeName, "a type")?;
        let ty = PrimitiveType::from_str(token.lexeme())
            .map_err(|e| self.error_at(ErrorKind::invalid_literal(token.lexeme(), e), token.span()))?;
        Ok((ty, token.span()))
    }

    /// An error for finding the lookahead where `expected` should be
    pub fn unexpected(&self, expected: impl AsRef<str>) -> SyntaxError {
        let found = self.peek().clone();
        let kind = match found.kind() {
            TokenKind::Eof => ErrorKind::UnexpectedEof(expected.as_ref().to_string()),
            _ => ErrorKind::expected_token(expected, found),
        };
        self.error(kind)
    }

    /// Creates an error located at the lookahead
    pub fn error(&self, kind: impl Into<ErrorKind>) -> SyntaxError {
        self.error_at(kind, self.peek().span())
    }

    pub fn error_at(&self, kind: impl Into<ErrorKind>, location: Span) -> SyntaxError {
        SyntaxError::new(kind.into(), location, self.non_terminals.iter().copied())
    }

    /// Runs `func` as the non terminal `name`.
    ///
    /// The name stays on the stack if `func` fails, so errors created afterwards see where the
    /// failure happened.
    pub fn parse<O, F>(&mut self, name: &'static str, func: F) -> SyntaxResult<O>
    where
        F: FnOnce(&mut Self) -> SyntaxResult<O>,
    {
        trace!("starting parsing {name} at {:?}", self.peek());
        self.non_terminals.push(name);
        let result = func(self);
        if result.is_ok() {
            self.non_terminals.pop();
        }
        result
    }

    /// Runs `func` one level of nesting deeper, failing once [MAX_NESTING] is reached
    pub fn nested<O, F>(&mut self, func: F) -> SyntaxResult<O>
    where
        F: FnOnce(&mut Self) -> SyntaxResult<O>,
    {
        if self.depth >= MAX_NESTING {
            return Err(self.error(ErrorKind::NestingTooDeep(MAX_NESTING)));
        }
        self.depth += 1;
        let result = func(self);
        self.depth -= 1;
        result
    }

    /// The span from `start` up to the last consumed token
    fn span_from(&self, start: Span) -> Span {
        let previous = self.tokens[..self.cursor.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|token| !token.is_trivia());
        match previous {
            Some(token) => start.join(token.span()),
            None => start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_log::test;

    #[test]
    fn test_peek_skips_trivia() {
        let tokens = tokenize("  // note").unwrap();
        let parser = Parser::new(&tokens);
        assert_eq!(parser.peek().kind(), TokenKind::Eof);
        assert_eq!(parser.peek().span(), Span::new(9, 0));
    }

    #[test]
    fn test_consume() {
        let tokens = tokenize("let x").unwrap();
        let mut parser = Parser::new(&tokens);
        let consumed = parser.consume();
        assert_eq!(consumed.kind(), TokenKind::Keyword);
        assert_eq!(consumed.span(), Span::new(0, 3));
        let token = parser.peek();
        assert_eq!(token, &Token::new(Span::new(4, 1), TokenKind::Identifier, "x"));
        parser.consume();
        assert_eq!(parser.consume().kind(), TokenKind::Eof);
        assert_eq!(parser.consume().kind(), TokenKind::Eof);
    }

    #[test]
    fn test_consume_if() {
        let tokens = tokenize("let x").unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(parser
            .consume_if(|tok| tok.kind() == TokenKind::Identifier)
            .is_none());
        assert!(parser
            .consume_if(|tok| tok.kind() == TokenKind::Keyword)
            .is_some());
    }

    #[test]
    fn test_error_keeps_non_terminal_stack() {
        let tokens = tokenize(";").unwrap();
        let mut parser = Parser::new(&tokens);
        let error = parser
            .parse("outer", |p| p.parse("inner", |p| p.expect(TokenKind::Identifier, "an identifier")))
            .unwrap_err();
        assert_eq!(error.non_terminal_stack, ["outer", "inner"]);
        assert_eq!(error.location, Some(Span::new(0, 1)));
        assert!(matches!(error.kind, ErrorKind::ExpectedToken { .. }));
    }

    #[test]
    fn test_unexpected_eof() {
        let tokens = tokenize("x").unwrap();
        let mut parser = Parser::new(&tokens);
        parser.consume();
        let error = parser.expect(TokenKind::Equal, "'='").unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnexpectedEof("'='".to_string()));
    }

    #[test]
    fn test_nested_depth_is_limited() {
        fn descend(parser: &mut Parser, levels: usize) -> SyntaxResult<usize> {
            if levels == 0 {
                return Ok(0);
            }
            parser.nested(|p| descend(p, levels - 1).map(|depth| depth + 1))
        }
        let tokens = tokenize("x").unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(descend(&mut parser, MAX_NESTING).unwrap(), MAX_NESTING);
        assert_eq!(parser.depth, 0);
        let error = descend(&mut parser, MAX_NESTING + 1).unwrap_err();
        assert_eq!(error.kind, ErrorKind::NestingTooDeep(MAX_NESTING));
        assert_eq!(error.location, Some(Span::new(0, 1)));
        assert_eq!(parser.depth, 0);
    }
}
