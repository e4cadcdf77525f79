//! Turns source text into tokens.
//!
//! Scanning is maximal munch: the automaton is run from the cursor until it has no edge for the
//! next character, then rolled back to the last accepting state it passed through.
//!
//! # Examples
//! ```
//! # use parl_parsing::lexer::tokenize;
//! # use parl_tokens::token::TokenKind;
//! let tokens = tokenize("x <= 2").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Whitespace,
//!         TokenKind::RelationalOp,
//!         TokenKind::Whitespace,
//!         TokenKind::IntegerLiteral
//!     ]
//! );
//! ```

use crate::lexer::category::Category;
use crate::lexer::dfa::{State, TransitionTable};
use parl_tokens::spanned::{Span, Spanned};
use parl_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

pub mod category;
mod config;
pub mod dfa;

pub use config::*;

/// No accepting state could be reached from some position
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unexpected character {character:?} at byte {offset}", offset = .span.offset())]
pub struct LexicalError {
    /// The character the scan could not match
    pub character: char,
    pub span: Span,
    /// The tokens produced before the error, ending with the one character error token.
    ///
    /// An error returned by [next_token] or by iterating a [Lexer] only holds the error token.
    /// [Lexer::tokenize] prefixes it with every token produced so far.
    pub tokens: Vec<Token>,
}

impl LexicalError {
    fn new(character: char, span: Span) -> Self {
        Self {
            character,
            span,
            tokens: vec![Token::new(span, TokenKind::Error, character)],
        }
    }
}

/// Scans one token starting at the byte offset `position`.
///
/// Returns the token along with the number of bytes it consumed. At or past the end of input
/// the end of input sentinel is returned and nothing is consumed. A `position` inside a multi
/// byte character is an error on that character.
pub fn next_token(
    table: &TransitionTable,
    input: &str,
    position: usize,
) -> Result<(Token, usize), LexicalError> {
    if position >= input.len() {
        return Ok((Token::eof(Span::new(input.len(), 0)), 0));
    }
    let Some(rest) = input.get(position..) else {
        return Err(split_character(input, position));
    };
    let Some(first) = rest.chars().next() else {
        return Ok((Token::eof(Span::new(position, 0)), 0));
    };

    // states visited since the last accepting one, with the offset just past them
    let mut visited: Vec<(State, usize)> = vec![];
    let mut state = table.start();
    for (offset, c) in rest.char_indices() {
        let Some(next) = table.next(state, Category::of(c)) else {
            break;
        };
        if table.is_accepting(next) {
            visited.clear();
        }
        state = next;
        visited.push((state, offset + c.len_utf8()));
    }

    while let Some((state, end)) = visited.pop() {
        match table.resolver(state) {
            Some(resolver) => {
                let lexeme = &rest[..end];
                let token = Token::new(Span::new(position, end), resolver.resolve(lexeme), lexeme);
                return Ok((token, end));
            }
            None => trace!("rolling back from {state:?} at {}", position + end),
        }
    }

    Err(LexicalError::new(first, Span::new(position, first.len_utf8())))
}

/// The error for a `position` that splits a character of `input`
fn split_character(input: &str, position: usize) -> LexicalError {
    let (start, character) = input
        .char_indices()
        .take_while(|&(start, _)| start < position)
        .last()
        .unwrap_or((0, char::REPLACEMENT_CHARACTER));
    LexicalError::new(character, Span::new(start, character.len_utf8()))
}

/// Lexes a source buffer, yielding tokens until the end of input or the first error.
#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    table: TransitionTable,
    position: usize,
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer using the default configuration
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: &LexerConfig) -> Self {
        Self::with_table(source, TransitionTable::new(config))
    }

    pub fn with_table(source: &'src str, table: TransitionTable) -> Self {
        Self {
            source,
            table,
            position: 0,
            failed: false,
        }
    }

    /// Lexes the rest of the input.
    ///
    /// On failure the error carries every token produced before it.
    pub fn tokenize(self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = vec![];
        for result in self {
            match result {
                Ok(token) => tokens.push(token),
                Err(mut error) => {
                    debug!(
                        "lexing failed at byte {} after {} tokens",
                        error.span.offset(),
                        tokens.len()
                    );
                    tokens.append(&mut error.tokens);
                    error.tokens = tokens;
                    return Err(error);
                }
            }
        }
        debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.source.len() {
            return None;
        }
        match next_token(&self.table, self.source, self.position) {
            Ok((token, consumed)) => {
                trace!("lexed {token:?} at {}", token.span().offset());
                self.position += consumed;
                Some(Ok(token))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// Lexes a whole source buffer with the default configuration
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).tokenize()
}
