//! The front end of the language: a table driven lexer and a recursive descent parser.
//!
//! Source text is lexed completely before parsing begins.
//!
//! ```
//! # use parl_parsing::parse_source;
//! # use parl_ast::statements::Stmt;
//! let program = parse_source("let x: int = 1 + 2 * 3;").unwrap();
//! assert!(matches!(program.statements[0], Stmt::VarDecl(_)));
//! ```

use parl_ast::program::Program;
use tracing::debug;

pub mod lexer;
pub mod parser;

pub use lexer::{CommentMode, LexerConfig, LexicalError};
pub use parser::{ErrorKind, SyntaxError};

/// Any error the front end can produce
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Lexes and parses a source buffer with the default configuration
pub fn parse_source(source: &str) -> Result<Program, FrontendError> {
    parse_source_with(source, &LexerConfig::default())
}

/// Lexes and parses a source buffer
pub fn parse_source_with(source: &str, config: &LexerConfig) -> Result<Program, FrontendError> {
    let tokens = lexer::Lexer::with_config(source, config).tokenize()?;
    let program = parser::parse(&tokens)?;
    debug!(
        "parsed {} bytes into {} statements",
        source.len(),
        program.statements.len()
    );
    Ok(program)
}
