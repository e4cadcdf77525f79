//! Tokens, spans, and the fixed vocabulary shared by the lexer, parser, and syntax tree.

pub mod spanned;
pub mod token;
pub mod vocabulary;
