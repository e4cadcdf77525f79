use crate::statements::Stmt;
use parl_tokens::spanned::{Span, Spanned};

/// A block of statements, kept in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    span: Span,
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(span: Span, statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            span,
            statements: statements.into_iter().collect(),
        }
    }

    /// Creates a new empty block
    pub const fn empty(span: Span) -> Self {
        Self {
            span,
            statements: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Spanned for Block {
    fn span(&self) -> Span {
        self.span
    }
}
