//! The program is the root of every syntax tree

use crate::print::PrintVisitor;
use crate::statements::Stmt;
use crate::visitor::Accept;
use parl_tokens::spanned::{Span, Spanned};
use std::fmt::{Display, Formatter};

/// The top level statements of a source buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    span: Span,
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Creates a new program
    pub fn new(span: Span, statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            span,
            statements: statements.into_iter().collect(),
        }
    }
}

impl Spanned for Program {
    fn span(&self) -> Span {
        self.span
    }
}

/// Renders the tree with [PrintVisitor]
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.accept(&mut PrintVisitor::new(f))
    }
}
