//! The syntax tree produced by the parser, and the visitor used to walk it.
//!
//! Nodes are plain owned data. Each one carries the [`Span`](parl_tokens::spanned::Span) of the
//! source it was parsed from, and every concrete node kind can be dispatched on through
//! [`Accept`](visitor::Accept).

pub mod block;
pub mod expr;
pub mod print;
pub mod program;
pub mod statements;
pub mod visitor;
