//! Statement nodes

use crate::block::Block;
use crate::expr::{Expr, Variable};
use crate::visitor::{Accept, Visitor};
use parl_tokens::spanned::{Span, Spanned};
use parl_tokens::vocabulary::PrimitiveType;

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    VarDecl(VarDeclStmt),
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Print(PrintStmt),
    Delay(DelayStmt),
    Write(WriteStmt),
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Assignment(s) => s.span,
            Stmt::VarDecl(s) => s.span,
            Stmt::Block(s) => s.span(),
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Print(s) => s.span,
            Stmt::Delay(s) => s.span,
            Stmt::Write(s) => s.span,
        }
    }
}

impl Accept for Stmt {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Err> {
        match self {
            Stmt::Assignment(s) => s.accept(visitor),
            Stmt::VarDecl(s) => s.accept(visitor),
            Stmt::Block(s) => s.accept(visitor),
            Stmt::If(s) => s.accept(visitor),
            Stmt::While(s) => s.accept(visitor),
            Stmt::For(s) => s.accept(visitor),
            Stmt::Return(s) => s.accept(visitor),
            Stmt::Print(s) => s.accept(visitor),
            Stmt::Delay(s) => s.accept(visitor),
            Stmt::Write(s) => s.accept(visitor),
        }
    }
}

/// `x = expr`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Variable,
    pub value: Expr,
    span: Span,
}

impl AssignmentStmt {
    pub fn new(span: Span, target: Variable, value: Expr) -> Self {
        Self {
            target,
            value,
            span,
        }
    }
}

/// A variable declaration, either `let x: int = expr` or `int x = expr`.
///
/// The initializer is optional in both forms.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub name: String,
    pub ty: PrimitiveType,
    pub initializer: Option<Expr>,
    span: Span,
}

impl VarDeclStmt {
    pub fn new(
        span: Span,
        name: impl Into<String>,
        ty: PrimitiveType,
        initializer: impl Into<Option<Expr>>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer: initializer.into(),
            span,
        }
    }
}

/// If statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    span: Span,
}

impl IfStmt {
    pub fn new(span: Span, condition: Expr, then_block: Block, else_block: Option<Block>) -> Self {
        Self {
            condition,
            then_block,
            else_block,
            span,
        }
    }
}

/// while statement
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    span: Span,
}

impl WhileStmt {
    pub fn new(span: Span, condition: Expr, body: Block) -> Self {
        Self {
            condition,
            body,
            span,
        }
    }
}

/// for statement
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<VarDeclStmt>,
    pub condition: Expr,
    pub increment: Option<AssignmentStmt>,
    pub body: Block,
    span: Span,
}

impl ForStmt {
    pub fn new(
        span: Span,
        init: Option<VarDeclStmt>,
        condition: Expr,
        increment: Option<AssignmentStmt>,
        body: Block,
    ) -> Self {
        Self {
            init,
            condition,
            increment,
            body,
            span,
        }
    }
}

macro_rules! single_expr_stmt {
    ($(#[$meta:meta])* $name:ident { $field:ident }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub $field: Expr,
            span: Span,
        }

        impl $name {
            pub fn new(span: Span, $field: Expr) -> Self {
                Self { $field, span }
            }
        }
    };
}

single_expr_stmt!(
    /// `return expr`
    ReturnStmt { value }
);
single_expr_stmt!(
    /// `__print expr`
    PrintStmt { value }
);
single_expr_stmt!(
    /// `__delay expr`
    DelayStmt { duration }
);

/// What a [WriteStmt] draws
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum WriteKind {
    /// `__write x, y, colour`
    #[strum(serialize = "__write")]
    Pixel,
    /// `__write_box x, y, width, height, colour`
    #[strum(serialize = "__write_box")]
    Box,
}

impl WriteKind {
    /// The number of arguments this statement takes
    pub const fn arity(&self) -> usize {
        match self {
            WriteKind::Pixel => 3,
            WriteKind::Box => 5,
        }
    }
}

/// Writes to the display
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub kind: WriteKind,
    pub arguments: Vec<Expr>,
    span: Span,
}

impl WriteStmt {
    pub fn new(span: Span, kind: WriteKind, arguments: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            kind,
            arguments: arguments.into_iter().collect(),
            span,
        }
    }
}

macro_rules! spanned {
    ($($name:ident),+ $(,)?) => {
        $(
        impl Spanned for $name {
            fn span(&self) -> Span {
                self.span
            }
        }
        )+
    };
}

spanned!(
    AssignmentStmt,
    VarDeclStmt,
    IfStmt,
    WhileStmt,
    ForStmt,
    ReturnStmt,
    PrintStmt,
    DelayStmt,
    WriteStmt,
);
