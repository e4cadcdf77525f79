//! Expression nodes

use crate::visitor::{Accept, Visitor};
use parl_tokens::spanned::{Span, Spanned};
use parl_tokens::vocabulary::{
    AdditiveOperator, MultiplicativeOperator, PrimitiveType, RelationalOperator,
};

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    Boolean(BooleanLiteral),
    Colour(ColourLiteral),
    Variable(Variable),
    Unary(UnaryExpr),
    Additive(AdditiveExpr),
    Multiplicative(MultiplicativeExpr),
    Relational(RelationalExpr),
    Group(GroupExpr),
    Call(CallExpr),
    Cast(CastExpr),
    Builtin(BuiltinExpr),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Integer(e) => e.span,
            Expr::Float(e) => e.span,
            Expr::Boolean(e) => e.span,
            Expr::Colour(e) => e.span,
            Expr::Variable(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Additive(e) => e.span,
            Expr::Multiplicative(e) => e.span,
            Expr::Relational(e) => e.span,
            Expr::Group(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Cast(e) => e.span,
            Expr::Builtin(e) => e.span,
        }
    }
}

impl Accept for Expr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Err> {
        match self {
            Expr::Integer(e) => e.accept(visitor),
            Expr::Float(e) => e.accept(visitor),
            Expr::Boolean(e) => e.accept(visitor),
            Expr::Colour(e) => e.accept(visitor),
            Expr::Variable(e) => e.accept(visitor),
            Expr::Unary(e) => e.accept(visitor),
            Expr::Additive(e) => e.accept(visitor),
            Expr::Multiplicative(e) => e.accept(visitor),
            Expr::Relational(e) => e.accept(visitor),
            Expr::Group(e) => e.accept(visitor),
            Expr::Call(e) => e.accept(visitor),
            Expr::Cast(e) => e.accept(visitor),
            Expr::Builtin(e) => e.accept(visitor),
        }
    }
}

macro_rules! literal {
    ($(#[$meta:meta])* $name:ident($ty:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub value: $ty,
            span: Span,
        }

        impl $name {
            pub fn new(span: Span, value: $ty) -> Self {
                Self { value, span }
            }
        }

        impl Spanned for $name {
            fn span(&self) -> Span {
                self.span
            }
        }
    };
}

literal!(
    /// An integer literal
    IntegerLiteral(i64)
);
literal!(
    /// A float literal
    FloatLiteral(f64)
);
literal!(
    /// `true` or `false`
    BooleanLiteral(bool)
);
literal!(
    /// A `#rrggbb` colour literal, stored as `0xrrggbb`
    ColourLiteral(u32)
);

/// A reference to a variable
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    span: Span,
}

impl Variable {
    pub fn new(span: Span, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl Spanned for Variable {
    fn span(&self) -> Span {
        self.span
    }
}

/// A unary operation
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum UnaryOperator {
    #[strum(serialize = "-")]
    Negate,
    #[strum(serialize = "not")]
    Not,
}

/// A unary operation applied to an operand
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOperator,
    pub operand: Box<Expr>,
    span: Span,
}

impl UnaryExpr {
    pub fn new(span: Span, op: UnaryOperator, operand: Expr) -> Self {
        Self {
            op,
            operand: Box::new(operand),
            span,
        }
    }
}

impl Spanned for UnaryExpr {
    fn span(&self) -> Span {
        self.span
    }
}

/// A left associative binary operation of one precedence class
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<Op> {
    pub op: Op,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    span: Span,
}

impl<Op> BinaryExpr<Op> {
    /// Creates a new binary expression spanning both operands
    pub fn new(op: Op, left: Expr, right: Expr) -> Self {
        let span = left.span().join(right.span());
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }
}

impl<Op> Spanned for BinaryExpr<Op> {
    fn span(&self) -> Span {
        self.span
    }
}

/// `+`, `-` and `or`
pub type AdditiveExpr = BinaryExpr<AdditiveOperator>;
/// `*`, `/` and `and`
pub type MultiplicativeExpr = BinaryExpr<MultiplicativeOperator>;
/// comparisons
pub type RelationalExpr = BinaryExpr<RelationalOperator>;

/// A parenthesized sub-expression
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpr {
    pub inner: Box<Expr>,
    span: Span,
}

impl GroupExpr {
    pub fn new(span: Span, inner: Expr) -> Self {
        Self {
            inner: Box::new(inner),
            span,
        }
    }
}

impl Spanned for GroupExpr {
    fn span(&self) -> Span {
        self.span
    }
}

/// A call expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function: String,
    pub arguments: Vec<Expr>,
    span: Span,
}

impl CallExpr {
    pub fn new(
        span: Span,
        function: impl Into<String>,
        arguments: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self {
            function: function.into(),
            arguments: arguments.into_iter().collect(),
            span,
        }
    }
}

impl Spanned for CallExpr {
    fn span(&self) -> Span {
        self.span
    }
}

/// `expr as type`
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub expr: Box<Expr>,
    pub ty: PrimitiveType,
    span: Span,
}

impl CastExpr {
    pub fn new(span: Span, expr: Expr, ty: PrimitiveType) -> Self {
        Self {
            expr: Box::new(expr),
            ty,
            span,
        }
    }
}

impl Spanned for CastExpr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Built in values provided by the runtime
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Builtin {
    #[strum(serialize = "__width")]
    Width,
    #[strum(serialize = "__height")]
    Height,
    #[strum(serialize = "__read")]
    Read,
    #[strum(serialize = "__random_int")]
    RandomInt,
}

impl Builtin {
    /// The number of arguments this builtin takes
    pub const fn arity(&self) -> usize {
        match self {
            Builtin::Width | Builtin::Height => 0,
            Builtin::Read => 2,
            Builtin::RandomInt => 1,
        }
    }
}

/// A use of a builtin value
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinExpr {
    pub builtin: Builtin,
    pub arguments: Vec<Expr>,
    span: Span,
}

impl BuiltinExpr {
    pub fn new(span: Span, builtin: Builtin, arguments: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            builtin,
            arguments: arguments.into_iter().collect(),
            span,
        }
    }
}

impl Spanned for BuiltinExpr {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_binary_span_covers_operands() {
        let left = Expr::Integer(IntegerLiteral::new(Span::new(0, 1), 1));
        let right = Expr::Integer(IntegerLiteral::new(Span::new(4, 2), 23));
        let sum = Expr::Additive(BinaryExpr::new(AdditiveOperator::Add, left, right));
        assert_eq!(sum.span(), Span::new(0, 6));
    }

    #[test]
    fn test_builtin_arity() {
        assert_eq!(Builtin::Width.arity(), 0);
        assert_eq!(Builtin::Read.arity(), 2);
        assert_eq!(Builtin::RandomInt.to_string(), "__random_int");
    }
}
