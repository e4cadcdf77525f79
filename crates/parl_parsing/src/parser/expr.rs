//! Expressions, one routine per precedence level

use crate::parser::{ErrorKind, Parser, SyntaxResult};
use parl_ast::expr::{
    BinaryExpr, BooleanLiteral, Builtin, BuiltinExpr, CallExpr, CastExpr, ColourLiteral, Expr,
    FloatLiteral, GroupExpr, IntegerLiteral, UnaryExpr, UnaryOperator, Variable,
};
use parl_tokens::spanned::Spanned;
use parl_tokens::token::{Token, TokenKind};
use parl_tokens::vocabulary::{Keyword, TRUE};
use std::fmt::Display;
use std::str::FromStr;

impl Parser<'_> {
    /// Parses an expression
    pub fn parse_expr(&mut self) -> SyntaxResult<Expr> {
        self.nested(|p| p.parse("expression", Self::parse_relational))
    }

    fn parse_relational(&mut self) -> SyntaxResult<Expr> {
        self.parse_binary(TokenKind::RelationalOp, Self::parse_additive, Expr::Relational)
    }

    fn parse_additive(&mut self) -> SyntaxResult<Expr> {
        self.parse_binary(TokenKind::AdditiveOp, Self::parse_multiplicative, Expr::Additive)
    }

    fn parse_multiplicative(&mut self) -> SyntaxResult<Expr> {
        self.parse_binary(TokenKind::MultiplicativeOp, Self::parse_unary, Expr::Multiplicative)
    }

    /// `level := next ( OP next )*`, folded to the left
    fn parse_binary<Op>(
        &mut self,
        operator: TokenKind,
        mut next: impl FnMut(&mut Self) -> SyntaxResult<Expr>,
        build: impl Fn(BinaryExpr<Op>) -> Expr,
    ) -> SyntaxResult<Expr>
    where
        Op: FromStr,
        Op::Err: Display,
    {
        let mut left = next(self)?;
        while let Some(token) = self.consume_if(|token| token.kind() == operator) {
            let op = self.parse_lexeme::<Op>(&token)?;
            let right = next(self)?;
            left = build(BinaryExpr::new(op, left, right));
        }
        Ok(left)
    }

    /// `unary := ( '-' | 'not' ) unary | cast`
    fn parse_unary(&mut self) -> SyntaxResult<Expr> {
        let token = self.peek();
        let op = match token.kind() {
            TokenKind::AdditiveOp if token.lexeme() == "-" => Some(UnaryOperator::Negate),
            TokenKind::Keyword if self.peek_keyword() == Some(Keyword::Not) => {
                Some(UnaryOperator::Not)
            }
            _ => None,
        };
        let Some(op) = op else {
            return self.parse_cast();
        };
        let start = self.consume().span();
        let operand = self.nested(Self::parse_unary)?;
        Ok(Expr::Unary(UnaryExpr::new(
            start.join(operand.span()),
            op,
            operand,
        )))
    }

    /// `cast := primary ( 'as' TYPE )*`
    fn parse_cast(&mut self) -> SyntaxResult<Expr> {
        let mut expr = self.parse_primary()?;
        while self.peek_keyword() == Some(Keyword::As) {
            self.consume();
            let (ty, ty_span) = self.expect_type()?;
            expr = Expr::Cast(CastExpr::new(expr.span().join(ty_span), expr, ty));
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> SyntaxResult<Expr> {
        let token = self.peek().clone();
        let span = token.span();
        match token.kind() {
            TokenKind::IntegerLiteral => {
                self.consume();
                let value = self.parse_lexeme::<i64>(&token)?;
                Ok(Expr::Integer(IntegerLiteral::new(span, value)))
            }
            TokenKind::FloatLiteral => {
                self.consume();
                let value = self.parse_lexeme::<f64>(&token)?;
                Ok(Expr::Float(FloatLiteral::new(span, value)))
            }
            TokenKind::BooleanLiteral => {
                self.consume();
                Ok(Expr::Boolean(BooleanLiteral::new(span, token.lexeme() == TRUE)))
            }
            TokenKind::ColourLiteral => {
                self.consume();
                let value = token
                    .lexeme()
                    .strip_prefix('#')
                    .ok_or_else(|| "missing '#'".to_string())
                    .and_then(|hex| u32::from_str_radix(hex, 16).map_err(|e| e.to_string()))
                    .map_err(|e| self.error_at(ErrorKind::invalid_literal(token.lexeme(), e), span))?;
                Ok(Expr::Colour(ColourLiteral::new(span, value)))
            }
            TokenKind::Identifier => {
                self.consume();
                if self.peek().kind() == TokenKind::LParen {
                    self.parse_call(token)
                } else {
                    Ok(Expr::Variable(Variable::new(span, token.lexeme())))
                }
            }
            TokenKind::LParen => self.parse("group", |p| {
                let open = p.consume();
                let inner = p.parse_expr()?;
                let close = p.close_group(open)?;
                Ok(Expr::Group(GroupExpr::new(span.join(close.span()), inner)))
            }),
            TokenKind::Keyword => {
                let builtin = match self.peek_keyword() {
                    Some(Keyword::Width) => Builtin::Width,
                    Some(Keyword::Height) => Builtin::Height,
                    Some(Keyword::Read) => Builtin::Read,
                    Some(Keyword::RandomInt) => Builtin::RandomInt,
                    _ => return Err(self.unexpected("an expression")),
                };
                self.consume();
                let arguments = self.parse_arguments(builtin.arity())?;
                Ok(Expr::Builtin(BuiltinExpr::new(
                    self.span_from(span),
                    builtin,
                    arguments,
                )))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `IDENT '(' ( expr ( ',' expr )* )? ')'`, with the identifier already consumed
    fn parse_call(&mut self, function: Token) -> SyntaxResult<Expr> {
        self.parse("call", |p| {
            let open = p.expect(TokenKind::LParen, "'('")?;
            let mut arguments = vec![];
            if p.peek().kind() != TokenKind::RParen {
                arguments.push(p.parse_expr()?);
                while p.consume_if(|token| token.kind() == TokenKind::Comma).is_some() {
                    arguments.push(p.parse_expr()?);
                }
            }
            let close = p.close_group(open)?;
            Ok(Expr::Call(CallExpr::new(
                function.span().join(close.span()),
                function.lexeme(),
                arguments,
            )))
        })
    }

    /// Exactly `count` comma separated expressions
    pub(super) fn parse_arguments(&mut self, count: usize) -> SyntaxResult<Vec<Expr>> {
        let mut arguments = Vec::with_capacity(count);
        for idx in 0..count {
            if idx > 0 {
                self.expect(TokenKind::Comma, "','")?;
            }
            arguments.push(self.parse_expr()?);
        }
        Ok(arguments)
    }

    /// Consumes the `)` matching `open`
    fn close_group(&mut self, open: Token) -> SyntaxResult<Token> {
        match self.consume_if(|token| token.kind() == TokenKind::RParen) {
            Some(close) => Ok(close),
            None => {
                let found = self.peek().clone();
                Err(self.error(ErrorKind::UnclosedGroup { open, found }))
            }
        }
    }

    fn parse_lexeme<T>(&self, token: &Token) -> SyntaxResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        token.lexeme().parse::<T>().map_err(|e| {
            self.error_at(ErrorKind::invalid_literal(token.lexeme(), e), token.span())
        })
    }
}
