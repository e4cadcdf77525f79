//! Renders a syntax tree as an indented outline, one node per line

use crate::block::Block;
use crate::expr::{
    AdditiveExpr, BooleanLiteral, BuiltinExpr, CallExpr, CastExpr, ColourLiteral, FloatLiteral,
    GroupExpr, IntegerLiteral, MultiplicativeExpr, RelationalExpr, UnaryExpr, Variable,
};
use crate::program::Program;
use crate::statements::{
    AssignmentStmt, DelayStmt, ForStmt, IfStmt, PrintStmt, ReturnStmt, VarDeclStmt, WhileStmt,
    WriteStmt,
};
use crate::visitor::*;
use std::fmt;
use std::fmt::Write;

/// Renders `program` into a new string
pub fn print_tree(program: &Program) -> String {
    program.to_string()
}

/// Writes every node it visits on its own line, indented by one tab per level of nesting.
#[derive(Debug)]
pub struct PrintVisitor<W> {
    out: W,
    tab_count: usize,
}

impl<W: Write> PrintVisitor<W> {
    pub fn new(out: W) -> Self {
        Self { out, tab_count: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..self.tab_count {
            self.out.write_char('\t')?;
        }
        self.out.write_fmt(args)?;
        self.out.write_char('\n')
    }

    /// Runs `func` one level deeper
    fn nested<F>(&mut self, func: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.tab_count += 1;
        let result = func(self);
        self.tab_count -= 1;
        result
    }
}

impl<W: Write> Visitor for PrintVisitor<W> {
    type Err = fmt::Error;

    fn visit_program(&mut self, program: &Program) -> fmt::Result {
        self.line(format_args!("Program:"))?;
        self.nested(|v| walk_program(v, program))
    }

    fn visit_block(&mut self, block: &Block) -> fmt::Result {
        self.line(format_args!("Block:"))?;
        self.nested(|v| walk_block(v, block))
    }

    fn visit_assignment(&mut self, stmt: &AssignmentStmt) -> fmt::Result {
        self.line(format_args!("Assignment:"))?;
        self.nested(|v| walk_assignment(v, stmt))
    }

    fn visit_var_decl(&mut self, stmt: &VarDeclStmt) -> fmt::Result {
        self.line(format_args!("Declaration: {} : {}", stmt.name, stmt.ty))?;
        self.nested(|v| walk_var_decl(v, stmt))
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> fmt::Result {
        self.line(format_args!("If:"))?;
        self.nested(|v| {
            stmt.condition.accept(v)?;
            stmt.then_block.accept(v)?;
            if let Some(else_block) = &stmt.else_block {
                v.line(format_args!("Else:"))?;
                v.nested(|v| else_block.accept(v))?;
            }
            Ok(())
        })
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> fmt::Result {
        self.line(format_args!("While:"))?;
        self.nested(|v| walk_while_stmt(v, stmt))
    }

    fn visit_for_stmt(&mut self, stmt: &ForStmt) -> fmt::Result {
        self.line(format_args!("For:"))?;
        self.nested(|v| walk_for_stmt(v, stmt))
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) -> fmt::Result {
        self.line(format_args!("Return:"))?;
        self.nested(|v| walk_return_stmt(v, stmt))
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> fmt::Result {
        self.line(format_args!("Print:"))?;
        self.nested(|v| walk_print_stmt(v, stmt))
    }

    fn visit_delay_stmt(&mut self, stmt: &DelayStmt) -> fmt::Result {
        self.line(format_args!("Delay:"))?;
        self.nested(|v| walk_delay_stmt(v, stmt))
    }

    fn visit_write_stmt(&mut self, stmt: &WriteStmt) -> fmt::Result {
        self.line(format_args!("Write: {}", stmt.kind))?;
        self.nested(|v| walk_write_stmt(v, stmt))
    }

    fn visit_integer(&mut self, literal: &IntegerLiteral) -> fmt::Result {
        self.line(format_args!("Integer: {}", literal.value))
    }

    fn visit_float(&mut self, literal: &FloatLiteral) -> fmt::Result {
        self.line(format_args!("Float: {}", literal.value))
    }

    fn visit_boolean(&mut self, literal: &BooleanLiteral) -> fmt::Result {
        self.line(format_args!("Boolean: {}", literal.value))
    }

    fn visit_colour(&mut self, literal: &ColourLiteral) -> fmt::Result {
        self.line(format_args!("Colour: #{:06x}", literal.value))
    }

    fn visit_variable(&mut self, variable: &Variable) -> fmt::Result {
        self.line(format_args!("Variable: {}", variable.name))
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> fmt::Result {
        self.line(format_args!("Unary: {}", expr.op))?;
        self.nested(|v| walk_unary(v, expr))
    }

    fn visit_additive(&mut self, expr: &AdditiveExpr) -> fmt::Result {
        self.line(format_args!("Additive: {}", expr.op))?;
        self.nested(|v| walk_additive(v, expr))
    }

    fn visit_multiplicative(&mut self, expr: &MultiplicativeExpr) -> fmt::Result {
        self.line(format_args!("Multiplicative: {}", expr.op))?;
        self.nested(|v| walk_multiplicative(v, expr))
    }

    fn visit_relational(&mut self, expr: &RelationalExpr) -> fmt::Result {
        self.line(format_args!("Relational: {}", expr.op))?;
        self.nested(|v| walk_relational(v, expr))
    }

    fn visit_group(&mut self, expr: &GroupExpr) -> fmt::Result {
        self.line(format_args!("Group:"))?;
        self.nested(|v| walk_group(v, expr))
    }

    fn visit_call(&mut self, expr: &CallExpr) -> fmt::Result {
        self.line(format_args!("Call: {}", expr.function))?;
        self.nested(|v| walk_call(v, expr))
    }

    fn visit_cast(&mut self, expr: &CastExpr) -> fmt::Result {
        self.line(format_args!("Cast: {}", expr.ty))?;
        self.nested(|v| walk_cast(v, expr))
    }

    fn visit_builtin(&mut self, expr: &BuiltinExpr) -> fmt::Result {
        self.line(format_args!("Builtin: {}", expr.builtin))?;
        self.nested(|v| walk_builtin(v, expr))
    }
}
