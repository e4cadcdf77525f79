//! Double dispatch over the syntax tree.
//!
//! Every concrete node kind has one required method on [Visitor]. Calling
//! [`accept`](Accept::accept) on a node invokes exactly that method, which is then responsible for
//! recursing into the node's children, usually by calling the matching `walk_*` function. The walk
//! functions visit children left to right in source order, so a visitor that dispatches before
//! walking sees the tree in pre-order.

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
use parl_visitor_gen::visitor;

visitor! {
    /// A capability with one operation per concrete node kind
    pub trait Visitor, pub trait Accept {
        visit program(v, program: &Program) -> Result<()> {
            for statement in &program.statements {
                statement.accept(v)?;
            }
            Ok(())
        }

        visit block(v, block: &Block) -> Result<()> {
            for statement in &block.statements {
                statement.accept(v)?;
            }
            Ok(())
        }

        visit assignment(v, stmt: &AssignmentStmt) -> Result<()> {
            stmt.target.accept(v)?;
            stmt.value.accept(v)
        }

        visit var_decl(v, stmt: &VarDeclStmt) -> Result<()> {
            if let Some(initializer) = &stmt.initializer {
                initializer.accept(v)?;
            }
            Ok(())
        }

        visit if_stmt(v, stmt: &IfStmt) -> Result<()> {
            stmt.condition.accept(v)?;
            stmt.then_block.accept(v)?;
            if let Some(else_block) = &stmt.else_block {
                else_block.accept(v)?;
            }
            Ok(())
        }

        visit while_stmt(v, stmt: &WhileStmt) -> Result<()> {
            stmt.condition.accept(v)?;
            stmt.body.accept(v)
        }

        visit for_stmt(v, stmt: &ForStmt) -> Result<()> {
            if let Some(init) = &stmt.init {
                init.accept(v)?;
            }
            stmt.condition.accept(v)?;
            if let Some(increment) = &stmt.increment {
                increment.accept(v)?;
            }
            stmt.body.accept(v)
        }

        visit return_stmt(v, stmt: &ReturnStmt) -> Result<()> {
            stmt.value.accept(v)
        }

        visit print_stmt(v, stmt: &PrintStmt) -> Result<()> {
            stmt.value.accept(v)
        }

        visit delay_stmt(v, stmt: &DelayStmt) -> Result<()> {
            stmt.duration.accept(v)
        }

        visit write_stmt(v, stmt: &WriteStmt) -> Result<()> {
            for argument in &stmt.arguments {
                argument.accept(v)?;
            }
            Ok(())
        }

        visit integer(v, literal: &IntegerLiteral) -> Result<()> { Ok(()) }
        visit float(v, literal: &FloatLiteral) -> Result<()> { Ok(()) }
        visit boolean(v, literal: &BooleanLiteral) -> Result<()> { Ok(()) }
        visit colour(v, literal: &ColourLiteral) -> Result<()> { Ok(()) }
        visit variable(v, variable: &Variable) -> Result<()> { Ok(()) }

        visit unary(v, expr: &UnaryExpr) -> Result<()> {
            expr.operand.accept(v)
        }

        visit additive(v, expr: &AdditiveExpr) -> Result<()> {
            expr.left.accept(v)?;
            expr.right.accept(v)
        }

        visit multiplicative(v, expr: &MultiplicativeExpr) -> Result<()> {
            expr.left.accept(v)?;
            expr.right.accept(v)
        }

        visit relational(v, expr: &RelationalExpr) -> Result<()> {
            expr.left.accept(v)?;
            expr.right.accept(v)
        }

        visit group(v, expr: &GroupExpr) -> Result<()> {
            expr.inner.accept(v)
        }

        visit call(v, expr: &CallExpr) -> Result<()> {
            for argument in &expr.arguments {
                argument.accept(v)?;
            }
            Ok(())
        }

        visit cast(v, expr: &CastExpr) -> Result<()> {
            expr.expr.accept(v)
        }

        visit builtin(v, expr: &BuiltinExpr) -> Result<()> {
            for argument in &expr.arguments {
                argument.accept(v)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{BinaryExpr, Expr};
    use crate::statements::{Stmt, WriteKind};
    use parl_tokens::spanned::Span;
    use parl_tokens::vocabulary::{AdditiveOperator, RelationalOperator};
    use test_log::test;

    /// Records the name of every node it is dispatched on
    #[derive(Default)]
    struct Trail(Vec<&'static str>);

    macro_rules! trail {
        ($($name:ident: $ty:ty => $walk:ident),* $(,)?) => {
            impl Visitor for Trail {
                type Err = ();

                $(
                fn $name(&mut self, node: &$ty) -> Result<(), ()> {
                    self.0.push(stringify!($walk));
                    $walk(self, node)
                }
                )*
            }
        };
    }

    trail! {
        visit_program: Program => walk_program,
        visit_block: Block => walk_block,
        visit_assignment: AssignmentStmt => walk_assignment,
        visit_var_decl: VarDeclStmt => walk_var_decl,
        visit_if_stmt: IfStmt => walk_if_stmt,
        visit_while_stmt: WhileStmt => walk_while_stmt,
        visit_for_stmt: ForStmt => walk_for_stmt,
        visit_return_stmt: ReturnStmt => walk_return_stmt,
        visit_print_stmt: PrintStmt => walk_print_stmt,
        visit_delay_stmt: DelayStmt => walk_delay_stmt,
        visit_write_stmt: WriteStmt => walk_write_stmt,
        visit_integer: IntegerLiteral => walk_integer,
        visit_float: FloatLiteral => walk_float,
        visit_boolean: BooleanLiteral => walk_boolean,
        visit_colour: ColourLiteral => walk_colour,
        visit_variable: Variable => walk_variable,
        visit_unary: UnaryExpr => walk_unary,
        visit_additive: AdditiveExpr => walk_additive,
        visit_multiplicative: MultiplicativeExpr => walk_multiplicative,
        visit_relational: RelationalExpr => walk_relational,
        visit_group: GroupExpr => walk_group,
        visit_call: CallExpr => walk_call,
        visit_cast: CastExpr => walk_cast,
        visit_builtin: BuiltinExpr => walk_builtin,
    }

    fn var(name: &str) -> Expr {
        Expr::Variable(Variable::new(Span::default(), name))
    }

    fn int(value: i64) -> Expr {
        Expr::Integer(IntegerLiteral::new(Span::default(), value))
    }

    #[test]
    fn test_dispatch_once_per_node_in_pre_order() {
        // while x < 10 do { __write x, 1 + 2, #ff0000; };
        let condition = Expr::Relational(BinaryExpr::new(RelationalOperator::Lt, var("x"), int(10)));
        let write = WriteStmt::new(
            Span::default(),
            WriteKind::Pixel,
            [
                var("x"),
                Expr::Additive(BinaryExpr::new(AdditiveOperator::Add, int(1), int(2))),
                Expr::Colour(ColourLiteral::new(Span::default(), 0xff0000)),
            ],
        );
        let program = Program::new(
            Span::default(),
            [Stmt::While(WhileStmt::new(
                Span::default(),
                condition,
                Block::new(Span::default(), [Stmt::Write(write)]),
            ))],
        );

        let mut trail = Trail::default();
        program.accept(&mut trail).unwrap();
        assert_eq!(
            trail.0,
            [
                "walk_program",
                "walk_while_stmt",
                "walk_relational",
                "walk_variable",
                "walk_integer",
                "walk_block",
                "walk_write_stmt",
                "walk_variable",
                "walk_additive",
                "walk_integer",
                "walk_integer",
                "walk_colour",
            ]
        );
    }

    #[test]
    fn test_for_parts_visited_in_source_order() {
        let for_stmt = ForStmt::new(
            Span::default(),
            Some(VarDeclStmt::new(
                Span::default(),
                "i",
                parl_tokens::vocabulary::PrimitiveType::Int,
                int(0),
            )),
            Expr::Boolean(BooleanLiteral::new(Span::default(), true)),
            Some(AssignmentStmt::new(Span::default(), Variable::new(Span::default(), "i"), int(1))),
            Block::empty(Span::default()),
        );
        let mut trail = Trail::default();
        for_stmt.accept(&mut trail).unwrap();
        assert_eq!(
            trail.0,
            [
                "walk_for_stmt",
                "walk_var_decl",
                "walk_integer",
                "walk_boolean",
                "walk_assignment",
                "walk_variable",
                "walk_integer",
                "walk_block",
            ]
        );
    }
}
