//! Statements, blocks and the program

use crate::parser::{ErrorKind, Parser, SyntaxResult};
use parl_ast::block::Block;
use parl_ast::expr::{Expr, Variable};
use parl_ast::program::Program;
use parl_ast::statements::{
    AssignmentStmt, DelayStmt, ForStmt, IfStmt, PrintStmt, ReturnStmt, Stmt, VarDeclStmt,
    WhileStmt, WriteKind, WriteStmt,
};
use parl_tokens::spanned::{Span, Spanned};
use parl_tokens::token::TokenKind;
use parl_tokens::vocabulary::Keyword;

impl Parser<'_> {
    /// `program := ( statement ';' )* EOF`
    pub fn parse_program(&mut self) -> SyntaxResult<Program> {
        self.parse("program", |p| {
            let mut statements = vec![];
            while p.peek().kind() != TokenKind::Eof {
                statements.push(p.parse_terminated()?);
            }
            let span = Span::new(0, p.peek().span().offset());
            Ok(Program::new(span, statements))
        })
    }

    /// A statement followed by its `;`
    fn parse_terminated(&mut self) -> SyntaxResult<Stmt> {
        let statement = self.parse_statement()?;
        if self
            .consume_if(|token| token.kind() == TokenKind::Semicolon)
            .is_none()
        {
            let found = self.peek().clone();
            return Err(self.error(ErrorKind::MissingTerminator(found)));
        }
        Ok(statement)
    }

    /// Parses a single statement, without its terminator
    pub fn parse_statement(&mut self) -> SyntaxResult<Stmt> {
        self.parse("statement", |p| match p.peek().kind() {
            TokenKind::Identifier => p.parse_assignment().map(Stmt::Assignment),
            TokenKind::TypeName => p.parse_type_decl().map(Stmt::VarDecl),
            TokenKind::LCurly => p.parse_block().map(Stmt::Block),
            TokenKind::Keyword => match p.peek_keyword() {
                Some(Keyword::Let) => p.parse_let_decl().map(Stmt::VarDecl),
                Some(Keyword::If) => p.parse_if().map(Stmt::If),
                Some(Keyword::While) => p.parse_while().map(Stmt::While),
                Some(Keyword::For) => p.parse_for().map(Stmt::For),
                Some(Keyword::Return) => p.parse_return().map(Stmt::Return),
                Some(Keyword::Print) => p.parse_print().map(Stmt::Print),
                Some(Keyword::Delay) => p.parse_delay().map(Stmt::Delay),
                Some(Keyword::Write) => p.parse_write(WriteKind::Pixel).map(Stmt::Write),
                Some(Keyword::WriteBox) => p.parse_write(WriteKind::Box).map(Stmt::Write),
                Some(Keyword::Else) => Err(p.error(ErrorKind::DanglingElse)),
                Some(Keyword::As) => Err(p.error(ErrorKind::MisplacedCast)),
                _ => Err(p.error(ErrorKind::UnexpectedToken(p.peek().clone()))),
            },
            TokenKind::Eof => Err(p.unexpected("a statement")),
            _ => Err(p.error(ErrorKind::UnexpectedToken(p.peek().clone()))),
        })
    }

    /// `block := '{' ( statement ';' )* '}'`
    pub fn parse_block(&mut self) -> SyntaxResult<Block> {
        self.nested(|p| {
            p.parse("block", |p| {
                let open = p.expect(TokenKind::LCurly, "'{'")?;
                let mut statements = vec![];
                loop {
                    match p.peek().kind() {
                        TokenKind::RCurly => break,
                        TokenKind::Eof => {
                            let found = p.peek().clone();
                            return Err(p.error(ErrorKind::UnclosedGroup { open, found }));
                        }
                        _ => statements.push(p.parse_terminated()?),
                    }
                }
                let close = p.consume();
                Ok(Block::new(open.span().join(close.span()), statements))
            })
        })
    }

    /// `assignment := IDENT '=' expr`
    fn parse_assignment(&mut self) -> SyntaxResult<AssignmentStmt> {
        self.parse("assignment", |p| {
            let name = p.expect(TokenKind::Identifier, "an identifier")?;
            p.expect(TokenKind::Equal, "'='")?;
            let value = p.parse_expr()?;
            let target = Variable::new(name.span(), name.lexeme());
            Ok(AssignmentStmt::new(
                name.span().join(value.span()),
                target,
                value,
            ))
        })
    }

    /// `let_decl := 'let' IDENT ':' TYPE ( '=' expr )?`
    fn parse_let_decl(&mut self) -> SyntaxResult<VarDeclStmt> {
        self.parse("let declaration", |p| {
            let start = p.expect_keyword(Keyword::Let)?.span();
            let name = p.expect(TokenKind::Identifier, "an identifier")?;
            p.expect(TokenKind::Colon, "':'")?;
            let (ty, _) = p.expect_type()?;
            let initializer = p.parse_initializer()?;
            Ok(VarDeclStmt::new(p.span_from(start), name.lexeme(), ty, initializer))
        })
    }

    /// `type_decl := TYPE IDENT ( '=' expr )?`
    fn parse_type_decl(&mut self) -> SyntaxResult<VarDeclStmt> {
        self.parse("type declaration", |p| {
            let (ty, start) = p.expect_type()?;
            let name = p.expect(TokenKind::Identifier, "an identifier")?;
            let initializer = p.parse_initializer()?;
            Ok(VarDeclStmt::new(p.span_from(start), name.lexeme(), ty, initializer))
        })
    }

    fn parse_initializer(&mut self) -> SyntaxResult<Option<Expr>> {
        match self.consume_if(|token| token.kind() == TokenKind::Equal) {
            Some(_) => self.parse_expr().map(Some),
            None => Ok(None),
        }
    }

    /// `if := 'if' expr 'then' block ( 'else' block )?`
    fn parse_if(&mut self) -> SyntaxResult<IfStmt> {
        self.parse("if", |p| {
            let start = p.expect_keyword(Keyword::If)?.span();
            let condition = p.parse_expr()?;
            p.expect_keyword(Keyword::Then)?;
            let then_block = p.parse_block()?;
            let else_block = match p.peek_keyword() {
                Some(Keyword::Else) => {
                    p.consume();
                    Some(p.parse_block()?)
                }
                _ => None,
            };
            Ok(IfStmt::new(p.span_from(start), condition, then_block, else_block))
        })
    }

    /// `while := 'while' expr 'do' block`
    fn parse_while(&mut self) -> SyntaxResult<WhileStmt> {
        self.parse("while", |p| {
            let start = p.expect_keyword(Keyword::While)?.span();
            let condition = p.parse_expr()?;
            p.expect_keyword(Keyword::Do)?;
            let body = p.parse_block()?;
            Ok(WhileStmt::new(p.span_from(start), condition, body))
        })
    }

    /// `for := 'for' '(' let_decl? ';' expr ';' assignment? ')' block`
    fn parse_for(&mut self) -> SyntaxResult<ForStmt> {
        self.parse("for", |p| {
            let start = p.expect_keyword(Keyword::For)?.span();
            let open = p.expect(TokenKind::LParen, "'('")?;
            let init = match p.peek_keyword() {
                Some(Keyword::Let) => Some(p.parse_let_decl()?),
                _ => None,
            };
            p.expect(TokenKind::Semicolon, "';'")?;
            let condition = p.parse_expr()?;
            p.expect(TokenKind::Semicolon, "';'")?;
            let increment = match p.peek().kind() {
                TokenKind::Identifier => Some(p.parse_assignment()?),
                _ => None,
            };
            if p
                .consume_if(|token| token.kind() == TokenKind::RParen)
                .is_none()
            {
                let found = p.peek().clone();
                return Err(p.error(ErrorKind::UnclosedGroup { open, found }));
            }
            let body = p.parse_block()?;
            Ok(ForStmt::new(p.span_from(start), init, condition, increment, body))
        })
    }

    /// `return := 'return' expr`
    fn parse_return(&mut self) -> SyntaxResult<ReturnStmt> {
        self.parse("return", |p| {
            let start = p.expect_keyword(Keyword::Return)?.span();
            let value = p.parse_expr()?;
            Ok(ReturnStmt::new(start.join(value.span()), value))
        })
    }

    /// `print := '__print' expr`
    fn parse_print(&mut self) -> SyntaxResult<PrintStmt> {
        self.parse("print", |p| {
            let start = p.expect_keyword(Keyword::Print)?.span();
            let value = p.parse_expr()?;
            Ok(PrintStmt::new(start.join(value.span()), value))
        })
    }

    /// `delay := '__delay' expr`
    fn parse_delay(&mut self) -> SyntaxResult<DelayStmt> {
        self.parse("delay", |p| {
            let start = p.expect_keyword(Keyword::Delay)?.span();
            let duration = p.parse_expr()?;
            Ok(DelayStmt::new(start.join(duration.span()), duration))
        })
    }

    /// `__write` takes 3 comma separated arguments, `__write_box` takes 5
    fn parse_write(&mut self, kind: WriteKind) -> SyntaxResult<WriteStmt> {
        self.parse("write", |p| {
            let keyword = match kind {
                WriteKind::Pixel => Keyword::Write,
                WriteKind::Box => Keyword::WriteBox,
            };
            let start = p.expect_keyword(keyword)?.span();
            let arguments = p.parse_arguments(kind.arity())?;
            Ok(WriteStmt::new(p.span_from(start), kind, arguments))
        })
    }
}
