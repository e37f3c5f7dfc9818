use crate::ast::Stmt;
use crate::error::ParseError;
use crate::locals::Locals;
use crate::parser::Parser;
use tinyc_lex::TokenKind;

impl Parser {
    pub(crate) fn parse_stmt(&mut self, locals: &mut Locals) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::Return => {
                self.advance();
                let value = self.parse_expr(locals)?;
                self.expect(TokenKind::Semi, ";")?;
                Ok(Stmt::Return(value))
            }
            TokenKind::If => {
                self.advance();
                self.expect(TokenKind::LParen, "(")?;
                let cond = self.parse_expr(locals)?;
                self.expect(TokenKind::RParen, ")")?;
                let then_branch = Box::new(self.parse_stmt(locals)?);
                let else_branch = if self.eat(TokenKind::Else) {
                    Some(Box::new(self.parse_stmt(locals)?))
                } else {
                    None
                };
                // Assigned after both branches so a nested if/while/for
                // gets a lower label id than this one, matching the
                // original compiler's post-order assignment.
                let label_id = self.next_label();
                Ok(Stmt::If {
                    cond,
                    then_branch,
                    else_branch,
                    label_id,
                })
            }
            TokenKind::While => {
                self.advance();
                self.expect(TokenKind::LParen, "(")?;
                let cond = self.parse_expr(locals)?;
                self.expect(TokenKind::RParen, ")")?;
                let body = Box::new(self.parse_stmt(locals)?);
                let label_id = self.next_label();
                Ok(Stmt::While {
                    cond,
                    body,
                    label_id,
                })
            }
            TokenKind::For => {
                self.advance();
                self.expect(TokenKind::LParen, "(")?;
                let init = if self.eat(TokenKind::Semi) {
                    None
                } else {
                    let e = self.parse_expr(locals)?;
                    self.expect(TokenKind::Semi, ";")?;
                    Some(e)
                };
                let cond = if self.eat(TokenKind::Semi) {
                    None
                } else {
                    let e = self.parse_expr(locals)?;
                    self.expect(TokenKind::Semi, ";")?;
                    Some(e)
                };
                let step = if self.eat(TokenKind::RParen) {
                    None
                } else {
                    let e = self.parse_expr(locals)?;
                    self.expect(TokenKind::RParen, ")")?;
                    Some(e)
                };
                let body = Box::new(self.parse_stmt(locals)?);
                let label_id = self.next_label();
                Ok(Stmt::For {
                    init,
                    cond,
                    step,
                    body,
                    label_id,
                })
            }
            TokenKind::Break => {
                let span = self.advance().span;
                self.expect(TokenKind::Semi, ";")?;
                Ok(Stmt::Break(span))
            }
            TokenKind::LBrace => {
                self.advance();
                let mut stmts = Vec::new();
                while !self.eat(TokenKind::RBrace) {
                    stmts.push(self.parse_stmt(locals)?);
                }
                Ok(Stmt::Block(stmts))
            }
            _ => {
                let e = self.parse_expr(locals)?;
                self.expect(TokenKind::Semi, ";")?;
                Ok(Stmt::Expr(e))
            }
        }
    }
}
