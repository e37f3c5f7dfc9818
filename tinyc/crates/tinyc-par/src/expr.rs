use crate::ast::Expr;
use crate::error::ParseError;
use crate::locals::Locals;
use crate::parser::Parser;
use tinyc_lex::TokenKind;

/// Recursive-descent expression grammar, one function per precedence
/// level, tightest-binding last: `assign > equality > relational > add >
/// mul > unary > primary`.
impl Parser {
    pub(crate) fn parse_expr(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        self.parse_assign(locals)
    }

    fn parse_assign(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        let node = self.parse_equality(locals)?;
        if self.eat(TokenKind::Eq) {
            let rhs = self.parse_assign(locals)?;
            return Ok(Expr::Assign(Box::new(node), Box::new(rhs)));
        }
        Ok(node)
    }

    fn parse_equality(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        let mut node = self.parse_relational(locals)?;
        loop {
            if self.eat(TokenKind::EqEq) {
                node = Expr::Eq(Box::new(node), Box::new(self.parse_relational(locals)?));
            } else if self.eat(TokenKind::Ne) {
                node = Expr::Ne(Box::new(node), Box::new(self.parse_relational(locals)?));
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_relational(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        let mut node = self.parse_add(locals)?;
        loop {
            if self.eat(TokenKind::Lt) {
                node = Expr::Lt(Box::new(node), Box::new(self.parse_add(locals)?));
            } else if self.eat(TokenKind::Le) {
                node = Expr::Le(Box::new(node), Box::new(self.parse_add(locals)?));
            } else if self.eat(TokenKind::Gt) {
                // `a > b` normalizes to `b < a`.
                let rhs = self.parse_add(locals)?;
                node = Expr::Lt(Box::new(rhs), Box::new(node));
            } else if self.eat(TokenKind::Ge) {
                // `a >= b` normalizes to `b <= a`.
                let rhs = self.parse_add(locals)?;
                node = Expr::Le(Box::new(rhs), Box::new(node));
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_add(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        let mut node = self.parse_mul(locals)?;
        loop {
            if self.eat(TokenKind::Plus) {
                node = Expr::Add(Box::new(node), Box::new(self.parse_mul(locals)?));
            } else if self.eat(TokenKind::Minus) {
                node = Expr::Sub(Box::new(node), Box::new(self.parse_mul(locals)?));
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_mul(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        let mut node = self.parse_unary(locals)?;
        loop {
            if self.eat(TokenKind::Star) {
                node = Expr::Mul(Box::new(node), Box::new(self.parse_unary(locals)?));
            } else if self.eat(TokenKind::Slash) {
                node = Expr::Div(Box::new(node), Box::new(self.parse_unary(locals)?));
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_unary(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        if self.eat(TokenKind::Plus) {
            return self.parse_unary(locals);
        }
        if self.eat(TokenKind::Minus) {
            let rhs = self.parse_unary(locals)?;
            return Ok(Expr::Sub(Box::new(Expr::Num(0)), Box::new(rhs)));
        }
        self.parse_primary(locals)
    }

    fn parse_primary(&mut self, locals: &mut Locals) -> Result<Expr, ParseError> {
        if self.eat(TokenKind::LParen) {
            let e = self.parse_expr(locals)?;
            self.expect(TokenKind::RParen, ")")?;
            return Ok(e);
        }

        if let TokenKind::Ident(sym) = self.current().kind {
            let span = self.current().span;
            self.advance();
            if self.eat(TokenKind::LParen) {
                let mut args = Vec::new();
                if !self.eat(TokenKind::RParen) {
                    loop {
                        args.push(self.parse_expr(locals)?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::RParen, ")")?;
                }
                if args.len() > 6 {
                    return Err(ParseError::TooManyArgs {
                        name: self.interner.resolve(sym).to_string(),
                        span,
                    });
                }
                return Ok(Expr::Call {
                    name: sym,
                    args,
                    span,
                });
            }
            let offset = locals.lookup_or_insert(sym);
            return Ok(Expr::LVar { offset });
        }

        if let TokenKind::Num(n) = self.current().kind {
            self.advance();
            return Ok(Expr::Num(n));
        }

        Err(ParseError::UnexpectedToken {
            span: self.current().span,
        })
    }
}
