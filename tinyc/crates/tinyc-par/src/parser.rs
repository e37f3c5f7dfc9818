use crate::ast::{FuncDef, Program};
use crate::error::ParseError;
use crate::locals::Locals;
use tinyc_lex::{Lexed, Token, TokenKind};
use tinyc_util::Interner;

pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
    pub(crate) interner: Interner,
    pub(crate) label_counter: u32,
    func_id_counter: usize,
}

impl Parser {
    pub fn new(lexed: Lexed) -> Self {
        Self {
            tokens: lexed.tokens,
            pos: 0,
            interner: lexed.interner,
            label_counter: 0,
            func_id_counter: 0,
        }
    }

    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut funcs = Vec::new();
        while !self.is_eof() {
            funcs.push(self.parse_func_def()?);
        }
        if funcs.is_empty() {
            return Err(ParseError::EmptyProgram);
        }
        Ok(Program {
            funcs,
            interner: self.interner,
        })
    }

    fn parse_func_def(&mut self) -> Result<FuncDef, ParseError> {
        let (name, name_span) = self.expect_ident()?;
        self.expect(TokenKind::LParen, "(")?;

        let mut locals = Locals::new();
        let mut params = Vec::new();
        if !self.eat(TokenKind::RParen) {
            loop {
                let (pname, _) = self.expect_ident()?;
                params.push(locals.lookup_or_insert(pname));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen, ")")?;
        }
        if params.len() > 6 {
            return Err(ParseError::TooManyParams {
                name: self.interner.resolve(name).to_string(),
                span: name_span,
            });
        }

        self.expect(TokenKind::LBrace, "{")?;
        let mut body = Vec::new();
        while !self.eat(TokenKind::RBrace) {
            body.push(self.parse_stmt(&mut locals)?);
        }

        let func_id = self.func_id_counter;
        self.func_id_counter += 1;
        tracing::debug!(name = self.interner.resolve(name), func_id, "parsed function");

        Ok(FuncDef {
            name,
            func_id,
            params,
            body,
            locals,
        })
    }

    pub(crate) fn next_label(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn is_eof(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<tinyc_util::Span, ParseError> {
        let tok = *self.current();
        if tok.kind == kind {
            self.advance();
            Ok(tok.span)
        } else {
            Err(ParseError::ExpectedToken {
                expected,
                span: tok.span,
            })
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Result<(tinyc_util::Symbol, tinyc_util::Span), ParseError> {
        let tok = *self.current();
        if let TokenKind::Ident(sym) = tok.kind {
            self.advance();
            Ok((sym, tok.span))
        } else {
            Err(ParseError::ExpectedIdent { span: tok.span })
        }
    }
}
