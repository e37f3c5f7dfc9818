use tinyc_util::{Span, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // punctuation and operators
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semi,
    Eq,
    EqEq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // reserved words
    Return,
    If,
    Else,
    While,
    For,
    Break,

    Ident(Symbol),
    Num(i64),
    Eof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
