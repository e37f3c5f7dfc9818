use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use tinyc_util::{Interner, Span};

/// Reserved words recognized only when the following character is not an
/// ASCII letter. This mirrors the original compiler's boundary check
/// exactly: it does not also exclude digits or underscores, so `for1`
/// lexes as the keyword `for` followed by the numeral `1`.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("break", TokenKind::Break),
];

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    interner: Interner,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            interner: Interner::new(),
        }
    }

    pub fn into_interner(self) -> Interner {
        self.interner
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.cursor.position();

        let Some(c) = self.cursor.current() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: Span::point(start),
            });
        };

        if c.is_ascii_alphabetic() {
            return Ok(self.lex_keyword_or_ident(start));
        }
        if c.is_ascii_digit() {
            return self.lex_number(start);
        }
        if let Some(tok) = self.lex_two_char_operator(start) {
            return Ok(tok);
        }
        if let Some(tok) = self.lex_punct(start) {
            return Ok(tok);
        }

        self.cursor.advance();
        Err(LexError::UnexpectedChar {
            span: Span::new(start, c.len_utf8()),
            ch: c,
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.current() {
            if c.is_whitespace() {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    fn lex_keyword_or_ident(&mut self, start: usize) -> Token {
        for (text, kind) in KEYWORDS {
            if self.cursor.rest().starts_with(text) {
                let after = self.cursor.peek_at(text.len());
                let boundary_ok = !matches!(after, Some(c) if c.is_ascii_alphabetic());
                if boundary_ok {
                    for _ in text.chars() {
                        self.cursor.advance();
                    }
                    return Token {
                        kind: *kind,
                        span: Span::new(start, text.len()),
                    };
                }
            }
        }

        while let Some(c) = self.cursor.current() {
            if c.is_ascii_alphanumeric() {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        let sym = self.interner.intern(text);
        Token {
            kind: TokenKind::Ident(sym),
            span: Span::new(start, text.len()),
        }
    }

    fn lex_number(&mut self, start: usize) -> Result<Token, LexError> {
        while let Some(c) = self.cursor.current() {
            if c.is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        let span = Span::new(start, text.len());
        let value = text
            .parse::<i64>()
            .map_err(|_| LexError::NumberOverflow { span })?;
        Ok(Token {
            kind: TokenKind::Num(value),
            span,
        })
    }

    fn lex_two_char_operator(&mut self, start: usize) -> Option<Token> {
        let mut chars = self.cursor.rest().chars();
        let a = chars.next()?;
        let b = chars.next();
        let kind = match (a, b) {
            ('=', Some('=')) => TokenKind::EqEq,
            ('!', Some('=')) => TokenKind::Ne,
            ('<', Some('=')) => TokenKind::Le,
            ('>', Some('=')) => TokenKind::Ge,
            _ => return None,
        };
        self.cursor.advance();
        self.cursor.advance();
        Some(Token {
            kind,
            span: Span::new(start, 2),
        })
    }

    fn lex_punct(&mut self, start: usize) -> Option<Token> {
        let c = self.cursor.current()?;
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            '=' => TokenKind::Eq,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => return None,
        };
        self.cursor.advance();
        Some(Token {
            kind,
            span: Span::new(start, 1),
        })
    }
}

/// The full token sequence for a source string, terminated by exactly one
/// `Eof` token, plus the interner that owns every identifier's text.
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub interner: Interner,
}

pub fn tokenize(source: &str) -> Result<Lexed, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token()?;
        tracing::trace!(span = ?tok.span, kind = ?tok.kind, "scanned token");
        let is_eof = matches!(tok.kind, TokenKind::Eof);
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    Ok(Lexed {
        tokens,
        interner: lexer.into_interner(),
    })
}
