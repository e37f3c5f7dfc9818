//! Scans a source string into a flat token sequence terminated by `Eof`.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::{tokenize, Lexed, Lexer};
pub use token::{Token, TokenKind};
