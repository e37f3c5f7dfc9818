use thiserror::Error;
use tinyc_util::{Diagnose, Diagnostic, Span};

#[derive(Debug, Error)]
pub enum LexError {
    #[error("invalid token")]
    UnexpectedChar { span: Span, ch: char },

    #[error("number literal out of range")]
    NumberOverflow { span: Span },
}

impl Diagnose for LexError {
    fn diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnexpectedChar { span, .. } => Diagnostic::new("invalid token", Some(*span)),
            LexError::NumberOverflow { span } => {
                Diagnostic::new("number literal out of range", Some(*span))
            }
        }
    }
}
