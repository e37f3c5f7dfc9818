use thiserror::Error;
use tinyc_util::{Diagnose, Diagnostic, Span};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected '{expected}'")]
    ExpectedToken { expected: &'static str, span: Span },

    #[error("expected an identifier")]
    ExpectedIdent { span: Span },

    #[error("unexpected token")]
    UnexpectedToken { span: Span },

    #[error("program contains no function definitions")]
    EmptyProgram,

    #[error("function '{name}' takes too many parameters (max 6)")]
    TooManyParams { name: String, span: Span },

    #[error("call to '{name}' passes too many arguments (max 6)")]
    TooManyArgs { name: String, span: Span },
}

impl Diagnose for ParseError {
    fn diagnostic(&self) -> Diagnostic {
        use ParseError::*;
        match self {
            ExpectedToken { span, .. } => Diagnostic::new(self.to_string(), Some(*span)),
            ExpectedIdent { span } => Diagnostic::new(self.to_string(), Some(*span)),
            UnexpectedToken { span } => Diagnostic::new(self.to_string(), Some(*span)),
            EmptyProgram => Diagnostic::new(self.to_string(), None),
            TooManyParams { span, .. } => Diagnostic::new(self.to_string(), Some(*span)),
            TooManyArgs { span, .. } => Diagnostic::new(self.to_string(), Some(*span)),
        }
    }
}
