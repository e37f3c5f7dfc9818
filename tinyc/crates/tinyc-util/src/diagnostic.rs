//! Fatal diagnostic rendering.
//!
//! This compiler has exactly one error mode (see spec.md §7): a phase
//! hits something it cannot recover from, builds a `Diagnostic`, and the
//! driver renders it by echoing the whole source with a caret under the
//! offending offset, then exits non-zero. There is no warning level and
//! no accumulation of multiple diagnostics.

use crate::Span;

#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Renders `source` followed by a caret line under this diagnostic's
    /// span, mirroring the original compiler's `error_at`: the whole
    /// source is echoed, then spaces up to the offending byte offset,
    /// then a caret and the message.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() * 2);
        out.push_str(source);
        out.push('\n');
        if let Some(span) = self.span {
            out.push_str(&" ".repeat(span.offset));
            out.push_str("^ ");
        }
        out.push_str(&self.message);
        out
    }
}

/// Implemented by each phase's error enum so the driver can render any of
/// them the same way without a phase-specific match.
pub trait Diagnose {
    fn diagnostic(&self) -> Diagnostic;
}
