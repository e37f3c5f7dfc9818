use thiserror::Error;
use tinyc_util::{Diagnose, Diagnostic};

/// Both of these are checked here rather than at parse time, matching the
/// original compiler: the grammar alone can't rule either out, since an
/// assignment target and a `break` outside a loop are both syntactically
/// ordinary statements.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("left value must be a variable")]
    InvalidLvalue,

    #[error("break statement not within a loop")]
    BreakOutsideLoop,
}

impl Diagnose for CodegenError {
    fn diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.to_string(), None)
    }
}
