use thiserror::Error;
use tinyc_util::Diagnose;

/// Wraps whatever isn't itself a source-position diagnostic. Every fatal
/// error that *is* about a source position (lexical, syntactic, codegen)
/// is rendered immediately into a plain string via `Diagnose::diagnostic`,
/// so `DriverError` never needs to carry the original source text around.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0}")]
    Fatal(String),

    #[error("no function named 'main' is defined")]
    NoMain,

    /// A missing, extra, or malformed command-line argument, per spec.md
    /// §6 ("If argc ≠ 2, exit code 1 and a message to standard error").
    /// Carries `clap`'s own formatted usage message.
    #[error("{0}")]
    Usage(String),

    #[error("failed to write assembly output: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn fatal<E: Diagnose>(source: &str, err: E) -> DriverError {
    DriverError::Fatal(err.diagnostic().render(source))
}
