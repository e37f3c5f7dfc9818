//! Wires the scanner, parser, and code generator together and owns the
//! driver's error-to-exit-code contract (see spec.md §6-§7).

mod cli;
mod error;

pub use cli::Cli;
pub use error::DriverError;

use error::fatal;

/// Compiles `source` into x86-64 Intel-syntax assembly text. `main` must
/// appear somewhere among the source's function definitions or this
/// returns `DriverError::NoMain` before code generation runs.
pub fn compile(source: &str) -> Result<String, DriverError> {
    compile_with_dumps(source, false, false)
}

/// Same as [`compile`], additionally printing the scanned tokens and/or
/// parsed AST to stderr as they become available. Neither affects stdout
/// or the exit code contract.
pub fn compile_with_dumps(
    source: &str,
    dump_tokens: bool,
    dump_ast: bool,
) -> Result<String, DriverError> {
    let lexed = tinyc_lex::tokenize(source).map_err(|e| fatal(source, e))?;
    if dump_tokens {
        eprintln!("{:#?}", lexed.tokens);
    }

    let program = tinyc_par::Parser::new(lexed)
        .parse()
        .map_err(|e| fatal(source, e))?;
    if dump_ast {
        eprintln!("{:#?}", program);
    }
    if program.find_main().is_none() {
        return Err(DriverError::NoMain);
    }

    let asm = tinyc_gen::generate(&program).map_err(|e| fatal(source, e))?;
    Ok(asm)
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
