use clap::Parser as _;
use std::io::Write;
use std::process::ExitCode;
use tinyc_drv::{compile_with_dumps, init_tracing, Cli, DriverError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DriverError> {
    // `try_parse` rather than `parse`: a missing/extra argument must flow
    // through the same exit(1) path as every other fatal condition, not
    // clap's own exit(2) default (spec.md §6: "If argc ≠ 2, exit code 1").
    let cli = Cli::try_parse().map_err(|e| DriverError::Usage(e.to_string()))?;
    init_tracing();

    let asm = compile_with_dumps(&cli.source, cli.dump_tokens, cli.dump_ast)?;
    write!(std::io::stdout(), "{asm}")?;
    Ok(())
}
