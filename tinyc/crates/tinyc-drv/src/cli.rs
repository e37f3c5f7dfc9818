use clap::Parser;

/// A small ahead-of-time compiler: reads one source program and writes
/// x86-64 Intel-syntax assembly to stdout.
#[derive(Parser, Debug)]
#[command(name = "tinycc", version, about)]
pub struct Cli {
    /// The program text to compile.
    pub source: String,

    /// Print the scanned token sequence to stderr before parsing.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Print the parsed AST to stderr before code generation.
    #[arg(long)]
    pub dump_ast: bool,
}
