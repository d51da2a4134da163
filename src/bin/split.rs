//! fatelf-split: dissect a FatELF container into standalone ELF files.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Write every record to its own file in the current directory.
///
/// Files are named `<basename>-<selector>`, with the shortest selector
/// that uniquely names each record.
#[derive(Parser, Debug)]
#[command(name = "fatelf-split", version, about)]
struct Args {
    /// Input FatELF file
    input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("fatelf=debug")
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fatelf-split: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let pieces = fatelf::ops::split(&args.input)
        .with_context(|| format!("splitting '{}'", args.input.display()))?;
    for piece in &pieces {
        tracing::debug!(path = %piece.display(), "piece written");
    }
    Ok(())
}
