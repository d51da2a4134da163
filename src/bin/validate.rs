//! fatelf-validate: check every FatELF format invariant.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Validate a container: magic, version, reserved bytes, table ids,
/// alignment, size bounds, and per-record ELF agreement.
#[derive(Parser, Debug)]
#[command(name = "fatelf-validate", version, about)]
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
            eprintln!("fatelf-validate: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let header = fatelf::ops::validate(&args.input)
        .with_context(|| format!("validating '{}'", args.input.display()))?;
    tracing::debug!(records = header.records.len(), "container is valid");
    Ok(())
}
