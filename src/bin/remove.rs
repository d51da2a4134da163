//! fatelf-remove: drop one record from a FatELF container.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Rewrite a container without the record named by a target selector.
#[derive(Parser, Debug)]
#[command(name = "fatelf-remove", version, about)]
struct Args {
    /// Output FatELF file
    out: PathBuf,

    /// Input FatELF file
    input: PathBuf,

    /// Target selector (e.g. "ppc64:be" or "record1")
    target: String,

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
            eprintln!("fatelf-remove: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let header = fatelf::ops::remove(&args.out, &args.input, &args.target)
        .with_context(|| format!("writing '{}'", args.out.display()))?;
    tracing::debug!(records = header.records.len(), "record removed");
    Ok(())
}
