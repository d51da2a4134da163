//! fatelf-verify: check that a target selector names exactly one record.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit 0 if the selector resolves to a unique record, 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "fatelf-verify", version, about)]
struct Args {
    /// Input FatELF file
    input: PathBuf,

    /// Target selector (e.g. "x86_64:linux" or "record0")
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
            eprintln!("fatelf-verify: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let index = fatelf::ops::verify(&args.input, &args.target)
        .with_context(|| format!("verifying '{}'", args.input.display()))?;
    tracing::debug!(index, "target resolved");
    Ok(())
}
