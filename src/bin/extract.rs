//! fatelf-extract: pull one embedded ELF out of a FatELF container.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract the record named by a target selector into its own file.
#[derive(Parser, Debug)]
#[command(name = "fatelf-extract", version, about)]
struct Args {
    /// Output ELF file
    out: PathBuf,

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
            eprintln!("fatelf-extract: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let rec = fatelf::ops::extract(&args.out, &args.input, &args.target)
        .with_context(|| format!("extracting from '{}'", args.input.display()))?;
    tracing::debug!(offset = rec.offset, size = rec.size, "record extracted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args =
            Args::try_parse_from(["fatelf-extract", "out", "in.fatelf", "x86_64"]).unwrap();
        assert_eq!(args.target, "x86_64");
    }
}
