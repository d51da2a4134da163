//! fatelf-replace: swap one embedded ELF for a newer build.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Replace the record matching a new ELF's target with that ELF.
///
/// The slot is found by probing the replacement binary itself; no
/// selector is needed.
#[derive(Parser, Debug)]
#[command(name = "fatelf-replace", version, about)]
struct Args {
    /// Output FatELF file
    out: PathBuf,

    /// Input FatELF file
    input: PathBuf,

    /// Replacement ELF binary
    newelf: PathBuf,

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
            eprintln!("fatelf-replace: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let header = fatelf::ops::replace(&args.out, &args.input, &args.newelf)
        .with_context(|| format!("writing '{}'", args.out.display()))?;
    tracing::debug!(records = header.records.len(), "record replaced");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["fatelf-replace", "out", "in", "new.elf"]).unwrap();
        assert_eq!(args.newelf, PathBuf::from("new.elf"));
    }
}
