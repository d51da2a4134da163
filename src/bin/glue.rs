//! fatelf-glue: combine ELF binaries into a FatELF container.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Combine ELF binaries for several targets into one FatELF file.
#[derive(Parser, Debug)]
#[command(name = "fatelf-glue", version, about)]
struct Args {
    /// Output FatELF file
    out: PathBuf,

    /// Input ELF binaries, one per target
    #[arg(required = true)]
    bins: Vec<PathBuf>,

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
            eprintln!("fatelf-glue: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let header = fatelf::ops::glue(&args.out, &args.bins)
        .with_context(|| format!("writing '{}'", args.out.display()))?;
    tracing::debug!(records = header.records.len(), "container written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_require_one_input() {
        assert!(Args::try_parse_from(["fatelf-glue", "out"]).is_err());
        let args = Args::try_parse_from(["fatelf-glue", "out", "a", "b"]).unwrap();
        assert_eq!(args.bins.len(), 2);
    }
}
