//! fatelf-info: describe a FatELF container's index.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Print the container's version, records, and junk note.
#[derive(Parser, Debug)]
#[command(name = "fatelf-info", version, about)]
struct Args {
    /// Input FatELF file
    input: PathBuf,

    /// Emit the report as JSON instead of text
    #[arg(short, long)]
    json: bool,

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
            eprintln!("fatelf-info: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let report = fatelf::ops::info(&args.input)
        .with_context(|| format!("reading '{}'", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}: {report}", args.input.display());
    }
    Ok(())
}
