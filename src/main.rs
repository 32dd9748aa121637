mod logging;

// Standard Library Imports
use std::{fs, path::PathBuf};

// External Crate Imports
use clap::{ArgAction, Parser};
use isotopes::export;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};

/// Summarizes NIST isotope data as a JSON object of elements, their isotopic compositions, and atomic weights
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The NIST "Atomic Weights and Isotopic Compositions" catalogue, in its linearized ASCII format
    ///
    /// Every record must be exactly six lines, from "Atomic Number" to "Standard Atomic Weight", so any trailing
    /// "Notes = ..." lines in a fresh NIST download need removing first.
    #[arg(default_value = "NIST_isotope_data_2017.txt")]
    input: PathBuf,
    /// Where to write the element summaries
    #[arg(short, long, default_value = "elements.json")]
    output: PathBuf,
    /// Pretty-print the JSON instead of keeping it compact
    #[arg(long)]
    pretty: bool,
    /// Log more detail (can be repeated)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Don't log anything, not even warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose, args.quiet)?;
    debug!(?args, "parsed command-line arguments");
    run(&args)
}

// NOTE: The whole summary is built in memory before the output file is touched, so a bad record never leaves a
// half-written file behind
fn run(args: &Args) -> Result<()> {
    let catalogue = fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;

    let elements = isotopes::process(&catalogue)
        .wrap_err_with(|| format!("failed to parse {}", args.input.display()))?;

    let json = if args.pretty {
        export::to_json_pretty(&elements)
    } else {
        export::to_json(&elements)
    }
    .into_diagnostic()
    .wrap_err("failed to serialize the element summaries")?;

    fs::write(&args.output, json)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", args.output.display()))?;

    info!(
        elements = elements.len(),
        output = %args.output.display(),
        "wrote element summaries"
    );
    Ok(())
}
