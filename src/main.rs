use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use deasciifier::engine::Deasciifier;
use deasciifier::errors::{ExitCode, InputError};
use deasciifier::logging;
use deasciifier::overlay::{CorrectionList, ExclusionSet};
use deasciifier::pipeline::{self, Destination, Pipeline};

/// Restore Turkish diacritics to ASCII-typed text.
#[derive(Parser)]
#[command(name = "deasciify", version, about)]
struct Cli {
    /// Input text files (reads stdin if none given)
    files: Vec<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Rewrite the input files in place
    #[arg(long)]
    in_place: bool,

    /// Context width considered on each side of a character
    #[arg(long, default_value_t = deasciifier::DEFAULT_CONTEXT_SIZE)]
    context_size: usize,

    /// Also strip accents the pattern evidence contradicts
    #[arg(long)]
    aggressive: bool,

    /// File with words to exclude from correction, one per line
    #[arg(long, value_name = "FILE")]
    exclusions: Option<PathBuf>,

    /// File with fixed-phrase corrections, wrong<TAB>right per line
    #[arg(long, value_name = "FILE")]
    corrections: Option<PathBuf>,

    /// Disable the exclusion and correction overlays entirely
    #[arg(long, conflicts_with_all = ["exclusions", "corrections"])]
    no_overlays: bool,

    /// Enable verbose (debug) console output
    #[arg(long)]
    verbose: bool,

    /// Suppress all console output except errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,

    /// Custom log file path (default: ~/.cache/turkish-deasciifier/logs/deasciify.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // _guard must live until program exit to flush the log file
    let _guard = logging::init(cli.quiet, cli.verbose, cli.log_file.as_deref());

    log_system_info();

    if let Err(err) = run_app(cli) {
        let code = ExitCode::from_error(&err);

        // Log full error chain to file for post-mortem
        error!("Fatal error (exit code {code}): {err:#}");

        // User-friendly message to console (tracing handles this via the
        // error! macro above, but also print the top-level for clarity)
        eprintln!("Error: {err}");

        std::process::exit(code);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    if cli.in_place && cli.files.is_empty() {
        anyhow::bail!("--in-place requires at least one input file");
    }

    let engine = Deasciifier::new(cli.context_size, cli.aggressive)
        .context("Invalid engine configuration")?;
    info!(
        context_size = engine.context_size(),
        aggressive = engine.is_aggressive(),
        "Engine configured"
    );

    let pipeline = if cli.no_overlays {
        Pipeline::bare(engine)
    } else {
        let exclusions = match &cli.exclusions {
            Some(path) => ExclusionSet::from_lines(&read_table_file(path)?),
            None => ExclusionSet::default(),
        };
        let corrections = match &cli.corrections {
            Some(path) => CorrectionList::from_lines(&read_table_file(path)?)
                .with_context(|| format!("In correction file {}", path.display()))?,
            None => CorrectionList::default(),
        };
        debug!(
            exclusions = exclusions.len(),
            corrections = corrections.len(),
            "Overlays loaded"
        );
        Pipeline::new(engine, exclusions, corrections)
    };

    let destination = if cli.in_place {
        Destination::InPlace
    } else {
        match cli.output {
            Some(path) => Destination::File(path),
            None => Destination::Stdout,
        }
    };

    pipeline::run(&pipeline, &cli.files, &destination)
}

fn read_table_file(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| InputError::TableRead {
            path: path.display().to_string(),
            source: e,
        })
        .map_err(Into::into)
}

/// Log system info at startup for diagnostics.
fn log_system_info() {
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "System info"
    );
}
