//! Logging for the `deasciify` binary: a compact console layer gated by
//! the CLI flags, plus a trace-level file for post-mortem diagnostics.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Console level from the CLI flags: `--quiet` keeps errors only,
/// `--verbose` raises to debug, default is info. The flags are mutually
/// exclusive at the clap level; quiet wins if both somehow arrive.
fn console_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize tracing from the CLI flags.
///
/// Returns a `WorkerGuard` that **must** be kept alive for the program's
/// lifetime — dropping it flushes the file writer.
pub fn init(quiet: bool, verbose: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let console = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_filter(EnvFilter::new(console_directive(quiet, verbose)));

    // No usable file sink (read-only home, bad --log-file path): run
    // console-only rather than failing the whole run.
    match file_writer(log_file) {
        Some((writer, guard)) => {
            let file = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new("trace"));

            tracing_subscriber::registry()
                .with(console)
                .with(file)
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(console).init();

            None
        }
    }
}

/// `--log-file PATH` appends to exactly that file; without it, logs roll
/// daily as `deasciify.log` under `~/.cache/turkish-deasciifier/logs/`.
fn file_writer(override_path: Option<&Path>) -> Option<(NonBlocking, WorkerGuard)> {
    let appender = match override_path {
        Some(path) => {
            let dir = match path.parent() {
                Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir).ok()?;
            let name = path.file_name()?.to_string_lossy().into_owned();
            tracing_appender::rolling::never(dir, name)
        }
        None => {
            let dir = dirs::home_dir()?
                .join(".cache")
                .join("turkish-deasciifier")
                .join("logs");
            std::fs::create_dir_all(&dir).ok()?;
            tracing_appender::rolling::daily(dir, "deasciify.log")
        }
    };

    Some(tracing_appender::non_blocking(appender))
}
