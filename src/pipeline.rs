//! The full correction pipeline: exclusion scan, engine buffer pass,
//! exclusion restore, fixed-phrase corrections, plus the file/stdin
//! plumbing used by the CLI.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span};

use crate::engine::Deasciifier;
use crate::errors::{InputError, OutputError};
use crate::overlay::{CorrectionList, ExclusionSet};

/// Engine plus overlay configuration for one run.
pub struct Pipeline {
    engine: Deasciifier,
    exclusions: ExclusionSet,
    corrections: CorrectionList,
}

impl Pipeline {
    pub fn new(engine: Deasciifier, exclusions: ExclusionSet, corrections: CorrectionList) -> Self {
        Self {
            engine,
            exclusions,
            corrections,
        }
    }

    /// Engine only, overlays disabled.
    pub fn bare(engine: Deasciifier) -> Self {
        Self {
            engine,
            exclusions: ExclusionSet::empty(),
            corrections: CorrectionList::empty(),
        }
    }

    /// Correct one text: record excluded-word spans, run the engine,
    /// restore the spans, then overwrite the fixed phrases.
    pub fn apply(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let original: Vec<char> = text.chars().collect();
        let spans = self.exclusions.find_spans(&original);

        let corrected = self.engine.deasciify(text);
        let mut buffer: Vec<char> = corrected.chars().collect();

        ExclusionSet::restore(&spans, &original, &mut buffer);
        self.corrections.apply(&mut buffer);

        buffer.into_iter().collect()
    }
}

/// What to do with the corrected text.
pub enum Destination {
    Stdout,
    File(PathBuf),
    InPlace,
}

/// Run the pipeline over the given files (stdin when empty) and write
/// the results to the destination.
#[tracing::instrument(skip_all, fields(files = inputs.len()))]
pub fn run(pipeline: &Pipeline, inputs: &[PathBuf], destination: &Destination) -> Result<()> {
    let run_start = Instant::now();

    if inputs.is_empty() {
        let text = read_stdin()?;
        let output = {
            let _span = info_span!("deasciify", source = "stdin").entered();
            let t0 = Instant::now();
            let out = pipeline.apply(&text);
            info!(
                chars = text.chars().count(),
                changed = count_changes(&text, &out),
                elapsed_secs = format!("{:.3}", t0.elapsed().as_secs_f64()),
                "Text corrected"
            );
            out
        };
        write_destination(destination, &output)?;
        return Ok(());
    }

    // Progress bar only makes sense for a batch.
    let bar = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut combined = String::new();
    for path in inputs {
        if let Some(pb) = &bar {
            pb.set_message(path.display().to_string());
        }

        let _span = info_span!("deasciify", source = %path.display()).entered();
        let text = read_file(path)?;
        let t0 = Instant::now();
        let output = pipeline.apply(&text);
        info!(
            chars = text.chars().count(),
            changed = count_changes(&text, &output),
            elapsed_secs = format!("{:.3}", t0.elapsed().as_secs_f64()),
            "File corrected"
        );

        match destination {
            Destination::InPlace => {
                write_file(path, &output)?;
                info!(path = %path.display(), "Rewritten in place");
            }
            _ => append_output(&mut combined, &output),
        }

        if let Some(pb) = &bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    if !matches!(destination, Destination::InPlace) {
        write_destination(destination, &combined)?;
    }

    info!(
        total_secs = format!("{:.3}", run_start.elapsed().as_secs_f64()),
        "Pipeline complete"
    );
    Ok(())
}

/// Append one file's output to the batch result. A file that does not
/// end in a newline gets one, so the next file starts on a fresh line.
fn append_output(combined: &mut String, text: &str) {
    if !combined.is_empty() && !combined.ends_with('\n') {
        combined.push('\n');
    }
    combined.push_str(text);
}

fn count_changes(before: &str, after: &str) -> usize {
    before
        .chars()
        .zip(after.chars())
        .filter(|(a, b)| a != b)
        .count()
}

fn read_stdin() -> Result<String> {
    debug!("Reading from stdin");
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| InputError::FileRead {
            path: path.display().to_string(),
            source: e,
        })
        .map_err(Into::into)
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .map_err(|e| OutputError::FileCreate {
            path: path.display().to_string(),
            source: e,
        })
        .map_err(Into::into)
}

fn write_destination(destination: &Destination, text: &str) -> Result<()> {
    match destination {
        Destination::Stdout => {
            use std::io::Write;
            std::io::stdout()
                .write_all(text.as_bytes())
                .map_err(|e| OutputError::WriteFailed(e.to_string()))?;
            Ok(())
        }
        Destination::File(path) => {
            write_file(path, text)?;
            info!(path = %path.display(), "Output written");
            Ok(())
        }
        Destination::InPlace => Ok(()),
    }
}
