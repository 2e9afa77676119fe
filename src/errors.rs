use thiserror::Error;

// ── Engine errors ────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DeasciifyError {
    #[error("Context size must be at least 1")]
    InvalidContextSize,

    #[error("Region out of bounds: start={start}, len={len}, text has {text_len} characters")]
    RegionOutOfBounds {
        start: usize,
        len: usize,
        text_len: usize,
    },
}

// ── Table loading errors ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Malformed correction entry at line {line}: {reason}")]
    MalformedCorrection { line: usize, reason: &'static str },
}

// ── Input errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Cannot read input file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read table file: {path}")]
    TableRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read from stdin")]
    Stdin(#[source] std::io::Error),
}

// ── Output errors ────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot create output file: {path}")]
    FileCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    WriteFailed(String),
}

// ── Exit codes ───────────────────────────────────────────────────────

pub struct ExitCode;

impl ExitCode {
    pub const SUCCESS: i32 = 0;

    // Input errors (10)
    pub const INPUT: i32 = 10;

    // Table errors (20)
    pub const TABLES: i32 = 20;

    // Engine errors (30)
    pub const ENGINE: i32 = 30;

    // Output errors (40)
    pub const OUTPUT_WRITE: i32 = 40;

    // Unknown (99)
    pub const UNKNOWN: i32 = 99;

    /// Walk the anyhow error chain and return the appropriate exit code.
    pub fn from_error(err: &anyhow::Error) -> i32 {
        for cause in err.chain() {
            if cause.downcast_ref::<InputError>().is_some() {
                return Self::INPUT;
            }
            if cause.downcast_ref::<TableError>().is_some() {
                return Self::TABLES;
            }
            if cause.downcast_ref::<DeasciifyError>().is_some() {
                return Self::ENGINE;
            }
            if cause.downcast_ref::<OutputError>().is_some() {
                return Self::OUTPUT_WRITE;
            }
        }
        Self::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_is_taken_from_the_error_chain() {
        let err = anyhow::Error::from(DeasciifyError::InvalidContextSize)
            .context("while configuring the engine");
        assert_eq!(ExitCode::from_error(&err), ExitCode::ENGINE);

        let err = anyhow::Error::from(TableError::MalformedCorrection {
            line: 3,
            reason: "expected two tab-separated phrases",
        });
        assert_eq!(ExitCode::from_error(&err), ExitCode::TABLES);

        let err = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::from_error(&err), ExitCode::UNKNOWN);
    }
}
