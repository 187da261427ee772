//! Batch files: a count line, then one expression per line.

use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

/// Verdict line for an accepted expression.
pub const VALID: &str = "valida";
/// Verdict line for a rejected expression.
pub const INVALID: &str = "invalida";

/// Options controlling batch output.
#[derive(Clone, Debug, Default)]
pub struct BatchConfig {
    /// Report why each rejected expression failed, on the diagnostic stream.
    pub verbose: bool,
    /// Print valid/invalid totals on the diagnostic stream when done.
    pub summary: bool,
}

/// Totals for one batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Failures that abort a whole batch. Rejected expressions are not errors.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("missing expression count on the first line")]
    MissingCount,
    #[error("invalid expression count '{line}': {source}")]
    InvalidCount {
        line: String,
        source: ParseIntError,
    },
    #[error("cannot write results: {0}")]
    Write(#[from] io::Error),
}

/// Read a batch file, classifying the common I/O failures.
pub fn read_batch_file(path: &Path) -> Result<String, BatchError> {
    std::fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => BatchError::NotFound { path },
            io::ErrorKind::PermissionDenied => BatchError::PermissionDenied { path },
            io::ErrorKind::InvalidData => BatchError::InvalidUtf8 { path },
            _ => BatchError::Read { path, source },
        }
    })
}

/// Split batch text into its expressions.
///
/// The first line holds the count. Each expression is trimmed; if the text
/// runs out before `count` expressions, the missing ones are empty (and so
/// invalid). Lines beyond the count are ignored, and a negative count
/// yields an empty batch.
pub fn parse_batch(text: &str) -> Result<Vec<&str>, BatchError> {
    let mut lines = lines(text);
    let first = lines.next().ok_or(BatchError::MissingCount)?.trim();
    if first.is_empty() {
        return Err(BatchError::MissingCount);
    }
    let count: i64 = first.parse().map_err(|source| BatchError::InvalidCount {
        line: first.to_owned(),
        source,
    })?;
    debug!(count, "batch header");

    let count = usize::try_from(count).unwrap_or(0);
    Ok((0..count)
        .map(|_| lines.next().map_or("", str::trim))
        .collect())
}

/// Lines of `text`, each ended by `\n`, `\r\n` or a lone `\r`.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(is_line_break).unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix(is_line_break))
            .unwrap_or(tail);
        Some(line)
    })
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Validate every expression in `text`, writing one verdict line each to `out`.
///
/// With [`BatchConfig::verbose`], the reason for each rejection goes to
/// `diag` as `<line>: <expression>: <reason>`.
pub fn run_batch(
    text: &str,
    config: &BatchConfig,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<BatchSummary, BatchError> {
    let mut summary = BatchSummary::default();

    for (index, expression) in parse_batch(text)?.into_iter().enumerate() {
        match wff_parse::check(expression) {
            Ok(()) => {
                summary.valid += 1;
                writeln!(out, "{VALID}")?;
            }
            Err(error) => {
                summary.invalid += 1;
                writeln!(out, "{INVALID}")?;
                if config.verbose {
                    // The count occupies line 1.
                    writeln!(diag, "{}: {expression:?}: {error}", index + 2)?;
                }
            }
        }
    }
    out.flush()?;

    if config.summary {
        writeln!(
            diag,
            "{} expressions: {} valid, {} invalid",
            summary.total(),
            summary.valid,
            summary.invalid
        )?;
    }
    info!(valid = summary.valid, invalid = summary.invalid, "batch complete");
    Ok(summary)
}
