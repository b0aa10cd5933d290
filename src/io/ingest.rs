//! Two-column data ingest.
//!
//! This module is responsible for turning a plain-text table into a clean list
//! of `(x, y)` samples that are safe to fit.
//!
//! Format:
//! - one sample per row, exactly two numeric columns
//! - columns separated by whitespace, or by a single `--delimiter` character
//! - blank lines are skipped, `#` starts a comment running to end of line
//!
//! Unlike a best-effort loader we fail on the first bad row: a silently dropped
//! point changes the fit.

use std::fs::File;
use std::io::{BufRead, BufReader};

use log::info;

use crate::domain::{InputSource, Sample};
use crate::error::{AppError, FitError};

/// Open the configured source and parse every row into a [`Sample`].
pub fn load_samples(source: &InputSource, delimiter: Option<char>) -> Result<Vec<Sample>, AppError> {
    let samples = match source {
        InputSource::Stdin => parse_samples(std::io::stdin().lock(), delimiter)?,
        InputSource::Path(path) => {
            let file = File::open(path).map_err(|e| {
                AppError::new(2, format!("Failed to open input '{}': {e}", path.display()))
            })?;
            parse_samples(BufReader::new(file), delimiter)?
        }
    };

    info!("loaded {} samples from {}", samples.len(), source.describe());
    Ok(samples)
}

/// Parse rows from any buffered reader.
pub fn parse_samples<R: BufRead>(reader: R, delimiter: Option<char>) -> Result<Vec<Sample>, FitError> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| FitError::MalformedInput {
            line: line_no,
            message: format!("read error: {e}"),
        })?;

        if let Some(sample) = parse_row(&line, delimiter).map_err(|message| FitError::MalformedInput {
            line: line_no,
            message,
        })? {
            samples.push(sample);
        }
    }

    Ok(samples)
}

/// Parse one row. `Ok(None)` for blank and comment-only lines.
fn parse_row(line: &str, delimiter: Option<char>) -> Result<Option<Sample>, String> {
    let content = strip_comment(line).trim();
    if content.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = match delimiter {
        Some(d) => content.split(d).map(str::trim).collect(),
        None => content.split_whitespace().collect(),
    };

    if fields.len() != 2 {
        return Err(format!("expected 2 columns (x, y), found {}", fields.len()));
    }

    let x = parse_value(fields[0], "x")?;
    let y = parse_value(fields[1], "y")?;
    Ok(Some(Sample::new(x, y)))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_value(token: &str, column: &str) -> Result<f64, String> {
    let v = token
        .parse::<f64>()
        .map_err(|_| format!("invalid {column} value '{token}' (not a number)"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("invalid {column} value '{token}' (not finite)"))
    }
}
