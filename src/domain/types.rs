//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - printed by the report module

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single observation `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fitted line `y = slope * x + intercept`.
///
/// `r_squared` is always defined: when every `y` is identical (total sum of
/// squares is zero) the line fits the constant exactly and `r_squared` is `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl FitResult {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub n: usize,
    /// Residual sum of squares.
    pub ssr: f64,
    /// Total sum of squares around the mean of `y`.
    pub sst: f64,
    pub rmse: f64,
}

/// A per-sample fitted value (used for summaries, plots and exports).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    pub sample: Sample,
    pub y_fit: f64,
    pub residual: f64,
}

/// Summary stats about the samples used for fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// How the fit is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The two-line equation + R² report.
    Text,
    /// Pretty-printed JSON of the fit and its diagnostics.
    Json,
}

/// Where the two-column data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<&PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::Path(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Path(path) => path.display().to_string(),
        }
    }
}

/// A full run's configuration as understood by the app.
///
/// This is derived from CLI flags (plus defaults and `.env`).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input: InputSource,
    /// Column separator; `None` splits on any run of whitespace.
    pub delimiter: Option<char>,
    pub format: OutputFormat,
    pub summary: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_residuals: Option<PathBuf>,
    pub export_fit: Option<PathBuf>,
}

/// A saved fit file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub fit: FitResult,
    pub quality: FitQuality,
    pub stats: DatasetStats,
}
