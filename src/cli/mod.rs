//! Command-line parsing for the line fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsfit", version, about = "Least-squares straight-line fit (y = mx + b) with R^2")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a line to two-column data and print the equation and R^2.
    Fit(FitArgs),
    /// Print the report of a previously exported fit JSON.
    Show(ShowArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Two-column (x y) data file. Reads standard input when omitted or `-`.
    #[arg(value_name = "FILE", env = "LSFIT_INPUT")]
    pub input: Option<PathBuf>,

    /// Single-character column separator (default: any whitespace).
    #[arg(short = 'd', long)]
    pub delimiter: Option<char>,

    /// Output format for the fit.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Append dataset stats, residual diagnostics and the residual table.
    #[arg(long)]
    pub summary: bool,

    /// Render an ASCII plot of the samples and the fitted line.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-sample fitted values and residuals to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fit (coefficients + diagnostics) to JSON.
    #[arg(long = "export-fit")]
    pub export_fit: Option<PathBuf>,
}

/// Options for showing a saved fit.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Fit JSON file produced by `lsfit fit --export-fit`.
    #[arg(value_name = "JSON")]
    pub fit: PathBuf,
}
