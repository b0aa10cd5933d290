//! Read/write fit JSON files.
//!
//! A fit file is the portable representation of a run:
//! - slope, intercept and R²
//! - residual diagnostics (ssr, sst, rmse)
//! - the x/y ranges of the data it was fitted on
//!
//! The schema is defined by `domain::FitFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{DatasetStats, FitFile, FitQuality, FitResult};
use crate::error::AppError;

pub fn build_fit_file(fit: &FitResult, quality: &FitQuality, stats: &DatasetStats) -> FitFile {
    FitFile {
        tool: "lsfit".to_string(),
        fit: *fit,
        quality: *quality,
        stats: *stats,
    }
}

/// Write a fit JSON file.
pub fn write_fit_json(path: &Path, fit_file: &FitFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, fit_file)
        .map_err(|e| AppError::new(2, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open fit JSON '{}': {e}", path.display())))?;
    let fit_file: FitFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid fit JSON: {e}")))?;
    Ok(fit_file)
}
