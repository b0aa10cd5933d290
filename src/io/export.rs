//! Export per-sample results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Residual;
use crate::error::AppError;

/// Write per-sample fitted values and residuals to a CSV file.
pub fn write_residuals_csv(path: &Path, residuals: &[Residual]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_residuals(file, residuals)
}

fn write_residuals<W: Write>(mut out: W, residuals: &[Residual]) -> Result<(), AppError> {
    writeln!(out, "x,y,y_fit,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in residuals {
        writeln!(
            out,
            "{},{},{:.10},{:.10}",
            r.sample.x, r.sample.y, r.y_fit, r.residual
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
