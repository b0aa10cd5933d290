//! Reporting utilities: residuals and formatted output.

pub mod format;

pub use format::*;

use crate::domain::{FitResult, Residual, Sample};

/// Compute fitted values and residuals (`y - y_fit`) for each sample.
pub fn compute_residuals(samples: &[Sample], fit: &FitResult) -> Vec<Residual> {
    samples
        .iter()
        .map(|&sample| {
            let y_fit = fit.predict(sample.x);
            Residual {
                sample,
                y_fit,
                residual: sample.y - y_fit,
            }
        })
        .collect()
}
