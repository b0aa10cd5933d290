//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> fit -> residuals -> stats
//!
//! The CLI then focuses on presentation (printing, plotting, exports).

use crate::domain::{DatasetStats, FitConfig, FitQuality, FitResult, Residual, Sample};
use crate::error::{AppError, FitError};

/// All computed outputs of a single `lsfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub fit: FitResult,
    pub quality: FitQuality,
    pub stats: DatasetStats,
    pub residuals: Vec<Residual>,
}

/// Execute the full pipeline: read the configured input, then fit it.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let samples = crate::io::load_samples(&config.input, config.delimiter)?;
    Ok(run_fit_with_samples(&samples)?)
}

/// Execute the fitting stages on samples that are already in memory.
pub fn run_fit_with_samples(samples: &[Sample]) -> Result<RunOutput, FitError> {
    let (fit, quality, stats) = crate::fit::fit_samples(samples)?;
    let residuals = crate::report::compute_residuals(samples, &fit);

    Ok(RunOutput {
        fit,
        quality,
        stats,
        residuals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_collects_fit_and_stats() {
        let samples = vec![Sample::new(1.0, 2.0), Sample::new(2.0, 4.0), Sample::new(3.0, 6.0)];
        let run = run_fit_with_samples(&samples).unwrap();

        assert!((run.fit.slope - 2.0).abs() < 1e-12);
        assert_eq!(run.stats.n_points, 3);
        assert_eq!((run.stats.x_min, run.stats.x_max), (1.0, 3.0));
        assert_eq!(run.residuals.len(), 3);
        assert_eq!(run.residuals[2].sample, Sample::new(3.0, 6.0));
        assert!(run.residuals.iter().all(|r| r.residual.abs() < 1e-12));
    }

    #[test]
    fn pipeline_propagates_fit_errors() {
        let err = run_fit_with_samples(&[Sample::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, FitError::InvalidInput(_)));
    }
}
