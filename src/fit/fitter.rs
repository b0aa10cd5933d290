//! Closed-form ordinary least squares for a straight line.
//!
//! Given samples `(x_i, y_i)`, `i = 1..n`, we solve
//!
//! ```text
//! minimize Σ (y_i - (m·x_i + b))^2
//! ```
//!
//! whose normal equations give
//!
//! ```text
//! m = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! b = (Σy − m·Σx) / n
//! ```
//!
//! Both passes are O(n): one to accumulate the sums, one for the residual and
//! total sums of squares. Both run on values shifted by the first sample (see
//! [`LineSums`]); the slope is shift-invariant and only the intercept is moved
//! back to raw coordinates.
//!
//! Edge cases are explicit:
//! - all x identical: the denominator is zero, the slope is undefined and we
//!   return [`FitError::DegenerateInput`]
//! - all y identical: `sst = 0` and R² would be `0/0`; we report `1.0`
//!   (a perfect fit to a constant)

use log::{debug, warn};

use crate::domain::{DatasetStats, FitQuality, FitResult, Sample};
use crate::error::FitError;
use crate::math::LineSums;

/// Fit `y = m·x + b` to two equal-length sequences.
pub fn fit(x: &[f64], y: &[f64]) -> Result<FitResult, FitError> {
    fit_with_quality(x, y).map(|(fit, _)| fit)
}

/// Fit a line to a list of samples, returning the dataset stats gathered in the same pass.
pub fn fit_samples(samples: &[Sample]) -> Result<(FitResult, FitQuality, DatasetStats), FitError> {
    let (x, y): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.y)).unzip();
    let (fit, quality, sums) = fit_sums(&x, &y)?;
    let stats = sums
        .stats()
        .ok_or_else(|| FitError::InvalidInput("no samples".to_string()))?;
    Ok((fit, quality, stats))
}

/// Fit a line and return the residual diagnostics computed alongside R².
pub fn fit_with_quality(x: &[f64], y: &[f64]) -> Result<(FitResult, FitQuality), FitError> {
    fit_sums(x, y).map(|(fit, quality, _)| (fit, quality))
}

fn fit_sums(x: &[f64], y: &[f64]) -> Result<(FitResult, FitQuality, LineSums), FitError> {
    validate(x, y)?;

    let sums = LineSums::from_slices(x, y);
    debug!(
        "sums about ({}, {}): n={} sum_dx={} sum_dy={} sum_dxdy={} sum_dx2={}",
        sums.origin_x, sums.origin_y, sums.n, sums.sum_dx, sums.sum_dy, sums.sum_dxdy, sums.sum_dx2
    );

    if sums.x_is_constant() {
        return Err(FitError::DegenerateInput(format!(
            "all x values are identical ({}); the slope of a vertical line is undefined",
            sums.x_min
        )));
    }
    // x varies, so only overflow or underflow of the squared spread lands here.
    let denom = sums.x_denominator();
    if !denom.is_finite() || denom <= 0.0 {
        return Err(FitError::DegenerateInput(format!(
            "x spread is not representable (n·Σdx² − (Σdx)² = {denom})"
        )));
    }

    let n = sums.n as f64;
    let slope = sums.xy_numerator() / denom;
    let intercept = sums.intercept_for(slope);
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::DegenerateInput(format!(
            "non-finite fit (slope={slope}, intercept={intercept})"
        )));
    }
    debug!("slope={slope} intercept={intercept}");

    let shifted_intercept = (sums.sum_dy - slope * sums.sum_dx) / n;
    let mean_dy = sums.mean_dy();
    let (ssr, sst) = x
        .iter()
        .zip(y)
        .fold((0.0_f64, 0.0_f64), |(ssr, sst), (&xi, &yi)| {
            let dx = xi - sums.origin_x;
            let dy = yi - sums.origin_y;
            let r = slope * dx + shifted_intercept - dy;
            let d = dy - mean_dy;
            (ssr + r * r, sst + d * d)
        });
    debug!("ssr={ssr} sst={sst}");

    let r_squared = if sums.y_is_constant() || sst == 0.0 {
        warn!("all y values are identical (sst = 0); reporting R^2 = 1.0 for a constant fit");
        1.0
    } else {
        1.0 - ssr / sst
    };
    if !r_squared.is_finite() {
        return Err(FitError::DegenerateInput(format!(
            "non-finite R^2 (ssr={ssr}, sst={sst})"
        )));
    }

    let fit = FitResult {
        slope,
        intercept,
        r_squared,
    };
    let quality = FitQuality {
        n: sums.n,
        ssr,
        sst,
        rmse: (ssr / n).sqrt(),
    };
    Ok((fit, quality, sums))
}

fn validate(x: &[f64], y: &[f64]) -> Result<(), FitError> {
    if x.len() != y.len() {
        return Err(FitError::InvalidInput(format!(
            "x has {} values but y has {}; sequences must have equal length",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(FitError::InvalidInput(format!(
            "a line fit needs at least 2 samples, got {}",
            x.len()
        )));
    }
    if let Some(i) = x.iter().position(|v| !v.is_finite()) {
        return Err(FitError::InvalidInput(format!("x[{i}] is not finite ({})", x[i])));
    }
    if let Some(i) = y.iter().position(|v| !v.is_finite()) {
        return Err(FitError::InvalidInput(format!("y[{i}] is not finite ({})", y[i])));
    }
    Ok(())
}
