//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (the two-line report is a stable contract)

use crate::domain::{DatasetStats, FitQuality, FitResult, Residual};

/// The two-line report: fitted equation and R², four decimals each.
pub fn format_fit_report(fit: &FitResult) -> String {
    format!(
        "Linear Equation: y = {}x + {}\nR^2 (Coefficient of Determination): {}",
        fmt4(fit.slope),
        fmt4(fit.intercept),
        fmt4(fit.r_squared),
    )
}

/// Dataset stats and residual diagnostics.
pub fn format_summary(stats: &DatasetStats, quality: &FitQuality) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Points: n={} | x=[{:.4}, {:.4}] | y=[{:.4}, {:.4}]\n",
        stats.n_points, stats.x_min, stats.x_max, stats.y_min, stats.y_max
    ));
    out.push_str(&format!(
        "Diagnostics: SSR={:.6} SST={:.6} RMSE={:.6}\n",
        quality.ssr, quality.sst, quality.rmse
    ));
    if quality.sst == 0.0 {
        out.push_str("  (all y values identical; R^2 reported as 1.0)\n");
    }

    out
}

/// Per-sample residual table.
pub fn format_residual_table(rows: &[Residual]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>12} {:>12} {:>12} {:>12}\n", "x", "y", "y_fit", "residual").trim_end());
    out.push('\n');

    out.push_str(format!("{:->12} {:->12} {:->12} {:->12}\n", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:>12} {:>12} {:>12} {:>12}\n",
                fmt4(r.sample.x),
                fmt4(r.sample.y),
                fmt4(r.y_fit),
                fmt4(r.residual),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Four decimals, without the `-0.0000` that tiny negative round-off would print.
fn fmt4(v: f64) -> String {
    let s = format!("{v:.4}");
    if s == "-0.0000" { "0.0000".to_string() } else { s }
}
