use lsfit::app::pipeline::run_fit_with_samples;
use lsfit::error::FitError;
use lsfit::fit::{fit, fit_with_quality};
use lsfit::io::parse_samples;
use lsfit::report::format_fit_report;
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Least-squares `[intercept, slope]` via SVD of the `[1, x]` design matrix.
fn svd_line(x: &[f64], y: &[f64]) -> (f64, f64) {
    let design = DMatrix::from_fn(x.len(), 2, |i, j| if j == 0 { 1.0 } else { x[i] });
    let rhs = DVector::from_column_slice(y);
    let beta = design.svd(true, true).solve(&rhs, 1e-12).unwrap();
    (beta[0], beta[1])
}

fn noisy_line(rng: &mut StdRng, n: usize, slope: f64, intercept: f64) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-50.0..50.0)).collect();
    let y = x
        .iter()
        .map(|&xi| slope * xi + intercept + rng.gen_range(-3.0..3.0))
        .collect();
    (x, y)
}

#[test]
fn closed_form_agrees_with_svd_least_squares() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [2, 3, 10, 250] {
        let (x, y) = noisy_line(&mut rng, n, 1.75, -4.0);
        let got = fit(&x, &y).unwrap();
        let (b, m) = svd_line(&x, &y);
        assert!((got.slope - m).abs() < 1e-8, "n={n}: slope {} vs {m}", got.slope);
        assert!((got.intercept - b).abs() < 1e-8, "n={n}: intercept {} vs {b}", got.intercept);
        assert!(got.r_squared <= 1.0 + 1e-12, "n={n}: r_squared {}", got.r_squared);
    }
}

#[test]
fn r_squared_matches_squared_correlation() {
    let mut rng = StdRng::seed_from_u64(11);
    let (x, y) = noisy_line(&mut rng, 100, -0.5, 2.0);
    let (got, quality) = fit_with_quality(&x, &y).unwrap();

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let sxy: f64 = x.iter().zip(&y).map(|(a, b)| (a - mx) * (b - my)).sum();
    let sxx: f64 = x.iter().map(|a| (a - mx).powi(2)).sum();
    let syy: f64 = y.iter().map(|b| (b - my).powi(2)).sum();
    let r2 = sxy * sxy / (sxx * syy);

    assert!((got.r_squared - r2).abs() < 1e-9);
    assert!((quality.sst - syy).abs() < 1e-6 * syy);
}

#[test]
fn repeated_fits_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let (x, y) = noisy_line(&mut rng, 64, 3.0, 0.25);
    let first = fit(&x, &y).unwrap();
    for _ in 0..5 {
        let again = fit(&x, &y).unwrap();
        assert_eq!(first.slope.to_bits(), again.slope.to_bits());
        assert_eq!(first.intercept.to_bits(), again.intercept.to_bits());
        assert_eq!(first.r_squared.to_bits(), again.r_squared.to_bits());
    }
}

#[test]
fn text_input_to_report() {
    let text = "# x y\n1 2\n2 1\n3 4\n4 3\n5 5\n";
    let samples = parse_samples(text.as_bytes(), None).unwrap();
    let run = run_fit_with_samples(&samples).unwrap();
    assert_eq!(
        format_fit_report(&run.fit),
        "Linear Equation: y = 0.8000x + 0.6000\nR^2 (Coefficient of Determination): 0.6400"
    );
}

#[test]
fn documented_examples() {
    let report = |x: &[f64], y: &[f64]| format_fit_report(&fit(x, y).unwrap());

    assert_eq!(
        report(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]),
        "Linear Equation: y = 2.0000x + 0.0000\nR^2 (Coefficient of Determination): 1.0000"
    );
    assert_eq!(
        report(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
        "Linear Equation: y = 1.0000x + 0.0000\nR^2 (Coefficient of Determination): 1.0000"
    );
    assert_eq!(
        report(&[1.0, 2.0], &[5.0, 5.0]),
        "Linear Equation: y = 0.0000x + 5.0000\nR^2 (Coefficient of Determination): 1.0000"
    );

    assert!(matches!(
        fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
        Err(FitError::DegenerateInput(_))
    ));
    assert!(matches!(
        fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(FitError::InvalidInput(_))
    ));
}

#[test]
fn vertical_line_from_text_is_degenerate() {
    let samples = parse_samples("2 1\n2 5\n2 9\n".as_bytes(), None).unwrap();
    let err = run_fit_with_samples(&samples).unwrap_err();
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn timestamp_scale_x_from_text() {
    let text = "1700000000 2\n1700000001 1\n1700000002 4\n1700000003 3\n1700000004 5\n";
    let samples = parse_samples(text.as_bytes(), None).unwrap();
    let run = run_fit_with_samples(&samples).unwrap();
    assert!((run.fit.slope - 0.8).abs() < 1e-9, "slope {}", run.fit.slope);
    assert!((run.fit.r_squared - 0.64).abs() < 1e-9, "r_squared {}", run.fit.r_squared);
    assert!(run.residuals.iter().all(|r| r.residual.abs() < 1.5));
}
