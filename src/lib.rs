//! `lsfit` library crate.
//!
//! The binary (`lsfit`) is a thin wrapper around this library so that:
//!
//! - the fit is testable without spawning processes
//! - the closed-form fitter is reusable on in-memory data
//!
//! ```
//! let fit = lsfit::fit::fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.r_squared - 1.0).abs() < 1e-12);
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
