//! Line fitting.
//!
//! Responsibilities:
//!
//! - validate the two input sequences
//! - solve the closed-form least-squares line
//! - compute R² and residual diagnostics with an explicit zero-variance policy

pub mod fitter;

pub use fitter::*;
