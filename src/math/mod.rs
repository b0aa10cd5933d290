//! Mathematical utilities: running sums for the closed-form line fit.

pub mod sums;

pub use sums::*;
