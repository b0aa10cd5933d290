//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - observations (`Sample`) and fit outputs (`FitResult`, `FitQuality`, `Residual`)
//! - run configuration (`FitConfig`, `InputSource`, `OutputFormat`)
//! - the exported fit file schema (`FitFile`)

pub mod types;

pub use types::*;
