use thiserror::Error;

/// Failures of the fitting library.
///
/// Every undefined division in the closed-form fit surfaces as one of these
/// variants instead of a NaN or infinity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Input that could not be parsed into `(x, y)` rows.
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },
    /// Length mismatch, too few samples, or non-finite values.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Zero variance in x (vertical line) or a non-finite fit.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

impl FitError {
    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::MalformedInput { .. } => 2,
            FitError::InvalidInput(_) => 3,
            FitError::DegenerateInput(_) => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
