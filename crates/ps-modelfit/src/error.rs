//! Error types for model fitting.

use ps_core::PsError;
use thiserror::Error;

/// Errors that can occur while fitting a model isotherm.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("Insufficient data: {what}")]
    InsufficientData { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type FitResult<T> = Result<T, FitError>;

impl From<FitError> for PsError {
    fn from(e: FitError) -> Self {
        PsError::Fitting {
            what: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_fitting() {
        let err: PsError = FitError::ConvergenceFailed {
            what: "200 iterations".into(),
        }
        .into();
        assert!(matches!(err, PsError::Fitting { .. }));
        assert!(err.to_string().contains("200 iterations"));
    }
}
