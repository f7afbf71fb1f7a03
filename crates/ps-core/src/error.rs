use thiserror::Error;

pub type PsResult<T> = Result<T, PsError>;

/// Errors raised by isotherm handling and characterisation.
///
/// Every failure is reported synchronously to the immediate caller; nothing
/// in the workspace retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsError {
    /// Invalid unit, mode or column key, or an isotherm in the wrong basis
    /// for a calculation.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Invalid calculation option (unknown model, geometry, branch...).
    #[error("Parameter error: {what}")]
    Parameter { what: String },

    /// External registry miss or ambiguous match.
    #[error("Lookup error: {what}")]
    Lookup { what: String },

    /// Numerically infeasible result.
    #[error("Calculation error: {what}")]
    Calculation { what: String },

    /// Model fit did not converge.
    #[error("Fitting error: {what}")]
    Fitting { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl PsError {
    pub fn configuration(what: impl Into<String>) -> Self {
        Self::Configuration { what: what.into() }
    }

    pub fn parameter(what: impl Into<String>) -> Self {
        Self::Parameter { what: what.into() }
    }

    pub fn lookup(what: impl Into<String>) -> Self {
        Self::Lookup { what: what.into() }
    }

    pub fn calculation(what: impl Into<String>) -> Self {
        Self::Calculation { what: what.into() }
    }

    pub fn fitting(what: impl Into<String>) -> Self {
        Self::Fitting { what: what.into() }
    }
}
