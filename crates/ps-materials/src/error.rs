//! Registry lookup errors.

use ps_core::PsError;
use thiserror::Error;

/// Result type for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while resolving adsorbates, samples or solids.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No entry matches the query.
    #[error("{kind} '{query}' not found")]
    NotFound { kind: &'static str, query: String },

    /// More than one entry matches where exactly one is required.
    #[error("{count} {kind} entries match '{query}', entries must be unique")]
    Ambiguous {
        kind: &'static str,
        query: String,
        count: usize,
    },

    /// The entry exists but lacks a required property.
    #[error("{kind} '{query}' has no '{property}' property")]
    MissingProperty {
        kind: &'static str,
        query: String,
        property: &'static str,
    },

    /// The requested state lies outside the correlation's validity.
    #[error("Value out of range for {what}")]
    OutOfRange { what: String },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<RegistryError> for PsError {
    fn from(err: RegistryError) -> Self {
        PsError::Lookup {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RegistryError::Ambiguous {
            kind: "sample",
            query: "MCM-41 / b1".into(),
            count: 2,
        };
        assert!(err.to_string().contains("2 sample"));

        let err = RegistryError::MissingProperty {
            kind: "sample",
            query: "Takeda 5A / 1".into(),
            property: "density",
        };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn error_to_ps_error() {
        let err: PsError = RegistryError::NotFound {
            kind: "adsorbate",
            query: "xenon".into(),
        }
        .into();
        assert!(matches!(err, PsError::Lookup { .. }));
    }
}
