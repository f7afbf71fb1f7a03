//! Isotherm identity and provenance metadata.

use ps_core::units::{Temperature, k};

/// Metadata describing where an isotherm came from.
///
/// Only the sample identity, the adsorbate and the experimental temperature
/// are consulted by conversions; the remaining fields are carried opaquely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsothermInfo {
    pub sample_name: String,
    pub sample_batch: String,
    /// Adsorbate name or alias as known to the gas registry.
    pub adsorbate: String,
    /// Experimental temperature [K]
    pub t_exp: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    /// Measured (`true`) or simulated/model-derived (`false`).
    #[cfg_attr(feature = "serde", serde(default = "default_is_real"))]
    pub is_real: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: Option<String>,
    /// Activation temperature [°C]
    #[cfg_attr(feature = "serde", serde(default))]
    pub t_act: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub machine: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lab: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub project: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: Option<String>,
}

#[cfg(feature = "serde")]
fn default_is_real() -> bool {
    true
}

impl IsothermInfo {
    pub fn new(
        sample_name: impl Into<String>,
        sample_batch: impl Into<String>,
        adsorbate: impl Into<String>,
        t_exp_k: f64,
    ) -> Self {
        Self {
            sample_name: sample_name.into(),
            sample_batch: sample_batch.into(),
            adsorbate: adsorbate.into(),
            t_exp: t_exp_k,
            id: None,
            is_real: true,
            exp_type: None,
            date: None,
            t_act: None,
            machine: None,
            user: None,
            lab: None,
            project: None,
            comment: None,
        }
    }

    pub fn temperature(&self) -> Temperature {
        k(self.t_exp)
    }
}
