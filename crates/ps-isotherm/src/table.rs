//! Column-oriented input boundary.
//!
//! Readers of whatever storage format hand the isotherm a table of named
//! numeric columns plus the settings saying which column holds what and in
//! which unit. Nothing here parses a file.

use std::collections::BTreeMap;

/// Named numeric columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColumnTable {
    columns: BTreeMap<String, Vec<f64>>,
}

impl ColumnTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, key: impl Into<String>, values: Vec<f64>) -> Self {
        self.insert(key, values);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, values: Vec<f64>) {
        self.columns.insert(key.into(), values);
    }

    pub fn column(&self, key: &str) -> Option<&[f64]> {
        self.columns.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

/// Which columns to read and how their values are expressed.
///
/// Units and modes are registry names; they are validated when the isotherm
/// is constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IsothermSettings {
    pub loading_key: Option<String>,
    pub pressure_key: Option<String>,
    pub enthalpy_key: Option<String>,
    pub adsorbent_mode: String,
    pub pressure_mode: String,
    pub loading_unit: String,
    pub pressure_unit: String,
}

impl Default for IsothermSettings {
    fn default() -> Self {
        Self {
            loading_key: None,
            pressure_key: None,
            enthalpy_key: None,
            adsorbent_mode: "mass".into(),
            pressure_mode: "absolute".into(),
            loading_unit: "mmol".into(),
            pressure_unit: "bar".into(),
        }
    }
}

impl IsothermSettings {
    /// Settings reading `pressure_key` and `loading_key`, default units.
    pub fn keyed(pressure_key: impl Into<String>, loading_key: impl Into<String>) -> Self {
        Self {
            pressure_key: Some(pressure_key.into()),
            loading_key: Some(loading_key.into()),
            ..Self::default()
        }
    }

    pub fn with_enthalpy_key(mut self, key: impl Into<String>) -> Self {
        self.enthalpy_key = Some(key.into());
        self
    }
}
