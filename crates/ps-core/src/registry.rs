//! Unit registry: the closed set of loading/pressure units and measurement
//! modes an isotherm may be recorded in.
//!
//! Each unit maps to an SI-equivalent scale factor (mol for loading, Pa for
//! pressure). Conversions between two units rescale by
//! `factor(current) / factor(target)`.
//!
//! String forms are parsed through [`FromStr`]; an unknown name is a
//! [`PsError::Configuration`].

use crate::PsError;
use std::fmt;
use std::str::FromStr;

/// Amount-adsorbed units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadingUnit {
    #[cfg_attr(feature = "serde", serde(rename = "mol"))]
    Mol,
    #[cfg_attr(feature = "serde", serde(rename = "mmol"))]
    Mmol,
    /// Gas volume at standard temperature and pressure.
    #[cfg_attr(feature = "serde", serde(rename = "cm3 STP"))]
    Cm3Stp,
}

impl LoadingUnit {
    pub const ALL: [LoadingUnit; 3] = [LoadingUnit::Mol, LoadingUnit::Mmol, LoadingUnit::Cm3Stp];

    /// Moles represented by one unit.
    pub fn factor(self) -> f64 {
        match self {
            LoadingUnit::Mol => 1.0,
            LoadingUnit::Mmol => 1e-3,
            LoadingUnit::Cm3Stp => 4.461e-5,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            LoadingUnit::Mol => "mol",
            LoadingUnit::Mmol => "mmol",
            LoadingUnit::Cm3Stp => "cm3 STP",
        }
    }

    /// Scale factor taking a value in `self` to a value in `target`.
    pub fn scale_to(self, target: LoadingUnit) -> f64 {
        self.factor() / target.factor()
    }
}

impl fmt::Display for LoadingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LoadingUnit {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mol" => Ok(LoadingUnit::Mol),
            "mmol" => Ok(LoadingUnit::Mmol),
            "cm3 stp" | "cm3stp" | "cm3(stp)" | "ccstp" => Ok(LoadingUnit::Cm3Stp),
            _ => Err(PsError::configuration(format!(
                "unit '{s}' is not a loading unit, expected one of {}",
                join_keys(LoadingUnit::ALL.iter().map(|u| u.key()))
            ))),
        }
    }
}

/// Pressure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    #[cfg_attr(feature = "serde", serde(rename = "Pa"))]
    Pa,
    #[cfg_attr(feature = "serde", serde(rename = "kPa"))]
    KPa,
    #[cfg_attr(feature = "serde", serde(rename = "mbar"))]
    Mbar,
    #[cfg_attr(feature = "serde", serde(rename = "bar"))]
    Bar,
    #[cfg_attr(feature = "serde", serde(rename = "atm"))]
    Atm,
    #[cfg_attr(feature = "serde", serde(rename = "torr"))]
    Torr,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 6] = [
        PressureUnit::Pa,
        PressureUnit::KPa,
        PressureUnit::Mbar,
        PressureUnit::Bar,
        PressureUnit::Atm,
        PressureUnit::Torr,
    ];

    /// Pascals represented by one unit.
    pub fn factor(self) -> f64 {
        match self {
            PressureUnit::Pa => 1.0,
            PressureUnit::KPa => 1e3,
            PressureUnit::Mbar => 100.0,
            PressureUnit::Bar => 1e5,
            PressureUnit::Atm => 101_325.0,
            PressureUnit::Torr => 133.322_368,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PressureUnit::Pa => "Pa",
            PressureUnit::KPa => "kPa",
            PressureUnit::Mbar => "mbar",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::Torr => "torr",
        }
    }

    /// Scale factor taking a value in `self` to a value in `target`.
    pub fn scale_to(self, target: PressureUnit) -> f64 {
        self.factor() / target.factor()
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PressureUnit {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pa" => Ok(PressureUnit::Pa),
            "kpa" => Ok(PressureUnit::KPa),
            "mbar" => Ok(PressureUnit::Mbar),
            "bar" => Ok(PressureUnit::Bar),
            "atm" => Ok(PressureUnit::Atm),
            "torr" | "mmhg" => Ok(PressureUnit::Torr),
            _ => Err(PsError::configuration(format!(
                "unit '{s}' is not a pressure unit, expected one of {}",
                join_keys(PressureUnit::ALL.iter().map(|u| u.key()))
            ))),
        }
    }
}

/// Basis the loading is normalised to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AdsorbentMode {
    /// Per gram of adsorbent.
    Mass,
    /// Per cubic centimetre of adsorbent.
    Volume,
}

impl AdsorbentMode {
    pub fn key(self) -> &'static str {
        match self {
            AdsorbentMode::Mass => "mass",
            AdsorbentMode::Volume => "volume",
        }
    }
}

impl fmt::Display for AdsorbentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AdsorbentMode {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mass" => Ok(AdsorbentMode::Mass),
            "volume" => Ok(AdsorbentMode::Volume),
            _ => Err(PsError::configuration(format!(
                "adsorbent mode '{s}' is not one of mass, volume"
            ))),
        }
    }
}

/// Whether pressures are absolute or divided by the saturation pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PressureMode {
    Absolute,
    Relative,
}

impl PressureMode {
    pub fn key(self) -> &'static str {
        match self {
            PressureMode::Absolute => "absolute",
            PressureMode::Relative => "relative",
        }
    }
}

impl fmt::Display for PressureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PressureMode {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(PressureMode::Absolute),
            "relative" => Ok(PressureMode::Relative),
            _ => Err(PsError::configuration(format!(
                "pressure mode '{s}' is not one of absolute, relative"
            ))),
        }
    }
}

/// Outcome of an in-place unit or mode conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Values were rescaled and the recorded unit/mode updated.
    Converted,
    /// The isotherm was already in the requested unit/mode.
    Unchanged,
}

impl Conversion {
    pub fn is_noop(self) -> bool {
        matches!(self, Conversion::Unchanged)
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pressure_scale_round_trip(a in 0usize..6, b in 0usize..6, v in 1e-6_f64..1e6) {
            let from = PressureUnit::ALL[a];
            let to = PressureUnit::ALL[b];
            let back = v * from.scale_to(to) * to.scale_to(from);
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(back, v, tol));
        }

        #[test]
        fn loading_scale_round_trip(a in 0usize..3, b in 0usize..3, v in 1e-6_f64..1e6) {
            let from = LoadingUnit::ALL[a];
            let to = LoadingUnit::ALL[b];
            let back = v * from.scale_to(to) * to.scale_to(from);
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(back, v, tol));
        }
    }
}
