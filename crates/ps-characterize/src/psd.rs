//! Types shared by the micropore and mesopore distributions.

use ps_core::PsError;
use std::fmt;
use std::str::FromStr;

/// Idealised pore shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PoreGeometry {
    Slit,
    Cylinder,
    Sphere,
}

impl PoreGeometry {
    pub fn key(self) -> &'static str {
        match self {
            PoreGeometry::Slit => "slit",
            PoreGeometry::Cylinder => "cylinder",
            PoreGeometry::Sphere => "sphere",
        }
    }
}

impl fmt::Display for PoreGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PoreGeometry {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slit" => Ok(PoreGeometry::Slit),
            "cylinder" => Ok(PoreGeometry::Cylinder),
            "sphere" => Ok(PoreGeometry::Sphere),
            _ => Err(PsError::parameter(format!(
                "pore geometry '{s}' is not one of slit, cylinder, sphere"
            ))),
        }
    }
}

/// A pore-size distribution.
///
/// All arrays share one index and are ordered by increasing width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsdResult {
    /// Pore widths [nm]
    pub pore_widths: Vec<f64>,
    /// Differential pore volume dV/dw [cm³/(g·nm)]
    pub pore_distribution: Vec<f64>,
    /// Pore volume in pores up to each width [cm³/g]
    pub pore_volume_cumulative: Vec<f64>,
    /// Total pore volume [cm³/g]
    pub cumulative_volume: f64,
    /// Method identifier, e.g. "HK" or "BJH".
    pub method: String,
    pub geometry: PoreGeometry,
}

impl PsdResult {
    /// Width of the maximal distribution value; ties go to the smallest width.
    pub fn principal_peak(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for (&w, &d) in self.pore_widths.iter().zip(&self.pore_distribution) {
            if !d.is_finite() {
                continue;
            }
            match best {
                Some((_, bd)) if d <= bd => {}
                _ => best = Some((w, d)),
            }
        }
        best.map(|(w, _)| w)
    }
}
