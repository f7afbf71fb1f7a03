//! Adsorption/desorption branch classification.

use ps_core::PsError;
use std::fmt;
use std::str::FromStr;

/// Portion of a measurement sweep a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Branch {
    /// Pressure increasing.
    Adsorption,
    /// Pressure decreasing.
    Desorption,
}

impl Branch {
    pub fn key(self) -> &'static str {
        match self {
            Branch::Adsorption => "adsorption",
            Branch::Desorption => "desorption",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Branch {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ads" | "adsorption" => Ok(Branch::Adsorption),
            "des" | "desorption" => Ok(Branch::Desorption),
            _ => Err(PsError::parameter(format!(
                "branch '{s}' is not one of adsorption, desorption"
            ))),
        }
    }
}

/// Tag each pressure with its branch.
///
/// A point is desorption iff its pressure is strictly below the pressure of
/// the point immediately before it; the first point is always adsorption.
pub fn tag_branches(pressures: &[f64]) -> Vec<Branch> {
    let mut tags = Vec::with_capacity(pressures.len());
    for (i, &p) in pressures.iter().enumerate() {
        let tag = if i > 0 && p < pressures[i - 1] {
            Branch::Desorption
        } else {
            Branch::Adsorption
        };
        tags.push(tag);
    }
    tags
}
