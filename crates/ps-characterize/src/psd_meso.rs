//! Mesopore size distribution by the BJH and Dollimore–Heal methods.
//!
//! Both walk the branch from high to low pressure. Each pressure step
//! empties the pores whose critical radius `t + r_k` lies between the two
//! pressures, and thins the film in every pore already emptied; the
//! methods differ in how that film correction is accounted.

use crate::psd::{PoreGeometry, PsdResult};
use crate::render::{Diagnostic, DiagnosticRenderer, emit};
use crate::thickness::{ThicknessModel, kelvin_radius};
use ps_core::{AdsorbentMode, PressureMode, PsError, PsResult};
use ps_isotherm::{Branch, PointIsotherm};
use ps_materials::GasRegistry;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Fewest points a mesopore distribution is computed from.
pub const MIN_MESO_POINTS: usize = 3;

/// Mesopore recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MesoPsdMethod {
    /// Barrett–Joyner–Halenda
    Bjh,
    /// Dollimore–Heal
    Dh,
}

impl MesoPsdMethod {
    pub fn key(self) -> &'static str {
        match self {
            MesoPsdMethod::Bjh => "BJH",
            MesoPsdMethod::Dh => "DH",
        }
    }
}

impl fmt::Display for MesoPsdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MesoPsdMethod {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BJH" => Ok(MesoPsdMethod::Bjh),
            "DH" => Ok(MesoPsdMethod::Dh),
            _ => Err(PsError::parameter(format!(
                "mesopore method '{s}' is not one of BJH, DH"
            ))),
        }
    }
}

/// Options for [`psd_mesoporous`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MesoPsdSettings {
    pub psd_model: String,
    pub pore_geometry: String,
    pub branch: String,
    pub thickness_model: String,
    pub verbose: bool,
}

impl Default for MesoPsdSettings {
    fn default() -> Self {
        Self {
            psd_model: "BJH".into(),
            pore_geometry: "cylinder".into(),
            branch: "desorption".into(),
            thickness_model: "Halsey".into(),
            verbose: false,
        }
    }
}

/// Mesopore size distribution of `isotherm`.
pub fn psd_mesoporous(
    isotherm: &PointIsotherm,
    gases: &dyn GasRegistry,
    settings: &MesoPsdSettings,
    renderer: Option<&dyn DiagnosticRenderer>,
) -> PsResult<PsdResult> {
    let method: MesoPsdMethod = settings.psd_model.parse()?;
    let geometry: PoreGeometry = settings.pore_geometry.parse()?;
    if geometry != PoreGeometry::Cylinder {
        return Err(PsError::parameter(format!(
            "{method} is only implemented for cylindrical pores, not {geometry}"
        )));
    }
    let branch: Branch = settings.branch.parse()?;
    let thickness: ThicknessModel = settings.thickness_model.parse()?;

    if isotherm.pressure_mode() != PressureMode::Relative {
        return Err(PsError::configuration(
            "mesopore PSD requires the isotherm in relative pressure mode",
        ));
    }
    if isotherm.adsorbent_mode() != AdsorbentMode::Mass {
        return Err(PsError::configuration(
            "mesopore PSD requires loadings on a mass basis",
        ));
    }

    let adsorbate = gases.adsorbate(&isotherm.info().adsorbate)?;
    let molar_volume = adsorbate.liquid_molar_volume()?;
    let surface_tension = adsorbate.surface_tension()?;
    let t_k = isotherm.info().t_exp;
    let mol_per_unit = isotherm.loading_unit().factor();

    // Steps run from high to low pressure.
    let mut points: Vec<(f64, f64)> = isotherm
        .branch_points(branch)
        .filter(|pt| pt.pressure > 0.0 && pt.pressure < 1.0)
        .map(|pt| (pt.pressure, pt.loading * mol_per_unit * molar_volume))
        .collect();
    points.sort_by(|a, b| b.0.total_cmp(&a.0));
    points.dedup_by(|later, earlier| later.0 == earlier.0);
    if points.len() < MIN_MESO_POINTS {
        return Err(PsError::calculation(format!(
            "mesopore PSD needs at least {MIN_MESO_POINTS} usable points, found {}",
            points.len()
        )));
    }

    let film: Vec<f64> = points.iter().map(|(p, _)| thickness.thickness(*p)).collect();
    let kelvin: Vec<f64> = points
        .iter()
        .map(|(p, _)| kelvin_radius(*p, surface_tension, molar_volume, t_k))
        .collect();

    let steps = points.len() - 1;
    let mut widths = Vec::with_capacity(steps);
    let mut volumes = Vec::with_capacity(steps);
    let mut distribution = Vec::with_capacity(steps);

    let mut sum_area = 0.0;
    let mut sum_area_over_r = 0.0;
    let mut sum_length = 0.0;
    for i in 0..steps {
        let dv = points[i].1 - points[i + 1].1;
        let avg_t = 0.5 * (film[i] + film[i + 1]);
        let avg_k = 0.5 * (kelvin[i] + kelvin[i + 1]);
        let avg_r = avg_t + avg_k;
        let dt = film[i] - film[i + 1];
        let dr = (film[i] + kelvin[i]) - (film[i + 1] + kelvin[i + 1]);

        let (r_factor, film_correction) = match method {
            MesoPsdMethod::Bjh => (
                (avg_r / (avg_k + dt)).powi(2),
                dt * avg_t * sum_area_over_r,
            ),
            MesoPsdMethod::Dh => (
                (avg_r / (avg_k + 0.5 * dt)).powi(2),
                2.0 * PI * dt * avg_t * sum_length,
            ),
        };
        let pore_volume = (dv - dt * sum_area + film_correction) * r_factor;

        let area = 2.0 * pore_volume / avg_r;
        sum_area += area;
        sum_area_over_r += area / avg_r;
        sum_length += area / (2.0 * PI * avg_r);

        widths.push(2.0 * avg_r);
        volumes.push(pore_volume);
        distribution.push(pore_volume / (2.0 * dr));
    }

    // Reorder to increasing width.
    widths.reverse();
    volumes.reverse();
    distribution.reverse();
    let pore_volume_cumulative: Vec<f64> = volumes
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect();
    let cumulative_volume = pore_volume_cumulative.last().copied().unwrap_or(0.0);

    debug!(%method, %thickness, steps, cumulative_volume, "mesopore distribution");

    let result = PsdResult {
        pore_widths: widths,
        pore_distribution: distribution,
        pore_volume_cumulative,
        cumulative_volume,
        method: method.key().to_string(),
        geometry,
    };
    if settings.verbose {
        emit(renderer, Diagnostic::Psd { result: &result });
    }
    Ok(result)
}
