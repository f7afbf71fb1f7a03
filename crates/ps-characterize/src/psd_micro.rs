//! Micropore size distribution from Horvath–Kawazoe type kernels.

use crate::hk::HkSystem;
use crate::psd::{PoreGeometry, PsdResult};
use crate::render::{Diagnostic, DiagnosticRenderer, emit};
use ps_core::{AdsorbentMode, PressureMode, PsError, PsResult, cumulative_trapezoid, gradient};
use ps_isotherm::{Branch, PointIsotherm};
use ps_materials::{GasRegistry, SolidHkModel};
use ps_modelfit::{IsothermModel, LevenbergMarquardt, fit_model_branch};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Supported micropore kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MicroPsdModel {
    /// Horvath–Kawazoe and its cylinder/sphere extensions.
    Hk,
}

impl MicroPsdModel {
    pub fn key(self) -> &'static str {
        match self {
            MicroPsdModel::Hk => "HK",
        }
    }
}

impl fmt::Display for MicroPsdModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MicroPsdModel {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HK" => Ok(MicroPsdModel::Hk),
            _ => Err(PsError::parameter(format!(
                "micropore model '{s}' is not supported, available: HK"
            ))),
        }
    }
}

/// Options for [`psd_microporous`], as registry/model names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MicroPsdSettings {
    /// Kernel family; `None` is rejected.
    pub psd_model: Option<String>,
    pub pore_geometry: String,
    pub branch: String,
    /// Wall-atom parameter set, see [`SolidHkModel::builtin`].
    pub adsorbent_model: String,
    /// Model isotherm fitted to the branch and used in place of the data.
    pub smoothing_model: Option<String>,
    pub verbose: bool,
}

impl Default for MicroPsdSettings {
    fn default() -> Self {
        Self {
            psd_model: Some("HK".into()),
            pore_geometry: "slit".into(),
            branch: "adsorption".into(),
            adsorbent_model: "Carbon(HK)".into(),
            smoothing_model: None,
            verbose: false,
        }
    }
}

/// Settings after parsing.
#[derive(Debug, Clone)]
struct Resolved {
    model: MicroPsdModel,
    geometry: PoreGeometry,
    branch: Branch,
    solid: SolidHkModel,
    smoothing: Option<IsothermModel>,
}

impl MicroPsdSettings {
    fn resolve(&self) -> PsResult<Resolved> {
        let model = self
            .psd_model
            .as_deref()
            .ok_or_else(|| PsError::parameter("no micropore model specified"))?
            .parse()?;
        let solid = SolidHkModel::find(&self.adsorbent_model)
            .map_err(|e| PsError::parameter(e.to_string()))?;
        let smoothing = self
            .smoothing_model
            .as_deref()
            .map(str::parse::<IsothermModel>)
            .transpose()?;

        Ok(Resolved {
            model,
            geometry: self.pore_geometry.parse()?,
            branch: self.branch.parse()?,
            solid,
            smoothing,
        })
    }
}

/// Micropore size distribution of `isotherm`.
///
/// Every option is validated before the isotherm is inspected. The isotherm
/// must be in relative pressure mode on a mass basis, and the adsorbate must
/// carry HK molecular data and a liquid density.
pub fn psd_microporous(
    isotherm: &PointIsotherm,
    gases: &dyn GasRegistry,
    settings: &MicroPsdSettings,
    renderer: Option<&dyn DiagnosticRenderer>,
) -> PsResult<PsdResult> {
    let resolved = settings.resolve()?;

    if isotherm.pressure_mode() != PressureMode::Relative {
        return Err(PsError::configuration(
            "micropore PSD requires the isotherm in relative pressure mode",
        ));
    }
    if isotherm.adsorbent_mode() != AdsorbentMode::Mass {
        return Err(PsError::configuration(
            "micropore PSD requires loadings on a mass basis",
        ));
    }

    let adsorbate = gases.adsorbate(&isotherm.info().adsorbate)?;
    let system = HkSystem::new(&adsorbate.hk()?, &resolved.solid.atom);
    let molar_volume = adsorbate.liquid_molar_volume()?;

    let smoothed;
    let source = match resolved.smoothing {
        Some(model) => {
            let fitted = fit_model_branch(
                isotherm,
                resolved.branch,
                model,
                &LevenbergMarquardt::default(),
            )?;
            smoothed = fitted.to_point_isotherm(isotherm)?;
            &smoothed
        }
        None => isotherm,
    };

    let t_k = source.info().t_exp;
    let mol_per_unit = source.loading_unit().factor();
    let mut pairs: Vec<(f64, f64)> = Vec::new();
    for pt in source.branch_points(resolved.branch) {
        if !(pt.pressure > 0.0 && pt.pressure < 1.0) {
            debug!(pressure = pt.pressure, "skipping point outside (0, 1)");
            continue;
        }
        let width = system
            .pore_width(resolved.geometry, pt.pressure.ln(), t_k)
            .unwrap_or(f64::NAN);
        if !width.is_finite() {
            warn!(pressure = pt.pressure, geometry = %resolved.geometry, "no pore width for point, dropped");
            continue;
        }
        // liquid-equivalent volume [cm³/g]
        pairs.push((width, pt.loading * mol_per_unit * molar_volume));
    }

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    pairs.dedup_by(|later, earlier| later.0 == earlier.0);
    if pairs.len() < 2 {
        return Err(PsError::calculation(format!(
            "micropore PSD needs at least 2 usable points, found {}",
            pairs.len()
        )));
    }

    let (pore_widths, volume): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    let pore_distribution = gradient(&pore_widths, &volume);
    let pore_volume_cumulative = cumulative_trapezoid(&pore_widths, &pore_distribution);
    let cumulative_volume = pore_volume_cumulative.last().copied().unwrap_or(0.0);

    let result = PsdResult {
        pore_widths,
        pore_distribution,
        pore_volume_cumulative,
        cumulative_volume,
        method: resolved.model.key().to_string(),
        geometry: resolved.geometry,
    };

    if settings.verbose {
        emit(renderer, Diagnostic::Psd { result: &result });
    }
    Ok(result)
}
