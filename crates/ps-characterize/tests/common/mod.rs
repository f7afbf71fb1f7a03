//! Synthetic isotherms shared by the characterisation suites.
#![allow(dead_code)]

use ps_core::units::k;
use ps_core::{AdsorbentMode, LoadingUnit, PressureMode, PressureUnit};
use ps_isotherm::{IsothermInfo, IsothermPoint, IsothermUnits, PointIsotherm};
use ps_materials::{AdsorbateList, GasRegistry};

pub const T_N2: f64 = 77.355;

pub fn relative_units() -> IsothermUnits {
    IsothermUnits {
        loading_unit: LoadingUnit::Mmol,
        pressure_unit: PressureUnit::Bar,
        adsorbent_mode: AdsorbentMode::Mass,
        pressure_mode: PressureMode::Relative,
    }
}

pub fn nitrogen_info(sample: &str) -> IsothermInfo {
    IsothermInfo::new(sample, "ref", "nitrogen", T_N2)
}

pub fn bet_loading(p: f64, n_m: f64, c: f64) -> f64 {
    n_m * c * p / ((1.0 - p) * (1.0 - p + c * p))
}

/// Relative-pressure isotherm from `(p, n)` pairs in mmol/g.
pub fn relative_isotherm(sample: &str, data: impl IntoIterator<Item = (f64, f64)>) -> PointIsotherm {
    let points = data
        .into_iter()
        .map(|(p, n)| IsothermPoint::new(p, n))
        .collect();
    PointIsotherm::new(points, nitrogen_info(sample), relative_units()).unwrap()
}

/// Saturation pressure of nitrogen at 77 K [bar].
pub fn nitrogen_p0_bar() -> f64 {
    AdsorbateList::builtin()
        .saturation_pressure("nitrogen", k(T_N2))
        .unwrap()
        .value
        / 1e5
}

/// MCM-41-like adsorption branch: BET monolayer region for a 400 m²/g
/// surface, a capillary condensation step near p/p0 = 0.4 and a plateau.
///
/// Returns 40 `(p/p0, mmol/g)` pairs from 0.01 to 0.95.
pub fn mcm41_adsorption() -> Vec<(f64, f64)> {
    let (n_m, c) = (4.1, 100.0);
    (0..40)
        .map(|i| {
            let p = 0.01 + 0.94 * i as f64 / 39.0;
            let base = bet_loading(p.min(0.3), n_m, c) + (p - 0.3).max(0.0) * 2.0;
            let condensed = 8.0 / (1.0 + (-(p - 0.4) / 0.015).exp());
            (p, base + condensed)
        })
        .collect()
}

/// Reference BET area of [`mcm41_adsorption`] [m²/g].
pub const MCM41_AREA: f64 = 400.0;
