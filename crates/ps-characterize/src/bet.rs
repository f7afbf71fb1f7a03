//! BET specific surface area.
//!
//! The adsorption branch is transformed into the BET coordinate
//! `y = p / (n (1 - p))`, which is linear in `p` over the monolayer region:
//!
//! `y = (C - 1) / (n_m C) · p + 1 / (n_m C)`
//!
//! so a straight-line fit `y = a p + b` gives `n_m = 1 / (a + b)` and
//! `C = 1 + a / b`.
//!
//! # Range selection
//!
//! Without explicit limits the fitted window is chosen automatically:
//!
//! 1. Only points up to the maximum of `n (1 - p)` are eligible.
//! 2. A window must contain at least `min_points` consecutive points over
//!    which `y` strictly increases, and its fit must have positive slope
//!    and intercept.
//! 3. The best R² wins. Windows within `r2_tie_tolerance` of it count as
//!    tied; among those the widest wins, then the one starting at the lowest
//!    pressure.

use crate::render::{Diagnostic, DiagnosticRenderer, emit};
use ps_core::constants::AVOGADRO;
use ps_core::{
    AdsorbentMode, LinearFit, PressureMode, PsError, PsResult, ensure_finite, linear_fit,
};
use ps_isotherm::PointIsotherm;
use ps_materials::GasRegistry;
use tracing::{debug, warn};

/// Fewest points a BET fit is ever attempted on.
pub const MIN_BET_POINTS: usize = 3;

/// Options for [`area_bet`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BetOptions {
    /// Relative-pressure limits `(lo, hi)`, inclusive. `None` selects the
    /// range automatically.
    pub limits: Option<(f64, f64)>,
    /// Emit a diagnostic after the calculation.
    pub verbose: bool,
    /// R² difference below which two candidate windows count as equally good.
    pub r2_tie_tolerance: f64,
    /// Smallest automatically selected window.
    pub min_points: usize,
}

impl Default for BetOptions {
    fn default() -> Self {
        Self {
            limits: None,
            verbose: false,
            r2_tie_tolerance: 1e-3,
            min_points: MIN_BET_POINTS,
        }
    }
}

impl BetOptions {
    pub fn with_limits(lo: f64, hi: f64) -> Self {
        Self {
            limits: Some((lo, hi)),
            ..Self::default()
        }
    }
}

/// Outcome of a BET calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetResult {
    /// Specific surface area [m²/g]
    pub area: f64,
    pub c_constant: f64,
    /// Monolayer capacity, in the isotherm's loading unit per gram.
    pub monolayer_loading: f64,
    pub correlation_r2: f64,
    /// Relative pressures of the first and last fitted point.
    pub selected_range: (f64, f64),
    pub slope: f64,
    pub intercept: f64,
    pub selected_points: usize,
}

/// Contiguous run of fitted points, as indices into the usable points.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: usize,
    end: usize,
    fit: LinearFit,
}

impl Window {
    fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// BET area of `isotherm`.
///
/// The isotherm must be in relative pressure mode on a mass basis.
pub fn area_bet(
    isotherm: &PointIsotherm,
    gases: &dyn GasRegistry,
    options: &BetOptions,
    renderer: Option<&dyn DiagnosticRenderer>,
) -> PsResult<BetResult> {
    if let Some((lo, hi)) = options.limits {
        if !(lo.is_finite() && hi.is_finite()) || lo > hi {
            return Err(PsError::parameter(format!(
                "BET limits ({lo}, {hi}) are not an increasing pair"
            )));
        }
    }
    if isotherm.pressure_mode() != PressureMode::Relative {
        return Err(PsError::configuration(
            "BET requires the isotherm in relative pressure mode",
        ));
    }
    if isotherm.adsorbent_mode() != AdsorbentMode::Mass {
        return Err(PsError::configuration(
            "BET requires loadings on a mass basis",
        ));
    }

    let cross_section_nm2 = gases.adsorbate(&isotherm.info().adsorbate)?.cross_section()?;

    let (pressure, loading): (Vec<f64>, Vec<f64>) = isotherm
        .adsorption_points()
        .filter(|pt| pt.pressure > 0.0 && pt.pressure < 1.0 && pt.loading > 0.0)
        .map(|pt| (pt.pressure, pt.loading))
        .unzip();
    let transformed: Vec<f64> = pressure
        .iter()
        .zip(&loading)
        .map(|(p, n)| p / (n * (1.0 - p)))
        .collect();

    let window = match options.limits {
        Some((lo, hi)) => explicit_window(&pressure, &transformed, lo, hi)?,
        None => auto_window(&pressure, &loading, &transformed, options)?,
    };

    let LinearFit { slope, intercept, r2 } = window.fit;
    ensure_finite(slope, "BET slope")?;
    ensure_finite(intercept, "BET intercept")?;
    if slope <= 0.0 {
        return Err(PsError::calculation(format!(
            "BET slope {slope} is not positive, the range is not physical"
        )));
    }
    if intercept <= 0.0 {
        warn!(intercept, "BET intercept is not positive, C constant is meaningless");
    }

    let monolayer_loading = 1.0 / (slope + intercept);
    let c_constant = 1.0 + slope / intercept;
    let monolayer_mol = monolayer_loading * isotherm.loading_unit().factor();
    let area = monolayer_mol * AVOGADRO * cross_section_nm2 * 1e-18;

    let result = BetResult {
        area,
        c_constant,
        monolayer_loading,
        correlation_r2: r2,
        selected_range: (pressure[window.start], pressure[window.end]),
        slope,
        intercept,
        selected_points: window.len(),
    };

    if options.verbose {
        emit(
            renderer,
            Diagnostic::Bet {
                result: &result,
                pressure: &pressure,
                transformed: &transformed,
            },
        );
    }
    Ok(result)
}

fn explicit_window(pressure: &[f64], transformed: &[f64], lo: f64, hi: f64) -> PsResult<Window> {
    let inside: Vec<usize> = (0..pressure.len())
        .filter(|&i| pressure[i] >= lo && pressure[i] <= hi)
        .collect();
    let (Some(&start), Some(&end)) = (inside.first(), inside.last()) else {
        return Err(too_few(0));
    };
    if inside.len() < MIN_BET_POINTS {
        return Err(too_few(inside.len()));
    }

    let x: Vec<f64> = inside.iter().map(|&i| pressure[i]).collect();
    let y: Vec<f64> = inside.iter().map(|&i| transformed[i]).collect();
    let fit = linear_fit(&x, &y)
        .ok_or_else(|| PsError::calculation("BET points in range share one pressure"))?;
    Ok(Window { start, end, fit })
}

fn auto_window(
    pressure: &[f64],
    loading: &[f64],
    transformed: &[f64],
    options: &BetOptions,
) -> PsResult<Window> {
    let min_points = options.min_points.max(MIN_BET_POINTS);
    if pressure.len() < min_points {
        return Err(too_few(pressure.len()));
    }

    // Rouquerol: n (1 - p) must still be increasing.
    let mut domain_end = 0;
    let mut best_term = f64::NEG_INFINITY;
    for (i, (p, n)) in pressure.iter().zip(loading).enumerate() {
        let term = n * (1.0 - p);
        if term > best_term {
            best_term = term;
            domain_end = i;
        }
    }

    let mut candidates = Vec::new();
    for start in 0..=domain_end {
        for end in (start + 1)..=domain_end {
            if transformed[end] <= transformed[end - 1] {
                break;
            }
            if end - start + 1 < min_points {
                continue;
            }
            let Some(fit) = linear_fit(&pressure[start..=end], &transformed[start..=end]) else {
                continue;
            };
            if fit.slope > 0.0 && fit.intercept > 0.0 {
                candidates.push(Window { start, end, fit });
            }
        }
    }

    let best_r2 = candidates
        .iter()
        .map(|w| w.fit.r2)
        .fold(f64::NEG_INFINITY, f64::max);
    let tolerance = options.r2_tie_tolerance.max(0.0);

    // Candidates are generated by increasing start, so the first widest
    // tied window is also the lowest-pressure one.
    let chosen = candidates
        .iter()
        .filter(|w| w.fit.r2 >= best_r2 - tolerance)
        .fold(None::<&Window>, |acc, w| match acc {
            Some(a) if a.len() >= w.len() => Some(a),
            _ => Some(w),
        })
        .copied()
        .ok_or_else(|| {
            PsError::calculation(format!(
                "no BET-consistent range of at least {min_points} points below p = {}",
                pressure[domain_end]
            ))
        })?;

    debug!(
        start = pressure[chosen.start],
        end = pressure[chosen.end],
        points = chosen.len(),
        r2 = chosen.fit.r2,
        candidates = candidates.len(),
        "selected BET window"
    );
    Ok(chosen)
}

fn too_few(found: usize) -> PsError {
    PsError::calculation(format!(
        "BET needs at least {MIN_BET_POINTS} points in range, found {found}"
    ))
}
