//! Initial (zero-coverage) enthalpy of adsorption from calorimetry.

use ps_core::{PsError, PsResult, polynomial_eval, polynomial_fit};
use ps_isotherm::{Branch, PointIsotherm};
use tracing::debug;

/// Options for the initial enthalpy estimates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnthalpyOptions {
    /// Only points with pressure strictly below this are used.
    pub max_range: Option<f64>,
    /// Polynomial degree for [`initial_enthalpy_polynomial`].
    pub degree: usize,
    /// Fraction of the maximum loading, from zero, that the polynomial is
    /// fitted over.
    pub low_loading_fraction: f64,
}

impl Default for EnthalpyOptions {
    fn default() -> Self {
        Self {
            max_range: None,
            degree: 2,
            low_loading_fraction: 0.5,
        }
    }
}

/// Polynomial extrapolation of enthalpy to zero loading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnthalpyFit {
    pub initial_enthalpy: f64,
    /// Lowest order first, in enthalpy per loading unit powers.
    pub coefficients: Vec<f64>,
    pub points_used: usize,
}

/// Finite `(loading, enthalpy)` pairs of the adsorption branch, sorted by
/// loading.
fn enthalpy_pairs(isotherm: &PointIsotherm, max_range: Option<f64>) -> PsResult<Vec<(f64, f64)>> {
    let enthalpy = isotherm
        .enthalpy(Branch::Adsorption, max_range)
        .ok_or_else(|| PsError::calculation("isotherm has no enthalpy data"))?;
    let loading = isotherm.loading(Branch::Adsorption, max_range);

    let mut pairs: Vec<(f64, f64)> = loading
        .into_iter()
        .zip(enthalpy)
        .filter(|(n, h)| n.is_finite() && h.is_finite())
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(pairs)
}

/// Enthalpy recorded at the lowest-loading adsorption point.
pub fn initial_enthalpy_point(isotherm: &PointIsotherm, options: &EnthalpyOptions) -> PsResult<f64> {
    let pairs = enthalpy_pairs(isotherm, options.max_range)?;
    pairs
        .first()
        .map(|(_, h)| *h)
        .ok_or_else(|| PsError::calculation("no finite enthalpy points on the adsorption branch"))
}

/// Least-squares polynomial of enthalpy against loading over the low-loading
/// part of the branch, evaluated at zero loading.
pub fn initial_enthalpy_polynomial(
    isotherm: &PointIsotherm,
    options: &EnthalpyOptions,
) -> PsResult<EnthalpyFit> {
    let pairs = enthalpy_pairs(isotherm, options.max_range)?;
    let n_max = pairs.last().map(|(n, _)| *n).unwrap_or(0.0);
    let cutoff = options.low_loading_fraction.clamp(0.0, 1.0) * n_max;

    let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().filter(|(n, _)| *n <= cutoff).unzip();
    if x.len() < options.degree + 1 {
        return Err(PsError::calculation(format!(
            "degree {} polynomial needs {} points, found {} below loading {cutoff}",
            options.degree,
            options.degree + 1,
            x.len()
        )));
    }

    let coefficients = polynomial_fit(&x, &y, options.degree)
        .ok_or_else(|| PsError::calculation("enthalpy polynomial fit failed"))?;
    let initial_enthalpy = polynomial_eval(&coefficients, 0.0);
    debug!(?coefficients, points = x.len(), initial_enthalpy, "initial enthalpy fit");

    Ok(EnthalpyFit {
        initial_enthalpy,
        coefficients,
        points_used: x.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_isotherm::{IsothermInfo, IsothermPoint, IsothermUnits};

    fn calorimetry(enthalpy: impl Fn(f64) -> f64) -> PointIsotherm {
        let points = (1..=20)
            .map(|i| {
                let p = 0.05 * i as f64;
                let n = 3.0 * p / (1.0 + p);
                IsothermPoint::new(p, n).with_enthalpy(enthalpy(n))
            })
            .collect();
        let info = IsothermInfo::new("HKUST-1", "1", "carbon dioxide", 303.0);
        PointIsotherm::new(points, info, IsothermUnits::default()).unwrap()
    }

    #[test]
    fn polynomial_recovers_intercept() {
        let iso = calorimetry(|n| 32.0 - 4.0 * n + 0.5 * n * n);
        let fit = initial_enthalpy_polynomial(&iso, &EnthalpyOptions::default()).unwrap();
        assert!((fit.initial_enthalpy - 32.0).abs() < 1e-8);
        assert_eq!(fit.coefficients.len(), 3);
    }

    #[test]
    fn point_method_takes_lowest_loading() {
        let iso = calorimetry(|n| 30.0 - n);
        let h = initial_enthalpy_point(&iso, &EnthalpyOptions::default()).unwrap();
        let n0 = 3.0 * 0.05 / 1.05;
        assert!((h - (30.0 - n0)).abs() < 1e-12);
    }

    #[test]
    fn missing_enthalpy_column() {
        let points = vec![IsothermPoint::new(0.1, 1.0), IsothermPoint::new(0.2, 1.5)];
        let info = IsothermInfo::new("x", "1", "nitrogen", 77.0);
        let iso = PointIsotherm::new(points, info, IsothermUnits::default()).unwrap();
        assert!(matches!(
            initial_enthalpy_point(&iso, &EnthalpyOptions::default()),
            Err(PsError::Calculation { .. })
        ));
    }

    #[test]
    fn too_few_points_for_degree() {
        let iso = calorimetry(|n| 30.0 - n);
        let options = EnthalpyOptions {
            max_range: Some(0.12),
            ..EnthalpyOptions::default()
        };
        // fewer than three points remain below p = 0.12
        assert!(matches!(
            initial_enthalpy_polynomial(&iso, &options),
            Err(PsError::Calculation { .. })
        ));
    }

    #[test]
    fn non_finite_values_are_discarded() {
        let iso = calorimetry(|n| if n < 0.2 { f64::NAN } else { 25.0 });
        let h = initial_enthalpy_point(&iso, &EnthalpyOptions::default()).unwrap();
        assert_eq!(h, 25.0);
    }
}
