//! The injectable fitter seam and the built-in Levenberg–Marquardt fitter.

use crate::error::{FitError, FitResult};
use crate::lm::{LmConfig, lm_solve};
use crate::model::IsothermModel;
use nalgebra::DVector;
use tracing::debug;

/// Parameters produced by a fitter.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedParams {
    /// Values in [`IsothermModel::param_names`] order.
    pub values: Vec<f64>,
    /// Root-mean-square loading residual.
    pub rmse: f64,
    pub iterations: usize,
}

/// Fits an analytic model to `(pressure, loading)` data.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait ModelFitter: Send + Sync {
    fn name(&self) -> &str;

    /// Fit `model`. Data is sorted by increasing pressure and finite.
    fn fit(&self, model: IsothermModel, pressure: &[f64], loading: &[f64]) -> FitResult<FittedParams>;
}

/// Levenberg–Marquardt fitter.
///
/// Positive parameters are optimised through their logarithm, which keeps
/// them positive without bounds handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenbergMarquardt {
    pub config: LmConfig,
}

impl LevenbergMarquardt {
    pub fn new(config: LmConfig) -> Self {
        Self { config }
    }
}

fn to_internal(model: IsothermModel, params: &[f64]) -> DVector<f64> {
    DVector::from_iterator(
        params.len(),
        params.iter().enumerate().map(|(i, &v)| {
            if model.is_positive(i) {
                v.max(f64::MIN_POSITIVE).ln()
            } else {
                v
            }
        }),
    )
}

fn to_params(model: IsothermModel, x: &DVector<f64>) -> Vec<f64> {
    x.iter()
        .enumerate()
        .map(|(i, &v)| if model.is_positive(i) { v.exp() } else { v })
        .collect()
}

impl ModelFitter for LevenbergMarquardt {
    fn name(&self) -> &str {
        "levenberg-marquardt"
    }

    fn fit(&self, model: IsothermModel, pressure: &[f64], loading: &[f64]) -> FitResult<FittedParams> {
        let n_params = model.param_count();
        if pressure.len() != loading.len() {
            return Err(FitError::InsufficientData {
                what: format!(
                    "{} pressures but {} loadings",
                    pressure.len(),
                    loading.len()
                ),
            });
        }
        if pressure.len() < n_params + 1 {
            return Err(FitError::InsufficientData {
                what: format!(
                    "{model} has {n_params} parameters, got {} points",
                    pressure.len()
                ),
            });
        }

        let guess = model.initial_guess(pressure, loading);
        debug!(%model, ?guess, "initial guess");

        let residual = |x: &DVector<f64>| {
            let params = to_params(model, x);
            DVector::from_iterator(
                pressure.len(),
                pressure
                    .iter()
                    .zip(loading)
                    .map(|(&p, &n)| model.loading(&params, p) - n),
            )
        };

        let result = lm_solve(to_internal(model, &guess), residual, &self.config)?;
        let values = to_params(model, &result.x);
        if values.iter().any(|v| !v.is_finite()) {
            return Err(FitError::Numeric {
                what: format!("{model} fit produced non-finite parameters {values:?}"),
            });
        }

        let rmse = (result.sse / pressure.len() as f64).sqrt();
        debug!(%model, ?values, rmse, iterations = result.iterations, "fit converged");
        Ok(FittedParams {
            values,
            rmse,
            iterations: result.iterations,
        })
    }
}
