//! Levenberg–Marquardt least squares with a finite-difference Jacobian.

use crate::error::{FitError, FitResult};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Levenberg–Marquardt configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmConfig {
    /// Maximum accepted-or-rejected iterations
    pub max_iterations: usize,
    /// Relative SSE decrease below which an accepted step counts as converged
    pub ftol: f64,
    /// Absolute SSE below which the fit is exact
    pub sse_floor: f64,
    /// Initial damping
    pub lambda_init: f64,
    /// Damping multiplier on rejection, divisor on acceptance
    pub lambda_factor: f64,
    /// Damping above which no further progress is possible
    pub lambda_max: f64,
    /// Relative finite-difference step
    pub fd_step: f64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            ftol: 1e-10,
            sse_floor: 1e-20,
            lambda_init: 1e-3,
            lambda_factor: 10.0,
            lambda_max: 1e16,
            fd_step: 1e-7,
        }
    }
}

/// Levenberg–Marquardt result.
#[derive(Debug, Clone)]
pub struct LmResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final sum of squared residuals
    pub sse: f64,
    /// Number of iterations
    pub iterations: usize,
}

fn sse(r: &DVector<f64>) -> f64 {
    r.norm_squared()
}

fn jacobian<F>(x: &DVector<f64>, r: &DVector<f64>, residual_fn: &F, step: f64) -> FitResult<DMatrix<f64>>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let mut jac = DMatrix::zeros(r.len(), x.len());
    for j in 0..x.len() {
        let h = step * x[j].abs().max(1.0);
        let mut xh = x.clone();
        xh[j] += h;
        let rh = residual_fn(&xh);
        if rh.iter().any(|v| !v.is_finite()) {
            return Err(FitError::Numeric {
                what: format!("non-finite residual while differentiating parameter {j}"),
            });
        }
        jac.set_column(j, &((rh - r) / h));
    }
    Ok(jac)
}

/// Minimise `‖residual_fn(x)‖²` starting from `x0`.
///
/// Steps that do not lower the SSE (including those producing non-finite
/// residuals) are rejected and the damping raised. Damping growing past
/// `lambda_max` means the current point is a local minimum within
/// floating-point resolution and is returned as converged.
pub fn lm_solve<F>(x0: DVector<f64>, residual_fn: F, config: &LmConfig) -> FitResult<LmResult>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let mut x = x0;
    let mut r = residual_fn(&x);
    let mut cost = sse(&r);
    if !cost.is_finite() {
        return Err(FitError::Numeric {
            what: "non-finite residual at the initial guess".to_string(),
        });
    }

    let mut lambda = config.lambda_init;
    let mut jac = jacobian(&x, &r, &residual_fn, config.fd_step)?;

    for iter in 0..config.max_iterations {
        if cost < config.sse_floor {
            return Ok(LmResult { x, sse: cost, iterations: iter });
        }

        let jt = jac.transpose();
        let jtj = &jt * &jac;
        let g = &jt * &r;

        let mut a = jtj.clone();
        for i in 0..a.nrows() {
            a[(i, i)] += lambda * jtj[(i, i)].max(1e-12);
        }

        let step = a.lu().solve(&(-g));
        let Some(dx) = step else {
            lambda *= config.lambda_factor;
            if lambda > config.lambda_max {
                return Ok(LmResult { x, sse: cost, iterations: iter });
            }
            continue;
        };

        let x_new = &x + &dx;
        let r_new = residual_fn(&x_new);
        let cost_new = sse(&r_new);

        if cost_new.is_finite() && cost_new < cost {
            let rel = (cost - cost_new) / cost;
            x = x_new;
            r = r_new;
            cost = cost_new;
            lambda = (lambda / config.lambda_factor).max(1e-15);
            debug!(iter, sse = cost, lambda, "accepted step");

            if rel < config.ftol {
                return Ok(LmResult { x, sse: cost, iterations: iter + 1 });
            }
            jac = jacobian(&x, &r, &residual_fn, config.fd_step)?;
        } else {
            lambda *= config.lambda_factor;
            if lambda > config.lambda_max {
                return Ok(LmResult { x, sse: cost, iterations: iter + 1 });
            }
        }
    }

    Err(FitError::ConvergenceFailed {
        what: format!(
            "Maximum iterations {} reached, sse = {}",
            config.max_iterations, cost
        ),
    })
}
