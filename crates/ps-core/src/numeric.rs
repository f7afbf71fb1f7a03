use crate::PsError;
use nalgebra::{DMatrix, DVector};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PsError::NonFinite { what, value: v })
    }
}

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: Real,
    pub intercept: Real,
    /// Coefficient of determination.
    pub r2: Real,
}

/// Fit a straight line through `(x, y)` by ordinary least squares.
///
/// Returns `None` for fewer than two points, mismatched lengths, or when all
/// `x` coincide.
pub fn linear_fit(x: &[Real], y: &[Real]) -> Option<LinearFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as Real;
    let mean_x = x.iter().sum::<Real>() / n;
    let mean_y = y.iter().sum::<Real>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx <= 0.0 || !sxx.is_finite() {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // A perfectly flat response is perfectly described by the line.
    let r2 = if syy == 0.0 {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    Some(LinearFit {
        slope,
        intercept,
        r2,
    })
}

/// Least-squares polynomial coefficients, lowest order first.
///
/// Solved through an SVD of the Vandermonde matrix so that badly scaled
/// abscissae degrade gracefully instead of failing outright.
pub fn polynomial_fit(x: &[Real], y: &[Real], degree: usize) -> Option<Vec<Real>> {
    if x.len() != y.len() || x.len() < degree + 1 {
        return None;
    }

    let vandermonde = DMatrix::from_fn(x.len(), degree + 1, |i, j| x[i].powi(j as i32));
    let rhs = DVector::from_column_slice(y);
    let coeffs = vandermonde.svd(true, true).solve(&rhs, 1e-14).ok()?;

    if coeffs.iter().all(|c| c.is_finite()) {
        Some(coeffs.iter().copied().collect())
    } else {
        None
    }
}

/// Evaluate a polynomial given lowest-order-first coefficients.
pub fn polynomial_eval(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Derivative dy/dx on a sorted, strictly increasing abscissa.
///
/// Central differences in the interior, one-sided at both ends.
pub fn gradient(x: &[Real], y: &[Real]) -> Vec<Real> {
    let n = x.len().min(y.len());
    if n < 2 {
        return vec![0.0; n];
    }

    (0..n)
        .map(|i| {
            let (lo, hi) = match i {
                0 => (0, 1),
                _ if i == n - 1 => (n - 2, n - 1),
                _ => (i - 1, i + 1),
            };
            (y[hi] - y[lo]) / (x[hi] - x[lo])
        })
        .collect()
}

/// Running trapezoid integral; the first element is zero.
pub fn cumulative_trapezoid(x: &[Real], y: &[Real]) -> Vec<Real> {
    let n = x.len().min(y.len());
    let mut out = Vec::with_capacity(n);
    let mut acc = 0.0;
    for i in 0..n {
        if i > 0 {
            acc += 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
        }
        out.push(acc);
    }
    out
}

/// Bisection on `[lo, hi]` for `f(x) = target` where `f` is increasing.
///
/// Returns `None` when the target is not bracketed.
pub fn bisect_increasing<F>(f: F, target: Real, lo: Real, hi: Real, iterations: usize) -> Option<Real>
where
    F: Fn(Real) -> Real,
{
    let f_lo = f(lo);
    let f_hi = f(hi);
    if !(f_lo.is_finite() && f_hi.is_finite()) || target < f_lo || target > f_hi {
        return None;
    }

    let mut a = lo;
    let mut b = hi;
    for _ in 0..iterations {
        let mid = 0.5 * (a + b);
        if f(mid) < target {
            a = mid;
        } else {
            b = mid;
        }
    }
    Some(0.5 * (a + b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linear_fit_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.0).collect();
        let fit = linear_fit(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < 1e-12);
        assert!((fit.intercept + 1.0).abs() < 1e-12);
        assert!((fit.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_fit_rejects_degenerate_input() {
        assert!(linear_fit(&[1.0], &[2.0]).is_none());
        assert!(linear_fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(linear_fit(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn polynomial_fit_recovers_quadratic() {
        let x: Vec<f64> = (0..10).map(|i| i as f64 * 0.3).collect();
        let y: Vec<f64> = x.iter().map(|v| 4.0 - 2.0 * v + 0.5 * v * v).collect();
        let c = polynomial_fit(&x, &y, 2).unwrap();
        assert!((c[0] - 4.0).abs() < 1e-8);
        assert!((c[1] + 2.0).abs() < 1e-8);
        assert!((c[2] - 0.5).abs() < 1e-8);
        assert!((polynomial_eval(&c, 2.0) - 2.0).abs() < 1e-8);
    }

    #[test]
    fn gradient_and_trapezoid_are_consistent() {
        let x: Vec<f64> = (0..=20).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        let dy = gradient(&x, &y);
        // Central differences are exact for a parabola in the interior
        assert!((dy[10] - 2.0).abs() < 1e-9);

        let integral = cumulative_trapezoid(&x, &dy);
        assert_eq!(integral[0], 0.0);
        assert!((integral[20] - 4.0).abs() < 0.05);
    }

    #[test]
    fn bisection_finds_root() {
        let root = bisect_increasing(|x| x * x * x, 8.0, 0.0, 5.0, 100).unwrap();
        assert!((root - 2.0).abs() < 1e-10);
        assert!(bisect_increasing(|x| x, 10.0, 0.0, 5.0, 100).is_none());
    }
}
