//! Analytic isotherm models.

use ps_core::PsError;
use std::fmt;
use std::str::FromStr;

/// Supported analytic isotherm models.
///
/// Parameter order is fixed per model and reported by [`param_names`](Self::param_names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsothermModel {
    /// `n = K p`
    Henry,
    /// `n = M K p / (1 + K p)`
    Langmuir,
    /// Two independent Langmuir sites.
    DsLangmuir,
    /// `n = M (Ka + 2 Kb p) p / (1 + Ka p + Kb p²)`
    Quadratic,
    /// `n = M Ka p / ((1 - Kb p)(1 - Kb p + Ka p))`
    Bet,
    /// Langmuir plus a first-order Temkin correction with interaction `theta`.
    TemkinApprox,
}

impl IsothermModel {
    pub const ALL: [IsothermModel; 6] = [
        IsothermModel::Henry,
        IsothermModel::Langmuir,
        IsothermModel::DsLangmuir,
        IsothermModel::Quadratic,
        IsothermModel::Bet,
        IsothermModel::TemkinApprox,
    ];

    pub fn key(self) -> &'static str {
        match self {
            IsothermModel::Henry => "Henry",
            IsothermModel::Langmuir => "Langmuir",
            IsothermModel::DsLangmuir => "DSLangmuir",
            IsothermModel::Quadratic => "Quadratic",
            IsothermModel::Bet => "BET",
            IsothermModel::TemkinApprox => "TemkinApprox",
        }
    }

    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            IsothermModel::Henry => &["K"],
            IsothermModel::Langmuir => &["M", "K"],
            IsothermModel::DsLangmuir => &["M1", "K1", "M2", "K2"],
            IsothermModel::Quadratic => &["M", "Ka", "Kb"],
            IsothermModel::Bet => &["M", "Ka", "Kb"],
            IsothermModel::TemkinApprox => &["M", "K", "theta"],
        }
    }

    pub fn param_count(self) -> usize {
        self.param_names().len()
    }

    /// Whether parameter `index` is constrained to be positive.
    pub fn is_positive(self, index: usize) -> bool {
        !matches!((self, index), (IsothermModel::TemkinApprox, 2))
    }

    /// Loading at pressure `p` for `params` in [`param_names`](Self::param_names) order.
    pub fn loading(self, params: &[f64], p: f64) -> f64 {
        match self {
            IsothermModel::Henry => params[0] * p,
            IsothermModel::Langmuir => langmuir(params[0], params[1], p),
            IsothermModel::DsLangmuir => {
                langmuir(params[0], params[1], p) + langmuir(params[2], params[3], p)
            }
            IsothermModel::Quadratic => {
                let (m, ka, kb) = (params[0], params[1], params[2]);
                m * (ka + 2.0 * kb * p) * p / (1.0 + ka * p + kb * p * p)
            }
            IsothermModel::Bet => {
                let (m, ka, kb) = (params[0], params[1], params[2]);
                m * ka * p / ((1.0 - kb * p) * (1.0 - kb * p + ka * p))
            }
            IsothermModel::TemkinApprox => {
                let (m, k, theta) = (params[0], params[1], params[2]);
                let frac = k * p / (1.0 + k * p);
                m * (frac + theta * frac * frac * (frac - 1.0))
            }
        }
    }

    /// Starting parameters from data sorted by increasing pressure.
    ///
    /// Saturation capacities start just above the largest observed loading;
    /// affinities come from the initial slope `n₁/p₁`.
    pub fn initial_guess(self, pressure: &[f64], loading: &[f64]) -> Vec<f64> {
        let n_max = loading.iter().copied().fold(0.0_f64, f64::max).max(f64::MIN_POSITIVE);
        let p_max = pressure.iter().copied().fold(0.0_f64, f64::max).max(f64::MIN_POSITIVE);
        let slope = initial_slope(pressure, loading).unwrap_or(n_max / p_max);

        match self {
            IsothermModel::Henry => {
                let spp: f64 = pressure.iter().map(|p| p * p).sum();
                let spn: f64 = pressure.iter().zip(loading).map(|(p, n)| p * n).sum();
                let k = if spp > 0.0 { spn / spp } else { slope };
                vec![k.max(f64::MIN_POSITIVE)]
            }
            IsothermModel::Langmuir => {
                let m = 1.1 * n_max;
                vec![m, slope / m]
            }
            IsothermModel::DsLangmuir => {
                let m = 0.55 * n_max;
                let k = slope / (1.1 * n_max);
                vec![m, 5.0 * k, m, 0.2 * k]
            }
            IsothermModel::Quadratic => {
                let m = 0.55 * n_max;
                let ka = slope / m;
                vec![m, ka, 0.1 * ka * ka]
            }
            IsothermModel::Bet => {
                let m = 0.5 * n_max;
                vec![m, slope / m, 0.9 / p_max]
            }
            IsothermModel::TemkinApprox => {
                let m = 1.1 * n_max;
                vec![m, slope / m, 0.0]
            }
        }
    }
}

fn langmuir(m: f64, k: f64, p: f64) -> f64 {
    m * k * p / (1.0 + k * p)
}

fn initial_slope(pressure: &[f64], loading: &[f64]) -> Option<f64> {
    pressure
        .iter()
        .zip(loading)
        .find(|(p, n)| **p > 0.0 && **n > 0.0)
        .map(|(p, n)| n / p)
}

impl fmt::Display for IsothermModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IsothermModel {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IsothermModel::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<_> = IsothermModel::ALL.iter().map(|m| m.key()).collect();
                PsError::parameter(format!(
                    "model '{s}' is not one of {}",
                    known.join(", ")
                ))
            })
    }
}
