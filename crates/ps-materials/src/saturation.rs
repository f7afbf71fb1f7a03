//! Saturation-pressure curves.

use crate::error::{RegistryError, RegistryResult};
use ps_core::units::{Pressure, Temperature, pa};

/// Vapour-liquid saturation pressure as a function of temperature.
#[derive(Debug, Clone, PartialEq)]
pub enum SaturationCurve {
    /// Wagner-form ancillary equation:
    ///
    /// ```text
    /// ln(p / pc) = (Tc / T) · Σ aᵢ · θ^eᵢ,   θ = 1 − T / Tc
    /// ```
    ///
    /// Valid between the triple point and the critical point.
    Wagner {
        t_triple_k: f64,
        t_crit_k: f64,
        p_crit_pa: f64,
        terms: Vec<(f64, f64)>,
    },
    /// A single saturation pressure regardless of temperature, for custom
    /// or pseudo adsorbates recorded at one temperature.
    Fixed { p_pa: f64 },
}

impl SaturationCurve {
    /// Evaluate the curve at `t`.
    pub fn pressure_at(&self, t: Temperature) -> RegistryResult<Pressure> {
        let t_k = t.value;
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(RegistryError::OutOfRange {
                what: format!("temperature {t_k} K"),
            });
        }

        match self {
            SaturationCurve::Fixed { p_pa } => Ok(pa(*p_pa)),
            SaturationCurve::Wagner {
                t_triple_k,
                t_crit_k,
                p_crit_pa,
                terms,
            } => {
                if t_k < *t_triple_k || t_k > *t_crit_k {
                    return Err(RegistryError::OutOfRange {
                        what: format!(
                            "saturation temperature {t_k} K outside [{t_triple_k}, {t_crit_k}] K"
                        ),
                    });
                }
                let theta = 1.0 - t_k / t_crit_k;
                let sum: f64 = terms.iter().map(|(a, e)| a * theta.powf(*e)).sum();
                Ok(pa(p_crit_pa * (t_crit_k / t_k * sum).exp()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use ps_core::units::k;

    fn nitrogen() -> SaturationCurve {
        SaturationCurve::Wagner {
            t_triple_k: 63.151,
            t_crit_k: 126.192,
            p_crit_pa: 3.3958e6,
            terms: vec![
                (-6.124_452_84, 1.0),
                (1.263_272_2, 1.5),
                (-0.765_910_082, 2.5),
                (-1.775_705_64, 5.0),
            ],
        }
    }

    #[test]
    fn nitrogen_normal_boiling_point() {
        let p = nitrogen().pressure_at(k(77.355)).unwrap();
        assert!((p.value - 101_325.0).abs() / 101_325.0 < 0.005, "p = {}", p.value);
    }

    #[test]
    fn critical_point_returns_critical_pressure() {
        let p = nitrogen().pressure_at(k(126.192)).unwrap();
        assert!((p.value - 3.3958e6).abs() < 1.0);
    }

    #[test]
    fn outside_range_is_rejected() {
        assert!(nitrogen().pressure_at(k(300.0)).is_err());
        assert!(nitrogen().pressure_at(k(20.0)).is_err());
        assert!(nitrogen().pressure_at(k(-1.0)).is_err());
    }

    #[test]
    fn fixed_curve_ignores_temperature() {
        let curve = SaturationCurve::Fixed { p_pa: 1e5 };
        assert_eq!(curve.pressure_at(k(77.0)).unwrap().value, 1e5);
        assert_eq!(curve.pressure_at(k(300.0)).unwrap().value, 1e5);
    }

    proptest! {
        #[test]
        fn wagner_curve_rises_with_temperature(t in 63.2f64..125.0, dt in 0.01f64..1.0) {
            let curve = nitrogen();
            let lo = curve.pressure_at(k(t)).unwrap().value;
            let hi = curve.pressure_at(k(t + dt)).unwrap().value;
            prop_assert!(hi > lo);
        }
    }
}
