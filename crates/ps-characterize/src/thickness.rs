//! Statistical thickness of the adsorbed film and the Kelvin condensation
//! radius.

use ps_core::PsError;
use ps_core::constants::GAS_CONSTANT;
use std::fmt;
use std::str::FromStr;

/// Thickness curve `t(p/p0)` [nm].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThicknessModel {
    /// `t = 0.354 (-5 / ln p)^(1/3)`
    Halsey,
    /// `t = 0.1 sqrt(13.99 / (0.034 - log10 p))`
    HarkinsJura,
}

impl ThicknessModel {
    pub fn key(self) -> &'static str {
        match self {
            ThicknessModel::Halsey => "Halsey",
            ThicknessModel::HarkinsJura => "Harkins-Jura",
        }
    }

    /// Film thickness [nm] at relative pressure `p`.
    pub fn thickness(self, p: f64) -> f64 {
        match self {
            ThicknessModel::Halsey => 0.354 * (-5.0 / p.ln()).cbrt(),
            ThicknessModel::HarkinsJura => 0.1 * (13.99 / (0.034 - p.log10())).sqrt(),
        }
    }
}

impl fmt::Display for ThicknessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThicknessModel {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "halsey" => Ok(ThicknessModel::Halsey),
            "harkinsjura" => Ok(ThicknessModel::HarkinsJura),
            _ => Err(PsError::parameter(format!(
                "thickness model '{s}' is not one of Halsey, Harkins-Jura"
            ))),
        }
    }
}

/// Kelvin radius [nm] of a hemispherical meniscus at relative pressure `p`.
///
/// - `surface_tension` in mN/m
/// - `molar_volume` of the liquid in cm³/mol
pub fn kelvin_radius(p: f64, surface_tension: f64, molar_volume: f64, t_k: f64) -> f64 {
    let gamma = surface_tension * 1e-3;
    let v_m = molar_volume * 1e-6;
    -2.0 * gamma * v_m / (GAS_CONSTANT * t_k * p.ln()) * 1e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn thickness_grows_with_pressure() {
        for model in [ThicknessModel::Halsey, ThicknessModel::HarkinsJura] {
            let t1 = model.thickness(0.3);
            let t2 = model.thickness(0.8);
            assert!(t1 > 0.3 && t1 < 0.7, "{model}: {t1}");
            assert!(t2 > t1);
        }
    }

    #[test]
    fn nitrogen_kelvin_radius_at_half_pressure() {
        // N2 at 77 K: about 1.4 nm at p/p0 = 0.5
        let r = kelvin_radius(0.5, 8.85, 28.0134 / 0.806, 77.355);
        assert!((r - 1.38).abs() < 0.02, "{r}");
    }

    #[test]
    fn parse_names() {
        assert_eq!("Harkins/Jura".parse::<ThicknessModel>().unwrap(), ThicknessModel::HarkinsJura);
        assert_eq!("halsey".parse::<ThicknessModel>().unwrap(), ThicknessModel::Halsey);
        assert!(matches!(
            "de Boer".parse::<ThicknessModel>(),
            Err(PsError::Parameter { .. })
        ));
    }

    proptest! {
        #[test]
        fn film_and_meniscus_grow_with_pressure(p in 0.05f64..0.9, dp in 1e-3f64..0.09) {
            for model in [ThicknessModel::Halsey, ThicknessModel::HarkinsJura] {
                prop_assert!(model.thickness(p + dp) > model.thickness(p));
            }
            let vm = 28.0134 / 0.806;
            prop_assert!(kelvin_radius(p + dp, 8.85, vm, 77.355) > kelvin_radius(p, 8.85, vm, 77.355));
        }
    }
}
