//! Adsorbate definitions.

use crate::error::{RegistryError, RegistryResult};
use crate::saturation::SaturationCurve;
use ps_core::units::{Pressure, Temperature};

/// Molecular data used by the Horvath–Kawazoe family of micropore kernels.
///
/// Stored in SI: lengths in m, polarizability and magnetic susceptibility
/// as volumes in m³, surface density in molecules/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HkMolecule {
    /// Molecular (collision) diameter [m]
    pub diameter: f64,
    /// Polarizability [m³]
    pub polarizability: f64,
    /// Magnetic susceptibility [m³]
    pub magnetic_susceptibility: f64,
    /// Surface density of a monolayer [1/m²]
    pub surface_density: f64,
}

impl HkMolecule {
    /// Build from the customary CGS/nm literature values.
    ///
    /// - `diameter_nm` in nm
    /// - `polarizability_cm3`, `susceptibility_cm3` in cm³
    /// - `surface_density_cm2` in molecules/cm²
    pub fn from_literature(
        diameter_nm: f64,
        polarizability_cm3: f64,
        susceptibility_cm3: f64,
        surface_density_cm2: f64,
    ) -> Self {
        Self {
            diameter: diameter_nm * 1e-9,
            polarizability: polarizability_cm3 * 1e-6,
            magnetic_susceptibility: susceptibility_cm3 * 1e-6,
            surface_density: surface_density_cm2 * 1e4,
        }
    }
}

/// A probe gas and the properties characterisation methods consult.
#[derive(Debug, Clone, PartialEq)]
pub struct Adsorbate {
    /// Canonical name, e.g. "nitrogen".
    pub name: String,
    /// Formula and alternative names accepted by lookups.
    pub aliases: Vec<String>,
    /// Molar mass [g/mol]
    pub molar_mass: f64,
    /// Cross-sectional area of an adsorbed molecule [nm²]
    pub cross_section: Option<f64>,
    /// Density of the liquid adsorbate at the normal boiling point [g/cm³]
    pub liquid_density: Option<f64>,
    /// Surface tension of the liquid [mN/m]
    pub surface_tension: Option<f64>,
    pub hk: Option<HkMolecule>,
    pub saturation: SaturationCurve,
}

impl Adsorbate {
    /// True if `query` names this adsorbate (case-insensitive, exact).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }

    pub fn saturation_pressure(&self, t: Temperature) -> RegistryResult<Pressure> {
        self.saturation.pressure_at(t)
    }

    pub fn cross_section(&self) -> RegistryResult<f64> {
        self.cross_section.ok_or_else(|| self.missing("cross_section"))
    }

    pub fn liquid_density(&self) -> RegistryResult<f64> {
        self.liquid_density
            .ok_or_else(|| self.missing("liquid_density"))
    }

    pub fn surface_tension(&self) -> RegistryResult<f64> {
        self.surface_tension
            .ok_or_else(|| self.missing("surface_tension"))
    }

    pub fn hk(&self) -> RegistryResult<HkMolecule> {
        self.hk.ok_or_else(|| self.missing("hk_molecule"))
    }

    /// Molar volume of the liquid [cm³/mol]
    pub fn liquid_molar_volume(&self) -> RegistryResult<f64> {
        Ok(self.molar_mass / self.liquid_density()?)
    }

    fn missing(&self, property: &'static str) -> RegistryError {
        RegistryError::MissingProperty {
            kind: "adsorbate",
            query: self.name.clone(),
            property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> Adsorbate {
        Adsorbate {
            name: "probe".into(),
            aliases: vec!["P1".into()],
            molar_mass: 10.0,
            cross_section: None,
            liquid_density: Some(0.5),
            surface_tension: None,
            hk: None,
            saturation: SaturationCurve::Fixed { p_pa: 1e5 },
        }
    }

    #[test]
    fn matches_name_and_alias() {
        let a = probe();
        assert!(a.matches("PROBE"));
        assert!(a.matches(" p1 "));
        assert!(!a.matches("prob"));
    }

    #[test]
    fn missing_properties_are_reported() {
        let a = probe();
        assert!(matches!(
            a.cross_section(),
            Err(RegistryError::MissingProperty {
                property: "cross_section",
                ..
            })
        ));
        assert!(a.hk().is_err());
        assert!((a.liquid_molar_volume().unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn literature_values_convert_to_si() {
        let hk = HkMolecule::from_literature(0.3, 1.46e-24, 2.0e-29, 6.7e14);
        assert!((hk.diameter - 3.0e-10).abs() < 1e-20);
        assert!((hk.polarizability - 1.46e-30).abs() < 1e-40);
        assert!((hk.surface_density - 6.7e18).abs() < 1.0);
    }
}
