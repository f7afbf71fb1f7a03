use crate::adsorbate::{Adsorbate, HkMolecule};
use crate::saturation::SaturationCurve;

struct CatalogEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    molar_mass: f64,
    cross_section: Option<f64>,
    liquid_density: Option<f64>,
    surface_tension: Option<f64>,
    /// diameter [nm], polarizability [cm³], susceptibility [cm³], density [1/cm²]
    hk: Option<(f64, f64, f64, f64)>,
    t_triple_k: f64,
    t_crit_k: f64,
    p_crit_pa: f64,
    wagner: &'static [(f64, f64)],
}

const BUILTIN_CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        name: "nitrogen",
        aliases: &["N2"],
        molar_mass: 28.0134,
        cross_section: Some(0.162),
        liquid_density: Some(0.806),
        surface_tension: Some(8.85),
        hk: Some((0.30, 1.46e-24, 2.0e-29, 6.7e14)),
        t_triple_k: 63.151,
        t_crit_k: 126.192,
        p_crit_pa: 3.3958e6,
        wagner: &[
            (-6.124_452_84, 1.0),
            (1.263_272_2, 1.5),
            (-0.765_910_082, 2.5),
            (-1.775_705_64, 5.0),
        ],
    },
    CatalogEntry {
        name: "argon",
        aliases: &["Ar"],
        molar_mass: 39.948,
        cross_section: Some(0.142),
        liquid_density: Some(1.395),
        surface_tension: Some(12.5),
        hk: Some((0.34, 1.63e-24, 3.25e-29, 8.52e14)),
        t_triple_k: 83.8058,
        t_crit_k: 150.687,
        p_crit_pa: 4.863e6,
        wagner: &[
            (-5.940_978_5, 1.0),
            (1.355_388_8, 1.5),
            (-0.464_976_07, 2.0),
            (-1.539_904_3, 4.5),
        ],
    },
    CatalogEntry {
        name: "carbon dioxide",
        aliases: &["CO2"],
        molar_mass: 44.0095,
        cross_section: Some(0.170),
        liquid_density: Some(0.927),
        surface_tension: None,
        hk: None,
        t_triple_k: 216.592,
        t_crit_k: 304.1282,
        p_crit_pa: 7.3773e6,
        wagner: &[
            (-7.060_208_7, 1.0),
            (1.939_121_8, 1.5),
            (-1.646_359_7, 2.0),
            (-3.299_563_4, 4.0),
        ],
    },
];

impl CatalogEntry {
    fn to_adsorbate(&self) -> Adsorbate {
        Adsorbate {
            name: self.name.to_string(),
            aliases: self.aliases.iter().map(|a| a.to_string()).collect(),
            molar_mass: self.molar_mass,
            cross_section: self.cross_section,
            liquid_density: self.liquid_density,
            surface_tension: self.surface_tension,
            hk: self
                .hk
                .map(|(d, a, x, n)| HkMolecule::from_literature(d, a, x, n)),
            saturation: SaturationCurve::Wagner {
                t_triple_k: self.t_triple_k,
                t_crit_k: self.t_crit_k,
                p_crit_pa: self.p_crit_pa,
                terms: self.wagner.to_vec(),
            },
        }
    }
}

/// Probe gases shipped with the workspace.
pub fn builtin_adsorbates() -> Vec<Adsorbate> {
    BUILTIN_CATALOG.iter().map(CatalogEntry::to_adsorbate).collect()
}
