//! Adsorbent wall parameters for Horvath–Kawazoe style kernels.

use crate::adsorbate::HkMolecule;
use crate::error::{RegistryError, RegistryResult};

/// Wall-atom parameters of an adsorbent family.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidHkModel {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub atom: HkMolecule,
}

impl SolidHkModel {
    /// Graphitic carbon (Horvath & Kawazoe) and oxide-ion surfaces
    /// (Saito & Foley).
    pub fn builtin() -> Vec<SolidHkModel> {
        vec![
            SolidHkModel {
                name: "Carbon(HK)",
                aliases: &["carbon"],
                atom: HkMolecule::from_literature(0.34, 1.02e-24, 1.35e-28, 3.845e15),
            },
            SolidHkModel {
                name: "AlSiOx(HK)",
                aliases: &["oxide", "zeolite"],
                atom: HkMolecule::from_literature(0.276, 2.5e-24, 1.3e-29, 1.31e15),
            },
        ]
    }

    /// Resolve a built-in model by name or alias (case-insensitive).
    pub fn find(query: &str) -> RegistryResult<SolidHkModel> {
        let query = query.trim();
        Self::builtin()
            .into_iter()
            .find(|m| {
                m.name.eq_ignore_ascii_case(query)
                    || m.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
            })
            .ok_or_else(|| RegistryError::NotFound {
                kind: "adsorbent model",
                query: query.to_string(),
            })
    }
}
