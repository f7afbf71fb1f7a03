//! CoolProp-backed saturation pressures.

use crate::adsorbate::Adsorbate;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::{AdsorbateList, GasRegistry};
use ps_core::units::{Pressure, Temperature, pa};
use rfluids::prelude::*;
use rfluids::substance::Pure;

/// Gas registry answering saturation pressures from CoolProp.
///
/// Adsorbate properties still come from the wrapped list; only the
/// saturation curve is replaced by the real-fluid equation of state.
/// Adsorbates CoolProp does not know fall back to their own curve.
pub struct CoolPropSaturation {
    adsorbates: AdsorbateList,
}

impl CoolPropSaturation {
    pub fn new(adsorbates: AdsorbateList) -> Self {
        Self { adsorbates }
    }

    fn pure_for(adsorbate: &Adsorbate) -> Option<Pure> {
        match adsorbate.name.as_str() {
            "nitrogen" => Some(Pure::Nitrogen),
            "argon" => Some(Pure::Argon),
            "carbon dioxide" => Some(Pure::CarbonDioxide),
            _ => None,
        }
    }
}

impl GasRegistry for CoolPropSaturation {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn adsorbate(&self, query: &str) -> RegistryResult<&Adsorbate> {
        self.adsorbates.adsorbate(query)
    }

    fn saturation_pressure(&self, query: &str, t: Temperature) -> RegistryResult<Pressure> {
        let adsorbate = self.adsorbate(query)?;
        let Some(pure) = Self::pure_for(adsorbate) else {
            return adsorbate.saturation_pressure(t);
        };

        let t_k = t.value;
        let mut fluid = Fluid::from(pure)
            .in_state(FluidInput::temperature(t_k), FluidInput::quality(0.0))
            .map_err(|e| RegistryError::Backend {
                message: format!("rfluids error at T={} K, Q=0: {}", t_k, e),
            })?;

        let p_pa = fluid.pressure().map_err(|e| RegistryError::Backend {
            message: format!("rfluids error getting pressure: {}", e),
        })?;
        Ok(pa(p_pa))
    }
}
