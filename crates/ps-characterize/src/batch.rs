//! Parallel analysis of independent isotherms.
//!
//! Each isotherm is analysed on the rayon pool against the same read-only
//! registry. Results keep the input order.

use crate::bet::{BetOptions, BetResult, area_bet};
use crate::psd::PsdResult;
use crate::psd_micro::{MicroPsdSettings, psd_microporous};
use ps_core::PsResult;
use ps_isotherm::PointIsotherm;
use ps_materials::GasRegistry;
use rayon::prelude::*;
use tracing::debug;

/// BET area of every isotherm.
pub fn analyse_bet_many(
    isotherms: &[PointIsotherm],
    gases: &dyn GasRegistry,
    options: &BetOptions,
) -> Vec<PsResult<BetResult>> {
    debug!(count = isotherms.len(), registry = gases.name(), "batch BET");
    isotherms
        .par_iter()
        .map(|iso| area_bet(iso, gases, options, None))
        .collect()
}

/// Micropore distribution of every isotherm.
pub fn analyse_psd_micro_many(
    isotherms: &[PointIsotherm],
    gases: &dyn GasRegistry,
    settings: &MicroPsdSettings,
) -> Vec<PsResult<PsdResult>> {
    debug!(count = isotherms.len(), registry = gases.name(), "batch micropore PSD");
    isotherms
        .par_iter()
        .map(|iso| psd_microporous(iso, gases, settings, None))
        .collect()
}
