//! CoolProp saturation tests.
//!
//! Only built with `--features coolprop`. Broad tolerances avoid backend
//! version issues while still catching unit mistakes.
#![cfg(feature = "coolprop")]

use ps_core::units::k;
use ps_materials::{AdsorbateList, CoolPropSaturation, GasRegistry};

#[test]
fn nitrogen_boils_near_one_atmosphere() {
    let registry = CoolPropSaturation::new(AdsorbateList::builtin());
    let p = registry.saturation_pressure("N2", k(77.355)).unwrap();
    assert!(
        (p.value / 101_325.0 - 1.0).abs() < 0.01,
        "p0 = {} Pa",
        p.value
    );
}

#[test]
fn agrees_with_ancillary_curve() {
    let builtin = AdsorbateList::builtin();
    let registry = CoolPropSaturation::new(builtin.clone());
    for (gas, t) in [("N2", 80.0), ("Ar", 90.0), ("CO2", 260.0)] {
        let backend = registry.saturation_pressure(gas, k(t)).unwrap().value;
        let curve = builtin.saturation_pressure(gas, k(t)).unwrap().value;
        assert!((backend / curve - 1.0).abs() < 0.01, "{gas}: {backend} vs {curve}");
    }
}
