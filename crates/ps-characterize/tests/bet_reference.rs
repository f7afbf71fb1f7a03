//! BET area against synthetic and reference isotherms.

mod common;

use common::*;
use ps_characterize::{
    BetOptions, BetResult, Diagnostic, DiagnosticRenderer, analyse_bet_many, area_bet,
};
use ps_core::{AdsorbentMode, PressureMode, PsError};
use ps_isotherm::{IsothermInfo, IsothermPoint, IsothermUnits, PointIsotherm};
use ps_materials::{AdsorbateList, Sample, SampleList};
use std::sync::Mutex;

fn within(actual: f64, expected: f64, rel: f64) -> bool {
    (actual - expected).abs() <= rel * expected.abs()
}

#[test]
fn recovers_monolayer_and_c_within_ten_percent() {
    let gases = AdsorbateList::builtin();
    for (n_m, c) in [(1.5, 30.0), (4.0, 120.0), (10.0, 250.0)] {
        // small multiplicative noise
        let noise = [1.004, 0.997, 1.002, 0.996, 1.003, 0.999, 1.001, 0.998];
        let iso = relative_isotherm(
            "synthetic",
            (1..=16).map(|i| {
                let p = 0.025 * i as f64;
                (p, bet_loading(p, n_m, c) * noise[i % noise.len()])
            }),
        );
        let r = area_bet(&iso, &gases, &BetOptions::default(), None).unwrap();
        assert!(within(r.monolayer_loading, n_m, 0.1), "n_m {} vs {n_m}", r.monolayer_loading);
        assert!(within(r.c_constant, c, 0.1), "C {} vs {c}", r.c_constant);
    }
}

#[test]
fn end_to_end_nitrogen_in_bar_and_mmol() {
    let gases = AdsorbateList::builtin();
    let p0 = nitrogen_p0_bar();
    assert!((p0 - 1.013).abs() < 0.01);

    // recorded as absolute bar, default units
    let points: Vec<IsothermPoint> = mcm41_adsorption()
        .into_iter()
        .map(|(p, n)| IsothermPoint::new(p * p0, n))
        .collect();
    assert_eq!(points.len(), 40);
    let mut iso = PointIsotherm::new(points, nitrogen_info("MCM-41"), IsothermUnits::default()).unwrap();

    let err = area_bet(&iso, &gases, &BetOptions::default(), None).unwrap_err();
    assert!(matches!(err, PsError::Configuration { .. }));

    iso.convert_pressure_mode(PressureMode::Relative, &gases).unwrap();
    let r = area_bet(&iso, &gases, &BetOptions::default(), None).unwrap();

    assert!(within(r.area, MCM41_AREA, 0.1), "area {}", r.area);
    assert!(r.selected_points >= 3);
    assert!(0.0 <= r.selected_range.0 && r.selected_range.0 < r.selected_range.1);
    assert!(r.selected_range.1 <= 1.0);
    assert!(r.correlation_r2 > 0.99);
}

#[test]
fn explicit_limits_on_reference() {
    let iso = relative_isotherm("MCM-41", mcm41_adsorption());
    let r = area_bet(
        &iso,
        &AdsorbateList::builtin(),
        &BetOptions::with_limits(0.05, 0.3),
        None,
    )
    .unwrap();
    assert!(within(r.area, MCM41_AREA, 0.1), "area {}", r.area);
    assert!(r.selected_range.0 >= 0.05 && r.selected_range.1 <= 0.3);
}

#[test]
fn volume_basis_is_configuration_error() {
    let mut iso = relative_isotherm("MCM-41", mcm41_adsorption());
    let samples = SampleList::new().with(Sample::new("MCM-41", "ref").with_property("density", 0.6));
    iso.convert_adsorbent_mode(AdsorbentMode::Volume, &samples).unwrap();

    let err = area_bet(&iso, &AdsorbateList::builtin(), &BetOptions::default(), None).unwrap_err();
    assert!(matches!(err, PsError::Configuration { .. }));
}

#[test]
fn adsorbate_without_cross_section_is_lookup_error() {
    let info = IsothermInfo::new("MCM-41", "ref", "helium", T_N2);
    let iso = PointIsotherm::new(
        mcm41_adsorption()
            .into_iter()
            .map(|(p, n)| IsothermPoint::new(p, n))
            .collect(),
        info,
        relative_units(),
    )
    .unwrap();
    let err = area_bet(&iso, &AdsorbateList::builtin(), &BetOptions::default(), None).unwrap_err();
    assert!(matches!(err, PsError::Lookup { .. }));
}

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(f64, usize)>>,
}

impl DiagnosticRenderer for Recorder {
    fn render(&self, diagnostic: Diagnostic<'_>) {
        if let Diagnostic::Bet { result, pressure, .. } = diagnostic {
            self.seen.lock().unwrap().push((result.area, pressure.len()));
        }
    }
}

#[test]
fn verbose_output_does_not_change_result() {
    let iso = relative_isotherm("MCM-41", mcm41_adsorption());
    let gases = AdsorbateList::builtin();
    let quiet = area_bet(&iso, &gases, &BetOptions::default(), None).unwrap();

    let recorder = Recorder::default();
    let verbose = BetOptions {
        verbose: true,
        ..BetOptions::default()
    };
    let loud = area_bet(&iso, &gases, &verbose, Some(&recorder)).unwrap();
    let logged = area_bet(&iso, &gases, &verbose, None).unwrap();

    assert_eq!(quiet, loud);
    assert_eq!(quiet, logged);
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], (quiet.area, 40));
}

#[test]
fn batch_keeps_order_and_errors() {
    let gases = AdsorbateList::builtin();
    let good = relative_isotherm("MCM-41", mcm41_adsorption());
    let absolute = PointIsotherm::new(
        vec![IsothermPoint::new(0.1, 1.0), IsothermPoint::new(0.2, 1.2)],
        nitrogen_info("other"),
        IsothermUnits::default(),
    )
    .unwrap();
    let small = relative_isotherm("BET", (1..=8).map(|i| {
        let p = 0.04 * i as f64;
        (p, bet_loading(p, 2.0, 50.0))
    }));

    let results = analyse_bet_many(&[good.clone(), absolute, small], &gases, &BetOptions::default());
    assert_eq!(results.len(), 3);

    let single: BetResult = area_bet(&good, &gases, &BetOptions::default(), None).unwrap();
    assert_eq!(results[0].as_ref().unwrap(), &single);
    assert!(matches!(results[1], Err(PsError::Configuration { .. })));
    assert!((results[2].as_ref().unwrap().monolayer_loading - 2.0).abs() < 1e-6);
}
