//! Micropore distribution: option validation and kernel peaks.

mod common;

use common::*;
use ps_characterize::{HkSystem, MicroPsdSettings, PoreGeometry, analyse_psd_micro_many, psd_microporous};
use ps_core::{PressureMode, PsError};
use ps_materials::{AdsorbateList, GasRegistry, SolidHkModel};

/// Filling of a single pore size: logistic in ln(p) centred on the kernel
/// pressure of `width_nm`. Total uptake 5 mmol/g.
fn stepped_isotherm(geometry: PoreGeometry, width_nm: f64) -> ps_isotherm::PointIsotherm {
    let gases = AdsorbateList::builtin();
    let n2 = gases.adsorbate("nitrogen").unwrap().hk().unwrap();
    let carbon = SolidHkModel::find("Carbon(HK)").unwrap();
    let centre = HkSystem::new(&n2, &carbon.atom).ln_relative_pressure(geometry, width_nm, T_N2);

    relative_isotherm(
        "carbon",
        (0..40).map(|i| {
            let ln_p = centre - 6.0 + 12.0 * i as f64 / 39.0;
            let n = 5.0 / (1.0 + (-(ln_p - centre) / 0.5).exp());
            (ln_p.exp(), n)
        }),
    )
}

fn total_liquid_volume(mmol_per_g: f64) -> f64 {
    mmol_per_g * 1e-3 * 28.0134 / 0.806
}

#[test]
fn invalid_options_are_parameter_errors() {
    let gases = AdsorbateList::builtin();
    let iso = stepped_isotherm(PoreGeometry::Slit, 0.7);
    let before = iso.clone();

    let cases = [
        MicroPsdSettings {
            psd_model: None,
            ..MicroPsdSettings::default()
        },
        MicroPsdSettings {
            psd_model: Some("Test".into()),
            ..MicroPsdSettings::default()
        },
        MicroPsdSettings {
            pore_geometry: "test".into(),
            ..MicroPsdSettings::default()
        },
        MicroPsdSettings {
            branch: "test".into(),
            ..MicroPsdSettings::default()
        },
    ];
    for settings in &cases {
        let err = psd_microporous(&iso, &gases, settings, None).unwrap_err();
        assert!(matches!(err, PsError::Parameter { .. }), "{settings:?}: {err}");
        assert_eq!(iso, before);
    }
}

#[test]
fn options_are_checked_before_isotherm_basis() {
    let gases = AdsorbateList::builtin();
    let mut iso = stepped_isotherm(PoreGeometry::Slit, 0.7);
    iso.convert_pressure_mode(PressureMode::Absolute, &gases).unwrap();

    let bad = MicroPsdSettings {
        psd_model: None,
        ..MicroPsdSettings::default()
    };
    assert!(matches!(
        psd_microporous(&iso, &gases, &bad, None),
        Err(PsError::Parameter { .. })
    ));
    assert!(matches!(
        psd_microporous(&iso, &gases, &MicroPsdSettings::default(), None),
        Err(PsError::Configuration { .. })
    ));
}

#[test]
fn principal_peak_at_filled_width() {
    let gases = AdsorbateList::builtin();
    for geometry in [PoreGeometry::Slit, PoreGeometry::Cylinder, PoreGeometry::Sphere] {
        let iso = stepped_isotherm(geometry, 0.7);
        let settings = MicroPsdSettings {
            pore_geometry: geometry.key().into(),
            ..MicroPsdSettings::default()
        };
        let psd = psd_microporous(&iso, &gases, &settings, None).unwrap();

        let peak = psd.principal_peak().unwrap();
        assert!((peak - 0.7).abs() < 0.05, "{geometry}: peak at {peak}");
        assert_eq!(psd.geometry, geometry);
        assert_eq!(psd.method, "HK");
        assert!(psd.pore_widths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(psd.pore_widths.len(), psd.pore_distribution.len());
        assert_eq!(psd.pore_widths.len(), psd.pore_volume_cumulative.len());

        let expected = total_liquid_volume(5.0);
        assert!(
            (psd.cumulative_volume - expected).abs() < 0.01 * expected,
            "{geometry}: {} vs {expected}",
            psd.cumulative_volume
        );
    }
}

#[test]
fn too_few_usable_points() {
    let iso = relative_isotherm("carbon", [(0.2, 1.0), (1.5, 2.0)]);
    let err = psd_microporous(&iso, &AdsorbateList::builtin(), &MicroPsdSettings::default(), None)
        .unwrap_err();
    assert!(matches!(err, PsError::Calculation { .. }));
}

#[test]
fn adsorbate_without_hk_data_is_lookup_error() {
    let mut info = nitrogen_info("carbon");
    info.adsorbate = "carbon dioxide".into();
    let iso = ps_isotherm::PointIsotherm::new(
        vec![
            ps_isotherm::IsothermPoint::new(0.001, 1.0),
            ps_isotherm::IsothermPoint::new(0.01, 2.0),
        ],
        info,
        relative_units(),
    )
    .unwrap();
    let err = psd_microporous(&iso, &AdsorbateList::builtin(), &MicroPsdSettings::default(), None)
        .unwrap_err();
    assert!(matches!(err, PsError::Lookup { .. }));
}

#[test]
fn batch_matches_single_runs() {
    let gases = AdsorbateList::builtin();
    let isotherms = vec![
        stepped_isotherm(PoreGeometry::Slit, 0.6),
        stepped_isotherm(PoreGeometry::Slit, 0.9),
    ];
    let settings = MicroPsdSettings::default();
    let batch = analyse_psd_micro_many(&isotherms, &gases, &settings);
    for (iso, result) in isotherms.iter().zip(batch) {
        assert_eq!(result.unwrap(), psd_microporous(iso, &gases, &settings, None).unwrap());
    }
}

#[test]
fn smoothed_branch_keeps_peak_and_parent() {
    let gases = AdsorbateList::builtin();
    let iso = stepped_isotherm(PoreGeometry::Slit, 0.7);
    let before = iso.clone();

    let raw = psd_microporous(&iso, &gases, &MicroPsdSettings::default(), None).unwrap();
    let settings = MicroPsdSettings {
        smoothing_model: Some("Langmuir".into()),
        ..MicroPsdSettings::default()
    };
    let smoothed = psd_microporous(&iso, &gases, &settings, None).unwrap();

    let peak = smoothed.principal_peak().unwrap();
    assert!((peak - 0.7).abs() < 0.06, "smoothed peak at {peak}");
    // a Langmuir curve is broader than the step, so it overshoots slightly
    let expected = total_liquid_volume(5.0);
    assert!(
        (smoothed.cumulative_volume - expected).abs() < 0.1 * expected,
        "{} vs {expected}",
        smoothed.cumulative_volume
    );
    assert_ne!(smoothed, raw);
    assert_eq!(iso, before);
    assert!(iso.info().is_real);
}

#[test]
fn unknown_smoothing_model_is_parameter_error() {
    let settings = MicroPsdSettings {
        smoothing_model: Some("Toth".into()),
        ..MicroPsdSettings::default()
    };
    let iso = stepped_isotherm(PoreGeometry::Slit, 0.7);
    assert!(matches!(
        psd_microporous(&iso, &AdsorbateList::builtin(), &settings, None),
        Err(PsError::Parameter { .. })
    ));
}

/// Adsorption fills pores of 0.6 nm, desorption empties them as if 0.75 nm.
fn hysteresis_isotherm() -> ps_isotherm::PointIsotherm {
    let gases = AdsorbateList::builtin();
    let n2 = gases.adsorbate("nitrogen").unwrap().hk().unwrap();
    let carbon = SolidHkModel::find("Carbon(HK)").unwrap();
    let system = HkSystem::new(&n2, &carbon.atom);
    let filling = system.ln_relative_pressure(PoreGeometry::Slit, 0.6, T_N2);
    let emptying = system.ln_relative_pressure(PoreGeometry::Slit, 0.75, T_N2);
    let (lo, hi) = (filling - 6.0, emptying + 6.0);
    let step = |ln_p: f64, centre: f64| 5.0 / (1.0 + (-(ln_p - centre) / 0.5).exp());

    let adsorption = (0..40).map(move |i| {
        let ln_p = lo + (hi - lo) * i as f64 / 39.0;
        (ln_p.exp(), step(ln_p, filling))
    });
    let desorption = (1..40).map(move |i| {
        let ln_p = hi - (hi - lo) * i as f64 / 39.0;
        (ln_p.exp(), step(ln_p, emptying))
    });
    relative_isotherm("carbon", adsorption.chain(desorption))
}

#[test]
fn desorption_branch_has_its_own_peak() {
    let gases = AdsorbateList::builtin();
    let iso = hysteresis_isotherm();
    assert_eq!(iso.desorption_points().count(), 39);

    let adsorption = psd_microporous(&iso, &gases, &MicroPsdSettings::default(), None).unwrap();
    let settings = MicroPsdSettings {
        branch: "desorption".into(),
        ..MicroPsdSettings::default()
    };
    let desorption = psd_microporous(&iso, &gases, &settings, None).unwrap();

    let ads_peak = adsorption.principal_peak().unwrap();
    let des_peak = desorption.principal_peak().unwrap();
    assert!((ads_peak - 0.6).abs() < 0.05, "adsorption peak {ads_peak}");
    assert!((des_peak - 0.75).abs() < 0.05, "desorption peak {des_peak}");
    assert_eq!(desorption.pore_widths.len(), 39);

    let expected = total_liquid_volume(5.0);
    assert!((desorption.cumulative_volume - expected).abs() < 0.01 * expected);
}
