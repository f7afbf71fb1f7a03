//! ps-characterize: physical quantities derived from point isotherms.
//!
//! Provides:
//! - BET specific surface area with automatic range selection
//! - Micropore size distribution (Horvath–Kawazoe slit, Saito–Foley
//!   cylinder, spherical cavity)
//! - Mesopore size distribution (BJH, Dollimore–Heal)
//! - Initial enthalpy of adsorption from calorimetry
//! - Parallel batch runners
//!
//! Calculations read the isotherm and never modify it. Those that need
//! adsorbate data take a [`GasRegistry`](ps_materials::GasRegistry); verbose
//! runs hand their intermediate data to an optional
//! [`DiagnosticRenderer`].
//!
//! # Example
//!
//! ```
//! use ps_characterize::{BetOptions, area_bet};
//! use ps_core::{AdsorbentMode, LoadingUnit, PressureMode, PressureUnit};
//! use ps_isotherm::{IsothermInfo, IsothermPoint, IsothermUnits, PointIsotherm};
//! use ps_materials::AdsorbateList;
//!
//! let (n_m, c) = (4.0, 80.0);
//! let points = (1..=15)
//!     .map(|i| {
//!         let p = 0.02 * i as f64;
//!         IsothermPoint::new(p, n_m * c * p / ((1.0 - p) * (1.0 - p + c * p)))
//!     })
//!     .collect();
//! let units = IsothermUnits {
//!     loading_unit: LoadingUnit::Mmol,
//!     pressure_unit: PressureUnit::Bar,
//!     adsorbent_mode: AdsorbentMode::Mass,
//!     pressure_mode: PressureMode::Relative,
//! };
//! let info = IsothermInfo::new("silica", "1", "nitrogen", 77.355);
//! let iso = PointIsotherm::new(points, info, units).unwrap();
//!
//! let bet = area_bet(&iso, &AdsorbateList::builtin(), &BetOptions::default(), None).unwrap();
//! assert!((bet.monolayer_loading - n_m).abs() < 1e-6);
//! ```

pub mod batch;
pub mod bet;
pub mod enthalpy;
pub mod hk;
pub mod psd;
pub mod psd_meso;
pub mod psd_micro;
pub mod render;
pub mod thickness;

// Re-exports for ergonomics
pub use batch::{analyse_bet_many, analyse_psd_micro_many};
pub use bet::{BetOptions, BetResult, area_bet};
pub use enthalpy::{EnthalpyFit, EnthalpyOptions, initial_enthalpy_point, initial_enthalpy_polynomial};
pub use hk::HkSystem;
pub use psd::{PoreGeometry, PsdResult};
pub use psd_meso::{MesoPsdMethod, MesoPsdSettings, psd_mesoporous};
pub use psd_micro::{MicroPsdModel, MicroPsdSettings, psd_microporous};
pub use render::{Diagnostic, DiagnosticRenderer, LogRenderer};
pub use thickness::{ThicknessModel, kelvin_radius};
