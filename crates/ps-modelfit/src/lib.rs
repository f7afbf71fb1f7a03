//! ps-modelfit: analytic model isotherms fitted to measured data.
//!
//! Fitting goes through the [`ModelFitter`] trait so callers can supply
//! their own optimiser; [`LevenbergMarquardt`] is the built-in one.
//!
//! # Example
//!
//! ```
//! use ps_isotherm::{IsothermInfo, IsothermPoint, IsothermUnits, PointIsotherm};
//! use ps_modelfit::{IsothermModel, LevenbergMarquardt, fit_model};
//!
//! let points = (1..=15)
//!     .map(|i| {
//!         let p = 0.1 * i as f64;
//!         IsothermPoint::new(p, 2.0 * 3.0 * p / (1.0 + 3.0 * p))
//!     })
//!     .collect();
//! let info = IsothermInfo::new("zeolite", "1", "carbon dioxide", 303.0);
//! let iso = PointIsotherm::new(points, info, IsothermUnits::default()).unwrap();
//!
//! let model = fit_model(&iso, IsothermModel::Langmuir, &LevenbergMarquardt::default()).unwrap();
//! assert!((model.param("M").unwrap() - 2.0).abs() < 1e-3);
//! ```

pub mod error;
pub mod fitter;
pub mod lm;
pub mod model;
pub mod model_isotherm;

// Re-exports for ergonomics
pub use error::{FitError, FitResult};
pub use fitter::{FittedParams, LevenbergMarquardt, ModelFitter};
pub use lm::{LmConfig, LmResult, lm_solve};
pub use model::IsothermModel;
pub use model_isotherm::{ModelIsotherm, SIMULATED_EXP_TYPE, fit_model, fit_model_branch};
