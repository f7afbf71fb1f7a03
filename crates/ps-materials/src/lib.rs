//! ps-materials: adsorbate, adsorbent and sample data for poresight.
//!
//! Provides:
//! - Adsorbate definitions (molar mass, cross-section, liquid density, HK data)
//! - Saturation-pressure curves (Wagner-form ancillary equations)
//! - Solid parameter sets for the Horvath–Kawazoe family of kernels
//! - Sample records with their measured properties
//! - `GasRegistry` / `SampleRegistry` lookup traits with in-memory backends
//!
//! # Architecture
//!
//! Isotherm conversions and characterisations never reach into global state:
//! every lookup goes through one of the registry traits, which callers pass
//! in explicitly. The in-memory `AdsorbateList` ships with the common probe
//! gases; enabling the `coolprop` feature adds a CoolProp-backed registry for
//! saturation pressures.
//!
//! # Example
//!
//! ```
//! use ps_materials::{AdsorbateList, GasRegistry};
//! use ps_core::units::k;
//!
//! let gases = AdsorbateList::builtin();
//! let p0 = gases.saturation_pressure("nitrogen", k(77.355)).unwrap();
//! assert!((p0.value - 101_325.0).abs() < 500.0);
//! ```

pub mod adsorbate;
pub mod catalog;
#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod error;
pub mod registry;
pub mod sample;
pub mod saturation;
pub mod solid;

// Re-exports for ergonomics
pub use adsorbate::{Adsorbate, HkMolecule};
pub use catalog::builtin_adsorbates;
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropSaturation;
pub use error::{RegistryError, RegistryResult};
pub use registry::{AdsorbateList, GasRegistry};
pub use sample::{Sample, SampleList, SampleRegistry, resolve_density};
pub use saturation::SaturationCurve;
pub use solid::SolidHkModel;
