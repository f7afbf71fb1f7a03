//! ps-core: stable foundation for poresight.
//!
//! Contains:
//! - error (the shared error taxonomy every analysis reports through)
//! - numeric (Real + tolerances + regression, integration and root helpers)
//! - units (uom SI types + constructors + physical constants)
//! - registry (loading/pressure unit tables and measurement modes)

pub mod error;
pub mod numeric;
pub mod registry;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PsError, PsResult};
pub use numeric::*;
pub use registry::{AdsorbentMode, Conversion, LoadingUnit, PressureMode, PressureUnit};
pub use units::*;
