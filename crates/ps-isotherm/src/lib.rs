//! ps-isotherm: the point isotherm record every calculation consumes.
//!
//! Provides:
//! - Branch tagging (adsorption vs desorption) from the pressure sweep
//! - Validated construction from named columns or typed points
//! - In-place unit and mode conversions with typed no-op outcomes
//! - Read-only branch views and projections
//!
//! # Example
//!
//! ```
//! use ps_core::{LoadingUnit, PressureMode, PressureUnit};
//! use ps_isotherm::{Branch, IsothermInfo, IsothermPoint, IsothermUnits, PointIsotherm};
//!
//! let info = IsothermInfo::new("MCM-41", "A", "nitrogen", 77.355);
//! let points = vec![
//!     IsothermPoint::new(0.1, 1.0),
//!     IsothermPoint::new(0.2, 1.5),
//!     IsothermPoint::new(0.15, 1.4),
//! ];
//! let mut iso = PointIsotherm::new(points, info, IsothermUnits::default()).unwrap();
//!
//! assert_eq!(iso.pressure(Branch::Desorption, None), vec![0.15]);
//!
//! iso.convert_pressure_unit(PressureUnit::Pa).unwrap();
//! iso.convert_loading_unit(LoadingUnit::Mol).unwrap();
//! assert_eq!(iso.pressure_mode(), PressureMode::Absolute);
//! ```

pub mod branch;
pub mod info;
pub mod isotherm;
pub mod point;
pub mod table;

// Re-exports for ergonomics
pub use branch::{Branch, tag_branches};
pub use info::IsothermInfo;
pub use isotherm::{IsothermUnits, PointIsotherm};
pub use point::IsothermPoint;
pub use table::{ColumnTable, IsothermSettings};
