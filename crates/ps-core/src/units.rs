// ps-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn nm(v: f64) -> Length {
    use uom::si::length::nanometer;
    Length::new::<nanometer>(v)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Avogadro constant [1/mol]
    pub const AVOGADRO: f64 = 6.022_140_76e23;
    /// Molar gas constant [J/(mol·K)]
    pub const GAS_CONSTANT: f64 = 8.314_462_618;
    /// Electron rest mass [kg]
    pub const ELECTRON_MASS: f64 = 9.109_383_7e-31;
    /// Speed of light in vacuum [m/s]
    pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;
}
