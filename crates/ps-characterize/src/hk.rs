//! Horvath–Kawazoe family of micropore kernels.
//!
//! Each kernel gives the relative pressure at which a pore of effective
//! width `w` fills, from the mean dispersion potential of the adsorbate in
//! the pore:
//!
//! - slit: Horvath–Kawazoe (two parallel graphitic walls)
//! - cylinder: Saito–Foley series
//! - sphere: Lennard-Jones potential averaged over the accessible volume
//!
//! Internally everything is SI; widths cross the API in nm.

use crate::psd::PoreGeometry;
use ps_core::bisect_increasing;
use ps_core::constants::{AVOGADRO, ELECTRON_MASS, GAS_CONSTANT, SPEED_OF_LIGHT};
use ps_materials::HkMolecule;
use std::f64::consts::PI;

/// Upper end of the inversion domain [nm]
pub const MAX_WIDTH_NM: f64 = 20.0;
/// Offset above the adsorbate diameter where the inversion domain starts [nm]
pub const MIN_WIDTH_OFFSET_NM: f64 = 1e-4;

const GRID_POINTS: usize = 200;
const BISECT_ITERATIONS: usize = 100;
const SAITO_FOLEY_TERMS: usize = 60;
const SPHERE_INTERVALS: usize = 400;

/// Potential constants of one adsorbate/adsorbent pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HkSystem {
    /// `N_A (n_s A_s + n_a A_a)` [J·m⁴/mol]
    pub k: f64,
    /// Mean of adsorbate and wall-atom diameters [m]
    pub d0: f64,
    /// Adsorbate diameter [m]
    pub d_adsorbate: f64,
    /// Wall-atom diameter [m]
    pub d_solid: f64,
}

impl HkSystem {
    /// Combine adsorbate and wall-atom data through the Kirkwood–Müller
    /// dispersion constants.
    pub fn new(adsorbate: &HkMolecule, solid: &HkMolecule) -> Self {
        let mc2 = ELECTRON_MASS * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
        let (alpha_a, chi_a) = (adsorbate.polarizability, adsorbate.magnetic_susceptibility);
        let (alpha_s, chi_s) = (solid.polarizability, solid.magnetic_susceptibility);

        let a_s = 6.0 * mc2 * alpha_a * alpha_s / (alpha_a / chi_a + alpha_s / chi_s);
        let a_a = 1.5 * mc2 * alpha_a * chi_a;
        let k = AVOGADRO * (solid.surface_density * a_s + adsorbate.surface_density * a_a);

        Self {
            k,
            d0: 0.5 * (adsorbate.diameter + solid.diameter),
            d_adsorbate: adsorbate.diameter,
            d_solid: solid.diameter,
        }
    }

    /// Smallest width the kernels are defined for [nm]
    pub fn min_width_nm(&self) -> f64 {
        self.d_adsorbate * 1e9 + MIN_WIDTH_OFFSET_NM
    }

    /// `ln(p/p0)` at which a pore of effective width `width_nm` fills.
    pub fn ln_relative_pressure(&self, geometry: PoreGeometry, width_nm: f64, t_k: f64) -> f64 {
        let w = width_nm * 1e-9;
        let rt = GAS_CONSTANT * t_k;
        match geometry {
            PoreGeometry::Slit => self.slit_potential(w) / rt,
            PoreGeometry::Cylinder => self.cylinder_potential(w) / rt,
            PoreGeometry::Sphere => self.sphere_potential(w) / rt,
        }
    }

    /// Effective width [nm] of the pore filling at `ln(p/p0) = ln_p`.
    ///
    /// The kernels have a minimum close to the adsorbate diameter; only the
    /// branch from that minimum up to [`MAX_WIDTH_NM`] is inverted. Pressures
    /// outside that branch give `None`.
    pub fn pore_width(&self, geometry: PoreGeometry, ln_p: f64, t_k: f64) -> Option<f64> {
        let f = |w: f64| self.ln_relative_pressure(geometry, w, t_k);

        let lo = self.min_width_nm().ln();
        let hi = MAX_WIDTH_NM.ln();
        let mut w_min = self.min_width_nm();
        let mut f_min = f64::INFINITY;
        for i in 0..GRID_POINTS {
            let w = (lo + (hi - lo) * i as f64 / (GRID_POINTS - 1) as f64).exp();
            let v = f(w);
            if v < f_min {
                f_min = v;
                w_min = w;
            }
        }

        bisect_increasing(f, ln_p, w_min, MAX_WIDTH_NM, BISECT_ITERATIONS)
    }

    /// Horvath–Kawazoe slit potential [J/mol]
    fn slit_potential(&self, w: f64) -> f64 {
        let d0 = self.d0;
        let l = w + self.d_solid;
        let sigma = 0.4_f64.powf(1.0 / 6.0) * d0;
        let s4 = sigma.powi(4);
        let s10 = sigma.powi(10);

        let bracket = s4 / (3.0 * (l - d0).powi(3)) - s10 / (9.0 * (l - d0).powi(9))
            - s4 / (3.0 * d0.powi(3))
            + s10 / (9.0 * d0.powi(9));
        self.k / (s4 * (l - 2.0 * d0)) * bracket
    }

    /// Saito–Foley cylinder potential [J/mol]
    fn cylinder_potential(&self, w: f64) -> f64 {
        let d0 = self.d0;
        let r_p = 0.5 * (w + self.d_solid);
        let ratio = d0 / r_p;
        let r4 = ratio.powi(4);
        let r10 = ratio.powi(10);
        let shell = (1.0 - ratio).powi(2);

        let mut alpha = 1.0;
        let mut beta = 1.0;
        let mut shell_k = 1.0;
        let mut sum = 0.0;
        for k in 0..SAITO_FOLEY_TERMS {
            if k > 0 {
                let kf = k as f64;
                alpha *= ((-4.5 - kf) / kf).powi(2);
                beta *= ((-1.5 - kf) / kf).powi(2);
                shell_k *= shell;
            }
            sum += shell_k / (k as f64 + 1.0) * (21.0 / 32.0 * alpha * r10 - beta * r4);
        }
        0.75 * PI * self.k / d0.powi(4) * sum
    }

    /// Spherical cavity potential [J/mol], averaged over the volume the
    /// adsorbate centre can reach.
    fn sphere_potential(&self, w: f64) -> f64 {
        let l = 0.5 * (w + self.d_solid);
        let b = self.d0.powi(6) / 2.0;
        let r_max = l - self.d0;

        let shell = |r: f64| -> f64 {
            if r == 0.0 {
                return -4.0 * PI / l.powi(4) + 4.0 * PI * b / l.powi(10);
            }
            let (inner, outer) = (l - r, l + r);
            2.0 * PI * l / r
                * (-0.25 * (inner.powi(-4) - outer.powi(-4))
                    + b / 10.0 * (inner.powi(-10) - outer.powi(-10)))
        };

        let integral = simpson(|r| shell(r) * r * r, 0.0, r_max, SPHERE_INTERVALS);
        let mean = integral / (r_max.powi(3) / 3.0);
        2.0 / PI * self.k * mean
    }
}

/// Composite Simpson rule over an even number of intervals.
fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, intervals: usize) -> f64 {
    let n = intervals + intervals % 2;
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(a + h * i as f64);
    }
    sum * h / 3.0
}
