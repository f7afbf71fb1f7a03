//! The point isotherm record.

use crate::branch::{Branch, tag_branches};
use crate::info::IsothermInfo;
use crate::point::IsothermPoint;
use crate::table::{ColumnTable, IsothermSettings};
use ps_core::{AdsorbentMode, Conversion, LoadingUnit, PressureMode, PressureUnit, PsError, PsResult};
use ps_materials::{GasRegistry, SampleRegistry, resolve_density};
use tracing::{debug, info};

/// Units and modes the values of an isotherm are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsothermUnits {
    pub loading_unit: LoadingUnit,
    pub pressure_unit: PressureUnit,
    pub adsorbent_mode: AdsorbentMode,
    pub pressure_mode: PressureMode,
}

impl Default for IsothermUnits {
    fn default() -> Self {
        Self {
            loading_unit: LoadingUnit::Mmol,
            pressure_unit: PressureUnit::Bar,
            adsorbent_mode: AdsorbentMode::Mass,
            pressure_mode: PressureMode::Absolute,
        }
    }
}

impl IsothermUnits {
    /// Parse the registry names carried by column settings.
    pub fn from_settings(settings: &IsothermSettings) -> PsResult<Self> {
        Ok(Self {
            loading_unit: settings.loading_unit.parse()?,
            pressure_unit: settings.pressure_unit.parse()?,
            adsorbent_mode: settings.adsorbent_mode.parse()?,
            pressure_mode: settings.pressure_mode.parse()?,
        })
    }
}

/// Discrete isotherm measured on one sample with one adsorbate at one
/// temperature.
///
/// Points keep their recorded order. Branch tags are assigned once, at
/// construction, and no conversion re-tags them. Values only change
/// through the `convert_*` methods, each of which validates everything it
/// needs before touching a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointIsotherm {
    points: Vec<IsothermPoint>,
    info: IsothermInfo,
    units: IsothermUnits,
    has_enthalpy: bool,
}

impl PointIsotherm {
    /// Build from typed points. Any point carrying an enthalpy marks the
    /// isotherm as having an enthalpy column.
    pub fn new(
        mut points: Vec<IsothermPoint>,
        info: IsothermInfo,
        units: IsothermUnits,
    ) -> PsResult<Self> {
        validate_info(&info)?;
        if points.is_empty() {
            return Err(PsError::configuration("isotherm has no points"));
        }
        for (i, pt) in points.iter().enumerate() {
            if !pt.pressure.is_finite() || !pt.loading.is_finite() {
                return Err(PsError::configuration(format!(
                    "point {i} has non-finite pressure or loading ({}, {})",
                    pt.pressure, pt.loading
                )));
            }
        }

        let pressures: Vec<f64> = points.iter().map(|pt| pt.pressure).collect();
        for (pt, tag) in points.iter_mut().zip(tag_branches(&pressures)) {
            pt.branch = tag;
        }
        let has_enthalpy = points.iter().any(|pt| pt.enthalpy.is_some());

        Ok(Self {
            points,
            info,
            units,
            has_enthalpy,
        })
    }

    /// Build from named columns.
    ///
    /// Fails with `Configuration` if a unit or mode name is unknown, if the
    /// pressure or loading key is unset, if a key names a missing column, or
    /// if the selected columns differ in length.
    pub fn from_columns(
        columns: &ColumnTable,
        info: IsothermInfo,
        settings: &IsothermSettings,
    ) -> PsResult<Self> {
        let units = IsothermUnits::from_settings(settings)?;

        let pressure_key = settings
            .pressure_key
            .as_deref()
            .ok_or_else(|| PsError::configuration("pressure key is not set"))?;
        let loading_key = settings
            .loading_key
            .as_deref()
            .ok_or_else(|| PsError::configuration("loading key is not set"))?;

        let pressure = required_column(columns, pressure_key)?;
        let loading = required_column(columns, loading_key)?;
        if pressure.len() != loading.len() {
            return Err(PsError::configuration(format!(
                "columns '{pressure_key}' ({}) and '{loading_key}' ({}) differ in length",
                pressure.len(),
                loading.len()
            )));
        }

        let enthalpy = match settings.enthalpy_key.as_deref() {
            Some(key) => {
                let column = required_column(columns, key)?;
                if column.len() != pressure.len() {
                    return Err(PsError::configuration(format!(
                        "column '{key}' ({}) differs in length from '{pressure_key}' ({})",
                        column.len(),
                        pressure.len()
                    )));
                }
                Some(column)
            }
            None => None,
        };

        let points = pressure
            .iter()
            .zip(loading)
            .enumerate()
            .map(|(i, (&p, &n))| {
                let pt = IsothermPoint::new(p, n);
                match enthalpy {
                    Some(h) => pt.with_enthalpy(h[i]),
                    None => pt,
                }
            })
            .collect();

        let mut iso = Self::new(points, info, units)?;
        iso.has_enthalpy = enthalpy.is_some();
        Ok(iso)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn info(&self) -> &IsothermInfo {
        &self.info
    }

    /// Metadata is not part of the measured data and may be edited freely.
    pub fn info_mut(&mut self) -> &mut IsothermInfo {
        &mut self.info
    }

    pub fn units(&self) -> IsothermUnits {
        self.units
    }

    pub fn loading_unit(&self) -> LoadingUnit {
        self.units.loading_unit
    }

    pub fn pressure_unit(&self) -> PressureUnit {
        self.units.pressure_unit
    }

    pub fn adsorbent_mode(&self) -> AdsorbentMode {
        self.units.adsorbent_mode
    }

    pub fn pressure_mode(&self) -> PressureMode {
        self.units.pressure_mode
    }

    pub fn has_enthalpy(&self) -> bool {
        self.has_enthalpy
    }

    pub fn points(&self) -> &[IsothermPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // ------------------------------------------------------------------
    // Conversions
    // ------------------------------------------------------------------

    /// Rescale loadings into `target`.
    pub fn convert_loading_unit(&mut self, target: LoadingUnit) -> PsResult<Conversion> {
        let current = self.units.loading_unit;
        if current == target {
            info!(unit = %target, "isotherm loading already in requested unit");
            return Ok(Conversion::Unchanged);
        }

        let scale = current.scale_to(target);
        for pt in &mut self.points {
            pt.loading *= scale;
        }
        self.units.loading_unit = target;
        debug!(from = %current, to = %target, scale, "converted loading unit");
        Ok(Conversion::Converted)
    }

    /// [`convert_loading_unit`](Self::convert_loading_unit) with a registry name.
    pub fn convert_loading_unit_named(&mut self, target: &str) -> PsResult<Conversion> {
        let unit: LoadingUnit = target.parse()?;
        self.convert_loading_unit(unit)
    }

    /// Rescale pressures into `target`.
    ///
    /// In relative mode the pressures are dimensionless: only the unit used
    /// for a later relative→absolute conversion is changed.
    pub fn convert_pressure_unit(&mut self, target: PressureUnit) -> PsResult<Conversion> {
        let current = self.units.pressure_unit;
        if current == target {
            info!(unit = %target, "isotherm pressure already in requested unit");
            return Ok(Conversion::Unchanged);
        }

        if self.units.pressure_mode == PressureMode::Absolute {
            let scale = current.scale_to(target);
            for pt in &mut self.points {
                pt.pressure *= scale;
            }
        }
        self.units.pressure_unit = target;
        debug!(from = %current, to = %target, mode = %self.units.pressure_mode, "converted pressure unit");
        Ok(Conversion::Converted)
    }

    /// [`convert_pressure_unit`](Self::convert_pressure_unit) with a registry name.
    pub fn convert_pressure_unit_named(&mut self, target: &str) -> PsResult<Conversion> {
        let unit: PressureUnit = target.parse()?;
        self.convert_pressure_unit(unit)
    }

    /// Switch between absolute and relative pressure using the adsorbate
    /// saturation pressure at the experimental temperature.
    pub fn convert_pressure_mode(
        &mut self,
        target: PressureMode,
        gases: &dyn GasRegistry,
    ) -> PsResult<Conversion> {
        if self.units.pressure_mode == target {
            info!(mode = %target, "isotherm already in requested pressure mode");
            return Ok(Conversion::Unchanged);
        }

        let p0 = gases
            .saturation_pressure(&self.info.adsorbate, self.info.temperature())?
            .value;
        if !p0.is_finite() || p0 <= 0.0 {
            return Err(PsError::lookup(format!(
                "saturation pressure of '{}' at {} K is not positive: {p0}",
                self.info.adsorbate, self.info.t_exp
            )));
        }

        let unit_pa = self.units.pressure_unit.factor();
        let scale = match target {
            PressureMode::Relative => unit_pa / p0,
            PressureMode::Absolute => p0 / unit_pa,
        };
        for pt in &mut self.points {
            pt.pressure *= scale;
        }
        self.units.pressure_mode = target;
        debug!(
            adsorbate = %self.info.adsorbate,
            p0_pa = p0,
            mode = %target,
            registry = gases.name(),
            "converted pressure mode"
        );
        Ok(Conversion::Converted)
    }

    /// Switch loading basis between per-mass and per-volume using the sample
    /// density.
    pub fn convert_adsorbent_mode(
        &mut self,
        target: AdsorbentMode,
        samples: &dyn SampleRegistry,
    ) -> PsResult<Conversion> {
        if self.units.adsorbent_mode == target {
            info!(mode = %target, "isotherm already in requested adsorbent basis");
            return Ok(Conversion::Unchanged);
        }

        let density = resolve_density(samples, &self.info.sample_name, &self.info.sample_batch)?;
        let scale = match target {
            AdsorbentMode::Volume => density,
            AdsorbentMode::Mass => 1.0 / density,
        };
        for pt in &mut self.points {
            pt.loading *= scale;
        }
        self.units.adsorbent_mode = target;
        debug!(density, mode = %target, "converted adsorbent basis");
        Ok(Conversion::Converted)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn branch_points(&self, branch: Branch) -> impl Iterator<Item = &IsothermPoint> + '_ {
        self.points.iter().filter(move |pt| pt.branch == branch)
    }

    pub fn adsorption_points(&self) -> impl Iterator<Item = &IsothermPoint> + '_ {
        self.branch_points(Branch::Adsorption)
    }

    pub fn desorption_points(&self) -> impl Iterator<Item = &IsothermPoint> + '_ {
        self.branch_points(Branch::Desorption)
    }

    pub fn has_adsorption(&self) -> bool {
        self.adsorption_points().next().is_some()
    }

    pub fn has_desorption(&self) -> bool {
        self.desorption_points().next().is_some()
    }

    /// Points of `branch`, restricted to pressures strictly below
    /// `max_range` when given.
    fn selected(
        &self,
        branch: Branch,
        max_range: Option<f64>,
    ) -> impl Iterator<Item = &IsothermPoint> + '_ {
        self.branch_points(branch)
            .filter(move |pt| max_range.is_none_or(|max| pt.pressure < max))
    }

    pub fn pressure(&self, branch: Branch, max_range: Option<f64>) -> Vec<f64> {
        self.selected(branch, max_range).map(|pt| pt.pressure).collect()
    }

    pub fn loading(&self, branch: Branch, max_range: Option<f64>) -> Vec<f64> {
        self.selected(branch, max_range).map(|pt| pt.loading).collect()
    }

    /// `None` when the isotherm was built without an enthalpy column.
    /// Points lacking a value report NaN.
    pub fn enthalpy(&self, branch: Branch, max_range: Option<f64>) -> Option<Vec<f64>> {
        if !self.has_enthalpy {
            return None;
        }
        Some(
            self.selected(branch, max_range)
                .map(|pt| pt.enthalpy.unwrap_or(f64::NAN))
                .collect(),
        )
    }

    pub fn pressure_all(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.pressure).collect()
    }

    pub fn loading_all(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.loading).collect()
    }

    pub fn enthalpy_all(&self) -> Option<Vec<f64>> {
        self.has_enthalpy.then(|| {
            self.points
                .iter()
                .map(|pt| pt.enthalpy.unwrap_or(f64::NAN))
                .collect()
        })
    }

    /// Independent copy whose `branch` loadings are replaced by
    /// `loading_at(pressure)`. Branch tags and units are kept.
    pub fn derive_with_loading(
        &self,
        branch: Branch,
        loading_at: impl Fn(f64) -> f64,
    ) -> PointIsotherm {
        let mut derived = self.clone();
        for pt in derived.points.iter_mut().filter(|pt| pt.branch == branch) {
            pt.loading = loading_at(pt.pressure);
        }
        derived
    }

    /// One-line description for logs and the CLI.
    pub fn summary(&self) -> String {
        let ads = self.adsorption_points().count();
        let des = self.desorption_points().count();
        format!(
            "{} ({}) / {} at {} K: {} points ({ads} ads, {des} des), loading {}/{}, pressure {} {}{}",
            self.info.sample_name,
            self.info.sample_batch,
            self.info.adsorbate,
            self.info.t_exp,
            self.points.len(),
            self.units.loading_unit,
            match self.units.adsorbent_mode {
                AdsorbentMode::Mass => "g",
                AdsorbentMode::Volume => "cm3",
            },
            self.units.pressure_mode,
            self.units.pressure_unit,
            if self.has_enthalpy { ", with enthalpy" } else { "" },
        )
    }
}

fn validate_info(info: &IsothermInfo) -> PsResult<()> {
    if !info.t_exp.is_finite() || info.t_exp <= 0.0 {
        return Err(PsError::configuration(format!(
            "experimental temperature must be a positive number of kelvin, got {}",
            info.t_exp
        )));
    }
    Ok(())
}

fn required_column<'a>(columns: &'a ColumnTable, key: &str) -> PsResult<&'a [f64]> {
    columns.column(key).ok_or_else(|| {
        PsError::configuration(format!(
            "column '{key}' not found, available: {}",
            columns.keys().collect::<Vec<_>>().join(", ")
        ))
    })
}
