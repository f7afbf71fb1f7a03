//! Fitted model isotherms and the adapter from point isotherms.

use crate::fitter::ModelFitter;
use crate::model::IsothermModel;
use ps_core::{PsError, PsResult, ensure_finite};
use ps_isotherm::{Branch, IsothermUnits, PointIsotherm};
use tracing::info;

/// Experiment type recorded on isotherms derived from a model.
pub const SIMULATED_EXP_TYPE: &str = "sym";

/// An analytic isotherm fitted to one branch of a point isotherm.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelIsotherm {
    model: IsothermModel,
    params: Vec<f64>,
    branch: Branch,
    units: IsothermUnits,
    rmse: f64,
    pressure_range: (f64, f64),
}

impl ModelIsotherm {
    pub fn model(&self) -> IsothermModel {
        self.model
    }

    /// Fitted parameters in [`IsothermModel::param_names`] order.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<f64> {
        self.model
            .param_names()
            .iter()
            .position(|n| *n == name)
            .map(|i| self.params[i])
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// Units of the data the model was fitted to.
    pub fn units(&self) -> IsothermUnits {
        self.units
    }

    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Lowest and highest pressure of the fitted data.
    pub fn pressure_range(&self) -> (f64, f64) {
        self.pressure_range
    }

    /// Model loading at pressure `p`, in the units of the fitted data.
    pub fn loading(&self, p: f64) -> f64 {
        self.model.loading(&self.params, p)
    }

    /// Independent copy of `parent` whose fitted-branch loadings are the
    /// model's. The copy is marked as simulated.
    ///
    /// `parent` must be in the units the model was fitted in.
    pub fn to_point_isotherm(&self, parent: &PointIsotherm) -> PsResult<PointIsotherm> {
        if parent.units() != self.units {
            return Err(PsError::configuration(format!(
                "model was fitted in {:?}, isotherm is in {:?}",
                self.units,
                parent.units()
            )));
        }

        let mut derived = parent.derive_with_loading(self.branch, |p| self.loading(p));
        let meta = derived.info_mut();
        meta.is_real = false;
        meta.exp_type = Some(SIMULATED_EXP_TYPE.to_string());
        Ok(derived)
    }
}

/// Fit `model` to the adsorption branch of `isotherm`.
pub fn fit_model(
    isotherm: &PointIsotherm,
    model: IsothermModel,
    fitter: &dyn ModelFitter,
) -> PsResult<ModelIsotherm> {
    fit_model_branch(isotherm, Branch::Adsorption, model, fitter)
}

/// Fit `model` to `branch` of `isotherm`.
pub fn fit_model_branch(
    isotherm: &PointIsotherm,
    branch: Branch,
    model: IsothermModel,
    fitter: &dyn ModelFitter,
) -> PsResult<ModelIsotherm> {
    let mut data: Vec<(f64, f64)> = isotherm
        .branch_points(branch)
        .map(|pt| (pt.pressure, pt.loading))
        .collect();
    data.sort_by(|a, b| a.0.total_cmp(&b.0));
    let (pressure, loading): (Vec<f64>, Vec<f64>) = data.into_iter().unzip();

    let (Some(&p_lo), Some(&p_hi)) = (pressure.first(), pressure.last()) else {
        return Err(PsError::fitting(format!("isotherm has no {branch} points")));
    };

    let fitted = fitter.fit(model, &pressure, &loading)?;
    if fitted.values.len() != model.param_count() {
        return Err(PsError::fitting(format!(
            "fitter '{}' returned {} parameters for {model}, expected {}",
            fitter.name(),
            fitted.values.len(),
            model.param_count()
        )));
    }
    for &value in &fitted.values {
        ensure_finite(value, "fitted model parameter")?;
    }
    info!(
        %model,
        fitter = fitter.name(),
        params = ?fitted.values,
        rmse = fitted.rmse,
        "fitted model isotherm"
    );

    Ok(ModelIsotherm {
        model,
        params: fitted.values,
        branch,
        units: isotherm.units(),
        rmse: fitted.rmse,
        pressure_range: (p_lo, p_hi),
    })
}
