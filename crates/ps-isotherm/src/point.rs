use crate::branch::Branch;

/// One measured point of an isotherm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsothermPoint {
    pub pressure: f64,
    pub loading: f64,
    /// Differential enthalpy of adsorption, when calorimetry was recorded.
    pub enthalpy: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default = "default_branch"))]
    pub(crate) branch: Branch,
}

#[cfg(feature = "serde")]
fn default_branch() -> Branch {
    Branch::Adsorption
}

impl IsothermPoint {
    /// A point without enthalpy. The branch is assigned when the point joins
    /// an isotherm.
    pub fn new(pressure: f64, loading: f64) -> Self {
        Self {
            pressure,
            loading,
            enthalpy: None,
            branch: Branch::Adsorption,
        }
    }

    pub fn with_enthalpy(mut self, enthalpy: f64) -> Self {
        self.enthalpy = Some(enthalpy);
        self
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    pub fn is_desorption(&self) -> bool {
        self.branch == Branch::Desorption
    }
}
