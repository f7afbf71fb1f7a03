//! Gas registry trait and the in-memory adsorbate list.

use crate::adsorbate::Adsorbate;
use crate::catalog::builtin_adsorbates;
use crate::error::{RegistryError, RegistryResult};
use ps_core::units::{Pressure, Temperature};

/// Read-only lookup of adsorbate properties.
///
/// Implementations must be thread-safe (Send + Sync) so that independent
/// isotherms can be analysed in parallel against one registry.
pub trait GasRegistry: Send + Sync {
    /// Get the registry name (for debugging/logging).
    fn name(&self) -> &str;

    /// Resolve exactly one adsorbate by name or alias.
    fn adsorbate(&self, query: &str) -> RegistryResult<&Adsorbate>;

    /// Saturation pressure of `query` at temperature `t`.
    ///
    /// Default implementation evaluates the adsorbate's own curve; backends
    /// with a better equation of state override this.
    fn saturation_pressure(&self, query: &str, t: Temperature) -> RegistryResult<Pressure> {
        self.adsorbate(query)?.saturation_pressure(t)
    }
}

/// Adsorbates held in memory.
#[derive(Debug, Clone, Default)]
pub struct AdsorbateList {
    entries: Vec<Adsorbate>,
}

impl AdsorbateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped probe gases (nitrogen, argon, carbon dioxide).
    pub fn builtin() -> Self {
        Self {
            entries: builtin_adsorbates(),
        }
    }

    pub fn push(&mut self, adsorbate: Adsorbate) {
        self.entries.push(adsorbate);
    }

    pub fn with(mut self, adsorbate: Adsorbate) -> Self {
        self.push(adsorbate);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adsorbate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GasRegistry for AdsorbateList {
    fn name(&self) -> &str {
        "in-memory adsorbate list"
    }

    fn adsorbate(&self, query: &str) -> RegistryResult<&Adsorbate> {
        let mut matches = self.entries.iter().filter(|a| a.matches(query));
        let first = matches.next().ok_or_else(|| RegistryError::NotFound {
            kind: "adsorbate",
            query: query.to_string(),
        })?;

        let extra = matches.count();
        if extra > 0 {
            return Err(RegistryError::Ambiguous {
                kind: "adsorbate",
                query: query.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }
}
