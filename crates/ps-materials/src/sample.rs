//! Sample records and the sample registry.

use crate::error::{RegistryError, RegistryResult};
use std::collections::BTreeMap;

/// A material sample identified by `(name, batch)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub batch: String,
    /// Measured properties keyed by name, e.g. `density` [g/cm³].
    pub properties: BTreeMap<String, f64>,
}

impl Sample {
    pub fn new(name: impl Into<String>, batch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            batch: batch.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).copied()
    }
}

/// Read-only lookup of sample records.
pub trait SampleRegistry: Send + Sync {
    /// Every record whose name and batch match exactly.
    fn lookup(&self, name: &str, batch: &str) -> Vec<&Sample>;
}

/// Samples held in memory.
#[derive(Debug, Clone, Default)]
pub struct SampleList {
    entries: Vec<Sample>,
}

impl SampleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.entries.push(sample);
    }

    pub fn with(mut self, sample: Sample) -> Self {
        self.push(sample);
        self
    }
}

impl FromIterator<Sample> for SampleList {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl SampleRegistry for SampleList {
    fn lookup(&self, name: &str, batch: &str) -> Vec<&Sample> {
        self.entries
            .iter()
            .filter(|s| s.name == name && s.batch == batch)
            .collect()
    }
}

/// Resolve the density [g/cm³] of the single sample `(name, batch)`.
///
/// Fails when no record or more than one record matches, or when the record
/// carries no finite positive `density`.
pub fn resolve_density(
    registry: &dyn SampleRegistry,
    name: &str,
    batch: &str,
) -> RegistryResult<f64> {
    let query = format!("{name} / {batch}");
    let matches = registry.lookup(name, batch);

    let sample = match matches.as_slice() {
        [] => {
            return Err(RegistryError::NotFound {
                kind: "sample",
                query,
            });
        }
        [single] => *single,
        many => {
            return Err(RegistryError::Ambiguous {
                kind: "sample",
                query,
                count: many.len(),
            });
        }
    };

    match sample.property("density") {
        Some(rho) if rho.is_finite() && rho > 0.0 => Ok(rho),
        _ => Err(RegistryError::MissingProperty {
            kind: "sample",
            query,
            property: "density",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_single_sample() {
        let samples = SampleList::new()
            .with(Sample::new("MCM-41", "1").with_property("density", 0.7))
            .with(Sample::new("MCM-41", "2").with_property("density", 0.9));
        assert_eq!(resolve_density(&samples, "MCM-41", "2").unwrap(), 0.9);
    }

    #[test]
    fn absent_ambiguous_and_missing_density() {
        let samples: SampleList = vec![
            Sample::new("Takeda 5A", "1").with_property("density", 0.8),
            Sample::new("Takeda 5A", "1").with_property("density", 0.8),
            Sample::new("UiO-66", "1"),
        ]
        .into_iter()
        .collect();

        assert!(matches!(
            resolve_density(&samples, "ZIF-8", "1"),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(matches!(
            resolve_density(&samples, "Takeda 5A", "1"),
            Err(RegistryError::Ambiguous { count: 2, .. })
        ));
        assert!(matches!(
            resolve_density(&samples, "UiO-66", "1"),
            Err(RegistryError::MissingProperty { .. })
        ));
    }
}
