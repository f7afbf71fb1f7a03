//! Isotherm documents on disk: metadata, column settings and the data
//! columns, in JSON or YAML.

use ps_core::PsError;
use ps_isotherm::{ColumnTable, IsothermInfo, IsothermSettings, PointIsotherm};
use ps_materials::{Sample, SampleList};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Analysis(#[from] PsError),
}

pub type CliResult<T> = Result<T, CliError>;

/// Sample record carried alongside the isotherm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleEntry {
    pub name: String,
    pub batch: String,
    /// Skeletal density [g/cm³]
    #[serde(default)]
    pub density: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsothermDocument {
    pub info: IsothermInfo,
    #[serde(default)]
    pub settings: IsothermSettings,
    pub columns: ColumnTable,
    #[serde(default)]
    pub samples: Vec<SampleEntry>,
}

impl IsothermDocument {
    pub fn isotherm(&self) -> CliResult<PointIsotherm> {
        Ok(PointIsotherm::from_columns(
            &self.columns,
            self.info.clone(),
            &self.settings,
        )?)
    }

    pub fn sample_list(&self) -> SampleList {
        self.samples
            .iter()
            .map(|entry| {
                let sample = Sample::new(&entry.name, &entry.batch);
                match entry.density {
                    Some(density) => sample.with_property("density", density),
                    None => sample,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.json` reads as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

pub fn parse_document(text: &str, format: Format) -> CliResult<IsothermDocument> {
    Ok(match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
    })
}

pub fn load_document(path: &Path) -> CliResult<IsothermDocument> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&text, Format::from_path(path))
}

pub fn render<T: Serialize>(value: &T, format: Format) -> CliResult<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::{AdsorbentMode, PressureMode};
    use ps_materials::resolve_density;

    const YAML: &str = r#"
info:
  sample_name: MCM-41
  sample_batch: A
  adsorbate: nitrogen
  t_exp: 77.355
settings:
  pressure_key: p
  loading_key: n
  pressure_mode: relative
columns:
  p: [0.1, 0.2, 0.3, 0.25]
  n: [1.0, 1.5, 1.9, 1.8]
samples:
  - name: MCM-41
    batch: A
    density: 0.7
"#;

    #[test]
    fn yaml_document_builds_isotherm() {
        let doc = parse_document(YAML, Format::Yaml).unwrap();
        let iso = doc.isotherm().unwrap();
        assert_eq!(iso.len(), 4);
        assert_eq!(iso.pressure_mode(), PressureMode::Relative);
        assert_eq!(iso.adsorbent_mode(), AdsorbentMode::Mass);
        assert!(iso.has_desorption());
        assert!(iso.info().is_real);

        let samples = doc.sample_list();
        assert_eq!(resolve_density(&samples, "MCM-41", "A").unwrap(), 0.7);
    }

    #[test]
    fn json_document_with_defaults() {
        let json = r#"{
            "info": {"sample_name": "x", "sample_batch": "1", "adsorbate": "argon", "t_exp": 87.3},
            "settings": {"pressure_key": "P", "loading_key": "L"},
            "columns": {"P": [0.1, 0.5], "L": [0.2, 0.9]}
        }"#;
        let doc = parse_document(json, Format::Json).unwrap();
        assert!(doc.samples.is_empty());
        let iso = doc.isotherm().unwrap();
        assert_eq!(iso.pressure_mode(), PressureMode::Absolute);
    }

    #[test]
    fn missing_column_is_configuration_error() {
        let text = YAML.replace("loading_key: n", "loading_key: q");
        let doc = parse_document(&text, Format::Yaml).unwrap();
        assert!(matches!(
            doc.isotherm(),
            Err(CliError::Analysis(PsError::Configuration { .. }))
        ));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a/b.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("noext")), Format::Yaml);
    }
}
