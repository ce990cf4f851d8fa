// PQBench - Post-Quantum Benchmark Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Run manifests.
//!
//! A manifest describes one analysis: which scheme's operations to look for,
//! which statistic to compare, and where each configuration's result file
//! lives. Manifests are YAML (`.yaml`, `.yml`) or JSON (`.json`).
//!
//! ```yaml
//! title: Kyber parameter tweaks
//! scheme: kyber
//! statistic: median
//! baseline: 1
//! suites:
//!   - name: kyber512
//!     configurations:
//!       - id: 1
//!         label: Baseline
//!         path: config1/kyber512_results.txt
//!       - id: 2
//!         label: Modified compression
//!         path: config2/kyber512_results.txt
//! ```

use crate::core::{ConfigurationId, Operation, OperationList, Scheme, Statistic};
use crate::error::{PqBenchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Baseline used when a manifest does not name one.
pub const DEFAULT_BASELINE: u32 = 1;

fn default_baseline() -> ConfigurationId {
    ConfigurationId::Index(DEFAULT_BASELINE)
}

/// An operation given either as a bare name or with aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationDef {
    /// Searched for under its own name.
    Name(String),
    /// Name plus search aliases.
    Full(Operation),
}

impl From<OperationDef> for Operation {
    fn from(def: OperationDef) -> Self {
        match def {
            OperationDef::Name(name) => Operation::new(name),
            OperationDef::Full(op) => op,
        }
    }
}

/// One configuration's result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationSource {
    /// Configuration id.
    pub id: ConfigurationId,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Path to the benchmark output file.
    pub path: PathBuf,
}

/// Configurations benchmarked under one parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteSpec {
    /// Suite name, e.g. `kyber768`.
    pub name: String,
    /// Overrides the manifest-wide baseline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<ConfigurationId>,
    /// Configurations in this suite.
    pub configurations: Vec<ConfigurationSource>,
}

/// A complete analysis description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunManifest {
    /// Report title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Scheme whose preset operations are searched for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    /// Explicit operation list; takes precedence over the scheme preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<OperationDef>>,
    /// Statistic compared against the baseline.
    #[serde(default)]
    pub statistic: Statistic,
    /// Baseline configuration for all suites.
    #[serde(default = "default_baseline")]
    pub baseline: ConfigurationId,
    /// Suites to analyse.
    pub suites: Vec<SuiteSpec>,
    /// Free-form notes copied into the report.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl RunManifest {
    /// Loads a manifest, choosing the parser by file extension.
    ///
    /// Relative configuration paths are resolved against the manifest's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or fails
    /// [`RunManifest::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| PqBenchError::io_error(path, e))?;

        let mut manifest = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            _ => Self::from_yaml_str(&contents)?,
        };

        if let Some(dir) = path.parent() {
            manifest.resolve_paths(dir);
        }
        Ok(manifest)
    }

    /// Parses and validates a YAML manifest.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(contents)
            .map_err(|e| PqBenchError::manifest(format!("invalid YAML: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parses and validates a JSON manifest.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(contents)
            .map_err(|e| PqBenchError::manifest(format!("invalid JSON: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Makes every relative configuration path relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for suite in &mut self.suites {
            for config in &mut suite.configurations {
                if config.path.is_relative() {
                    config.path = base.join(&config.path);
                }
            }
        }
    }

    /// The operations to extract and compare.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `operations` nor `scheme` is set, or the
    /// explicit list is invalid.
    pub fn operation_list(&self) -> Result<OperationList> {
        match (&self.operations, self.scheme) {
            (Some(defs), _) => {
                OperationList::new(defs.iter().cloned().map(Operation::from).collect())
            }
            (None, Some(scheme)) => Ok(scheme.operations()),
            (None, None) => Err(PqBenchError::manifest(
                "either 'scheme' or 'operations' must be given",
            )),
        }
    }

    /// Baseline for a suite, honouring per-suite overrides.
    pub fn baseline_for<'a>(&'a self, suite: &'a SuiteSpec) -> &'a ConfigurationId {
        suite.baseline.as_ref().unwrap_or(&self.baseline)
    }

    /// Checks structural consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no suites, suite names repeat, a suite
    /// repeats a configuration id or lacks its baseline, or the operation
    /// list is invalid.
    pub fn validate(&self) -> Result<()> {
        self.operation_list()?;

        if self.suites.is_empty() {
            return Err(PqBenchError::manifest("at least one suite is required"));
        }

        let mut suite_names = HashSet::new();
        for suite in &self.suites {
            if !suite_names.insert(suite.name.as_str()) {
                return Err(PqBenchError::manifest(format!(
                    "suite '{}' is defined more than once",
                    suite.name
                )));
            }

            let mut ids = HashSet::new();
            for config in &suite.configurations {
                if !ids.insert(&config.id) {
                    return Err(PqBenchError::manifest(format!(
                        "configuration '{}' is listed more than once in suite '{}'",
                        config.id, suite.name
                    )));
                }
            }

            let baseline = self.baseline_for(suite);
            if !ids.contains(baseline) {
                return Err(PqBenchError::UnknownBaseline {
                    suite: suite.name.clone(),
                    baseline: baseline.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KYBER_YAML: &str = r#"
title: Kyber tweaks
scheme: kyber
suites:
  - name: kyber512
    configurations:
      - id: 1
        label: Baseline
        path: config1/kyber512_results.txt
      - id: 2
        path: config2/kyber512_results.txt
  - name: kyber768
    baseline: reference
    configurations:
      - id: reference
        path: ref/kyber768_results.txt
      - id: 4
        path: config4/kyber768_results.txt
"#;

    #[test]
    fn test_parse_yaml_defaults() {
        let manifest = RunManifest::from_yaml_str(KYBER_YAML).unwrap();
        assert_eq!(manifest.scheme, Some(Scheme::Kyber));
        assert_eq!(manifest.statistic, Statistic::Median);
        assert_eq!(manifest.baseline, ConfigurationId::Index(1));
        assert_eq!(manifest.suites.len(), 2);
        assert_eq!(
            manifest.baseline_for(&manifest.suites[1]),
            &ConfigurationId::Tag("reference".to_string())
        );
        assert_eq!(manifest.operation_list().unwrap().len(), 10);
    }

    #[test]
    fn test_custom_operations() {
        let yaml = r#"
operations:
  - sign
  - name: keygen
    aliases: [keypair]
statistic: average
suites:
  - name: dilithium2
    configurations:
      - { id: 1, path: a.txt }
"#;
        let manifest = RunManifest::from_yaml_str(yaml).unwrap();
        let ops = manifest.operation_list().unwrap();
        assert_eq!(ops.names().collect::<Vec<_>>(), vec!["sign", "keygen"]);
        assert_eq!(manifest.statistic, Statistic::Average);
    }

    #[test]
    fn test_missing_baseline_rejected() {
        let yaml = r#"
scheme: dilithium
baseline: 1
suites:
  - name: dilithium2
    configurations:
      - { id: 2, path: a.txt }
"#;
        let err = RunManifest::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PqBenchError::UnknownBaseline { .. }));
    }

    #[test]
    fn test_duplicate_configuration_rejected() {
        let yaml = r#"
scheme: dilithium
suites:
  - name: dilithium2
    configurations:
      - { id: 1, path: a.txt }
      - { id: 1, path: b.txt }
"#;
        let err = RunManifest::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_no_operations_rejected() {
        let yaml = r#"
suites:
  - name: s
    configurations:
      - { id: 1, path: a.txt }
"#;
        assert!(matches!(
            RunManifest::from_yaml_str(yaml),
            Err(PqBenchError::Manifest(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
scheme: dilithium
colour: true
suites: []
"#;
        assert!(RunManifest::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_json_manifest_and_path_resolution() {
        let json = r#"{
            "scheme": "dilithium",
            "suites": [{
                "name": "dilithium2",
                "configurations": [
                    {"id": 1, "path": "config1_baseline.txt"},
                    {"id": 2, "path": "/abs/config2.txt"}
                ]
            }]
        }"#;
        let mut manifest = RunManifest::from_json_str(json).unwrap();
        manifest.resolve_paths(Path::new("/runs/today"));

        let paths: Vec<_> = manifest.suites[0]
            .configurations
            .iter()
            .map(|c| c.path.clone())
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/runs/today/config1_baseline.txt"),
                PathBuf::from("/abs/config2.txt")
            ]
        );
    }

    #[test]
    fn test_json_string_ids_match_default_baseline() {
        let json = r#"{
            "scheme": "kyber",
            "suites": [{
                "name": "kyber512",
                "configurations": [
                    {"id": "1", "path": "a.txt"},
                    {"id": "2", "path": "b.txt"}
                ]
            }]
        }"#;
        let manifest = RunManifest::from_json_str(json).unwrap();
        assert_eq!(
            manifest.suites[0].configurations[0].id,
            ConfigurationId::Index(1)
        );
        assert_eq!(
            manifest.baseline_for(&manifest.suites[0]),
            &ConfigurationId::Index(1)
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.yaml");
        fs::write(&path, KYBER_YAML).unwrap();

        let manifest = RunManifest::load(&path).unwrap();
        assert_eq!(
            manifest.suites[0].configurations[0].path,
            dir.path().join("config1/kyber512_results.txt")
        );
    }
}
