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

//! Result-file loading.
//!
//! Reading is the only I/O in the pipeline. A missing, oversized or unreadable
//! file is logged and turns into a configuration without measurements; it
//! never aborts the analysis.

use crate::core::{Configuration, ConfigurationId, ConfigurationSource, MeasurementSet};
use crate::harness::aggregator::Suite;
use crate::harness::extractor::Extractor;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum result-file size (64 MB).
/// Can be overridden via the PQBENCH_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn max_file_size() -> u64 {
    std::env::var("PQBENCH_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Reads a result file, or returns `None` (with a warning) if it is not
/// usable.
pub fn read_result_file(path: &Path) -> Option<String> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "result file not available");
            return None;
        }
    };

    let max = max_file_size();
    if metadata.len() > max {
        warn!(
            path = %path.display(),
            size = metadata.len(),
            max,
            "result file exceeds size limit, skipping"
        );
        return None;
    }

    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "read result file");
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read result file");
            None
        }
    }
}

/// Parses a result file, or returns `None` if it could not be read.
pub fn load_measurement_set(path: &Path, extractor: &Extractor) -> Option<MeasurementSet> {
    read_result_file(path).map(|text| extractor.extract(&text))
}

/// Loads one configuration from its source.
pub fn load_configuration(source: &ConfigurationSource, extractor: &Extractor) -> Configuration {
    let measurements = load_measurement_set(&source.path, extractor);
    if let Some(set) = &measurements {
        if set.is_empty() {
            warn!(
                configuration = %source.id,
                path = %source.path.display(),
                "no operations recognised in result file"
            );
        }
    }

    let mut configuration =
        Configuration::new(source.id.clone(), measurements).with_source(&source.path);
    configuration.label = source.label.clone();
    configuration
}

/// Loads all configurations of a suite in parallel.
///
/// Files are independent, so they are read and parsed concurrently; the
/// resulting suite is keyed by id and therefore ordered deterministically.
pub fn load_suite(
    name: &str,
    baseline: &ConfigurationId,
    sources: &[ConfigurationSource],
    extractor: &Extractor,
) -> Suite {
    let configurations: Vec<Configuration> = sources
        .par_iter()
        .map(|source| load_configuration(source, extractor))
        .collect();

    let mut suite = Suite::new(name, baseline.clone());
    for configuration in configurations {
        suite.add_configuration(configuration);
    }

    if suite.baseline_set().is_none() {
        warn!(suite = name, baseline = %baseline, "baseline results unavailable; percentages will be N/A");
    }
    suite
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scheme;
    use std::path::PathBuf;

    fn extractor() -> Extractor {
        Extractor::new(&Scheme::Dilithium.operations()).unwrap()
    }

    #[test]
    fn test_missing_file_is_absent() {
        let set = load_measurement_set(Path::new("/nonexistent/config1.txt"), &extractor());
        assert!(set.is_none());
    }

    #[test]
    fn test_load_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config1_baseline.txt");
        fs::write(&path, "keypair 100\nsign 200\nverify 300\n").unwrap();

        let source = ConfigurationSource {
            id: ConfigurationId::Index(1),
            label: Some("Baseline".to_string()),
            path: path.clone(),
        };
        let config = load_configuration(&source, &extractor());

        assert_eq!(config.display_name(), "Baseline");
        assert_eq!(config.source, Some(path));
        assert_eq!(config.measurements.map(|s| s.len()), Some(3));
    }

    #[test]
    fn test_load_suite_with_missing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let baseline = dir.path().join("config1.txt");
        fs::write(&baseline, "keypair 100\nsign 200\nverify 300\n").unwrap();

        let sources = vec![
            ConfigurationSource {
                id: ConfigurationId::Index(2),
                label: None,
                path: PathBuf::from("/nonexistent/config2.txt"),
            },
            ConfigurationSource {
                id: ConfigurationId::Index(1),
                label: None,
                path: baseline,
            },
        ];

        let suite = load_suite("dilithium2", &ConfigurationId::Index(1), &sources, &extractor());
        let ids: Vec<String> = suite.configurations().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(suite.baseline_set().is_some());
        assert!(suite
            .configuration(&ConfigurationId::Index(2))
            .unwrap()
            .measurements
            .is_none());
    }
}
