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

//! Analysis runner.
//!
//! Turns a [`RunManifest`] into an [`Analysis`]: every suite loaded and
//! parsed, ready for comparison and reporting.

use crate::core::{OperationList, RunManifest, Scheme, Statistic};
use crate::error::Result;
use crate::harness::aggregator::Suite;
use crate::harness::comparator::ComparisonResult;
use crate::harness::extractor::Extractor;
use crate::harness::loader::load_suite;
use tracing::info;

/// Default report title.
pub const DEFAULT_TITLE: &str = "Benchmark Analysis";

/// Parsed benchmark results for one manifest.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Report title.
    pub title: String,
    /// Scheme preset in use, if any.
    pub scheme: Option<Scheme>,
    /// Statistic compared against the baseline.
    pub statistic: Statistic,
    /// Operations in presentation order.
    pub operations: OperationList,
    /// Loaded suites, in manifest order.
    pub suites: Vec<Suite>,
    /// Free-form notes.
    pub notes: Vec<String>,
}

impl Analysis {
    /// Creates an analysis over already-built suites.
    pub fn new(
        title: impl Into<String>,
        operations: OperationList,
        statistic: Statistic,
        suites: Vec<Suite>,
    ) -> Self {
        Self {
            title: title.into(),
            scheme: None,
            statistic,
            operations,
            suites,
            notes: Vec::new(),
        }
    }

    /// Comparison rows of one suite.
    pub fn compare(&self, suite: &Suite) -> Vec<ComparisonResult> {
        suite.compare(&self.operations, self.statistic)
    }
}

/// Loads every suite described by `manifest`.
///
/// # Errors
///
/// Returns an error only for an invalid manifest; missing result files
/// become configurations without measurements.
pub fn run_manifest(manifest: &RunManifest) -> Result<Analysis> {
    manifest.validate()?;
    let operations = manifest.operation_list()?;
    let extractor = Extractor::new(&operations)?;

    let suites: Vec<Suite> = manifest
        .suites
        .iter()
        .map(|spec| {
            let baseline = manifest.baseline_for(spec);
            info!(
                suite = %spec.name,
                configurations = spec.configurations.len(),
                baseline = %baseline,
                "loading suite"
            );
            load_suite(&spec.name, baseline, &spec.configurations, &extractor)
        })
        .collect();

    let mut analysis = Analysis::new(
        manifest
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        operations,
        manifest.statistic,
        suites,
    );
    analysis.scheme = manifest.scheme;
    analysis.notes = manifest.notes.clone();
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Classification;
    use std::fs;

    #[test]
    fn test_run_manifest_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config1.txt"),
            "keypair 12345\nsign 6789\nverify 2345\n",
        )
        .unwrap();
        fs::write(dir.path().join("config2.txt"), "sign 6000\nverify 2400\n").unwrap();

        let yaml = format!(
            r#"
scheme: dilithium
suites:
  - name: dilithium2
    configurations:
      - {{ id: 1, path: "{0}/config1.txt" }}
      - {{ id: 2, path: "{0}/config2.txt" }}
      - {{ id: 3, path: "{0}/config3.txt" }}
"#,
            dir.path().display()
        );
        let manifest = RunManifest::from_yaml_str(&yaml).unwrap();
        let analysis = run_manifest(&manifest).unwrap();

        assert_eq!(analysis.title, DEFAULT_TITLE);
        assert_eq!(analysis.suites.len(), 1);

        let rows = analysis.compare(&analysis.suites[0]);
        assert_eq!(rows.len(), 6);

        // config 2: keygen missing, sign faster, verify similar
        assert_eq!(rows[0].classification, Classification::Unknown);
        assert_eq!(rows[1].classification, Classification::Faster);
        assert_eq!(rows[2].classification, Classification::Similar);

        // config 3: file missing
        assert!(rows[3..].iter().all(|r| r.classification == Classification::Unknown));
    }
}
