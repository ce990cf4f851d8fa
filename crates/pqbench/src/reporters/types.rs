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

//! Report types and presentation settings.
//!
//! A [`Report`] is a serializable snapshot of an [`Analysis`]: measurements,
//! summaries and comparison rows for every suite. Reporters render it using
//! an explicit [`ReportStyle`].

use crate::core::{ConfigurationId, MeasurementSet, Scheme, Statistic};
use crate::harness::{Analysis, Classification, ComparisonResult, Suite, Summary};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Presentation settings shared by all reporters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Rendered in place of a missing value.
    pub placeholder: String,
    /// Decimal places for percentages.
    pub precision: usize,
    /// Group cycle counts in thousands (`1,234,567`).
    pub thousands_separator: bool,
    /// Width of the operation column in text output.
    pub label_width: usize,
    /// Width of each value column in text output.
    pub column_width: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            placeholder: "N/A".to_string(),
            precision: 2,
            thousands_separator: true,
            label_width: 25,
            column_width: 18,
        }
    }
}

impl ReportStyle {
    /// Formats a cycle count, or the placeholder.
    pub fn cycles(&self, value: Option<u64>) -> String {
        match value {
            Some(v) if self.thousands_separator => group_thousands(v),
            Some(v) => v.to_string(),
            None => self.placeholder.clone(),
        }
    }

    /// Formats a cycle count without grouping, or the placeholder.
    pub fn cycles_plain(&self, value: Option<u64>) -> String {
        value.map_or_else(|| self.placeholder.clone(), |v| v.to_string())
    }

    /// Formats a signed percentage (`+1.23%`), or the placeholder.
    pub fn percentage(&self, value: Option<f64>) -> String {
        match value {
            Some(p) => format!("{:+.*}%", self.precision, p),
            None => self.placeholder.clone(),
        }
    }

    /// Formats a percentage followed by its classification.
    pub fn change(&self, value: Option<f64>, classification: Classification) -> String {
        match value {
            Some(_) => format!("{} ({})", self.percentage(value), classification),
            None => self.placeholder.clone(),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One configuration in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationReport {
    /// Configuration id.
    pub id: ConfigurationId,
    /// Display name.
    pub name: String,
    /// Whether this is the suite's baseline.
    pub baseline: bool,
    /// Result file.
    pub source: Option<PathBuf>,
    /// Parsed measurements, `None` if the file was unavailable.
    pub measurements: Option<MeasurementSet>,
    /// Aggregate over the report's operations.
    pub summary: Option<Summary>,
}

/// One suite in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite name.
    pub name: String,
    /// Baseline configuration id.
    pub baseline: ConfigurationId,
    /// Configurations in id order.
    pub configurations: Vec<ConfigurationReport>,
    /// Comparison rows, by configuration then operation.
    pub comparisons: Vec<ComparisonResult>,
}

impl SuiteReport {
    /// Looks up a configuration.
    pub fn configuration(&self, id: &ConfigurationId) -> Option<&ConfigurationReport> {
        self.configurations.iter().find(|c| &c.id == id)
    }

    /// Non-baseline configurations.
    pub fn candidates(&self) -> impl Iterator<Item = &ConfigurationReport> {
        self.configurations.iter().filter(|c| !c.baseline)
    }

    /// Comparison row for a (configuration, operation) pair.
    pub fn comparison(&self, id: &ConfigurationId, operation: &str) -> Option<&ComparisonResult> {
        self.comparisons
            .iter()
            .find(|r| &r.configuration == id && r.operation == operation)
    }

    /// Display name of the baseline.
    pub fn baseline_name(&self) -> String {
        self.configuration(&self.baseline)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("Config {}", self.baseline))
    }
}

/// Complete benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// Scheme preset, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    /// Statistic compared.
    pub statistic: Statistic,
    /// Operation names in presentation order.
    pub operations: Vec<String>,
    /// Suites in manifest order.
    pub suites: Vec<SuiteReport>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Report {
    /// Snapshots an analysis.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            title: analysis.title.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            scheme: analysis.scheme,
            statistic: analysis.statistic,
            operations: analysis.operations.names().map(str::to_string).collect(),
            suites: analysis
                .suites
                .iter()
                .map(|suite| suite_report(analysis, suite))
                .collect(),
            notes: analysis.notes.clone(),
        }
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// All rows classified slower than their baseline.
    pub fn regressions(&self) -> impl Iterator<Item = (&SuiteReport, &ComparisonResult)> {
        self.suites.iter().flat_map(|suite| {
            suite
                .comparisons
                .iter()
                .filter(|r| r.classification == Classification::Slower)
                .map(move |r| (suite, r))
        })
    }

    /// Whether any row is classified slower.
    pub fn has_regressions(&self) -> bool {
        self.regressions().next().is_some()
    }
}

fn suite_report(analysis: &Analysis, suite: &Suite) -> SuiteReport {
    let summaries = suite.summaries(&analysis.operations, analysis.statistic);
    let configurations = suite
        .configurations()
        .zip(summaries)
        .map(|(config, (_, summary))| ConfigurationReport {
            id: config.id.clone(),
            name: config.display_name(),
            baseline: config.id == suite.baseline,
            source: config.source.clone(),
            measurements: config.measurements.clone(),
            summary,
        })
        .collect();

    SuiteReport {
        name: suite.name.clone(),
        baseline: suite.baseline.clone(),
        configurations,
        comparisons: analysis.compare(suite),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::core::{Configuration, Measurement, OperationList};

    /// Dilithium-style report: baseline, one faster tweak, one missing file.
    pub fn sample_report() -> Report {
        let set = |k: u64, s: u64, v: u64| -> MeasurementSet {
            [
                ("keygen", Measurement::Scalar(k)),
                ("sign", Measurement::Scalar(s)),
                ("verify", Measurement::Scalar(v)),
            ]
            .into_iter()
            .collect()
        };

        let suite = Suite::new("dilithium2", 1u32)
            .with_configuration(
                Configuration::new(1u32, Some(set(12345, 6789, 0))).with_label("Baseline"),
            )
            .with_configuration(
                Configuration::new(2u32, Some(set(12000, 6000, 500))).with_label("SHA3-256"),
            )
            .with_configuration(Configuration::new(3u32, None));

        let ops = OperationList::from_names(["keygen", "sign", "verify"]).unwrap();
        let mut analysis = Analysis::new("Dilithium Tweaks", ops, Statistic::Median, vec![suite]);
        analysis.scheme = Some(Scheme::Dilithium);
        Report::from_analysis(&analysis)
    }
}
