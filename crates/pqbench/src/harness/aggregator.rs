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

//! Suite aggregation.
//!
//! A [`Suite`] groups the configurations benchmarked under one parameter set
//! (e.g. `kyber768`) and compares each of them against the suite's baseline.

use crate::core::{Configuration, ConfigurationId, MeasurementSet, OperationList, Statistic};
use crate::harness::comparator::{compare_sets, ComparisonResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate cycle counts of one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum over all measured operations.
    pub total: u64,
    /// Integer mean per measured operation.
    pub average: u64,
    /// Number of measured operations.
    pub count: usize,
}

/// Summarises `set` over the listed operations.
///
/// Returns `None` when none of the operations were measured.
pub fn compute_summary(
    set: &MeasurementSet,
    operations: &OperationList,
    statistic: Statistic,
) -> Option<Summary> {
    let values: Vec<u64> = operations
        .names()
        .filter_map(|op| set.value(op, statistic))
        .collect();
    if values.is_empty() {
        return None;
    }

    let total = values.iter().fold(0u64, |acc, v| acc.saturating_add(*v));
    Some(Summary {
        total,
        average: total / values.len() as u64,
        count: values.len(),
    })
}

/// Configurations compared against a common baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    /// Suite name, e.g. the security level.
    pub name: String,
    /// Baseline configuration id.
    pub baseline: ConfigurationId,
    configurations: BTreeMap<ConfigurationId, Configuration>,
}

impl Suite {
    /// Creates an empty suite.
    pub fn new(name: impl Into<String>, baseline: impl Into<ConfigurationId>) -> Self {
        Self {
            name: name.into(),
            baseline: baseline.into(),
            configurations: BTreeMap::new(),
        }
    }

    /// Adds or replaces a configuration.
    pub fn add_configuration(&mut self, configuration: Configuration) {
        self.configurations
            .insert(configuration.id.clone(), configuration);
    }

    /// Builder-style [`Suite::add_configuration`].
    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.add_configuration(configuration);
        self
    }

    /// Looks up a configuration.
    pub fn configuration(&self, id: &ConfigurationId) -> Option<&Configuration> {
        self.configurations.get(id)
    }

    /// All configurations in id order, baseline included.
    pub fn configurations(&self) -> impl Iterator<Item = &Configuration> {
        self.configurations.values()
    }

    /// Non-baseline configurations in id order.
    pub fn candidates(&self) -> impl Iterator<Item = &Configuration> {
        self.configurations
            .values()
            .filter(move |c| c.id != self.baseline)
    }

    /// Whether the baseline id names a configuration of this suite.
    pub fn has_baseline(&self) -> bool {
        self.configurations.contains_key(&self.baseline)
    }

    /// The baseline's measurements, if its result file was available.
    pub fn baseline_set(&self) -> Option<&MeasurementSet> {
        self.configuration(&self.baseline)
            .and_then(|c| c.measurements.as_ref())
    }

    /// Compares every candidate against the baseline.
    ///
    /// Rows are ordered by configuration id, then by `operations`. Every
    /// (candidate, operation) pair yields a row; when the baseline or the
    /// candidate has no measurements the row carries no percentage.
    pub fn compare(
        &self,
        operations: &OperationList,
        statistic: Statistic,
    ) -> Vec<ComparisonResult> {
        let baseline = self.baseline_set();
        self.candidates()
            .flat_map(|candidate| {
                compare_sets(
                    &candidate.id,
                    baseline,
                    candidate.measurements.as_ref(),
                    operations,
                    statistic,
                )
            })
            .collect()
    }

    /// Summary per configuration, in id order.
    pub fn summaries(
        &self,
        operations: &OperationList,
        statistic: Statistic,
    ) -> Vec<(ConfigurationId, Option<Summary>)> {
        self.configurations()
            .map(|c| {
                let summary = c
                    .measurements
                    .as_ref()
                    .and_then(|set| compute_summary(set, operations, statistic));
                (c.id.clone(), summary)
            })
            .collect()
    }
}
