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

//! Cycle-count measurements.
//!
//! A [`Measurement`] is whatever the benchmark harness reported for one
//! operation: either a single number or a median/average pair. A
//! [`MeasurementSet`] collects the measurements parsed from one result file.

use crate::error::PqBenchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Cycle count(s) reported for a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    /// A single cycle count; serves as both median and average.
    Scalar(u64),
    /// Median and average cycle counts.
    Dual {
        /// Median cycle count.
        median: u64,
        /// Average cycle count.
        average: u64,
    },
}

impl Measurement {
    /// Returns the median cycle count.
    pub fn median(&self) -> u64 {
        match *self {
            Measurement::Scalar(v) => v,
            Measurement::Dual { median, .. } => median,
        }
    }

    /// Returns the average cycle count.
    pub fn average(&self) -> u64 {
        match *self {
            Measurement::Scalar(v) => v,
            Measurement::Dual { average, .. } => average,
        }
    }

    /// Returns the value selected by `statistic`.
    pub fn get(&self, statistic: Statistic) -> u64 {
        match statistic {
            Statistic::Median => self.median(),
            Statistic::Average => self.average(),
        }
    }
}

/// Which field of a [`Measurement`] a comparison looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Median cycle count.
    #[default]
    Median,
    /// Average cycle count.
    Average,
}

impl Statistic {
    /// Returns the statistic as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Median => "median",
            Statistic::Average => "average",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Statistic {
    type Err = PqBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "median" => Ok(Statistic::Median),
            "average" | "avg" | "mean" => Ok(Statistic::Average),
            _ => Err(PqBenchError::UnknownStatistic(s.to_string())),
        }
    }
}

/// Measurements parsed from one result file, keyed by operation name.
///
/// An operation that was not found in the source text has no entry; lookups
/// return `None` for it. Iteration is in operation-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    entries: BTreeMap<String, Measurement>,
}

impl MeasurementSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, operation: impl Into<String>, measurement: Measurement) {
        self.entries.insert(operation.into(), measurement);
    }

    /// Gets the measurement for an operation.
    pub fn get(&self, operation: &str) -> Option<&Measurement> {
        self.entries.get(operation)
    }

    /// Gets the selected statistic for an operation.
    pub fn value(&self, operation: &str, statistic: Statistic) -> Option<u64> {
        self.get(operation).map(|m| m.get(statistic))
    }

    /// Returns whether the operation was measured.
    pub fn contains(&self, operation: &str) -> bool {
        self.entries.contains_key(operation)
    }

    /// Number of measured operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (operation, measurement) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measurement)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, Measurement)> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = (S, Measurement)>>(iter: I) -> Self {
        let mut set = MeasurementSet::new();
        for (operation, measurement) in iter {
            set.insert(operation, measurement);
        }
        set
    }
}
