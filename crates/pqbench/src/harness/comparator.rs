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

//! Baseline comparison.
//!
//! Percentages follow one convention everywhere:
//! `(candidate - baseline) / baseline * 100`, so a positive change means the
//! candidate needs more cycles (slower) and a negative change means it is
//! faster. A change is `None` whenever it cannot be computed; `None` is never
//! conflated with `Some(0.0)`.

use crate::core::{ConfigurationId, MeasurementSet, OperationList, Statistic};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Changes within this many percent either way count as similar.
pub const SIMILARITY_THRESHOLD_PCT: f64 = 5.0;

/// Qualitative bucket for a percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// More than the threshold below the baseline.
    Faster,
    /// Within the threshold of the baseline, bounds included.
    Similar,
    /// More than the threshold above the baseline.
    Slower,
    /// No percentage could be computed.
    Unknown,
}

impl Classification {
    /// Returns the classification as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Faster => "faster",
            Classification::Similar => "similar",
            Classification::Slower => "slower",
            Classification::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed percentage change of `candidate` relative to `baseline`.
///
/// Returns `None` if either value is missing or the baseline is zero.
///
/// # Example
///
/// ```
/// use pqbench::harness::percentage_difference;
///
/// assert_eq!(percentage_difference(Some(200), Some(150)), Some(-25.0));
/// assert_eq!(percentage_difference(Some(0), Some(150)), None);
/// assert_eq!(percentage_difference(Some(200), None), None);
/// ```
pub fn percentage_difference(baseline: Option<u64>, candidate: Option<u64>) -> Option<f64> {
    let (baseline, candidate) = (baseline?, candidate?);
    if baseline == 0 {
        return None;
    }
    let baseline = baseline as f64;
    Some((candidate as f64 - baseline) / baseline * 100.0)
}

/// Buckets a percentage change using [`SIMILARITY_THRESHOLD_PCT`].
pub fn classify(percentage: Option<f64>) -> Classification {
    match percentage {
        None => Classification::Unknown,
        Some(p) if p > SIMILARITY_THRESHOLD_PCT => Classification::Slower,
        Some(p) if p < -SIMILARITY_THRESHOLD_PCT => Classification::Faster,
        Some(_) => Classification::Similar,
    }
}

/// Comparison of one operation of one configuration against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Candidate configuration.
    pub configuration: ConfigurationId,
    /// Operation name.
    pub operation: String,
    /// Baseline cycle count, if measured.
    pub baseline: Option<u64>,
    /// Candidate cycle count, if measured.
    pub candidate: Option<u64>,
    /// Percentage change (positive = slower, negative = faster).
    pub change_pct: Option<f64>,
    /// Qualitative bucket of `change_pct`.
    pub classification: Classification,
}

impl ComparisonResult {
    /// Builds a result from the two raw values.
    pub fn new(
        configuration: ConfigurationId,
        operation: impl Into<String>,
        baseline: Option<u64>,
        candidate: Option<u64>,
    ) -> Self {
        let change_pct = percentage_difference(baseline, candidate);
        Self {
            configuration,
            operation: operation.into(),
            baseline,
            candidate,
            change_pct,
            classification: classify(change_pct),
        }
    }
}

/// Compares `candidate` against `baseline` for every listed operation.
///
/// Output follows `operations` order and has exactly one row per operation.
/// Operations missing from either set yield a row with no percentage and
/// [`Classification::Unknown`].
pub fn compare_sets(
    configuration: &ConfigurationId,
    baseline: Option<&MeasurementSet>,
    candidate: Option<&MeasurementSet>,
    operations: &OperationList,
    statistic: Statistic,
) -> Vec<ComparisonResult> {
    operations
        .names()
        .map(|op| {
            ComparisonResult::new(
                configuration.clone(),
                op,
                baseline.and_then(|set| set.value(op, statistic)),
                candidate.and_then(|set| set.value(op, statistic)),
            )
        })
        .collect()
}

/// Returns the results classified as slower than the baseline.
pub fn identify_regressions(results: &[ComparisonResult]) -> Vec<&ComparisonResult> {
    results
        .iter()
        .filter(|r| r.classification == Classification::Slower)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Measurement;

    fn set(entries: &[(&str, u64)]) -> MeasurementSet {
        entries
            .iter()
            .map(|&(op, v)| (op, Measurement::Scalar(v)))
            .collect()
    }

    #[test]
    fn test_percentage_difference() {
        let pct = percentage_difference(Some(6789), Some(6000)).unwrap();
        assert!((pct - (-11.6217)).abs() < 1e-3);

        assert_eq!(percentage_difference(Some(100), Some(100)), Some(0.0));
        assert_eq!(percentage_difference(Some(100), Some(150)), Some(50.0));
    }

    #[test]
    fn test_percentage_difference_absent() {
        assert_eq!(percentage_difference(Some(0), Some(500)), None);
        assert_eq!(percentage_difference(Some(0), Some(0)), None);
        assert_eq!(percentage_difference(None, Some(500)), None);
        assert_eq!(percentage_difference(Some(500), None), None);
        assert_eq!(percentage_difference(None, None), None);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(Some(5.0)), Classification::Similar);
        assert_eq!(classify(Some(5.0001)), Classification::Slower);
        assert_eq!(classify(Some(-5.0)), Classification::Similar);
        assert_eq!(classify(Some(-5.0001)), Classification::Faster);
        assert_eq!(classify(Some(0.0)), Classification::Similar);
        assert_eq!(classify(None), Classification::Unknown);
    }

    #[test]
    fn test_compare_sets_faster() {
        let ops = OperationList::from_names(["sign"]).unwrap();
        let results = compare_sets(
            &ConfigurationId::Index(2),
            Some(&set(&[("sign", 6789)])),
            Some(&set(&[("sign", 6000)])),
            &ops,
            Statistic::Median,
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].classification, Classification::Faster);
        assert_eq!(results[0].baseline, Some(6789));
        assert_eq!(results[0].candidate, Some(6000));
    }

    #[test]
    fn test_compare_sets_zero_baseline() {
        let ops = OperationList::from_names(["verify"]).unwrap();
        let results = compare_sets(
            &ConfigurationId::Index(2),
            Some(&set(&[("verify", 0)])),
            Some(&set(&[("verify", 500)])),
            &ops,
            Statistic::Median,
        );

        assert_eq!(results[0].change_pct, None);
        assert_eq!(results[0].classification, Classification::Unknown);
    }

    #[test]
    fn test_compare_sets_keeps_missing_rows() {
        let ops = OperationList::from_names(["keygen", "sign", "verify"]).unwrap();
        let baseline = set(&[("keygen", 100), ("sign", 200), ("verify", 300)]);
        let candidate = set(&[("sign", 190), ("verify", 400)]);

        let results = compare_sets(
            &ConfigurationId::Index(3),
            Some(&baseline),
            Some(&candidate),
            &ops,
            Statistic::Median,
        );

        let names: Vec<_> = results.iter().map(|r| r.operation.as_str()).collect();
        assert_eq!(names, vec!["keygen", "sign", "verify"]);
        assert_eq!(results[0].baseline, Some(100));
        assert_eq!(results[0].candidate, None);
        assert_eq!(results[0].classification, Classification::Unknown);
        assert_eq!(results[1].classification, Classification::Similar);
        assert_eq!(results[2].classification, Classification::Slower);
    }

    #[test]
    fn test_compare_sets_without_baseline() {
        let ops = OperationList::from_names(["keygen", "sign"]).unwrap();
        let candidate = set(&[("keygen", 1), ("sign", 2)]);

        let results = compare_sets(
            &ConfigurationId::Index(2),
            None,
            Some(&candidate),
            &ops,
            Statistic::Median,
        );

        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| r.change_pct.is_none() && r.classification == Classification::Unknown));
    }

    #[test]
    fn test_compare_sets_uses_statistic() {
        let ops = OperationList::from_names(["enc"]).unwrap();
        let baseline: MeasurementSet = [(
            "enc",
            Measurement::Dual {
                median: 100,
                average: 200,
            },
        )]
        .into_iter()
        .collect();
        let candidate: MeasurementSet = [(
            "enc",
            Measurement::Dual {
                median: 100,
                average: 100,
            },
        )]
        .into_iter()
        .collect();

        let id = ConfigurationId::Index(2);
        let by_median = compare_sets(&id, Some(&baseline), Some(&candidate), &ops, Statistic::Median);
        let by_average =
            compare_sets(&id, Some(&baseline), Some(&candidate), &ops, Statistic::Average);

        assert_eq!(by_median[0].change_pct, Some(0.0));
        assert_eq!(by_average[0].change_pct, Some(-50.0));
    }

    #[test]
    fn test_identify_regressions() {
        let results = vec![
            ComparisonResult::new(ConfigurationId::Index(2), "sign", Some(100), Some(100)),
            ComparisonResult::new(ConfigurationId::Index(2), "verify", Some(100), Some(120)),
            ComparisonResult::new(ConfigurationId::Index(2), "keygen", Some(100), None),
        ];

        let regressions = identify_regressions(&results);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].operation, "verify");
    }
}
