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

//! Property-based tests for extraction and comparison.
//!
//! # Properties Tested
//!
//! 1. **Arithmetic**: non-zero baselines give `(c - b) / b * 100`
//! 2. **Absence**: zero or missing inputs never produce a percentage
//! 3. **Classification**: buckets follow the 5% band exactly
//! 4. **Extraction determinism**: same text, same set
//! 5. **Token isolation**: operations are found by full token only
//! 6. **Row shape**: one comparison row per requested operation, in order

use pqbench::{
    classify, compare_sets, percentage_difference, Classification, ConfigurationId, Extractor,
    Measurement, MeasurementSet, OperationList, Scheme, Statistic,
};
use proptest::prelude::*;
use std::sync::OnceLock;

const OPS: [&str; 5] = ["keygen", "sign", "verify", "encaps", "decaps"];

fn op_list() -> OperationList {
    OperationList::from_names(OPS).unwrap()
}

/// Extractors are compiled once and shared by every generated case.
fn kyber_extractor() -> &'static Extractor {
    static EXTRACTOR: OnceLock<Extractor> = OnceLock::new();
    EXTRACTOR.get_or_init(|| Extractor::new(&Scheme::Kyber.operations()).unwrap())
}

fn dilithium_extractor() -> &'static Extractor {
    static EXTRACTOR: OnceLock<Extractor> = OnceLock::new();
    EXTRACTOR.get_or_init(|| Extractor::new(&Scheme::Dilithium.operations()).unwrap())
}

/// Measurement sets over a random subset of `OPS`.
fn measurement_set() -> impl Strategy<Value = MeasurementSet> {
    prop::collection::vec(prop::option::of(0u64..1_000_000), OPS.len()).prop_map(|values| {
        OPS.iter()
            .zip(values)
            .filter_map(|(op, v)| v.map(|v| (*op, Measurement::Scalar(v))))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the percentage matches the closed formula.
    #[test]
    fn prop_percentage_formula(b in 1u64..u32::MAX as u64, c in 0u64..u32::MAX as u64) {
        let expected = (c as f64 - b as f64) / b as f64 * 100.0;
        let actual = percentage_difference(Some(b), Some(c)).unwrap();
        prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    /// Property: a zero baseline never yields a percentage.
    #[test]
    fn prop_zero_baseline_absent(c in prop::option::of(any::<u64>())) {
        prop_assert_eq!(percentage_difference(Some(0), c), None);
    }

    /// Property: a missing value on either side never yields a percentage.
    #[test]
    fn prop_missing_value_absent(v in any::<u64>()) {
        prop_assert_eq!(percentage_difference(None, Some(v)), None);
        prop_assert_eq!(percentage_difference(Some(v), None), None);
    }

    /// Property: classification buckets are exactly the 5% band.
    #[test]
    fn prop_classification_band(x in -1000.0f64..1000.0) {
        let class = classify(Some(x));
        prop_assert_eq!(class == Classification::Slower, x > 5.0);
        prop_assert_eq!(class == Classification::Faster, x < -5.0);
        prop_assert_eq!(class == Classification::Similar, (-5.0..=5.0).contains(&x));
        prop_assert_ne!(class, Classification::Unknown);
    }

    /// Property: extraction is a pure function of its text.
    #[test]
    fn prop_extraction_deterministic(text in "[a-z_ :\n0-9]{0,200}") {
        let extractor = kyber_extractor();
        let first = extractor.extract(&text);
        let second = extractor.extract(&text);
        prop_assert_eq!(first, second);
    }

    /// Property: each operation keeps its own value regardless of line
    /// order, and longer words containing an operation name do not match.
    #[test]
    fn prop_extraction_token_isolation(
        keygen in 0u64..10_000_000,
        sign in 0u64..10_000_000,
        verify in 0u64..10_000_000,
        noise in 0u64..10_000_000,
        lines in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let text: String = lines
            .iter()
            .map(|line| match line {
                0 => format!("keypair {}\n", keygen),
                1 => format!("sign {}\n", sign),
                2 => format!("verify {}\n", verify),
                _ => format!("design {}\n", noise),
            })
            .collect();

        let set = dilithium_extractor().extract(&text);
        prop_assert_eq!(set.value("keygen", Statistic::Median), Some(keygen));
        prop_assert_eq!(set.value("sign", Statistic::Median), Some(sign));
        prop_assert_eq!(set.value("verify", Statistic::Median), Some(verify));
        prop_assert_eq!(set.len(), 3);
    }

    /// Property: comparison rows follow the operation list exactly once each.
    #[test]
    fn prop_compare_rows_follow_operations(
        baseline in prop::option::of(measurement_set()),
        candidate in prop::option::of(measurement_set()),
    ) {
        let ops = op_list();
        let rows = compare_sets(
            &ConfigurationId::Index(2),
            baseline.as_ref(),
            candidate.as_ref(),
            &ops,
            Statistic::Median,
        );

        let names: Vec<&str> = rows.iter().map(|r| r.operation.as_str()).collect();
        prop_assert_eq!(names, OPS.to_vec());

        for row in &rows {
            prop_assert_eq!(row.change_pct.is_none(), row.classification == Classification::Unknown);
            if row.baseline.is_none() || row.candidate.is_none() || row.baseline == Some(0) {
                prop_assert_eq!(row.change_pct, None);
            }
        }
    }
}

#[test]
fn test_classification_boundaries() {
    assert_eq!(classify(Some(5.0)), Classification::Similar);
    assert_eq!(classify(Some(5.0001)), Classification::Slower);
    assert_eq!(classify(Some(-5.0)), Classification::Similar);
    assert_eq!(classify(Some(-5.0001)), Classification::Faster);
    assert_eq!(classify(Some(0.0)), Classification::Similar);
    assert_eq!(classify(None), Classification::Unknown);
}
