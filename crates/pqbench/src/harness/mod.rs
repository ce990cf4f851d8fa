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

//! Extraction, comparison and aggregation pipeline.
//!
//! # Modules
//!
//! - `extractor`: text → [`MeasurementSet`](crate::core::MeasurementSet)
//! - `comparator`: percentage changes and classification
//! - `aggregator`: suites and per-configuration summaries
//! - `loader`: result-file reading
//! - `runner`: manifest → analysis

pub mod aggregator;
pub mod comparator;
pub mod extractor;
pub mod loader;
pub mod runner;

pub use aggregator::{compute_summary, Suite, Summary};
pub use comparator::{
    classify, compare_sets, identify_regressions, percentage_difference, Classification,
    ComparisonResult, SIMILARITY_THRESHOLD_PCT,
};
pub use extractor::{extract, CaptureShape, ExtractionRule, Extractor, EXTRACTION_RULES};
pub use loader::{load_configuration, load_measurement_set, load_suite, read_result_file};
pub use runner::{run_manifest, Analysis};
