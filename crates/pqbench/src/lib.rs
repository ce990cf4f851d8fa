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

//! PQBench: post-quantum benchmark reporting
//!
//! Extracts CPU cycle counts for named operations from the free-form text
//! that post-quantum benchmark binaries print, then compares tweaked
//! configurations against a baseline.
//!
//! ## Features
//!
//! - **Extraction**: ordered pattern table, `median`/`average` aware
//! - **Comparison**: signed percentage change, 5% similarity band
//! - **Suites**: several security levels per run manifest
//! - **Reporters**: console, JSON, CSV and Markdown
//!
//! ## Usage
//!
//! ```
//! use pqbench::{compare_sets, extract, ConfigurationId, Scheme, Statistic};
//!
//! let ops = Scheme::Dilithium.operations();
//! let baseline = extract("keypair 12345\nsign 6789\nverify 2345\n", &ops).unwrap();
//! let tweak = extract("keypair 12000\nsign 6000\nverify 2400\n", &ops).unwrap();
//!
//! let rows = compare_sets(
//!     &ConfigurationId::Index(2),
//!     Some(&baseline),
//!     Some(&tweak),
//!     &ops,
//!     Statistic::Median,
//! );
//! assert_eq!(rows.len(), 3);
//! ```

pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;

pub use crate::core::{
    Configuration, ConfigurationId, ConfigurationSource, Measurement, MeasurementSet, Operation,
    OperationDef, OperationList, RunManifest, Scheme, Statistic, SuiteSpec, DEFAULT_BASELINE,
};
pub use error::{PqBenchError, Result};
pub use harness::{
    classify, compare_sets, compute_summary, extract, identify_regressions, load_suite,
    percentage_difference, run_manifest, Analysis, Classification, ComparisonResult, Extractor,
    Suite, Summary, SIMILARITY_THRESHOLD_PCT,
};
pub use reporters::{Report, ReportFormat, ReportStyle};
