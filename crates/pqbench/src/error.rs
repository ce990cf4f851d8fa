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

//! Error types for PQBench operations.
//!
//! Missing benchmark data is never an error: it is carried as `Option::None`
//! through extraction and comparison. The variants here cover caller mistakes
//! (invalid operation lists, broken manifests) and output failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for PQBench operations
pub type Result<T> = std::result::Result<T, PqBenchError>;

/// Errors that can occur while configuring or exporting a benchmark analysis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PqBenchError {
    /// The operation list handed to the extractor or comparator is unusable.
    #[error("Invalid operation list: {reason}")]
    InvalidOperations {
        /// Why the list was rejected
        reason: String,
    },

    /// I/O operation failed while reading a manifest or writing a report.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The run manifest could not be parsed or is inconsistent.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// The designated baseline is not one of the listed configurations.
    #[error("Baseline configuration '{baseline}' is not defined in suite '{suite}'")]
    UnknownBaseline {
        /// Suite being assembled
        suite: String,
        /// Requested baseline id
        baseline: String,
    },

    /// A report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Scheme name not recognised.
    #[error("Unknown scheme '{0}'. Supported schemes: dilithium, kyber")]
    UnknownScheme(String),

    /// Statistic name not recognised.
    #[error("Unknown statistic '{0}'. Supported statistics: median, average")]
    UnknownStatistic(String),

    /// Report format name not recognised.
    #[error("Unknown report format '{0}'. Supported formats: console, json, csv, markdown")]
    UnknownFormat(String),
}

impl PqBenchError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid operation list error.
    pub fn invalid_operations(reason: impl Into<String>) -> Self {
        Self::InvalidOperations {
            reason: reason.into(),
        }
    }

    /// Create a manifest error.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }
}

impl From<serde_json::Error> for PqBenchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization(source.to_string())
    }
}

impl From<csv::Error> for PqBenchError {
    fn from(source: csv::Error) -> Self {
        Self::Serialization(source.to_string())
    }
}
