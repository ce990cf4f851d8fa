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

//! Analysis commands: extract, compare and report.

use crate::commands::{self, CompareArgs};
use crate::error::CliError;
use clap::Subcommand;

/// Commands that parse benchmark output and compare configurations.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Extract cycle counts from one benchmark output file
    ///
    /// Prints the operations found in FILE. Operations not present in the
    /// output are omitted from JSON and shown as N/A in text form.
    Extract {
        /// Benchmark output file
        #[arg(value_name = "FILE")]
        file: String,

        /// Scheme preset (dilithium, kyber)
        #[arg(short, long)]
        scheme: Option<String>,

        /// Comma-separated operation names, overriding the preset
        #[arg(long, value_delimiter = ',')]
        ops: Vec<String>,

        /// Output format (json, text)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Compare result files against a baseline
    ///
    /// BASELINE is configuration 1; each CANDIDATE is numbered 2, 3, ... in
    /// the order given.
    Compare {
        /// Baseline result file
        #[arg(value_name = "BASELINE")]
        baseline: String,

        /// Candidate result files
        #[arg(value_name = "CANDIDATE", required = true)]
        candidates: Vec<String>,

        /// Configuration labels, baseline first (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,

        /// Scheme preset (dilithium, kyber)
        #[arg(short, long)]
        scheme: Option<String>,

        /// Comma-separated operation names, overriding the preset
        #[arg(long, value_delimiter = ',')]
        ops: Vec<String>,

        /// Statistic to compare (median, average)
        #[arg(long, default_value = "median")]
        statistic: String,

        /// Suite name shown in the report
        #[arg(long, default_value = "results")]
        suite: String,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Note added to the report (repeatable)
        #[arg(long = "note")]
        notes: Vec<String>,

        /// Output format (console, json, csv, markdown)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Exit with failure if any operation is slower than the baseline
        #[arg(long)]
        fail_on_regression: bool,
    },

    /// Analyse every suite of a run manifest
    ///
    /// The manifest is YAML, or JSON when its extension is `.json`. Relative
    /// result paths are resolved against the manifest's directory.
    Report {
        /// Run manifest path
        #[arg(value_name = "MANIFEST")]
        manifest: String,

        /// Output format (console, json, csv, markdown)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Exit with failure if any operation is slower than the baseline
        #[arg(long)]
        fail_on_regression: bool,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Extract {
                file,
                scheme,
                ops,
                format,
            } => commands::extract(&file, scheme.as_deref(), &ops, &format),
            AnalysisCommands::Compare {
                baseline,
                candidates,
                labels,
                scheme,
                ops,
                statistic,
                suite,
                title,
                notes,
                format,
                output,
                fail_on_regression,
            } => commands::compare(CompareArgs {
                baseline,
                candidates,
                labels,
                scheme,
                ops,
                statistic,
                suite,
                title,
                notes,
                format,
                output,
                fail_on_regression,
            }),
            AnalysisCommands::Report {
                manifest,
                format,
                output,
                fail_on_regression,
            } => commands::report(
                &manifest,
                format.as_deref(),
                output.as_deref(),
                fail_on_regression,
            ),
        }
    }
}
