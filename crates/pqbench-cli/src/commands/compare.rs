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

//! Compare command - ad hoc comparison of result files

use super::{check_regressions, emit_report, resolve_format, resolve_operations};
use crate::error::CliError;
use pqbench::harness::load_suite;
use pqbench::{Analysis, ConfigurationId, ConfigurationSource, Extractor, Report, Statistic};
use std::path::PathBuf;

/// Arguments of the `compare` command.
#[derive(Debug, Clone, Default)]
pub struct CompareArgs {
    /// Baseline result file (configuration 1)
    pub baseline: String,
    /// Candidate result files (configurations 2..N)
    pub candidates: Vec<String>,
    /// Labels for baseline then candidates, in order
    pub labels: Vec<String>,
    /// Scheme preset
    pub scheme: Option<String>,
    /// Explicit operation names
    pub ops: Vec<String>,
    /// Statistic name
    pub statistic: String,
    /// Suite name shown in the report
    pub suite: String,
    /// Report title
    pub title: Option<String>,
    /// Free-form notes shown with the report
    pub notes: Vec<String>,
    /// Output format
    pub format: Option<String>,
    /// Output file
    pub output: Option<String>,
    /// Exit non-zero when any operation got slower
    pub fail_on_regression: bool,
}

/// Compare candidate result files against a baseline file.
///
/// Missing candidate files are reported with placeholder values rather than
/// failing the command.
///
/// # Errors
///
/// Returns `Err` on invalid arguments, when the report cannot be written, or
/// when `fail_on_regression` is set and a regression was found.
pub fn compare(args: CompareArgs) -> Result<(), CliError> {
    let operations = resolve_operations(args.scheme.as_deref(), &args.ops)?;
    let statistic: Statistic = args.statistic.parse()?;
    let format = resolve_format(args.format.as_deref(), args.output.as_deref())?;

    let sources = configuration_sources(&args)?;
    let extractor = Extractor::new(&operations)?;
    let suite = load_suite(&args.suite, &ConfigurationId::Index(1), &sources, &extractor);

    let mut analysis = Analysis::new(
        args.title
            .unwrap_or_else(|| format!("Benchmark Comparison: {}", args.suite)),
        operations,
        statistic,
        vec![suite],
    );
    if args.ops.is_empty() {
        analysis.scheme = args.scheme.as_deref().and_then(|s| s.parse().ok());
    }

    let mut report = Report::from_analysis(&analysis);
    for note in args.notes {
        report.add_note(note);
    }
    emit_report(&report, format, args.output.as_deref())?;
    check_regressions(&report, args.fail_on_regression)
}

fn configuration_sources(args: &CompareArgs) -> Result<Vec<ConfigurationSource>, CliError> {
    let files: Vec<&String> = std::iter::once(&args.baseline)
        .chain(args.candidates.iter())
        .collect();

    if args.labels.len() > files.len() {
        return Err(CliError::invalid_argument(format!(
            "{} labels given for {} result files",
            args.labels.len(),
            files.len()
        )));
    }

    Ok(files
        .into_iter()
        .enumerate()
        .map(|(i, path)| ConfigurationSource {
            id: ConfigurationId::Index(i as u32 + 1),
            label: args.labels.get(i).cloned(),
            path: PathBuf::from(path),
        })
        .collect())
}
