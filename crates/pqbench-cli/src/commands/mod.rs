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

//! CLI command implementations

mod compare;
mod extract;
mod report;
mod schemes;

pub use compare::{compare, CompareArgs};
pub use extract::extract;
pub use report::report;
pub use schemes::schemes;

use crate::error::CliError;
use pqbench::{OperationList, Report, ReportFormat, ReportStyle, Scheme};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Read a benchmark output or manifest file.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|e| CliError::io_error(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Resolve the operation list from `--ops` or `--scheme`.
///
/// An explicit list wins over the scheme preset.
pub fn resolve_operations(scheme: Option<&str>, ops: &[String]) -> Result<OperationList, CliError> {
    if !ops.is_empty() {
        return Ok(OperationList::from_names(ops.iter().map(|s| s.trim()))?);
    }
    match scheme {
        Some(name) => Ok(name.parse::<Scheme>()?.operations()),
        None => Err(CliError::invalid_argument(
            "either --scheme or --ops is required",
        )),
    }
}

/// Pick the report format: explicit flag, then output extension, then console.
pub fn resolve_format(format: Option<&str>, output: Option<&str>) -> Result<ReportFormat, CliError> {
    if let Some(name) = format {
        return Ok(name.parse()?);
    }
    Ok(output
        .and_then(|path| ReportFormat::from_extension(Path::new(path)))
        .unwrap_or_default())
}

/// Write a rendered report to `output`, or stdout.
///
/// A file write is followed by the regression summary on stdout.
pub fn emit_report(
    report: &Report,
    format: ReportFormat,
    output: Option<&str>,
) -> Result<(), CliError> {
    let style = ReportStyle::default();
    match output {
        Some(path) => {
            pqbench::reporters::export_report(report, &style, format, Path::new(path))?;
            tracing::info!(path, format = %format, "report written");
            pqbench::reporters::print_summary(report);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            pqbench::reporters::write_report(report, &style, format, &mut handle)?;
            handle
                .flush()
                .map_err(|e| CliError::io_error("<stdout>", e))?;
        }
    }
    Ok(())
}

/// Fail with [`CliError::Regressions`] if the report has slower rows.
pub fn check_regressions(report: &Report, fail_on_regression: bool) -> Result<(), CliError> {
    let count = report.regressions().count();
    if count > 0 {
        tracing::warn!(count, "operations slower than baseline");
        if fail_on_regression {
            return Err(CliError::Regressions { count });
        }
    }
    Ok(())
}
