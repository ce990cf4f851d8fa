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

//! Benchmark reporters.
//!
//! Every reporter takes a [`Report`] plus a [`ReportStyle`].
//!
//! # Modules
//!
//! - `types`: report snapshot and presentation settings
//! - `console`: fixed-width text tables
//! - `json`: JSON export
//! - `csv`: CSV export
//! - `markdown`: Markdown export

pub mod console;
pub mod csv;
pub mod json;
pub mod markdown;
pub mod types;

pub use self::csv::{export_csv, write_csv};
pub use console::{print_report, print_summary, render_report, render_summary};
pub use json::{export_json, to_json_string, write_json};
pub use markdown::{export_markdown, render_markdown};
pub use types::{ConfigurationReport, Report, ReportStyle, SuiteReport};

use crate::error::{PqBenchError, Result};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Fixed-width text tables
    #[default]
    Console,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
    /// Markdown tables
    Markdown,
}

impl ReportFormat {
    /// Format name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Console => "console",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Markdown => "markdown",
        }
    }

    /// Guesses the format from an output path's extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "md" | "markdown" => Some(ReportFormat::Markdown),
            "txt" => Some(ReportFormat::Console),
            _ => None,
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = PqBenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" | "text" | "txt" => Ok(ReportFormat::Console),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(PqBenchError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes a report in the given format.
pub fn write_report<W: Write>(
    report: &Report,
    style: &ReportStyle,
    format: ReportFormat,
    mut writer: W,
) -> Result<()> {
    let text = match format {
        ReportFormat::Json => return write_json(report, writer),
        ReportFormat::Csv => return write_csv(report, style, writer),
        ReportFormat::Console => render_report(report, style),
        ReportFormat::Markdown => render_markdown(report, style),
    };
    writer
        .write_all(text.as_bytes())
        .map_err(|e| PqBenchError::Serialization(e.to_string()))
}

/// Writes a report in the given format to `path`.
pub fn export_report(
    report: &Report,
    style: &ReportStyle,
    format: ReportFormat,
    path: &Path,
) -> Result<()> {
    match format {
        ReportFormat::Json => export_json(report, path),
        ReportFormat::Csv => export_csv(report, style, path),
        ReportFormat::Markdown => export_markdown(report, style, path),
        ReportFormat::Console => std::fs::write(path, render_report(report, style))
            .map_err(|e| PqBenchError::io_error(path, e)),
    }
}
