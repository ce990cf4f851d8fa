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

//! JSON export for benchmark reports.

use crate::error::{PqBenchError, Result};
use crate::reporters::types::Report;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serializes a report as pretty-printed JSON.
pub fn to_json_string(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report as JSON to any writer.
pub fn write_json<W: Write>(report: &Report, mut writer: W) -> Result<()> {
    let json = to_json_string(report)?;
    writer
        .write_all(json.as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .map_err(|e| PqBenchError::Serialization(e.to_string()))
}

/// Exports a report as JSON.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_json(report: &Report, path: &Path) -> Result<()> {
    let json = to_json_string(report)?;
    fs::write(path, json).map_err(|e| PqBenchError::io_error(path, e))
}
