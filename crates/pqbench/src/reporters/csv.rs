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

//! CSV export for benchmark reports.
//!
//! One row per (suite, operation). Each configuration contributes a median
//! and an average column; absent values use the style placeholder.

use crate::core::ConfigurationId;
use crate::error::{PqBenchError, Result};
use crate::reporters::types::{Report, ReportStyle};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Configuration ids appearing in any suite, in id order.
fn column_ids(report: &Report) -> Vec<ConfigurationId> {
    report
        .suites
        .iter()
        .flat_map(|s| s.configurations.iter().map(|c| c.id.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Writes a report as CSV to any writer.
pub fn write_csv<W: Write>(report: &Report, style: &ReportStyle, writer: W) -> Result<()> {
    let ids = column_ids(report);
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["suite".to_string(), "operation".to_string()];
    for id in &ids {
        header.push(format!("config{}_median", id));
        header.push(format!("config{}_average", id));
    }
    out.write_record(&header)?;

    for suite in &report.suites {
        for op in &report.operations {
            let mut record = vec![suite.name.clone(), op.clone()];
            for id in &ids {
                let measurement = suite
                    .configuration(id)
                    .and_then(|c| c.measurements.as_ref())
                    .and_then(|set| set.get(op));
                record.push(style.cycles_plain(measurement.map(|m| m.median())));
                record.push(style.cycles_plain(measurement.map(|m| m.average())));
            }
            out.write_record(&record)?;
        }
    }

    out.flush()
        .map_err(|e| PqBenchError::Serialization(e.to_string()))
}

/// Exports a report as CSV.
pub fn export_csv(report: &Report, style: &ReportStyle, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| PqBenchError::io_error(path, e))?;
    write_csv(report, style, file)
}
