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

//! Extract command - parse one benchmark output file

use super::{read_file, resolve_operations};
use crate::error::CliError;
use pqbench::{Extractor, Measurement, MeasurementSet};

/// Extract cycle counts from one benchmark output file and print them.
///
/// # Arguments
///
/// * `file` - Benchmark output to parse
/// * `scheme` - Scheme preset naming the operations
/// * `ops` - Explicit operation names, overriding the preset
/// * `format` - `json` or `text`
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the operations cannot be
/// resolved, or the format is unknown. Operations missing from the output are
/// not an error.
pub fn extract(
    file: &str,
    scheme: Option<&str>,
    ops: &[String],
    format: &str,
) -> Result<(), CliError> {
    let operations = resolve_operations(scheme, ops)?;
    let extractor = Extractor::new(&operations)?;
    let content = read_file(file)?;
    let set = extractor.extract(&content);

    tracing::debug!(
        file,
        found = set.len(),
        requested = operations.len(),
        "extraction finished"
    );

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&set)?),
        "text" => print!("{}", format_text(&set, operations.names())),
        other => {
            return Err(CliError::invalid_argument(format!(
                "unknown extract format '{}' (expected json or text)",
                other
            )))
        }
    }
    Ok(())
}

fn format_text<'a>(set: &MeasurementSet, names: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for name in names {
        let line = match set.get(name) {
            Some(Measurement::Scalar(v)) => format!("{:<24}{}\n", name, v),
            Some(Measurement::Dual { median, average }) => {
                format!("{:<24}median {} average {}\n", name, median, average)
            }
            None => format!("{:<24}N/A\n", name),
        };
        out.push_str(&line);
    }
    out
}
