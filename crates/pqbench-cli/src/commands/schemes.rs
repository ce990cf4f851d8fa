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

//! Schemes command - list built-in operation presets

use crate::error::CliError;
use pqbench::Scheme;

/// Print every scheme preset with its security levels and operations.
///
/// # Errors
///
/// Returns `Err` only if JSON serialization fails.
pub fn schemes(json: bool) -> Result<(), CliError> {
    if json {
        let presets: Vec<serde_json::Value> = Scheme::ALL
            .iter()
            .map(|scheme| {
                serde_json::json!({
                    "scheme": scheme.as_str(),
                    "levels": scheme.security_levels(),
                    "operations": scheme.operations(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    for scheme in Scheme::ALL {
        println!("{} ({})", scheme, scheme.security_levels().join(", "));
        for op in &scheme.operations() {
            if op.aliases.is_empty() {
                println!("  {}", op.name);
            } else {
                println!("  {:<20} matches {}", op.name, op.aliases.join(", "));
            }
        }
    }
    Ok(())
}
