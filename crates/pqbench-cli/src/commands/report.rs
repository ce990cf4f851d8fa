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

//! Report command - run a manifest and render the result

use super::{check_regressions, emit_report, resolve_format};
use crate::error::CliError;
use pqbench::{run_manifest, Report, RunManifest};
use std::path::Path;

/// Load a run manifest, analyse every suite and write the report.
///
/// # Arguments
///
/// * `manifest` - YAML or JSON manifest path
/// * `format` - Output format, guessed from `output` when absent
/// * `output` - Output file (defaults to stdout)
/// * `fail_on_regression` - Exit non-zero when any operation got slower
///
/// # Errors
///
/// Returns `Err` if the manifest is invalid, the report cannot be written,
/// or `fail_on_regression` is set and a regression was found.
pub fn report(
    manifest: &str,
    format: Option<&str>,
    output: Option<&str>,
    fail_on_regression: bool,
) -> Result<(), CliError> {
    let format = resolve_format(format, output)?;
    let manifest = RunManifest::load(Path::new(manifest))?;
    let analysis = run_manifest(&manifest)?;

    let report = Report::from_analysis(&analysis);
    emit_report(&report, format, output)?;
    check_regressions(&report, fail_on_regression)
}
