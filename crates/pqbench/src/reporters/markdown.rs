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

//! Markdown export for benchmark reports.

use crate::error::{PqBenchError, Result};
use crate::reporters::types::{Report, ReportStyle, SuiteReport};
use std::fs;
use std::path::Path;

/// Renders a report as Markdown.
pub fn render_markdown(report: &Report, style: &ReportStyle) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));
    if let Some(scheme) = report.scheme {
        md.push_str(&format!("**Scheme:** {}\n\n", scheme));
    }
    md.push_str(&format!("**Statistic:** {}\n\n", report.statistic));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    for suite in &report.suites {
        render_suite(&mut md, report, suite, style);
    }

    let regressions: Vec<_> = report.regressions().collect();
    if !regressions.is_empty() {
        md.push_str("## Regressions\n\n");
        for (suite, row) in regressions {
            let name = suite
                .configuration(&row.configuration)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| row.configuration.to_string());
            md.push_str(&format!(
                "- **{}** {} / {}: {}\n",
                suite.name,
                name,
                row.operation,
                style.percentage(row.change_pct)
            ));
        }
        md.push('\n');
    }

    md
}

fn table_header(md: &mut String, first: &str, columns: &[String]) {
    md.push_str(&format!("| {} |", first));
    for column in columns {
        md.push_str(&format!(" {} |", column));
    }
    md.push_str("\n|---|");
    for _ in columns {
        md.push_str("---:|");
    }
    md.push('\n');
}

fn render_suite(md: &mut String, report: &Report, suite: &SuiteReport, style: &ReportStyle) {
    md.push_str(&format!("## {}\n\n", suite.name));

    md.push_str(&format!("### Cycle counts ({})\n\n", report.statistic));
    let names: Vec<String> = suite.configurations.iter().map(|c| c.name.clone()).collect();
    table_header(md, "Operation", &names);
    for op in &report.operations {
        md.push_str(&format!("| {} |", op));
        for config in &suite.configurations {
            let value = config
                .measurements
                .as_ref()
                .and_then(|set| set.value(op, report.statistic));
            md.push_str(&format!(" {} |", style.cycles(value)));
        }
        md.push('\n');
    }
    md.push('\n');

    let candidates: Vec<String> = suite.candidates().map(|c| c.name.clone()).collect();
    if !candidates.is_empty() {
        md.push_str(&format!(
            "### Change vs {}\n\n",
            suite.baseline_name()
        ));
        table_header(md, "Operation", &candidates);
        for op in &report.operations {
            md.push_str(&format!("| {} |", op));
            for config in suite.candidates() {
                let cell = suite
                    .comparison(&config.id, op)
                    .map(|r| style.change(r.change_pct, r.classification))
                    .unwrap_or_else(|| style.placeholder.clone());
                md.push_str(&format!(" {} |", cell));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    md.push_str("### Summary\n\n");
    md.push_str("| Configuration | Total | Avg/Op | Measured |\n");
    md.push_str("|---|---:|---:|---:|\n");
    for config in &suite.configurations {
        match config.summary {
            Some(s) => md.push_str(&format!(
                "| {} | {} | {} | {}/{} |\n",
                config.name,
                style.cycles(Some(s.total)),
                style.cycles(Some(s.average)),
                s.count,
                report.operations.len()
            )),
            None => md.push_str(&format!(
                "| {} | {p} | {p} | {p} |\n",
                config.name,
                p = style.placeholder
            )),
        }
    }
    md.push('\n');
}

/// Exports a report as Markdown.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `style` - Presentation settings
/// * `path` - Output file path
pub fn export_markdown(report: &Report, style: &ReportStyle, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report, style)).map_err(|e| PqBenchError::io_error(path, e))
}
