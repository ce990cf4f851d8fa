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

//! Console reporter.
//!
//! Renders fixed-width tables: absolute cycle counts, change against the
//! baseline, and per-configuration summaries.

use crate::reporters::types::{Report, ReportStyle, SuiteReport};

/// Renders the full report as console text.
pub fn render_report(report: &Report, style: &ReportStyle) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(80)));
    out.push_str(&format!("BENCHMARK REPORT: {}\n", report.title));
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str(&format!("Timestamp: {}\n", report.timestamp));
    if let Some(scheme) = report.scheme {
        out.push_str(&format!("Scheme: {}\n", scheme));
    }
    out.push_str(&format!("Statistic: {}\n", report.statistic));

    if !report.notes.is_empty() {
        out.push_str("\nNotes:\n");
        for note in &report.notes {
            out.push_str(&format!("  - {}\n", note));
        }
    }

    for suite in &report.suites {
        render_suite(&mut out, report, suite, style);
    }

    out.push_str(&format!("{}\n", "=".repeat(80)));
    out
}

fn render_suite(out: &mut String, report: &Report, suite: &SuiteReport, style: &ReportStyle) {
    let rule = "-".repeat(80);
    let lw = style.label_width;
    let cw = style.column_width;

    out.push_str(&format!("\n{}\n", rule));
    out.push_str(&format!(
        "{}: ABSOLUTE CYCLE COUNTS ({})\n",
        suite.name.to_uppercase(),
        report.statistic
    ));
    out.push_str(&format!("{}\n", rule));

    out.push_str(&format!("{:<lw$}", "Operation"));
    for config in &suite.configurations {
        out.push_str(&format!("{:>cw$}", config.name));
    }
    out.push('\n');
    for op in &report.operations {
        out.push_str(&format!("{:<lw$}", op));
        for config in &suite.configurations {
            let value = config
                .measurements
                .as_ref()
                .and_then(|set| set.value(op, report.statistic));
            out.push_str(&format!("{:>cw$}", style.cycles(value)));
        }
        out.push('\n');
    }

    if suite.candidates().next().is_some() {
        out.push_str(&format!("\n{}\n", rule));
        out.push_str(&format!("CHANGE VS BASELINE ({})\n", suite.baseline_name()));
        out.push_str(&format!("{}\n", rule));

        let wide = cw + 8;
        out.push_str(&format!("{:<lw$}", "Operation"));
        for config in suite.candidates() {
            out.push_str(&format!("{:>wide$}", config.name));
        }
        out.push('\n');
        for op in &report.operations {
            out.push_str(&format!("{:<lw$}", op));
            for config in suite.candidates() {
                let cell = suite
                    .comparison(&config.id, op)
                    .map(|r| style.change(r.change_pct, r.classification))
                    .unwrap_or_else(|| style.placeholder.clone());
                out.push_str(&format!("{:>wide$}", cell));
            }
            out.push('\n');
        }
    }

    out.push_str(&format!("\n{}\n", rule));
    out.push_str("SUMMARY\n");
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!(
        "{:<lw$}{:>cw$}{:>cw$}{:>cw$}\n",
        "Configuration", "Total", "Avg/Op", "Measured"
    ));
    for config in &suite.configurations {
        let row = match config.summary {
            Some(summary) => format!(
                "{:<lw$}{:>cw$}{:>cw$}{:>cw$}\n",
                config.name,
                style.cycles(Some(summary.total)),
                style.cycles(Some(summary.average)),
                format!("{}/{}", summary.count, report.operations.len())
            ),
            None => format!(
                "{:<lw$}{:>cw$}{:>cw$}{:>cw$}\n",
                config.name, style.placeholder, style.placeholder, style.placeholder
            ),
        };
        out.push_str(&row);
    }
}

/// Renders the regression summary: suite count plus each slower row.
pub fn render_summary(report: &Report) -> String {
    let regressions: Vec<_> = report.regressions().collect();
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(60)));
    out.push_str(&format!("SUMMARY: {}\n", report.title));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("Suites: {}\n", report.suites.len()));
    out.push_str(&format!("Regressions: {}\n", regressions.len()));
    for (suite, row) in regressions {
        out.push_str(&format!(
            "  [{}] {} config {}: {:+.2}%\n",
            suite.name,
            row.operation,
            row.configuration,
            row.change_pct.unwrap_or_default()
        ));
    }
    out.push_str(&format!("{}\n\n", "=".repeat(60)));
    out
}

/// Prints the full report to stdout.
pub fn print_report(report: &Report, style: &ReportStyle) {
    print!("{}", render_report(report, style));
}

/// Prints regression counts only.
pub fn print_summary(report: &Report) {
    print!("{}", render_summary(report));
}
