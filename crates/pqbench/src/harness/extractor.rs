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

//! Cycle-count extraction from benchmark output.
//!
//! Result files are free-form text. Each operation is located by its search
//! tokens and the text following the token is matched against
//! [`EXTRACTION_RULES`], in priority order, until one rule produces a value.
//!
//! # Matching rules
//!
//! - A token only matches as a whole word: `sign` never matches inside
//!   `design` or `crypto_sign_keypair`. Word characters are ASCII letters,
//!   digits and `_`.
//! - A rule only sees the *block* of its operation: the text from the token up
//!   to the next occurrence of any known token or the next header line
//!   (`name:` alone on a line), whichever comes first. Values are never
//!   borrowed from a neighbouring operation, listed or not.
//! - A number immediately followed by a word character or a decimal fraction
//!   (`12a4`, `12.5`) is malformed and skipped, as is one that overflows `u64`.
//!   A value pair whose second field is malformed voids that occurrence; it is
//!   not reread as a single value.
//! - Operations without a match are simply absent from the result.

use crate::core::{Measurement, MeasurementSet, OperationList};
use crate::error::{PqBenchError, Result};
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// A complete unsigned integer: digits not followed by a word character or a
/// decimal fraction.
const NUMBER: &str = r"([0-9]+)(?:$|[^0-9A-Za-z_.]|\.(?:$|[^0-9]))";

/// A line holding nothing but an operation header such as `poly_tomsg:`.
const HEADER_LINE: &str = r"(?m)^[ \t]*[A-Za-z_][A-Za-z0-9_]*:[ \t]*\r?$";

/// What a rule's capture groups produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureShape {
    /// Group 1 is the median, group 2 the average.
    Dual,
    /// Group 1 is the only value.
    Scalar,
}

/// One extraction pattern.
///
/// `template` is a regex anchored at the operation token; `{op}` is replaced
/// by the escaped token and `{num}` by a complete-integer capture.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRule {
    /// Rule identifier, used in logs.
    pub name: &'static str,
    /// Regex template.
    pub template: &'static str,
    /// Loose form of `template`. When it matches an occurrence but
    /// `template` does not, the occurrence is malformed and no later rule
    /// may read it.
    pub guard: Option<&'static str>,
    /// Whether the match ignores ASCII case.
    pub case_insensitive: bool,
    /// How captures map onto a [`Measurement`].
    pub shape: CaptureShape,
}

/// Extraction rules in priority order.
pub const EXTRACTION_RULES: &[ExtractionRule] = &[
    // keypair: ... median: 123 ... average: 456
    ExtractionRule {
        name: "median_average",
        template: r"^{op}(?-u:\b).*?(?-u:\b)median[:\s]+{num}.*?(?-u:\b)average[:\s]+{num}",
        guard: None,
        case_insensitive: true,
        shape: CaptureShape::Dual,
    },
    // keypair 123 456
    ExtractionRule {
        name: "value_pair",
        template: r"^{op}(?-u:\b)(?::\s*|\s+)([0-9]+)\s+{num}",
        guard: Some(r"^{op}(?-u:\b)(?::\s*|\s+)[0-9]+[ \t]+[0-9]"),
        case_insensitive: false,
        shape: CaptureShape::Dual,
    },
    // keypair 123
    ExtractionRule {
        name: "single_value",
        template: r"^{op}(?-u:\b)(?::\s*|\s+){num}",
        guard: None,
        case_insensitive: false,
        shape: CaptureShape::Scalar,
    },
];

impl ExtractionRule {
    fn build(&self, template: &str, token: &str) -> std::result::Result<Regex, regex::Error> {
        let pattern = template
            .replace("{op}", &regex::escape(token))
            .replace("{num}", NUMBER);
        RegexBuilder::new(&pattern)
            .case_insensitive(self.case_insensitive)
            .dot_matches_new_line(true)
            .build()
    }

    /// Compiles this rule for a single search token.
    pub fn compile(&self, token: &str) -> std::result::Result<Regex, regex::Error> {
        self.build(self.template, token)
    }

    /// Compiles this rule's guard for a single search token, if it has one.
    pub fn compile_guard(&self, token: &str) -> Option<std::result::Result<Regex, regex::Error>> {
        self.guard.map(|guard| self.build(guard, token))
    }

    /// Applies a compiled rule to a block that starts at the operation token.
    pub fn apply(&self, regex: &Regex, block: &str) -> Option<Measurement> {
        let caps = regex.captures(block)?;
        let first = caps.get(1)?.as_str().parse::<u64>().ok()?;
        match self.shape {
            CaptureShape::Scalar => Some(Measurement::Scalar(first)),
            CaptureShape::Dual => {
                let second = caps.get(2)?.as_str().parse::<u64>().ok()?;
                Some(Measurement::Dual {
                    median: first,
                    average: second,
                })
            }
        }
    }
}

/// A rule compiled for one token.
#[derive(Debug)]
struct CompiledRule {
    rule: &'static ExtractionRule,
    regex: Regex,
    guard: Option<Regex>,
}

/// A search token with its rules compiled.
#[derive(Debug)]
struct TokenMatcher {
    token: String,
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct OperationMatcher {
    name: String,
    tokens: Vec<TokenMatcher>,
}

/// Text span of one token occurrence and the end of its block.
#[derive(Debug, Clone, Copy)]
struct Occurrence {
    start: usize,
    end: usize,
    block_end: usize,
}

/// Extracts a [`MeasurementSet`] from benchmark output.
///
/// Compiles all patterns once for an [`OperationList`]; reuse the extractor
/// when parsing several files with the same operations.
///
/// # Example
///
/// ```
/// use pqbench::core::Scheme;
/// use pqbench::harness::Extractor;
///
/// let extractor = Extractor::new(&Scheme::Dilithium.operations()).unwrap();
/// let set = extractor.extract("keypair 12345\nsign 6789\nverify 2345");
/// assert_eq!(set.get("keygen").map(|m| m.median()), Some(12345));
/// ```
#[derive(Debug)]
pub struct Extractor {
    boundaries: Regex,
    headers: Regex,
    operations: Vec<OperationMatcher>,
}

impl Extractor {
    /// Compiles the extraction patterns for `operations`.
    ///
    /// # Errors
    ///
    /// Returns [`PqBenchError::InvalidOperations`] if a pattern fails to
    /// compile.
    pub fn new(operations: &OperationList) -> Result<Self> {
        let compile_err = |token: &str, e: regex::Error| {
            PqBenchError::invalid_operations(format!("pattern for '{}' failed: {}", token, e))
        };

        let mut all_tokens = Vec::new();
        let mut matchers = Vec::with_capacity(operations.len());

        for op in operations {
            let mut tokens = Vec::new();
            for token in op.search_terms() {
                let mut rules = Vec::with_capacity(EXTRACTION_RULES.len());
                for rule in EXTRACTION_RULES {
                    let regex = rule.compile(token).map_err(|e| compile_err(token, e))?;
                    let guard = rule
                        .compile_guard(token)
                        .transpose()
                        .map_err(|e| compile_err(token, e))?;
                    rules.push(CompiledRule { rule, regex, guard });
                }
                all_tokens.push(regex::escape(token));
                tokens.push(TokenMatcher {
                    token: token.to_string(),
                    rules,
                });
            }
            matchers.push(OperationMatcher {
                name: op.name.clone(),
                tokens,
            });
        }

        let boundary_pattern = format!(r"(?-u:\b)(?:{})(?-u:\b)", all_tokens.join("|"));
        let boundaries = RegexBuilder::new(&boundary_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| compile_err("<boundaries>", e))?;
        let headers = Regex::new(HEADER_LINE).map_err(|e| compile_err("<headers>", e))?;

        Ok(Self {
            boundaries,
            headers,
            operations: matchers,
        })
    }

    /// Token occurrences in text order, each with the end of its block.
    fn occurrences(&self, text: &str) -> Vec<Occurrence> {
        let header_starts: Vec<usize> = self.headers.find_iter(text).map(|m| m.start()).collect();
        let spans: Vec<(usize, usize)> = self
            .boundaries
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();

        spans
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| {
                let next_token = spans.get(i + 1).map_or(text.len(), |next| next.0);
                let next_header = header_starts
                    .iter()
                    .copied()
                    .find(|&h| h >= end)
                    .unwrap_or(text.len());
                Occurrence {
                    start,
                    end,
                    block_end: next_token.min(next_header),
                }
            })
            .collect()
    }

    /// Parses `text` into a measurement set.
    ///
    /// Pure and deterministic: the same text always yields the same set.
    pub fn extract(&self, text: &str) -> MeasurementSet {
        let occurrences = self.occurrences(text);

        let mut set = MeasurementSet::new();
        for op in &self.operations {
            match self.extract_operation(op, text, &occurrences) {
                Some(measurement) => set.insert(op.name.clone(), measurement),
                None => debug!(operation = %op.name, "operation not found in benchmark output"),
            }
        }
        set
    }

    fn extract_operation(
        &self,
        op: &OperationMatcher,
        text: &str,
        occurrences: &[Occurrence],
    ) -> Option<Measurement> {
        for matcher in &op.tokens {
            let own: Vec<&Occurrence> = occurrences
                .iter()
                .filter(|occ| text[occ.start..occ.end].eq_ignore_ascii_case(&matcher.token))
                .collect();
            let mut void = vec![false; own.len()];

            for compiled in &matcher.rules {
                for (i, occ) in own.iter().enumerate() {
                    if void[i] {
                        continue;
                    }
                    let block = &text[occ.start..occ.block_end];
                    if let Some(measurement) = compiled.rule.apply(&compiled.regex, block) {
                        debug!(
                            operation = %op.name,
                            token = %matcher.token,
                            rule = compiled.rule.name,
                            "extracted measurement"
                        );
                        return Some(measurement);
                    }
                    if compiled.guard.as_ref().is_some_and(|g| g.is_match(block)) {
                        debug!(
                            operation = %op.name,
                            rule = compiled.rule.name,
                            "malformed value, occurrence skipped"
                        );
                        void[i] = true;
                    }
                }
            }
        }
        None
    }
}

/// Parses `text` for `operations` in one call.
///
/// Convenience wrapper around [`Extractor`]; prefer building an extractor
/// once when parsing many files.
pub fn extract(text: &str, operations: &OperationList) -> Result<MeasurementSet> {
    Ok(Extractor::new(operations)?.extract(text))
}
