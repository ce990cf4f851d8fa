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

//! Operation lists and scheme presets.
//!
//! An [`Operation`] is a named step whose cycle count is looked up in
//! benchmark output. The canonical name is the key in a
//! [`MeasurementSet`](crate::core::MeasurementSet); the aliases are the
//! tokens actually searched for in the text, since harnesses rarely agree on
//! naming (`keypair`, `crypto_kem_keypair`, `kyber_keypair`, ...).

use crate::error::{PqBenchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A measured operation and the tokens it may appear as in result files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Canonical operation name.
    pub name: String,
    /// Search tokens, tried in order. Empty means "search for `name`".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Operation {
    /// Creates an operation searched for under its own name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Adds a search alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Tokens to search for, in priority order.
    pub fn search_terms(&self) -> impl Iterator<Item = &str> {
        let own = if self.aliases.is_empty() {
            Some(self.name.as_str())
        } else {
            None
        };
        own.into_iter().chain(self.aliases.iter().map(String::as_str))
    }
}

impl From<&str> for Operation {
    fn from(name: &str) -> Self {
        Operation::new(name)
    }
}

/// Returns whether `s` is a single token of ASCII letters, digits and `_`.
pub(crate) fn is_word_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A validated, ordered list of operations.
///
/// Guarantees: at least one operation, unique canonical names, every name and
/// alias a single word token, and no alias shared by two operations. The order
/// is the presentation order of every table built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OperationList {
    operations: Vec<Operation>,
}

impl OperationList {
    /// Validates and wraps a list of operations.
    ///
    /// # Errors
    ///
    /// Returns [`PqBenchError::InvalidOperations`] if the list is empty, a
    /// name or alias is not a word token, a name repeats, or two operations
    /// share a search token.
    pub fn new(operations: Vec<Operation>) -> Result<Self> {
        if operations.is_empty() {
            return Err(PqBenchError::invalid_operations("list is empty"));
        }

        Self::validate(&operations)?;
        Ok(Self { operations })
    }

    fn validate(operations: &[Operation]) -> Result<()> {
        // Keyed on the lowercased term; matching ignores case.
        let mut owners: HashMap<String, &str> = HashMap::new();
        let mut names: Vec<&str> = Vec::with_capacity(operations.len());

        for op in operations {
            if !is_word_token(&op.name) {
                return Err(PqBenchError::invalid_operations(format!(
                    "'{}' is not a valid operation name",
                    op.name
                )));
            }
            if names.contains(&op.name.as_str()) {
                return Err(PqBenchError::invalid_operations(format!(
                    "operation '{}' is listed more than once",
                    op.name
                )));
            }
            names.push(&op.name);

            for term in op.search_terms() {
                if !is_word_token(term) {
                    return Err(PqBenchError::invalid_operations(format!(
                        "alias '{}' of '{}' is not a valid token",
                        term, op.name
                    )));
                }
                if let Some(owner) = owners.insert(term.to_ascii_lowercase(), &op.name) {
                    if owner != op.name {
                        return Err(PqBenchError::invalid_operations(format!(
                            "alias '{}' is used by both '{}' and '{}'",
                            term, owner, op.name
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Builds a list from bare names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Operation::new).collect())
    }

    /// Iterates over the operations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Iterates over canonical names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|op| op.name.as_str())
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<'a> IntoIterator for &'a OperationList {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Post-quantum schemes with built-in operation presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Dilithium signature scheme.
    Dilithium,
    /// Kyber key-encapsulation mechanism.
    Kyber,
}

impl Scheme {
    /// All supported schemes.
    pub const ALL: [Scheme; 2] = [Scheme::Dilithium, Scheme::Kyber];

    /// Returns the scheme as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Dilithium => "dilithium",
            Scheme::Kyber => "kyber",
        }
    }

    /// Parameter sets usually benchmarked for this scheme.
    pub fn security_levels(&self) -> &'static [&'static str] {
        match self {
            Scheme::Dilithium => &["dilithium2", "dilithium3", "dilithium5"],
            Scheme::Kyber => &["kyber512", "kyber768", "kyber1024"],
        }
    }

    /// The operations reported by this scheme's speed benchmarks.
    pub fn operations(&self) -> OperationList {
        let operations = match self {
            Scheme::Dilithium => vec![
                Operation::new("keygen")
                    .with_alias("keypair")
                    .with_alias("keygen"),
                Operation::new("sign"),
                Operation::new("verify"),
            ],
            Scheme::Kyber => vec![
                Operation::new("poly_compress"),
                Operation::new("poly_decompress"),
                Operation::new("polyvec_compress"),
                Operation::new("polyvec_decompress"),
                Operation::new("indcpa_keypair"),
                Operation::new("indcpa_enc"),
                Operation::new("indcpa_dec"),
                Operation::new("keypair")
                    .with_alias("crypto_kem_keypair")
                    .with_alias("kyber_keypair")
                    .with_alias("keypair"),
                Operation::new("encaps")
                    .with_alias("crypto_kem_enc")
                    .with_alias("kyber_encaps")
                    .with_alias("encaps"),
                Operation::new("decaps")
                    .with_alias("crypto_kem_dec")
                    .with_alias("kyber_decaps")
                    .with_alias("decaps"),
            ],
        };
        // Presets satisfy the OperationList invariants; see test_presets_validate.
        OperationList { operations }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = PqBenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dilithium" | "ml-dsa" => Ok(Scheme::Dilithium),
            "kyber" | "ml-kem" => Ok(Scheme::Kyber),
            _ => Err(PqBenchError::UnknownScheme(s.to_string())),
        }
    }
}
