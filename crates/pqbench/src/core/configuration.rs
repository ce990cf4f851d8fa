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

//! Benchmark configurations.
//!
//! A configuration is one parameter variant of a scheme (the baseline or a
//! tweak) together with the measurements parsed from its result file.

use crate::core::MeasurementSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Identifies a configuration: a number (`1` = baseline by convention) or a
/// free-form tag.
///
/// Ordering puts numeric ids first in numeric order, then tags lexically.
/// A numeric string such as `"1"` reads as [`ConfigurationId::Index`], the
/// same as through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "RawConfigurationId")]
pub enum ConfigurationId {
    /// Numbered configuration.
    Index(u32),
    /// Named configuration.
    Tag(String),
}

/// Wire form of a [`ConfigurationId`] before numeric tags are normalised.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfigurationId {
    Index(u32),
    Tag(String),
}

impl From<RawConfigurationId> for ConfigurationId {
    fn from(raw: RawConfigurationId) -> Self {
        match raw {
            RawConfigurationId::Index(n) => ConfigurationId::Index(n),
            RawConfigurationId::Tag(tag) => ConfigurationId::from(tag.as_str()),
        }
    }
}

impl fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationId::Index(n) => write!(f, "{}", n),
            ConfigurationId::Tag(tag) => f.write_str(tag),
        }
    }
}

impl FromStr for ConfigurationId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<u32>() {
            Ok(n) => ConfigurationId::Index(n),
            Err(_) => ConfigurationId::Tag(s.trim().to_string()),
        })
    }
}

impl From<u32> for ConfigurationId {
    fn from(n: u32) -> Self {
        ConfigurationId::Index(n)
    }
}

impl From<&str> for ConfigurationId {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

/// A configuration and its parsed measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Configuration id.
    pub id: ConfigurationId,
    /// Human-readable name, e.g. "Tweak 1: SHA3-256 Challenge".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Result file the measurements came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Parsed measurements; `None` when the result file was missing or
    /// unreadable.
    pub measurements: Option<MeasurementSet>,
}

impl Configuration {
    /// Creates a configuration with parsed measurements.
    pub fn new(id: impl Into<ConfigurationId>, measurements: Option<MeasurementSet>) -> Self {
        Self {
            id: id.into(),
            label: None,
            source: None,
            measurements,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Records the result file path.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Label if set, otherwise `Config <id>`.
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Config {}", self.id),
        }
    }
}
