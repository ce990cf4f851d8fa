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

//! Core data model.
//!
//! - `measurement`: cycle counts and measurement sets
//! - `operation`: operation lists and scheme presets
//! - `configuration`: configuration ids and labels
//! - `config`: run manifests

pub mod config;
pub mod configuration;
pub mod measurement;
pub mod operation;

pub use config::{ConfigurationSource, OperationDef, RunManifest, SuiteSpec, DEFAULT_BASELINE};
pub use configuration::{Configuration, ConfigurationId};
pub use measurement::{Measurement, MeasurementSet, Statistic};
pub use operation::{Operation, OperationList, Scheme};
