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

//! PQBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **extract**: Parse one benchmark output file into cycle counts
//! - **compare**: Compare result files against a baseline file
//! - **report**: Analyse every suite of a YAML/JSON run manifest
//! - **schemes**: List the built-in Dilithium and Kyber presets
//!
//! # Examples
//!
//! ```no_run
//! use pqbench_cli::commands::report;
//!
//! # fn main() -> Result<(), pqbench_cli::error::CliError> {
//! // Render a manifest as Markdown
//! report("bench/run.yaml", Some("markdown"), Some("report.md"), false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Missing result files are not
//! errors: they appear as `N/A` in reports.

pub mod cli;
pub mod commands;
pub mod error;
