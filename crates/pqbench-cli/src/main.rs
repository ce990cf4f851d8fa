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

//! PQBench Command Line Interface

use clap::Parser;
use pqbench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// PQBench - post-quantum benchmark reporting
///
/// Extracts cycle counts from Dilithium and Kyber benchmark output and
/// compares parameter tweaks against a baseline.
///
/// # Examples
///
/// ```bash
/// # Parse one result file
/// pqbench extract results/config1.txt --scheme dilithium
///
/// # Compare two tweaks against the baseline
/// pqbench compare config1.txt config2.txt config3.txt --scheme kyber
///
/// # Render a manifest as CSV
/// pqbench report run.yaml --output report.csv
/// ```
#[derive(Parser)]
#[command(name = "pqbench")]
#[command(author, version, about = "PQBench - post-quantum benchmark reporting", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pqbench=debug" } else { "pqbench=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
