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

//! End-to-end tests: result files on disk through to rendered reports.

use pqbench::reporters::{export_csv, export_markdown, render_report};
use pqbench::{
    compare_sets, extract, run_manifest, Classification, ConfigurationId, Measurement,
    MeasurementSet, OperationList, PqBenchError, Report, ReportStyle, RunManifest, Scheme,
    Statistic,
};
use std::fs;
use std::path::Path;

fn kyber_block(name: &str, median: u64, average: u64) -> String {
    format!(
        "{}: \nmedian: {} cycles/ticks\naverage: {} cycles/ticks\n\n",
        name, median, average
    )
}

fn kyber_output(scale: u64) -> String {
    [
        ("poly_compress", 100),
        ("poly_decompress", 90),
        ("polyvec_compress", 400),
        ("polyvec_decompress", 380),
        ("indcpa_keypair", 50_000),
        ("indcpa_enc", 60_000),
        ("indcpa_dec", 20_000),
        ("kyber_keypair", 55_000),
        ("kyber_encaps", 70_000),
        ("kyber_decaps", 80_000),
    ]
    .iter()
    .map(|(name, cycles)| kyber_block(name, cycles * scale / 100, cycles * scale / 100 + 7))
    .collect()
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_dilithium_literal_output() {
    let set = extract(
        "keypair 12345\nsign 6789\nverify 2345",
        &Scheme::Dilithium.operations(),
    )
    .unwrap();

    let expected: MeasurementSet = [
        ("keygen", Measurement::Scalar(12345)),
        ("sign", Measurement::Scalar(6789)),
        ("verify", Measurement::Scalar(2345)),
    ]
    .into_iter()
    .collect();
    assert_eq!(set, expected);
}

#[test]
fn test_comparison_scenarios() {
    let ops = OperationList::from_names(["keygen", "sign", "verify"]).unwrap();
    let baseline: MeasurementSet = [
        ("keygen", Measurement::Scalar(12345)),
        ("sign", Measurement::Scalar(6789)),
        ("verify", Measurement::Scalar(0)),
    ]
    .into_iter()
    .collect();
    let candidate: MeasurementSet = [
        ("sign", Measurement::Scalar(6000)),
        ("verify", Measurement::Scalar(500)),
    ]
    .into_iter()
    .collect();

    let rows = compare_sets(
        &ConfigurationId::Index(2),
        Some(&baseline),
        Some(&candidate),
        &ops,
        Statistic::Median,
    );
    assert_eq!(rows.len(), 3);

    // candidate missing keygen
    assert_eq!(rows[0].operation, "keygen");
    assert_eq!(rows[0].change_pct, None);
    assert_eq!(rows[0].classification, Classification::Unknown);

    let sign = rows[1].change_pct.unwrap();
    assert!((sign - (-11.6217)).abs() < 0.001);
    assert_eq!(rows[1].classification, Classification::Faster);

    // zero baseline
    assert_eq!(rows[2].change_pct, None);
    assert_eq!(rows[2].classification, Classification::Unknown);
}

#[test]
fn test_kyber_manifest_two_levels() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("kyber512")).unwrap();
    fs::create_dir(dir.path().join("kyber768")).unwrap();
    write(&dir.path().join("kyber512"), "config1.txt", &kyber_output(100));
    write(&dir.path().join("kyber512"), "config2.txt", &kyber_output(110));
    write(&dir.path().join("kyber768"), "config1.txt", &kyber_output(150));
    write(&dir.path().join("kyber768"), "config2.txt", &kyber_output(120));

    let manifest_path = dir.path().join("run.yaml");
    write(
        dir.path(),
        "run.yaml",
        r#"
title: Kyber Parameter Sweep
scheme: kyber
statistic: average
notes:
  - measured on a quiet core
suites:
  - name: kyber512
    configurations:
      - { id: 1, label: "Baseline (Original NIST)", path: kyber512/config1.txt }
      - { id: 2, label: "Smaller modulus", path: kyber512/config2.txt }
  - name: kyber768
    configurations:
      - { id: 1, path: kyber768/config1.txt }
      - { id: 2, path: kyber768/config2.txt }
"#,
    );

    let manifest = RunManifest::load(&manifest_path).unwrap();
    let analysis = run_manifest(&manifest).unwrap();
    assert_eq!(analysis.suites.len(), 2);
    assert_eq!(analysis.statistic, Statistic::Average);

    let k512 = analysis.compare(&analysis.suites[0]);
    assert_eq!(k512.len(), 10);
    assert!(k512.iter().all(|r| r.classification == Classification::Slower));

    let k768 = analysis.compare(&analysis.suites[1]);
    assert!(k768.iter().all(|r| r.classification == Classification::Faster));

    let encaps = k768.iter().find(|r| r.operation == "encaps").unwrap();
    assert_eq!(encaps.baseline, Some(105_007));
    assert_eq!(encaps.candidate, Some(84_007));

    let report = Report::from_analysis(&analysis);
    assert_eq!(report.notes, vec!["measured on a quiet core"]);
    assert!(report.has_regressions());

    let text = render_report(&report, &ReportStyle::default());
    assert!(text.contains("KYBER512: ABSOLUTE CYCLE COUNTS (average)"));
    assert!(text.contains("Baseline (Original NIST)"));

    let csv_path = dir.path().join("report.csv");
    export_csv(&report, &ReportStyle::default(), &csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    // header plus one row per suite and operation
    assert_eq!(csv.lines().count(), 1 + 2 * 10);
    assert!(csv.contains("kyber512,keypair,55000,55007,60500,60507"));

    let md_path = dir.path().join("report.md");
    export_markdown(&report, &ReportStyle::default(), &md_path).unwrap();
    let md = fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("## kyber768"));
    assert!(md.contains("## Regressions"));
}

#[test]
fn test_missing_baseline_file_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "config2.txt", "keypair 100\nsign 200\nverify 300\n");

    let manifest_path = dir.path().join("run.json");
    write(
        dir.path(),
        "run.json",
        r#"{
  "scheme": "dilithium",
  "suites": [
    {
      "name": "dilithium3",
      "configurations": [
        { "id": 1, "path": "config1.txt" },
        { "id": 2, "path": "config2.txt" }
      ]
    }
  ]
}"#,
    );

    let manifest = RunManifest::load(&manifest_path).unwrap();
    let analysis = run_manifest(&manifest).unwrap();
    let rows = analysis.compare(&analysis.suites[0]);

    assert_eq!(rows.len(), 3);
    assert!(rows
        .iter()
        .all(|r| r.change_pct.is_none() && r.classification == Classification::Unknown));

    let report = Report::from_analysis(&analysis);
    let text = render_report(&report, &ReportStyle::default());
    assert!(text.contains("N/A"));
}

#[test]
fn test_manifest_unknown_baseline() {
    let err = RunManifest::from_yaml_str(
        r#"
scheme: dilithium
baseline: 7
suites:
  - name: dilithium2
    configurations:
      - { id: 1, path: a.txt }
"#,
    )
    .unwrap_err();
    assert!(matches!(err, PqBenchError::UnknownBaseline { .. }));
}

#[test]
fn test_custom_operations_with_aliases() {
    let manifest = RunManifest::from_yaml_str(
        r#"
operations:
  - name: keygen
    aliases: [crypto_sign_keypair]
  - sign
suites:
  - name: custom
    configurations:
      - { id: 1, path: a.txt }
"#,
    )
    .unwrap();

    let ops = manifest.operation_list().unwrap();
    let set = extract("crypto_sign_keypair: 42\nsign 7\n", &ops).unwrap();
    assert_eq!(set.value("keygen", Statistic::Median), Some(42));
    assert_eq!(set.value("sign", Statistic::Median), Some(7));
}
