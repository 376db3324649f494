//! End-to-end tests for the ppi binary
//!
//! These tests validate the full command workflow including:
//! - Aggregation summary and comparison reports
//! - Report, data and graph output files
//! - Subcommands (partners, batch, config)
//! - Error handling and exit codes

mod common;

use assert_cmd::Command;
use common::eys_server;
use ppi_cli::compare::JsonReport;
use ppi_common::GeneRecord;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::MockServer;

/// `ppi` pointed at the mock server, without colors or env leakage
fn ppi(server_uri: &str, dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ppi").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("PPI_LOG_LEVEL")
        .env_remove("PPI_LOG_OUTPUT")
        .env_remove("PPI_MIN_SCORE")
        .env_remove("PPI_ORGANISM")
        .arg("--uniprot-url")
        .arg(format!("{}/uniprot/sparql", server_uri))
        .arg("--wikipathways-url")
        .arg(format!("{}/wikipathways/sparql", server_uri))
        .arg("--string-url")
        .arg(format!("{}/string/api", server_uri));
    cmd
}

#[tokio::test]
async fn test_aggregation_summary() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .arg("--gene")
        .arg("eys")
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA AGGREGATION FOR EYS"))
        .stdout(predicate::str::contains("UniProt, STRING, WikiPathways"))
        .stdout(predicate::str::contains("ID: Q5T1H1"))
        .stdout(predicate::str::contains("GO:0005515: protein binding"))
        .stdout(predicate::str::contains("[WP4657] Retinal dystrophies"));
}

#[tokio::test]
async fn test_text_comparison_report() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args(["--gene", "EYS", "--literature", "GRK7,AIPL1,DAG1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INTERACTOR COMPARISON REPORT: EYS"))
        .stdout(predicate::str::contains("[OK] AIPL1"))
        .stdout(predicate::str::contains("[OK] DAG1"))
        .stdout(predicate::str::contains("[!] GRK7"))
        .stdout(predicate::str::contains("[*] CERKL"))
        .stdout(predicate::str::contains("2 (50%)"));
}

#[tokio::test]
async fn test_json_report_and_outputs() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args([
            "--gene",
            "EYS",
            "--literature",
            "grk7, aipl1 ,DAG1",
            "--format",
            "json",
            "--output",
            "report.json",
            "--graph",
            "eys_graph.json",
            "--save-data",
            "eys_data.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to report.json"));

    let report: JsonReport =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap()).unwrap();
    assert_eq!(report.gene, "EYS");
    assert_eq!(report.comparison.overlap_score, 0.5);
    assert!(report.comparison.only_in_literature.contains("GRK7"));
    assert_eq!(report.gap_analysis.validation_candidates[0].gene, "CERKL");
    assert_eq!(report.literature_metadata["confidence"], "curated");

    let record = GeneRecord::load_json(dir.path().join("eys_data.json")).unwrap();
    assert_eq!(record.interactions.len(), 3);

    let nodes = fs::read_to_string(dir.path().join("eys_graph_nodes.csv")).unwrap();
    assert!(nodes.starts_with("id,label,type,source\n"));
    // header + central + 4 interactors
    assert_eq!(nodes.lines().count(), 6);

    let edges = fs::read_to_string(dir.path().join("eys_graph_edges.csv")).unwrap();
    assert!(edges.contains("EYS,GRK7,0.0,literature,literature_only"));
    assert!(dir.path().join("eys_graph.json").exists());
}

#[tokio::test]
async fn test_output_without_literature_saves_record() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args(["--gene", "EYS", "--output", "eys.json"])
        .assert()
        .success();

    let record = GeneRecord::load_json(dir.path().join("eys.json")).unwrap();
    assert_eq!(record.gene_symbol, "EYS");
    assert_eq!(record.pathways.len(), 1);
}

#[tokio::test]
async fn test_markdown_report_file() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args([
            "--gene",
            "EYS",
            "-l",
            "GRK7,AIPL1",
            "-f",
            "markdown",
            "-o",
            "report.md",
        ])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.starts_with("# Interactor Comparison Report: EYS"));
    assert!(report.contains("| CERKL | 0.857 | textmining |"));
}

#[tokio::test]
async fn test_invalid_format_fails() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args(["--gene", "EYS", "--format", "pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid report format"));
}

#[tokio::test]
async fn test_blank_gene_fails() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args(["--gene", "  "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid gene symbol"));
}

#[test]
fn test_unreachable_databases_still_succeed() {
    let dir = TempDir::new().unwrap();

    ppi("http://127.0.0.1:9", &dir)
        .args(["--gene", "EYS", "--literature", "GRK7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sources queried: none"))
        .stdout(predicate::str::contains("[!] GRK7"));
}

#[tokio::test]
async fn test_partners_table() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args(["partners", "EYS", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Textmining"))
        .stdout(predicate::str::contains("CERKL"))
        .stdout(predicate::str::contains("PRPH2"))
        .stdout(predicate::str::contains("0.788"));
}

#[tokio::test]
async fn test_batch_to_stdout() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    let output = ppi(&server.uri(), &dir)
        .args(["batch", "EYS", "RHO"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let map: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(map["EYS"]["gene_symbol"], "EYS");
    assert_eq!(map["EYS"]["interactions"].as_array().unwrap().len(), 3);
    assert!(map["RHO"]["interactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_to_file() {
    let server = eys_server().await;
    let dir = TempDir::new().unwrap();

    ppi(&server.uri(), &dir)
        .args(["batch", "EYS", "--output", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data for 1 genes saved to batch.json"));

    assert!(dir.path().join("batch.json").exists());
}

#[test]
fn test_config_show() {
    let dir = TempDir::new().unwrap();

    ppi("http://localhost:4000", &dir)
        .args(["config", "--organism", "10090", "--min-score", "0.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10090"))
        .stdout(predicate::str::contains("0.4"))
        .stdout(predicate::str::contains("http://localhost:4000/string/api"));
}

#[test]
fn test_config_rejects_out_of_range_score() {
    let dir = TempDir::new().unwrap();

    ppi("http://localhost:4000", &dir)
        .args(["config", "--min-score", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 1"));
}

#[test]
fn test_logging_failure_is_reported_and_ignored() {
    let dir = TempDir::new().unwrap();
    // A regular file where the log directory should be
    let not_a_dir = dir.path().join("logs");
    fs::write(&not_a_dir, "").unwrap();

    ppi("http://localhost:4000", &dir)
        .env("PPI_LOG_OUTPUT", "file")
        .env("PPI_LOG_DIR", &not_a_dir)
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: logging disabled"))
        .stdout(predicate::str::contains("9606"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("ppi").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--literature"))
        .stdout(predicate::str::contains("partners"));
}
