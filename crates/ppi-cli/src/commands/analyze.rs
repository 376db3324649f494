//! Default mode: aggregate a gene, then compare and export on request
//!
//! `ppi --gene EYS [--literature A,B] [--output F] [--format F] [--graph F]`

use super::{print_section, truncate};
use crate::aggregator::Aggregator;
use crate::compare::report::score_bar;
use crate::compare::{Comparator, ExportPaths, Metadata, ReportFormat};
use crate::error::Result;
use crate::progress::QuerySpinner;
use crate::AnalyzeArgs;
use colored::Colorize;
use ppi_common::types::{parse_symbol_list, require_symbol};
use ppi_common::GeneRecord;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

const SUMMARY_GO_TERMS: usize = 5;
const SUMMARY_DISEASES: usize = 3;
const SUMMARY_DISEASE_CHARS: usize = 80;
const SUMMARY_INTERACTIONS: usize = 5;
const SUMMARY_PATHWAYS: usize = 3;

/// Run the default analysis for `--gene`
pub async fn run(aggregator: &Aggregator, args: &AnalyzeArgs) -> Result<()> {
    let gene = require_symbol(args.gene.as_deref().unwrap_or_default())?;
    let format: ReportFormat = args.format.parse()?;
    let literature = args.literature.as_deref().map(parse_symbol_list);

    let record = run_aggregation(aggregator, &gene).await;

    if let Some(ref path) = args.save_data {
        save_record(&record, path)?;
    }

    let comparator = build_comparator(&gene, literature.as_deref().unwrap_or_default(), record.clone());

    match (&literature, &args.output) {
        (Some(_), output) => {
            run_comparison(&comparator, &gene, format, output.as_deref())?;
        },
        (None, Some(path)) => save_record(&record, path)?,
        (None, None) => {},
    }

    if let Some(ref path) = args.graph {
        run_graph_export(&comparator, &gene, path)?;
    }

    Ok(())
}

/// Aggregate `gene` behind a spinner and print the console summary
pub async fn run_aggregation(aggregator: &Aggregator, gene: &str) -> GeneRecord {
    print_section(&format!("DATA AGGREGATION FOR {}", gene));

    let spinner = QuerySpinner::new(gene);
    let record = aggregator.aggregate_with(gene, &spinner).await;
    spinner.finish();

    print!("{}", format_summary(&record));
    record
}

/// Comparator loaded with the literature list and the aggregated record
pub fn build_comparator(gene: &str, literature: &[String], record: GeneRecord) -> Comparator {
    let mut metadata = Metadata::new();
    metadata.insert("source".to_string(), "User input / Literature".to_string());
    metadata.insert("confidence".to_string(), "curated".to_string());

    let mut comparator = Comparator::new();
    comparator.load_literature(gene, literature, metadata);
    comparator.load_database(gene, record);
    comparator
}

/// Print the comparison report and optionally save it
pub fn run_comparison(
    comparator: &Comparator,
    gene: &str,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<String> {
    print_section(&format!("SOURCE COMPARISON FOR {}", gene));

    let report = comparator.report(gene, format)?;
    println!("{}", report);

    if let Some(path) = output {
        fs::write(path, &report)?;
        info!(path = %path.display(), format = %format, "Report written");
        println!();
        println!("{} Report saved to {}", "[OK]".green(), path.display());
    }

    Ok(report)
}

/// Export the interaction graph of `gene` next to `json_path`
pub fn run_graph_export(comparator: &Comparator, gene: &str, json_path: &Path) -> Result<ExportPaths> {
    print_section("GRAPH EXPORT");

    let graph = comparator.export_graph(gene);
    let paths = graph.write_files(json_path)?;

    println!("{} Files for Cytoscape:", "[OK]".green());
    println!("  - {} ({} nodes)", paths.nodes.display(), graph.nodes.len());
    println!("  - {} ({} edges)", paths.edges.display(), graph.edges.len());
    println!("  - {} (full JSON)", paths.json.display());

    Ok(paths)
}

fn save_record(record: &GeneRecord, path: &Path) -> Result<()> {
    record.save_json(path)?;
    println!();
    println!("{} Data saved to {}", "[OK]".green(), path.display());
    Ok(())
}

/// Human-readable overview of an aggregated record
pub fn format_summary(record: &GeneRecord) -> String {
    let mut out = String::new();

    let sources: Vec<&str> = record.sources.iter().map(|s| s.as_str()).collect();
    let sources = if sources.is_empty() {
        "none".to_string()
    } else {
        sources.join(", ")
    };
    let _ = writeln!(out, "\n{} {}", "Sources queried:".green(), sources);

    if let Some(ref uniprot) = record.uniprot {
        let _ = writeln!(out, "\n{}", "UniProt:".bold());
        let _ = writeln!(out, "  ID: {}", uniprot.id);
        let _ = writeln!(out, "  Name: {}", uniprot.name);
    }

    if !record.go_terms.is_empty() {
        let _ = writeln!(out, "\n{} {} found", "GO terms:".bold(), record.go_terms.len());
        for term in record.go_terms.iter().take(SUMMARY_GO_TERMS) {
            let _ = writeln!(out, "  - {}: {}", term.id, term.label);
        }
        if record.go_terms.len() > SUMMARY_GO_TERMS {
            let _ = writeln!(out, "  ... and {} more", record.go_terms.len() - SUMMARY_GO_TERMS);
        }
    }

    if !record.diseases.is_empty() {
        let _ = writeln!(out, "\n{}", "Associated diseases:".bold());
        for disease in record.diseases.iter().take(SUMMARY_DISEASES) {
            let _ = writeln!(out, "  - {}", truncate(disease, SUMMARY_DISEASE_CHARS));
        }
    }

    if !record.interactions.is_empty() {
        let _ = writeln!(
            out,
            "\n{} {} found",
            "STRING interactions:".bold(),
            record.interactions.len()
        );
        for interaction in record.interactions.iter().take(SUMMARY_INTERACTIONS) {
            let _ = writeln!(
                out,
                "  - {:<12} {:.3} {}",
                interaction.partner,
                interaction.score,
                score_bar(interaction.score)
            );
        }
        if record.interactions.len() > SUMMARY_INTERACTIONS {
            let _ = writeln!(
                out,
                "  ... and {} more",
                record.interactions.len() - SUMMARY_INTERACTIONS
            );
        }
    }

    if !record.pathways.is_empty() {
        let _ = writeln!(out, "\n{} {} found", "WikiPathways pathways:".bold(), record.pathways.len());
        for pathway in record.pathways.iter().take(SUMMARY_PATHWAYS) {
            let _ = writeln!(out, "  - [{}] {}", pathway.id, pathway.title);
        }
    }

    out
}
