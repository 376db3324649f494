//! `ppi --demo`: full analysis of EYS against a curated interactor list

use super::analyze::{build_comparator, run_aggregation, run_comparison, run_graph_export};
use super::print_section;
use crate::aggregator::Aggregator;
use crate::compare::ReportFormat;
use crate::error::Result;
use colored::Colorize;
use std::path::Path;

pub const DEMO_GENE: &str = "EYS";

/// EYS interactors reported in the literature
pub const DEMO_LITERATURE: &[&str] = &[
    "GRK7", "AIPL1", "DAG1", "POMGNT1", "POMT2", "PROM1", "KIF19", "PDE6D",
];

/// Graph export written to the working directory
pub const DEMO_GRAPH_FILE: &str = "eys_cytoscape.json";

pub async fn run(aggregator: &Aggregator) -> Result<()> {
    print_section(&format!("FULL DEMO: gene {}", DEMO_GENE));

    println!();
    println!("{}", "Literature interactors:".bold());
    for gene in DEMO_LITERATURE {
        println!("  - {}", gene);
    }

    let record = run_aggregation(aggregator, DEMO_GENE).await;
    let literature: Vec<String> = DEMO_LITERATURE.iter().map(|g| g.to_string()).collect();
    let comparator = build_comparator(DEMO_GENE, &literature, record);

    run_comparison(&comparator, DEMO_GENE, ReportFormat::Text, None)?;
    run_graph_export(&comparator, DEMO_GENE, Path::new(DEMO_GRAPH_FILE))?;

    Ok(())
}
