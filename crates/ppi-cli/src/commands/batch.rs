//! `ppi batch` command implementation
//!
//! Aggregates several genes and emits one JSON object keyed by gene symbol.

use crate::aggregator::{distinct_genes, Aggregator};
use crate::error::{CliError, Result};
use crate::progress::BatchProgress;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use ppi_common::GeneRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Aggregate `genes` and write the map to `output`, or print it to stdout
pub async fn run(aggregator: &Aggregator, genes: &[String], output: Option<&Path>) -> Result<()> {
    let total = distinct_genes(genes).len();
    if total == 0 {
        return Err(CliError::config("batch needs at least one non-empty gene symbol"));
    }

    let progress = BatchProgress::new(total);
    let records = aggregator.aggregate_many_with(genes, &progress).await;
    progress.finish();

    let json = serde_json::to_string_pretty(&records)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            info!(path = %path.display(), genes = records.len(), "Batch written");
            println!("{}", batch_table(&records));
            println!("{} Data for {} genes saved to {}", "[OK]".green(), records.len(), path.display());
        },
        None => println!("{}", json),
    }

    Ok(())
}

/// One row per gene with the number of entries per category
pub fn batch_table(records: &BTreeMap<String, GeneRecord>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Gene", "Sources", "GO terms", "Diseases", "Interactions", "Pathways"]);

    for (gene, record) in records {
        let sources: Vec<&str> = record.sources.iter().map(|s| s.as_str()).collect();
        table.add_row(vec![
            gene.clone(),
            if sources.is_empty() { "-".to_string() } else { sources.join(", ") },
            record.go_terms.len().to_string(),
            record.diseases.len().to_string(),
            record.interactions.len().to_string(),
            record.pathways.len().to_string(),
        ]);
    }

    table
}
