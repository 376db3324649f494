//! `ppi partners` command implementation
//!
//! Lists STRING functional partners with their per-channel scores.

use crate::api::{FunctionalPartner, QueryClient};
use crate::error::Result;
use crate::progress::create_spinner;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use ppi_common::types::require_symbol;

/// Query and print the functional partners of `gene`
pub async fn run(client: &QueryClient, gene: &str, limit: Option<u32>) -> Result<()> {
    let gene = require_symbol(gene)?;
    let limit = limit.unwrap_or(client.config().partner_limit);

    let spinner = create_spinner(&format!("Querying STRING partners of {}...", gene));
    let partners = client.functional_partners(&gene, limit).await;
    spinner.finish_and_clear();

    if partners.is_empty() {
        println!("No functional partners found for {}.", gene.cyan());
        println!("Check the gene symbol or try another --organism.");
        return Ok(());
    }

    println!(
        "{} {} functional partners of {}",
        "STRING:".cyan().bold(),
        partners.len(),
        gene.bold()
    );
    println!("{}", partners_table(&partners));

    Ok(())
}

fn score_cell(score: f64) -> String {
    format!("{:.3}", score)
}

/// Table of partners: name, STRING id, combined and channel scores
pub fn partners_table(partners: &[FunctionalPartner]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            "Partner",
            "STRING ID",
            "Combined",
            "Experimental",
            "Database",
            "Textmining",
        ]);

    for partner in partners {
        table.add_row(vec![
            partner.gene.clone(),
            partner.string_id.clone(),
            score_cell(partner.score),
            score_cell(partner.escore),
            score_cell(partner.dscore),
            score_cell(partner.tscore),
        ]);
    }

    table
}
