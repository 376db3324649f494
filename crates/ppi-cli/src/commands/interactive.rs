//! `ppi --interactive`: menu-driven access to every mode

use super::analyze::{build_comparator, run_aggregation, run_comparison, run_graph_export};
use super::demo;
use crate::aggregator::Aggregator;
use crate::compare::ReportFormat;
use crate::error::Result;
use colored::Colorize;
use inquire::{InquireError, Select, Text};
use ppi_common::types::{normalize_symbol, parse_symbol_list};
use std::fmt;
use std::path::PathBuf;

const DEFAULT_GRAPH_FILE: &str = "cytoscape_export.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Aggregate,
    Compare,
    ExportGraph,
    Demo,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::Aggregate,
        MenuChoice::Compare,
        MenuChoice::ExportGraph,
        MenuChoice::Demo,
        MenuChoice::Exit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Aggregate => "Aggregate data for a gene",
            MenuChoice::Compare => "Compare literature vs databases",
            MenuChoice::ExportGraph => "Export graph for Cytoscape",
            MenuChoice::Demo => "Full EYS analysis (demo)",
            MenuChoice::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Prompt result with Esc and Ctrl+C mapped to `None`
fn answered<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn prompt_gene() -> Result<Option<String>> {
    Ok(answered(Text::new("Gene symbol:").prompt())?.and_then(|g| normalize_symbol(&g)))
}

fn prompt_literature() -> Result<Vec<String>> {
    let input = answered(
        Text::new("Literature interactors (comma-separated):")
            .with_placeholder("GRK7,AIPL1,DAG1")
            .prompt(),
    )?;
    Ok(input.map(|s| parse_symbol_list(&s)).unwrap_or_default())
}

/// Run the menu loop until the user exits
pub async fn run(aggregator: &Aggregator) -> Result<()> {
    loop {
        println!();
        let Some(choice) = answered(Select::new("Options:", MenuChoice::ALL.to_vec()).prompt())? else {
            break;
        };

        match choice {
            MenuChoice::Aggregate => {
                if let Some(gene) = prompt_gene()? {
                    run_aggregation(aggregator, &gene).await;
                }
            },
            MenuChoice::Compare => {
                let Some(gene) = prompt_gene()? else { continue };
                let literature = prompt_literature()?;
                if literature.is_empty() {
                    println!("{}", "No literature interactors given".yellow());
                    continue;
                }

                let record = run_aggregation(aggregator, &gene).await;
                let comparator = build_comparator(&gene, &literature, record);
                run_comparison(&comparator, &gene, ReportFormat::Text, None)?;
            },
            MenuChoice::ExportGraph => {
                let Some(gene) = prompt_gene()? else { continue };
                let literature = prompt_literature()?;
                let output = answered(
                    Text::new("Output file:")
                        .with_default(DEFAULT_GRAPH_FILE)
                        .prompt(),
                )?
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_FILE));

                let record = run_aggregation(aggregator, &gene).await;
                let comparator = build_comparator(&gene, &literature, record);
                run_graph_export(&comparator, &gene, &output)?;
            },
            MenuChoice::Demo => demo::run(aggregator).await?,
            MenuChoice::Exit => break,
        }
    }

    println!();
    println!("{}", "Goodbye!".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = MenuChoice::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[4], "Exit");
    }

    #[test]
    fn test_answered_maps_cancellation() {
        assert_eq!(answered::<u8>(Err(InquireError::OperationCanceled)).unwrap_or(Some(1)), None);
        assert_eq!(answered(Ok(3u8)).unwrap_or(None), Some(3));
        assert!(answered::<u8>(Err(InquireError::NotTTY)).is_err());
    }
}
