//! PPI CLI Library
//!
//! Command-line protein-protein interaction analyzer.
//!
//! # Overview
//!
//! For a gene symbol the CLI aggregates what public databases know about the
//! encoded protein, then optionally compares the database interactors with a
//! curated literature list:
//!
//! - **Aggregation**: UniProt identity, GO terms and diseases, STRING
//!   interactions and WikiPathways pathways (`ppi --gene EYS`)
//! - **Comparison**: overlap, knowledge gaps and validation candidates
//!   (`ppi --gene EYS --literature GRK7,AIPL1,DAG1`)
//! - **Graph export**: Cytoscape-ready JSON and CSV tables (`--graph`)
//! - **Functional partners**: STRING channel scores (`ppi partners EYS`)
//! - **Batch aggregation**: several genes into one JSON map (`ppi batch`)
//! - **Interactive menu** and the EYS **demo** (`--interactive`, `--demo`)

pub mod aggregator;
pub mod api;
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use compare::{Comparator, ComparisonResult, GapAnalysis, GraphExport, ReportFormat};
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// PPI Analyzer - SPARQL aggregator and literature comparator
#[derive(Parser, Debug)]
#[command(name = "ppi")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  ppi --gene EYS
  ppi --gene EYS --literature GRK7,AIPL1,DAG1
  ppi --gene EYS --literature GRK7,AIPL1 --output report.md --format markdown
  ppi --gene EYS --graph eys.json
  ppi partners EYS --limit 10
  ppi --interactive
  ppi --demo")]
pub struct Cli {
    /// Subcommand to execute (default: analyze a gene)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// UniProt SPARQL endpoint
    #[arg(long, env = "PPI_UNIPROT_URL", global = true)]
    pub uniprot_url: Option<String>,

    /// WikiPathways SPARQL endpoint
    #[arg(long, env = "PPI_WIKIPATHWAYS_URL", global = true)]
    pub wikipathways_url: Option<String>,

    /// STRING REST API base URL
    #[arg(long, env = "PPI_STRING_URL", global = true)]
    pub string_url: Option<String>,

    /// NCBI taxonomy id (default: 9606, human)
    #[arg(long, env = "PPI_ORGANISM", global = true)]
    pub organism: Option<String>,

    /// Minimum STRING combined score, 0-1 (default: 0.7)
    #[arg(long, env = "PPI_MIN_SCORE", global = true)]
    pub min_score: Option<f64>,
}

impl Cli {
    /// Endpoint and threshold flags as config overrides
    pub fn overrides(&self) -> config::Overrides {
        config::Overrides {
            uniprot_url: self.uniprot_url.clone(),
            wikipathways_url: self.wikipathways_url.clone(),
            string_url: self.string_url.clone(),
            organism: self.organism.clone(),
            min_score: self.min_score,
        }
    }
}

/// Flags of the default (no subcommand) mode
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Gene symbol to analyze (e.g. EYS)
    #[arg(short, long, conflicts_with_all = ["interactive", "demo"])]
    pub gene: Option<String>,

    /// Literature interactors, comma-separated (e.g. GRK7,AIPL1,DAG1)
    #[arg(short, long, requires = "gene")]
    pub literature: Option<String>,

    /// Output file: the report when --literature is given, otherwise the aggregated data
    ///
    /// With --literature the file holds the comparison report in --format, so
    /// `--format json` writes the JSON report, not the aggregated record.
    /// Add --save-data to keep the aggregated record as well.
    #[arg(short, long, requires = "gene")]
    pub output: Option<PathBuf>,

    /// Report format (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Export the interaction graph (JSON plus _nodes.csv and _edges.csv)
    #[arg(short = 'c', long, visible_alias = "cytoscape", requires = "gene")]
    pub graph: Option<PathBuf>,

    /// Also write the aggregated data as JSON
    #[arg(long, requires = "gene")]
    pub save_data: Option<PathBuf>,

    /// Interactive menu
    #[arg(short, long, conflicts_with = "demo")]
    pub interactive: bool,

    /// Run the EYS demo analysis
    #[arg(short, long)]
    pub demo: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List STRING functional partners with per-channel scores
    Partners {
        /// Gene symbol
        gene: String,

        /// Maximum number of partners (default: 20)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Aggregate several genes into one JSON document
    Batch {
        /// Gene symbols
        #[arg(required = true)]
        genes: Vec<String>,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_flags() {
        let cli = Cli::try_parse_from([
            "ppi",
            "--gene",
            "EYS",
            "-l",
            "GRK7,AIPL1",
            "--format",
            "markdown",
            "--cytoscape",
            "eys.json",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.analyze.gene.as_deref(), Some("EYS"));
        assert_eq!(cli.analyze.literature.as_deref(), Some("GRK7,AIPL1"));
        assert_eq!(cli.analyze.format, "markdown");
        assert_eq!(cli.analyze.graph, Some(PathBuf::from("eys.json")));
    }

    #[test]
    fn test_output_help_points_to_save_data() {
        let command = Cli::command();
        let output = command
            .get_arguments()
            .find(|arg| arg.get_id() == "output")
            .unwrap();

        let help = output.get_long_help().unwrap().to_string();
        assert!(help.contains("JSON report, not the aggregated record"));
        assert!(help.contains("--save-data"));
    }

    #[test]
    fn test_literature_requires_gene() {
        assert!(Cli::try_parse_from(["ppi", "--literature", "GRK7"]).is_err());
    }

    #[test]
    fn test_modes_conflict() {
        assert!(Cli::try_parse_from(["ppi", "--gene", "EYS", "--demo"]).is_err());
        assert!(Cli::try_parse_from(["ppi", "--interactive", "--demo"]).is_err());
    }

    #[test]
    fn test_parse_partners() {
        let cli =
            Cli::try_parse_from(["ppi", "partners", "EYS", "--limit", "5", "--organism", "10090"])
                .unwrap();

        match &cli.command {
            Some(Commands::Partners { gene, limit }) => {
                assert_eq!(gene, "EYS");
                assert_eq!(*limit, Some(5));
            },
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.overrides().organism.as_deref(), Some("10090"));
    }

    #[test]
    fn test_parse_batch_requires_genes() {
        assert!(Cli::try_parse_from(["ppi", "batch"]).is_err());
        let cli = Cli::try_parse_from(["ppi", "batch", "EYS", "RHO"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Batch { ref genes, .. }) if genes.len() == 2));
    }
}
