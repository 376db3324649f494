//! PPI CLI - Main entry point

use clap::Parser;
use ppi_cli::api::QueryClient;
use ppi_cli::{commands, Aggregator, Cli, Commands, Config};
use ppi_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet by default; --verbose shows debug logs. PPI_LOG_* take precedence.
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("ppi")
        .build();
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging; keep the guard alive until exit
    let _guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        },
    };

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> ppi_cli::Result<()> {
    let config = Config::from_env()?.apply_overrides(&cli.overrides())?;

    match cli.command {
        Some(Commands::Config) => commands::config::show(&config),

        Some(Commands::Partners { ref gene, limit }) => {
            let client = QueryClient::new(config)?;
            commands::partners::run(&client, gene, limit).await
        },

        Some(Commands::Batch {
            ref genes,
            ref output,
        }) => {
            let aggregator = Aggregator::new(QueryClient::new(config)?);
            commands::batch::run(&aggregator, genes, output.as_deref()).await
        },

        None => {
            let aggregator = Aggregator::new(QueryClient::new(config)?);
            let args = &cli.analyze;

            if args.demo {
                commands::demo::run(&aggregator).await
            } else if args.gene.is_some() {
                commands::analyze::run(&aggregator, args).await
            } else {
                commands::interactive::run(&aggregator).await
            }
        },
    }
}
