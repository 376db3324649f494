//! `ppi config` command implementation
//!
//! Shows the effective configuration after environment and flag overrides.

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Environment variables read by [`Config::from_env`] and the logging setup
pub const ENV_VARS: &[(&str, &str)] = &[
    ("PPI_UNIPROT_URL", "UniProt SPARQL endpoint"),
    ("PPI_WIKIPATHWAYS_URL", "WikiPathways SPARQL endpoint"),
    ("PPI_STRING_URL", "STRING REST API base"),
    ("PPI_ORGANISM", "NCBI taxonomy id"),
    ("PPI_MIN_SCORE", "Minimum STRING combined score"),
    ("PPI_RESULT_LIMIT", "STRING network result limit"),
    ("PPI_PARTNER_LIMIT", "STRING functional partner limit"),
    ("PPI_SPARQL_TIMEOUT_SECS", "SPARQL request timeout"),
    ("PPI_REST_TIMEOUT_SECS", "STRING request timeout"),
    ("PPI_LOG_LEVEL", "trace, debug, info, warn, error"),
    ("PPI_LOG_OUTPUT", "console, file, both"),
    ("PPI_LOG_FORMAT", "text, json"),
    ("PPI_LOG_DIR", "Directory for log files"),
];

/// Effective settings as `(key, value)` pairs
pub fn entries(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        ("uniprot_url", config.uniprot_url.clone()),
        ("wikipathways_url", config.wikipathways_url.clone()),
        ("string_url", config.string_url.clone()),
        ("organism", config.organism.clone()),
        ("min_score", config.min_score.to_string()),
        ("result_limit", config.result_limit.to_string()),
        ("partner_limit", config.partner_limit.to_string()),
        ("sparql_timeout", format!("{}s", config.sparql_timeout.as_secs())),
        ("rest_timeout", format!("{}s", config.rest_timeout.as_secs())),
        ("user_agent", config.user_agent.clone()),
    ]
}

/// Show all configuration
pub fn show(config: &Config) -> Result<()> {
    println!("{}", "PPI Analyzer Configuration:".cyan().bold());
    println!();
    for (key, value) in entries(config) {
        println!("{:<18} {}", format!("{}:", key), value);
    }
    println!();
    println!("{}", "Environment Variables:".cyan());
    for (var, description) in ENV_VARS {
        println!("  {:<25} - {}", var, description);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries() {
        let entries = entries(&Config::default());
        assert_eq!(entries.len(), 10);
        assert!(entries.contains(&("organism", "9606".to_string())));
        assert!(entries.contains(&("sparql_timeout", "60s".to_string())));
    }

    #[test]
    fn test_config_show() {
        assert!(show(&Config::default()).is_ok());
    }
}
