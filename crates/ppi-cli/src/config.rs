//! Configuration management for PPI CLI
//!
//! Endpoint locations, organism, thresholds and timeouts. Values are layered:
//! built-in defaults, then `PPI_*` environment variables, then command-line
//! flags (see [`Config::apply_overrides`]).

use crate::error::{CliError, Result};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

/// UniProt SPARQL endpoint
pub const DEFAULT_UNIPROT_URL: &str = "https://sparql.uniprot.org/sparql";

/// WikiPathways SPARQL endpoint
pub const DEFAULT_WIKIPATHWAYS_URL: &str = "https://sparql.wikipathways.org/sparql";

/// STRING REST API base (the `/json/<method>` suffix is appended per call)
pub const DEFAULT_STRING_URL: &str = "https://string-db.org/api";

/// NCBI taxon of Homo sapiens
pub const DEFAULT_ORGANISM: &str = "9606";

/// Minimum STRING combined score for aggregated interactions
pub const DEFAULT_MIN_SCORE: f64 = 0.7;

/// STRING `limit` parameter for network queries
pub const DEFAULT_RESULT_LIMIT: u32 = 100;

/// STRING `limit` parameter for functional-partner queries
pub const DEFAULT_PARTNER_LIMIT: u32 = 20;

pub const DEFAULT_SPARQL_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub uniprot_url: String,
    pub wikipathways_url: String,
    pub string_url: String,

    /// NCBI taxonomy id used in UniProt filters and STRING `species`
    pub organism: String,

    pub min_score: f64,
    pub result_limit: u32,
    pub partner_limit: u32,

    /// Per-request timeout for both SPARQL endpoints
    pub sparql_timeout: Duration,

    /// Per-request timeout for STRING
    pub rest_timeout: Duration,

    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            wikipathways_url: DEFAULT_WIKIPATHWAYS_URL.to_string(),
            string_url: DEFAULT_STRING_URL.to_string(),
            organism: DEFAULT_ORGANISM.to_string(),
            min_score: DEFAULT_MIN_SCORE,
            result_limit: DEFAULT_RESULT_LIMIT,
            partner_limit: DEFAULT_PARTNER_LIMIT,
            sparql_timeout: Duration::from_secs(DEFAULT_SPARQL_TIMEOUT_SECS),
            rest_timeout: Duration::from_secs(DEFAULT_REST_TIMEOUT_SECS),
            user_agent: format!("PPI-Analyzer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Command-line values that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub uniprot_url: Option<String>,
    pub wikipathways_url: Option<String>,
    pub string_url: Option<String>,
    pub organism: Option<String>,
    pub min_score: Option<f64>,
}

impl Config {
    /// Load config from environment variables
    ///
    /// - `PPI_UNIPROT_URL`, `PPI_WIKIPATHWAYS_URL`, `PPI_STRING_URL`
    /// - `PPI_ORGANISM`
    /// - `PPI_MIN_SCORE`, `PPI_RESULT_LIMIT`, `PPI_PARTNER_LIMIT`
    /// - `PPI_SPARQL_TIMEOUT_SECS`, `PPI_REST_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PPI_UNIPROT_URL") {
            config.uniprot_url = url;
        }
        if let Ok(url) = std::env::var("PPI_WIKIPATHWAYS_URL") {
            config.wikipathways_url = url;
        }
        if let Ok(url) = std::env::var("PPI_STRING_URL") {
            config.string_url = url;
        }
        if let Ok(organism) = std::env::var("PPI_ORGANISM") {
            config.organism = organism;
        }
        if let Some(score) = parse_env("PPI_MIN_SCORE")? {
            config.min_score = score;
        }
        if let Some(limit) = parse_env("PPI_RESULT_LIMIT")? {
            config.result_limit = limit;
        }
        if let Some(limit) = parse_env("PPI_PARTNER_LIMIT")? {
            config.partner_limit = limit;
        }
        if let Some(secs) = parse_env("PPI_SPARQL_TIMEOUT_SECS")? {
            config.sparql_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env("PPI_REST_TIMEOUT_SECS")? {
            config.rest_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate
    pub fn apply_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(ref url) = overrides.uniprot_url {
            self.uniprot_url = url.clone();
        }
        if let Some(ref url) = overrides.wikipathways_url {
            self.wikipathways_url = url.clone();
        }
        if let Some(ref url) = overrides.string_url {
            self.string_url = url.clone();
        }
        if let Some(ref organism) = overrides.organism {
            self.organism = organism.clone();
        }
        if let Some(score) = overrides.min_score {
            self.min_score = score;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(CliError::config(format!(
                "min score must be between 0 and 1, got {}",
                self.min_score
            )));
        }

        for (name, url) in [
            ("UniProt", &self.uniprot_url),
            ("WikiPathways", &self.wikipathways_url),
            ("STRING", &self.string_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CliError::config(format!(
                    "{} endpoint must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.organism.trim().is_empty() {
            return Err(CliError::config("organism taxon id is empty"));
        }

        Ok(())
    }

    /// Config with every endpoint pointing at one base URL (used by tests)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            uniprot_url: format!("{}/uniprot/sparql", base_url),
            wikipathways_url: format!("{}/wikipathways/sparql", base_url),
            string_url: format!("{}/string/api", base_url),
            ..Self::default()
        }
    }
}

fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::config(format!("{} has an invalid value '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.uniprot_url, DEFAULT_UNIPROT_URL);
        assert_eq!(config.organism, "9606");
        assert_eq!(config.min_score, 0.7);
        assert_eq!(config.sparql_timeout, Duration::from_secs(60));
        assert_eq!(config.rest_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("PPI-Analyzer/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Overrides {
            string_url: Some("http://localhost:9999/api".to_string()),
            min_score: Some(0.4),
            ..Overrides::default()
        };

        let config = Config::default().apply_overrides(&overrides).unwrap();
        assert_eq!(config.string_url, "http://localhost:9999/api");
        assert_eq!(config.min_score, 0.4);
        assert_eq!(config.uniprot_url, DEFAULT_UNIPROT_URL);
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        let overrides = Overrides {
            min_score: Some(1.5),
            ..Overrides::default()
        };
        let err = Config::default().apply_overrides(&overrides).unwrap_err();
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = Config {
            wikipathways_url: "ftp://example.org/sparql".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_base_url() {
        let config = Config::with_base_url("http://127.0.0.1:4000");
        assert_eq!(config.uniprot_url, "http://127.0.0.1:4000/uniprot/sparql");
        assert_eq!(config.string_url, "http://127.0.0.1:4000/string/api");
        assert!(config.validate().is_ok());
    }
}
