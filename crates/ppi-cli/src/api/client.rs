//! HTTP client for the remote databases
//!
//! Every public query method is infallible from the caller's point of view:
//! network errors, timeouts, HTTP error statuses and undecodable bodies are
//! logged and reported as "no data".

use crate::api::{endpoints, sparql, types::*};
use crate::config::Config;
use crate::error::Result;
use ppi_common::{GoTerm, Pathway, ProteinIdentity};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Accept header for SPARQL SELECT results
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Client for UniProt, WikiPathways and STRING
pub struct QueryClient {
    client: Client,
    config: Config,
}

impl QueryClient {
    /// Create a new query client
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: Option<&str>,
        timeout: Duration,
    ) -> Result<T> {
        let mut request = self.client.get(url).timeout(timeout);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send().await?.error_for_status()?;

        Ok(response.json().await?)
    }

    /// Run a SELECT query; `None` on any failure
    async fn select(&self, endpoint: &str, label: &str, query: &str) -> Option<SparqlResults> {
        let url = endpoints::sparql_url(endpoint, query);
        debug!(endpoint = %endpoint, query = label, "Executing SPARQL query");

        match self
            .get_json::<SparqlResponse>(&url, Some(SPARQL_RESULTS_JSON), self.config.sparql_timeout)
            .await
        {
            Ok(response) => {
                debug!(
                    query = label,
                    rows = response.results.bindings.len(),
                    "SPARQL query returned"
                );
                Some(response.results)
            },
            Err(e) => {
                warn!(endpoint = %endpoint, query = label, error = %e, "SPARQL query failed");
                None
            },
        }
    }

    /// Call a STRING method returning a JSON array; `None` on any failure
    async fn string_api(&self, method: &str, url: &str) -> Option<Vec<StringRow>> {
        debug!(method, "Calling STRING API");

        match self
            .get_json::<Vec<StringRow>>(url, None, self.config.rest_timeout)
            .await
        {
            Ok(rows) => {
                debug!(method, rows = rows.len(), "STRING API returned");
                Some(rows)
            },
            Err(e) => {
                warn!(method, error = %e, "STRING API call failed");
                None
            },
        }
    }

    /// UniProt accession and names for an exact gene name
    pub async fn protein_identity(&self, gene: &str) -> Option<ProteinIdentity> {
        let query = sparql::identity_query(gene, &self.config.organism);
        let results = self
            .select(&self.config.uniprot_url, "uniprot_identity", &query)
            .await?;
        sparql::parse_identity(&results)
    }

    /// GO terms from UniProt
    pub async fn go_terms(&self, gene: &str) -> Vec<GoTerm> {
        let query = sparql::go_terms_query(gene, &self.config.organism);
        self.select(&self.config.uniprot_url, "uniprot_go_terms", &query)
            .await
            .map(|results| sparql::parse_go_terms(&results))
            .unwrap_or_default()
    }

    /// Disease annotations from UniProt
    pub async fn diseases(&self, gene: &str) -> Vec<String> {
        let query = sparql::diseases_query(gene, &self.config.organism);
        self.select(&self.config.uniprot_url, "uniprot_diseases", &query)
            .await
            .map(|results| sparql::parse_diseases(&results))
            .unwrap_or_default()
    }

    /// STRING network edges at or above `min_score`
    pub async fn interactions(&self, gene: &str, min_score: f64) -> Vec<StringEdge> {
        let url = endpoints::string_network_url(
            &self.config.string_url,
            gene,
            &self.config.organism,
            self.config.result_limit,
            min_score,
        );

        self.string_api("network", &url)
            .await
            .map(|rows| rows.iter().map(StringEdge::from).collect())
            .unwrap_or_default()
    }

    /// STRING functional partners with per-channel scores
    pub async fn functional_partners(&self, gene: &str, limit: u32) -> Vec<FunctionalPartner> {
        let url =
            endpoints::string_partners_url(&self.config.string_url, gene, &self.config.organism, limit);

        self.string_api("interaction_partners", &url)
            .await
            .map(|rows| rows.iter().map(FunctionalPartner::from).collect())
            .unwrap_or_default()
    }

    /// WikiPathways pathways containing the gene
    pub async fn pathways(&self, gene: &str) -> Vec<Pathway> {
        let query = sparql::pathways_query(gene, &self.config.organism);
        self.select(&self.config.wikipathways_url, "wikipathways_pathways", &query)
            .await
            .map(|results| sparql::parse_pathways(&results))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn unreachable_client() -> QueryClient {
        let config = Config {
            sparql_timeout: Duration::from_millis(500),
            rest_timeout: Duration::from_millis(500),
            ..Config::with_base_url("http://127.0.0.1:9")
        };
        QueryClient::new(config).unwrap()
    }

    #[test]
    fn test_query_client_creation() {
        let client = QueryClient::new(Config::default()).unwrap();
        assert_eq!(client.config().organism, "9606");
    }

    #[tokio::test]
    async fn test_unreachable_endpoints_yield_no_data() {
        let client = unreachable_client();

        assert!(client.protein_identity("EYS").await.is_none());
        assert!(client.go_terms("EYS").await.is_empty());
        assert!(client.interactions("EYS", 0.7).await.is_empty());
        assert!(client.pathways("EYS").await.is_empty());
    }
}
