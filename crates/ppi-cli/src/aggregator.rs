//! Per-gene aggregation across UniProt, STRING and WikiPathways
//!
//! Categories are queried one after another. A failing endpoint only leaves
//! its category empty; the record's `sources` lists the databases that
//! actually contributed.

use crate::api::{QueryClient, StringEdge};
use chrono::Utc;
use ppi_common::types::normalize_symbol;
use ppi_common::{GeneRecord, Interaction, Source};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Progress hooks around each database query and each finished gene
pub trait AggregationObserver {
    fn querying(&self, gene: &str, source: Source);

    fn finished(&self, _gene: &str) {}
}

impl AggregationObserver for () {
    fn querying(&self, _gene: &str, _source: Source) {}
}

/// Aggregates annotation data for genes
pub struct Aggregator {
    client: QueryClient,
    min_score: f64,
}

impl Aggregator {
    /// Aggregator using the client's configured minimum interaction score
    pub fn new(client: QueryClient) -> Self {
        let min_score = client.config().min_score;
        Self { client, min_score }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Aggregate all categories for one gene
    pub async fn aggregate(&self, gene: &str) -> GeneRecord {
        self.aggregate_with(gene, &()).await
    }

    /// [`Aggregator::aggregate`] with progress callbacks
    #[instrument(skip(self, observer))]
    pub async fn aggregate_with(&self, gene: &str, observer: &dyn AggregationObserver) -> GeneRecord {
        let gene = normalize_symbol(gene).unwrap_or_default();
        info!(gene = %gene, "Aggregating gene data");

        let mut record = GeneRecord::new(gene.clone());

        observer.querying(&gene, Source::UniProt);
        if let Some(identity) = self.client.protein_identity(&gene).await {
            record.uniprot = Some(identity);
            record.add_source(Source::UniProt);
        }
        record.go_terms = self.client.go_terms(&gene).await;
        record.diseases = self.client.diseases(&gene).await;

        observer.querying(&gene, Source::String);
        let edges = self.client.interactions(&gene, self.min_score).await;
        record.interactions = partner_interactions(&gene, &edges);
        if !record.interactions.is_empty() {
            record.add_source(Source::String);
        }

        observer.querying(&gene, Source::WikiPathways);
        record.pathways = self.client.pathways(&gene).await;
        if !record.pathways.is_empty() {
            record.add_source(Source::WikiPathways);
        }

        record.retrieved_at = Some(Utc::now());
        observer.finished(&gene);

        info!(
            gene = %record.gene_symbol,
            sources = record.sources.len(),
            go_terms = record.go_terms.len(),
            diseases = record.diseases.len(),
            interactions = record.interactions.len(),
            pathways = record.pathways.len(),
            "Aggregation finished"
        );

        record
    }

    /// Aggregate several genes; duplicates (case-insensitive) are queried once
    pub async fn aggregate_many(&self, genes: &[String]) -> BTreeMap<String, GeneRecord> {
        self.aggregate_many_with(genes, &()).await
    }

    /// [`Aggregator::aggregate_many`] with progress callbacks
    pub async fn aggregate_many_with(
        &self,
        genes: &[String],
        observer: &dyn AggregationObserver,
    ) -> BTreeMap<String, GeneRecord> {
        let mut records = BTreeMap::new();

        for gene in distinct_genes(genes) {
            let record = self.aggregate_with(&gene, observer).await;
            records.insert(gene, record);
        }

        records
    }
}

/// Normalized, non-blank symbols of `genes` in first-seen order, without duplicates
pub fn distinct_genes(genes: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for gene in genes.iter().filter_map(|g| normalize_symbol(g)) {
        if !seen.contains(&gene) {
            seen.push(gene);
        }
    }
    seen
}

/// Interactions of `gene` from STRING edges.
///
/// The network method also returns edges among the partners themselves;
/// those do not involve `gene` and are skipped.
pub fn partner_interactions(gene: &str, edges: &[StringEdge]) -> Vec<Interaction> {
    let interactions: Vec<Interaction> = edges
        .iter()
        .filter_map(|edge| match edge.partner_of(gene) {
            Some(partner) if !partner.is_empty() => Some(Interaction {
                partner: partner.to_string(),
                score: edge.score,
                evidence: edge.evidence.clone(),
            }),
            _ => {
                debug!(a = %edge.protein_a, b = %edge.protein_b, "Skipping edge not involving query gene");
                None
            },
        })
        .collect();

    // STRING may resolve the symbol through an alias and name the protein differently
    if interactions.is_empty() && !edges.is_empty() {
        warn!(
            gene = %gene,
            edges = edges.len(),
            "STRING returned edges but none name the query gene; interactions dropped"
        );
    }

    interactions
}
