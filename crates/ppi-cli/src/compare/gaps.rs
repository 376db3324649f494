//! Knowledge-gap analysis
//!
//! Turns a [`ComparisonResult`] into actionable lists: literature interactors
//! the databases miss, database interactors the literature misses (ranked by
//! score), and the high-confidence subset worth validating experimentally.

use super::{ComparisonResult, VALIDATION_SCORE_THRESHOLD};
use ppi_common::types::normalize_symbol;
use ppi_common::GeneRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DATABASE_GAP_SUGGESTION: &str =
    "Check whether the interaction is recent or not yet annotated";
pub const DATABASE_GAP_ACTION: &str = "Candidate for submission to STRING/IntAct";
pub const LITERATURE_GAP_SUGGESTION: &str = "Potential new interaction to investigate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapStatus {
    NotInDatabases,
    NotInLiterature,
}

/// Interactor reported in the literature but absent from the databases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseGap {
    pub gene: String,
    pub status: GapStatus,
    pub suggestion: String,
    pub action: String,
}

/// Interactor found in the databases but absent from the literature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteratureGap {
    pub gene: String,
    pub status: GapStatus,
    pub score: f64,
    pub evidence: String,
    pub suggestion: String,
}

/// Summary counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub total_literature: usize,
    pub total_databases: usize,
    pub overlap_count: usize,
    /// Overlap score as a percentage, one decimal
    pub overlap_percentage: f64,
    pub gaps_in_databases: usize,
    pub gaps_in_literature: usize,
    pub high_confidence_candidates: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Sorted by gene symbol
    pub missing_in_databases: Vec<DatabaseGap>,
    /// Sorted by score, highest first; ties keep record order
    pub missing_in_literature: Vec<LiteratureGap>,
    /// `missing_in_literature` entries with score >= 0.7, same order
    pub validation_candidates: Vec<LiteratureGap>,
    pub confidence: ConfidenceAssessment,
}

impl GapAnalysis {
    /// Derive the gap lists from a comparison and the record it came from
    pub fn build(comparison: &ComparisonResult, record: Option<&GeneRecord>) -> Self {
        let missing_in_databases: Vec<DatabaseGap> =
            ComparisonResult::sorted(&comparison.only_in_literature)
                .into_iter()
                .map(|gene| DatabaseGap {
                    gene: gene.to_string(),
                    status: GapStatus::NotInDatabases,
                    suggestion: DATABASE_GAP_SUGGESTION.to_string(),
                    action: DATABASE_GAP_ACTION.to_string(),
                })
                .collect();

        let mut missing_in_literature = literature_gaps(comparison, record);
        missing_in_literature.sort_by(|a, b| b.score.total_cmp(&a.score));

        let validation_candidates: Vec<LiteratureGap> = missing_in_literature
            .iter()
            .filter(|gap| gap.score >= VALIDATION_SCORE_THRESHOLD)
            .cloned()
            .collect();

        let confidence = ConfidenceAssessment {
            total_literature: comparison.total_literature(),
            total_databases: comparison.total_database(),
            overlap_count: comparison.in_both.len(),
            overlap_percentage: (comparison.overlap_score * 1000.0).round() / 10.0,
            gaps_in_databases: comparison.only_in_literature.len(),
            gaps_in_literature: comparison.only_in_database.len(),
            high_confidence_candidates: validation_candidates.len(),
        };

        Self {
            missing_in_databases,
            missing_in_literature,
            validation_candidates,
            confidence,
        }
    }
}

/// Database-only interactors in record order, each with its best score
fn literature_gaps(comparison: &ComparisonResult, record: Option<&GeneRecord>) -> Vec<LiteratureGap> {
    let mut gaps = Vec::with_capacity(comparison.only_in_database.len());
    let mut seen: HashSet<String> = HashSet::new();

    if let Some(record) = record {
        let best = record.interactions_by_partner();

        for interaction in &record.interactions {
            let Some(partner) = normalize_symbol(&interaction.partner) else {
                continue;
            };
            if !comparison.only_in_database.contains(&partner) || !seen.insert(partner.clone()) {
                continue;
            }

            let (score, evidence) = best
                .get(&partner)
                .map(|i| (i.score, i.evidence.clone()))
                .unwrap_or((interaction.score, interaction.evidence.clone()));

            gaps.push(LiteratureGap {
                gene: partner,
                status: GapStatus::NotInLiterature,
                score,
                evidence,
                suggestion: LITERATURE_GAP_SUGGESTION.to_string(),
            });
        }
    }

    // Anything the record cannot account for carries no score
    for gene in ComparisonResult::sorted(&comparison.only_in_database) {
        if !seen.contains(gene) {
            gaps.push(LiteratureGap {
                gene: gene.to_string(),
                status: GapStatus::NotInLiterature,
                score: 0.0,
                evidence: String::new(),
                suggestion: LITERATURE_GAP_SUGGESTION.to_string(),
            });
        }
    }

    gaps
}
