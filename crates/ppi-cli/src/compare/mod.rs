//! Literature vs. database interactor comparison
//!
//! A [`Comparator`] holds, per gene, the curated literature interactors and
//! the aggregated database record. Every query ([`Comparator::compare`],
//! [`Comparator::analyze_gaps`], [`Comparator::report`],
//! [`Comparator::export_graph`]) is recomputed from those two inputs.
//!
//! Gene keys and interactor symbols are uppercased on load, so comparison is
//! case-insensitive.

pub mod gaps;
pub mod graph;
pub mod report;

pub use gaps::{ConfidenceAssessment, DatabaseGap, GapAnalysis, GapStatus, LiteratureGap};
pub use graph::{ExportPaths, GraphEdge, GraphExport, GraphNode, NodeKind, Provenance, Validation};
pub use report::{JsonReport, ReportFormat};

use crate::error::Result;
use ppi_common::types::normalize_symbol;
use ppi_common::GeneRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Minimum score for a database-only interactor to be a validation candidate
pub const VALIDATION_SCORE_THRESHOLD: f64 = 0.7;

/// Label of the curated side in reports
pub const LITERATURE_LABEL: &str = "Literature";

/// Label of the aggregated side in reports
pub const DATABASE_LABEL: &str = "Databases";

/// Free-form provenance of a literature set (e.g. `source`, `confidence`)
pub type Metadata = BTreeMap<String, String>;

#[derive(Debug, Clone, Default)]
struct LiteratureEntry {
    interactors: HashSet<String>,
    metadata: Metadata,
}

#[derive(Debug, Clone)]
struct DatabaseEntry {
    interactors: HashSet<String>,
    record: GeneRecord,
}

/// Partition of the two interactor sets of one gene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub gene: String,
    pub only_in_literature: HashSet<String>,
    #[serde(rename = "only_in_databases")]
    pub only_in_database: HashSet<String>,
    pub in_both: HashSet<String>,

    /// Jaccard index of the two sets, 0.0 when both are empty
    pub overlap_score: f64,
}

impl ComparisonResult {
    /// Partition `literature` and `database` and compute their Jaccard index
    pub fn from_sets(
        gene: impl Into<String>,
        literature: &HashSet<String>,
        database: &HashSet<String>,
    ) -> Self {
        let only_in_literature: HashSet<String> = literature.difference(database).cloned().collect();
        let only_in_database: HashSet<String> = database.difference(literature).cloned().collect();
        let in_both: HashSet<String> = literature.intersection(database).cloned().collect();

        let union = only_in_literature.len() + only_in_database.len() + in_both.len();
        let overlap_score = if union == 0 {
            0.0
        } else {
            in_both.len() as f64 / union as f64
        };

        Self {
            gene: gene.into(),
            only_in_literature,
            only_in_database,
            in_both,
            overlap_score,
        }
    }

    pub fn total_literature(&self) -> usize {
        self.only_in_literature.len() + self.in_both.len()
    }

    pub fn total_database(&self) -> usize {
        self.only_in_database.len() + self.in_both.len()
    }

    /// Sorted copy of a partition, for stable display
    pub fn sorted(set: &HashSet<String>) -> Vec<&str> {
        let mut items: Vec<&str> = set.iter().map(String::as_str).collect();
        items.sort_unstable();
        items
    }
}

/// Per-gene store of literature and database interactor sets
#[derive(Debug, Default)]
pub struct Comparator {
    literature: HashMap<String, LiteratureEntry>,
    database: HashMap<String, DatabaseEntry>,
}

fn gene_key(gene: &str) -> String {
    normalize_symbol(gene).unwrap_or_default()
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the curated interactors of `gene`, replacing any previous set
    pub fn load_literature<I, S>(&mut self, gene: &str, interactors: I, metadata: Metadata)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let interactors: HashSet<String> = interactors
            .into_iter()
            .filter_map(|s| normalize_symbol(s.as_ref()))
            .collect();

        debug!(gene, count = interactors.len(), "Loaded literature interactors");
        self.literature.insert(
            gene_key(gene),
            LiteratureEntry {
                interactors,
                metadata,
            },
        );
    }

    /// Record the aggregated data of `gene`, replacing any previous record
    pub fn load_database(&mut self, gene: &str, record: GeneRecord) {
        let interactors: HashSet<String> = record
            .interactions
            .iter()
            .filter_map(|i| normalize_symbol(&i.partner))
            .collect();

        debug!(gene, count = interactors.len(), "Loaded database interactors");
        self.database.insert(
            gene_key(gene),
            DatabaseEntry {
                interactors,
                record,
            },
        );
    }

    pub fn literature_metadata(&self, gene: &str) -> Option<&Metadata> {
        self.literature.get(&gene_key(gene)).map(|e| &e.metadata)
    }

    pub fn database_record(&self, gene: &str) -> Option<&GeneRecord> {
        self.database.get(&gene_key(gene)).map(|e| &e.record)
    }

    /// Partition the interactors of `gene`; unknown genes compare as empty
    pub fn compare(&self, gene: &str) -> ComparisonResult {
        let key = gene_key(gene);
        let empty = HashSet::new();

        let literature = self
            .literature
            .get(&key)
            .map(|e| &e.interactors)
            .unwrap_or(&empty);
        let database = self
            .database
            .get(&key)
            .map(|e| &e.interactors)
            .unwrap_or(&empty);

        ComparisonResult::from_sets(key, literature, database)
    }

    /// Gap analysis of `gene`
    pub fn analyze_gaps(&self, gene: &str) -> GapAnalysis {
        let comparison = self.compare(gene);
        GapAnalysis::build(&comparison, self.database_record(gene))
    }

    /// Render the comparison and gap analysis of `gene`
    pub fn report(&self, gene: &str, format: ReportFormat) -> Result<String> {
        let comparison = self.compare(gene);
        let gaps = GapAnalysis::build(&comparison, self.database_record(gene));
        let metadata = self.literature_metadata(gene);

        report::render(&comparison, &gaps, metadata, format)
    }

    /// Node/edge view of `gene` and its interactors
    pub fn export_graph(&self, gene: &str) -> GraphExport {
        let comparison = self.compare(gene);
        GraphExport::build(&comparison, self.database_record(gene))
    }
}
