//! Node/edge export for network viewers (Cytoscape)
//!
//! The graph is a star: one `central` node for the queried gene and one
//! `interactor` node per distinct interactor, each linked to the center.
//! [`GraphExport::write_files`] writes the JSON document next to two CSV
//! tables that Cytoscape can import directly.

use super::ComparisonResult;
use crate::error::Result;
use ppi_common::GeneRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Central,
    Interactor,
}

/// Which side(s) of the comparison reported a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Both,
    LiteratureOnly,
    DatabaseOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    Confirmed,
    LiteratureOnly,
    DatabaseOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub source: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub score: f64,
    pub evidence: String,
    pub validation: Validation,
}

/// Evidence recorded on literature-only edges
pub const LITERATURE_EVIDENCE: &str = "literature";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Files written by [`GraphExport::write_files`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

impl ExportPaths {
    /// `dir/stem.json` → `dir/stem_nodes.csv`, `dir/stem_edges.csv`
    pub fn for_json(json: &Path) -> Self {
        let stem = json
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph".to_string());
        let dir = json.parent().unwrap_or_else(|| Path::new(""));

        Self {
            json: json.to_path_buf(),
            nodes: dir.join(format!("{}_nodes.csv", stem)),
            edges: dir.join(format!("{}_edges.csv", stem)),
        }
    }
}

impl GraphExport {
    /// Star graph of a comparison; partitions are emitted in sorted order
    pub fn build(comparison: &ComparisonResult, record: Option<&GeneRecord>) -> Self {
        let gene = comparison.gene.clone();
        let best = record.map(|r| r.interactions_by_partner()).unwrap_or_default();

        let mut graph = GraphExport::default();
        graph.nodes.push(GraphNode {
            id: gene.clone(),
            label: gene.clone(),
            kind: NodeKind::Central,
            source: Provenance::Both,
        });

        let database_edge = |partner: &str| {
            best.get(partner)
                .map(|i| (i.score, i.evidence.clone()))
                .unwrap_or((0.0, String::new()))
        };

        for partner in ComparisonResult::sorted(&comparison.in_both) {
            let (score, evidence) = database_edge(partner);
            graph.push(&gene, partner, Provenance::Both, score, evidence, Validation::Confirmed);
        }

        for partner in ComparisonResult::sorted(&comparison.only_in_literature) {
            graph.push(
                &gene,
                partner,
                Provenance::LiteratureOnly,
                0.0,
                LITERATURE_EVIDENCE.to_string(),
                Validation::LiteratureOnly,
            );
        }

        for partner in ComparisonResult::sorted(&comparison.only_in_database) {
            let (score, evidence) = database_edge(partner);
            graph.push(
                &gene,
                partner,
                Provenance::DatabaseOnly,
                score,
                evidence,
                Validation::DatabaseOnly,
            );
        }

        graph
    }

    fn push(
        &mut self,
        gene: &str,
        partner: &str,
        source: Provenance,
        score: f64,
        evidence: String,
        validation: Validation,
    ) {
        self.nodes.push(GraphNode {
            id: partner.to_string(),
            label: partner.to_string(),
            kind: NodeKind::Interactor,
            source,
        });
        self.edges.push(GraphEdge {
            source: gene.to_string(),
            target: partner.to_string(),
            score,
            evidence,
            validation,
        });
    }

    /// `id,label,type,source`
    pub fn write_nodes_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for node in &self.nodes {
            csv_writer.serialize(node)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// `source,target,score,evidence,validation`
    pub fn write_edges_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for edge in &self.edges {
            csv_writer.serialize(edge)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON document at `json_path` and the two CSV tables beside it
    pub fn write_files(&self, json_path: &Path) -> Result<ExportPaths> {
        let paths = ExportPaths::for_json(json_path);

        if let Some(dir) = json_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        self.write_nodes_csv(fs::File::create(&paths.nodes)?)?;
        self.write_edges_csv(fs::File::create(&paths.edges)?)?;
        fs::write(&paths.json, self.to_json()?)?;

        info!(
            json = %paths.json.display(),
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "Graph exported"
        );

        Ok(paths)
    }
}
