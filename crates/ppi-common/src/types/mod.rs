//! Common types used across PPI
//!
//! A [`GeneRecord`] is the unit produced by aggregation: one gene symbol with
//! everything the remote databases returned for it.

use crate::error::{PpiError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Upstream database that contributed data to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "UniProt")]
    UniProt,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "WikiPathways")]
    WikiPathways,
}

impl Source {
    /// Display name as used in reports and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::UniProt => "UniProt",
            Source::String => "STRING",
            Source::WikiPathways => "WikiPathways",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UniProt identity of the protein encoded by a gene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProteinIdentity {
    /// UniProt accession (e.g. `Q5T1H1`)
    #[serde(default)]
    pub id: String,

    /// Recommended full name
    #[serde(default)]
    pub name: String,

    /// Function annotation comment, when UniProt has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

/// Gene Ontology annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoTerm {
    /// CURIE form, e.g. `GO:0005515`
    pub id: String,
    pub label: String,
}

/// Interaction between the record's gene and one partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub partner: String,

    /// Combined confidence in `[0, 1]`
    #[serde(default)]
    pub score: f64,

    /// Comma-separated evidence channels, e.g. `"textmining, experimental"`
    #[serde(default)]
    pub evidence: String,
}

/// WikiPathways pathway membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    /// WikiPathways identifier, e.g. `WP2522`
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Everything aggregated for one gene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub gene_symbol: String,

    #[serde(default)]
    pub sources: Vec<Source>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniprot: Option<ProteinIdentity>,

    #[serde(default)]
    pub go_terms: Vec<GoTerm>,

    #[serde(default)]
    pub diseases: Vec<String>,

    #[serde(default)]
    pub interactions: Vec<Interaction>,

    #[serde(default)]
    pub pathways: Vec<Pathway>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<DateTime<Utc>>,
}

impl GeneRecord {
    /// Create an empty record for a gene symbol
    pub fn new(gene_symbol: impl Into<String>) -> Self {
        Self {
            gene_symbol: gene_symbol.into(),
            ..Self::default()
        }
    }

    /// Record that a source contributed data (idempotent)
    pub fn add_source(&mut self, source: Source) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    /// Whether any source contributed data
    pub fn has_data(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Best-scoring interaction per uppercased partner symbol.
    ///
    /// On equal scores the earlier entry wins.
    pub fn interactions_by_partner(&self) -> HashMap<String, &Interaction> {
        let mut by_partner: HashMap<String, &Interaction> = HashMap::new();
        for interaction in &self.interactions {
            let Some(key) = normalize_symbol(&interaction.partner) else {
                continue;
            };
            match by_partner.get(&key) {
                Some(existing) if existing.score >= interaction.score => {},
                _ => {
                    by_partner.insert(key, interaction);
                },
            }
        }
        by_partner
    }

    /// Write the record as pretty JSON
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a record previously written with [`GeneRecord::save_json`]
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Trim and uppercase a gene symbol; `None` when nothing is left
pub fn normalize_symbol(symbol: &str) -> Option<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Like [`normalize_symbol`] but an empty symbol is an error
pub fn require_symbol(symbol: &str) -> Result<String> {
    normalize_symbol(symbol).ok_or_else(|| PpiError::InvalidGene(symbol.to_string()))
}

/// Split a comma-separated symbol list, normalizing each entry
pub fn parse_symbol_list(input: &str) -> Vec<String> {
    input.split(',').filter_map(normalize_symbol).collect()
}
