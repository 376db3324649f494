//! Report rendering

use super::{ComparisonResult, GapAnalysis, Metadata, DATABASE_LABEL, LITERATURE_LABEL};
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const WIDTH: usize = 70;
const TOP_NEW_INTERACTIONS: usize = 10;
const TOP_CANDIDATES: usize = 5;

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Boxed plain-text report for the terminal
    #[default]
    Text,
    /// Machine-readable [`JsonReport`]
    Json,
    /// Markdown with a summary table
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

/// JSON report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub gene: String,
    pub comparison: ComparisonResult,
    pub gap_analysis: GapAnalysis,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub literature_metadata: Metadata,
}

/// Render a comparison and its gap analysis
pub fn render(
    comparison: &ComparisonResult,
    gaps: &GapAnalysis,
    metadata: Option<&Metadata>,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Json => {
            let report = JsonReport {
                gene: comparison.gene.clone(),
                comparison: comparison.clone(),
                gap_analysis: gaps.clone(),
                literature_metadata: metadata.cloned().unwrap_or_default(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        },
        ReportFormat::Markdown => Ok(render_markdown(comparison, gaps, metadata)),
        ReportFormat::Text => Ok(render_text(comparison, gaps)),
    }
}

/// One `#` per tenth of a 0-1 score
pub fn score_bar(score: f64) -> String {
    "#".repeat((score.clamp(0.0, 1.0) * 10.0) as usize)
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{:^width$}", title, width = WIDTH);
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));
}

fn render_text(comparison: &ComparisonResult, gaps: &GapAnalysis) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let c = &gaps.confidence;

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "INTERACTOR COMPARISON REPORT: {}", comparison.gene);
    let _ = writeln!(out, "{}", rule);

    section(&mut out, "SUMMARY");
    let _ = writeln!(out, "  {} interactors:      {}", LITERATURE_LABEL, c.total_literature);
    let _ = writeln!(out, "  {} interactors:      {}", DATABASE_LABEL, c.total_databases);
    let _ = writeln!(out, "  Overlap:                      {} ({}%)", c.overlap_count, c.overlap_percentage);
    let _ = writeln!(out, "  Gaps in databases:            {}", c.gaps_in_databases);
    let _ = writeln!(out, "  Gaps in literature:           {}", c.gaps_in_literature);

    section(&mut out, "CONFIRMED INTERACTORS (in both sources)");
    if comparison.in_both.is_empty() {
        let _ = writeln!(out, "  No overlap found");
    } else {
        for gene in ComparisonResult::sorted(&comparison.in_both) {
            let _ = writeln!(out, "  [OK] {}", gene);
        }
    }

    section(&mut out, "DATABASE GAPS (literature only)");
    if gaps.missing_in_databases.is_empty() {
        let _ = writeln!(out, "  Every literature interactor is in the databases");
    } else {
        for gap in &gaps.missing_in_databases {
            let _ = writeln!(out, "  [!] {}", gap.gene);
            let _ = writeln!(out, "      -> {}", gap.suggestion);
        }
    }

    section(&mut out, "NEW DATABASE INTERACTIONS (not in literature)");
    if gaps.missing_in_literature.is_empty() {
        let _ = writeln!(out, "  No new interactions found");
    } else {
        for gap in gaps.missing_in_literature.iter().take(TOP_NEW_INTERACTIONS) {
            let _ = writeln!(
                out,
                "  [+] {:<12} Score: {:.3} {}",
                gap.gene,
                gap.score,
                score_bar(gap.score)
            );
            if !gap.evidence.is_empty() {
                let _ = writeln!(out, "      Evidence: {}", gap.evidence);
            }
        }
    }

    section(&mut out, "CANDIDATES FOR EXPERIMENTAL VALIDATION");
    if gaps.validation_candidates.is_empty() {
        let _ = writeln!(out, "  No high-confidence candidates");
    } else {
        for gap in gaps.validation_candidates.iter().take(TOP_CANDIDATES) {
            let _ = writeln!(out, "  [*] {:<12} Score: {:.3}", gap.gene, gap.score);
            let _ = writeln!(out, "      -> High confidence, not documented in literature");
        }
    }

    let _ = write!(out, "\n{}", rule);
    out
}

fn render_markdown(
    comparison: &ComparisonResult,
    gaps: &GapAnalysis,
    metadata: Option<&Metadata>,
) -> String {
    let mut out = String::new();
    let c = &gaps.confidence;

    let _ = writeln!(out, "# Interactor Comparison Report: {}\n", comparison.gene);

    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(out, "| {} interactors | {} |", LITERATURE_LABEL, c.total_literature);
    let _ = writeln!(out, "| {} interactors | {} |", DATABASE_LABEL, c.total_databases);
    let _ = writeln!(out, "| Overlap | {} ({}%) |", c.overlap_count, c.overlap_percentage);
    let _ = writeln!(out, "| Gaps in databases | {} |", c.gaps_in_databases);
    let _ = writeln!(out, "| Gaps in literature | {} |", c.gaps_in_literature);
    let _ = writeln!(out);

    if let Some(metadata) = metadata.filter(|m| !m.is_empty()) {
        let _ = writeln!(out, "## Literature Source\n");
        for (key, value) in metadata {
            let _ = writeln!(out, "- **{}**: {}", key, value);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Confirmed Interactors\n");
    if comparison.in_both.is_empty() {
        let _ = writeln!(out, "*No overlap*");
    } else {
        for gene in ComparisonResult::sorted(&comparison.in_both) {
            let _ = writeln!(out, "- **{}**", gene);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Database Gaps\n");
    let _ = writeln!(out, "*Interactors reported in the literature but missing from the databases*\n");
    if gaps.missing_in_databases.is_empty() {
        let _ = writeln!(out, "*None*");
    } else {
        for gap in &gaps.missing_in_databases {
            let _ = writeln!(out, "- **{}** - {}", gap.gene, gap.suggestion);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## New Database Interactions\n");
    if gaps.missing_in_literature.is_empty() {
        let _ = writeln!(out, "*None*");
    } else {
        let _ = writeln!(out, "| Gene | Score | Evidence |");
        let _ = writeln!(out, "|------|-------|----------|");
        for gap in gaps.missing_in_literature.iter().take(TOP_NEW_INTERACTIONS) {
            let evidence = if gap.evidence.is_empty() { "-" } else { &gap.evidence };
            let _ = writeln!(out, "| {} | {:.3} | {} |", gap.gene, gap.score, evidence);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Validation Candidates\n");
    if gaps.validation_candidates.is_empty() {
        let _ = write!(out, "*No high-confidence candidates*");
    } else {
        let lines: Vec<String> = gaps
            .validation_candidates
            .iter()
            .take(TOP_CANDIDATES)
            .map(|gap| format!("- **{}** (score: {:.3})", gap.gene, gap.score))
            .collect();
        let _ = write!(out, "{}", lines.join("\n"));
    }

    out
}
