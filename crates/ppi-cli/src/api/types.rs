//! Response types for the remote databases
//!
//! Every field defaults when absent: the endpoints are outside our control and
//! a partially populated row is still useful.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// SPARQL 1.1 JSON results document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub results: SparqlResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// One solution row: variable name to bound term
pub type Binding = HashMap<String, BindingValue>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BindingValue {
    #[serde(default)]
    pub value: String,
}

/// Value bound to `var`, or `""` when unbound
pub fn binding_value<'a>(binding: &'a Binding, var: &str) -> &'a str {
    binding.get(var).map(|v| v.value.as_str()).unwrap_or("")
}

/// Row of the STRING `network` and `interaction_partners` methods
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StringRow {
    #[serde(rename = "stringId_A", default)]
    pub string_id_a: Option<String>,
    #[serde(rename = "stringId_B", default)]
    pub string_id_b: Option<String>,
    #[serde(rename = "preferredName_A", default)]
    pub preferred_name_a: Option<String>,
    #[serde(rename = "preferredName_B", default)]
    pub preferred_name_b: Option<String>,

    /// Combined score
    #[serde(default, deserialize_with = "null_as_zero")]
    pub score: f64,
    /// Experimental channel
    #[serde(default, deserialize_with = "null_as_zero")]
    pub escore: f64,
    /// Curated-database channel
    #[serde(default, deserialize_with = "null_as_zero")]
    pub dscore: f64,
    /// Text-mining channel
    #[serde(default, deserialize_with = "null_as_zero")]
    pub tscore: f64,
    /// Co-expression channel
    #[serde(default, deserialize_with = "null_as_zero")]
    pub ascore: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl StringRow {
    pub fn name_a(&self) -> &str {
        self.preferred_name_a
            .as_deref()
            .or(self.string_id_a.as_deref())
            .unwrap_or("")
    }

    pub fn name_b(&self) -> &str {
        self.preferred_name_b
            .as_deref()
            .or(self.string_id_b.as_deref())
            .unwrap_or("")
    }

    /// Evidence channels with a positive score, or `"combined"`
    pub fn evidence(&self) -> String {
        let channels: Vec<&str> = [
            (self.escore, "experimental"),
            (self.dscore, "database"),
            (self.tscore, "textmining"),
            (self.ascore, "coexpression"),
        ]
        .into_iter()
        .filter(|(score, _)| *score > 0.0)
        .map(|(_, name)| name)
        .collect();

        if channels.is_empty() {
            "combined".to_string()
        } else {
            channels.join(", ")
        }
    }
}

/// Undirected STRING edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringEdge {
    pub protein_a: String,
    pub protein_b: String,
    pub score: f64,
    pub evidence: String,
}

impl From<&StringRow> for StringEdge {
    fn from(row: &StringRow) -> Self {
        Self {
            protein_a: row.name_a().to_string(),
            protein_b: row.name_b().to_string(),
            score: row.score,
            evidence: row.evidence(),
        }
    }
}

impl StringEdge {
    /// The endpoint that is not `gene`, if the edge touches `gene` at all
    pub fn partner_of(&self, gene: &str) -> Option<&str> {
        if self.protein_a.eq_ignore_ascii_case(gene) {
            Some(&self.protein_b)
        } else if self.protein_b.eq_ignore_ascii_case(gene) {
            Some(&self.protein_a)
        } else {
            None
        }
    }
}

/// Functional partner with per-channel scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionalPartner {
    pub gene: String,
    pub string_id: String,
    pub score: f64,
    pub escore: f64,
    pub dscore: f64,
    pub tscore: f64,
}

impl From<&StringRow> for FunctionalPartner {
    fn from(row: &StringRow) -> Self {
        Self {
            gene: row.preferred_name_b.clone().unwrap_or_default(),
            string_id: row.string_id_b.clone().unwrap_or_default(),
            score: row.score,
            escore: row.escore,
            dscore: row.dscore,
            tscore: row.tscore,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sparql_response_defaults() {
        let response: SparqlResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.bindings.is_empty());

        let response: SparqlResponse = serde_json::from_str(
            r#"{"head":{"vars":["x","y"]},"results":{"bindings":[{"x":{"type":"literal","value":"EYS"},"y":{}}]}}"#,
        )
        .unwrap();
        let binding = &response.results.bindings[0];
        assert_eq!(binding_value(binding, "x"), "EYS");
        assert_eq!(binding_value(binding, "y"), "");
        assert_eq!(binding_value(binding, "z"), "");
    }

    #[test]
    fn test_string_row_name_fallback() {
        let row: StringRow = serde_json::from_str(
            r#"{"stringId_A":"9606.ENSP00000381496","preferredName_B":"CERKL","score":0.857}"#,
        )
        .unwrap();
        assert_eq!(row.name_a(), "9606.ENSP00000381496");
        assert_eq!(row.name_b(), "CERKL");
        assert_eq!(row.score, 0.857);

        let row: StringRow = serde_json::from_str(r#"{"score":null}"#).unwrap();
        assert_eq!(row.score, 0.0);
    }

    #[test]
    fn test_string_row_evidence() {
        let row = StringRow {
            escore: 0.3,
            tscore: 0.8,
            ..StringRow::default()
        };
        assert_eq!(row.evidence(), "experimental, textmining");
        assert_eq!(StringRow::default().evidence(), "combined");
    }

    #[test]
    fn test_partner_of() {
        let edge = StringEdge {
            protein_a: "CERKL".to_string(),
            protein_b: "EYS".to_string(),
            score: 0.857,
            evidence: "textmining".to_string(),
        };
        assert_eq!(edge.partner_of("eys"), Some("CERKL"));
        assert_eq!(edge.partner_of("CERKL"), Some("EYS"));
        assert_eq!(edge.partner_of("RHO"), None);
    }
}
