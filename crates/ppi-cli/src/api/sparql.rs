//! SPARQL query templates and result extraction
//!
//! Templates interpolate the gene symbol as a string literal; [`escape_literal`]
//! keeps a symbol from breaking out of the quotes.

use crate::api::types::{binding_value, SparqlResults};
use ppi_common::{GoTerm, Pathway, ProteinIdentity};

const UNIPROT_PREFIXES: &str = r#"PREFIX up: <http://purl.uniprot.org/core/>
PREFIX taxon: <http://purl.uniprot.org/taxonomy/>
PREFIX skos: <http://www.w3.org/2004/02/skos/core#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>"#;

const WIKIPATHWAYS_PREFIXES: &str = r#"PREFIX wp: <http://vocabularies.wikipathways.org/wp#>
PREFIX dc: <http://purl.org/dc/elements/1.1/>
PREFIX dcterms: <http://purl.org/dc/terms/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>"#;

/// Maximum GO terms requested per gene
pub const GO_TERM_LIMIT: u32 = 50;

/// Escape a value for use inside a double-quoted SPARQL literal
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// WikiPathways `wp:organismName` for an NCBI taxon, when known
pub fn organism_name(taxon: &str) -> Option<&'static str> {
    match taxon {
        "9606" => Some("Homo sapiens"),
        "10090" => Some("Mus musculus"),
        "10116" => Some("Rattus norvegicus"),
        "7955" => Some("Danio rerio"),
        "7227" => Some("Drosophila melanogaster"),
        "559292" | "4932" => Some("Saccharomyces cerevisiae"),
        _ => None,
    }
}

/// Protein accession, recommended name and function for an exact gene name
pub fn identity_query(gene: &str, organism: &str) -> String {
    format!(
        r#"{prefixes}

SELECT ?protein ?geneName ?proteinName ?function
WHERE {{
  ?protein a up:Protein ;
           up:organism taxon:{organism} ;
           up:encodedBy ?gene ;
           up:recommendedName ?recName .
  ?gene skos:prefLabel ?geneName .
  ?recName up:fullName ?proteinName .
  OPTIONAL {{
    ?protein up:annotation ?ann .
    ?ann a up:Function_Annotation ;
         rdfs:comment ?function .
  }}
  FILTER (?geneName = "{gene}")
}}
LIMIT 1"#,
        prefixes = UNIPROT_PREFIXES,
        organism = organism,
        gene = escape_literal(gene),
    )
}

/// GO classifications of the proteins encoded by a gene
pub fn go_terms_query(gene: &str, organism: &str) -> String {
    format!(
        r#"{prefixes}

SELECT ?goTerm ?goLabel
WHERE {{
  ?protein a up:Protein ;
           up:organism taxon:{organism} ;
           up:encodedBy ?gene ;
           up:classifiedWith ?goTerm .
  ?gene skos:prefLabel ?geneName .
  ?goTerm rdfs:label ?goLabel .
  FILTER (?geneName = "{gene}")
  FILTER (STRSTARTS(STR(?goTerm), "http://purl.obolibrary.org/obo/GO_"))
}}
LIMIT {limit}"#,
        prefixes = UNIPROT_PREFIXES,
        organism = organism,
        gene = escape_literal(gene),
        limit = GO_TERM_LIMIT,
    )
}

/// Disease annotation comments for a gene
pub fn diseases_query(gene: &str, organism: &str) -> String {
    format!(
        r#"{prefixes}

SELECT DISTINCT ?diseaseText
WHERE {{
  ?protein a up:Protein ;
           up:organism taxon:{organism} ;
           up:encodedBy ?gene ;
           up:annotation ?annotation .
  ?gene skos:prefLabel ?geneName .
  ?annotation a up:Disease_Annotation ;
              rdfs:comment ?diseaseText .
  FILTER (?geneName = "{gene}")
}}"#,
        prefixes = UNIPROT_PREFIXES,
        organism = organism,
        gene = escape_literal(gene),
    )
}

/// Pathways containing a gene product whose label matches case-insensitively
pub fn pathways_query(gene: &str, organism: &str) -> String {
    let organism_filter = organism_name(organism)
        .map(|name| format!(" ;\n           wp:organismName \"{}\"", name))
        .unwrap_or_default();

    format!(
        r#"{prefixes}

SELECT DISTINCT ?pathway ?title ?identifier
WHERE {{
  ?gp a wp:GeneProduct ;
      rdfs:label ?label ;
      dcterms:isPartOf ?pathway .
  ?pathway a wp:Pathway ;
           dc:title ?title ;
           dcterms:identifier ?identifier{organism_filter} .
  FILTER (UCASE(?label) = UCASE("{gene}"))
}}"#,
        prefixes = WIKIPATHWAYS_PREFIXES,
        organism_filter = organism_filter,
        gene = escape_literal(gene),
    )
}

/// Last segment of an IRI path
fn iri_local_name(iri: &str) -> &str {
    iri.rsplit('/').next().unwrap_or(iri)
}

/// First solution of [`identity_query`]
pub fn parse_identity(results: &SparqlResults) -> Option<ProteinIdentity> {
    let binding = results.bindings.first()?;
    let function = binding_value(binding, "function");

    Some(ProteinIdentity {
        id: iri_local_name(binding_value(binding, "protein")).to_string(),
        name: binding_value(binding, "proteinName").to_string(),
        function: (!function.is_empty()).then(|| function.to_string()),
    })
}

/// Solutions of [`go_terms_query`]; `.../GO_0005515` becomes `GO:0005515`
pub fn parse_go_terms(results: &SparqlResults) -> Vec<GoTerm> {
    results
        .bindings
        .iter()
        .map(|binding| GoTerm {
            id: iri_local_name(binding_value(binding, "goTerm")).replace('_', ":"),
            label: binding_value(binding, "goLabel").to_string(),
        })
        .collect()
}

/// Solutions of [`diseases_query`], empty comments dropped
pub fn parse_diseases(results: &SparqlResults) -> Vec<String> {
    results
        .bindings
        .iter()
        .map(|binding| binding_value(binding, "diseaseText"))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

/// Solutions of [`pathways_query`]
pub fn parse_pathways(results: &SparqlResults) -> Vec<Pathway> {
    results
        .bindings
        .iter()
        .map(|binding| Pathway {
            id: binding_value(binding, "identifier").to_string(),
            title: binding_value(binding, "title").to_string(),
            url: binding_value(binding, "pathway").to_string(),
        })
        .collect()
}
