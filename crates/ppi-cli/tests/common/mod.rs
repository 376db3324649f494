//! Mock UniProt, STRING and WikiPathways endpoints shared by the integration tests
//!
//! All three databases live on one `MockServer` under the prefixes used by
//! `Config::with_base_url`: `/uniprot/sparql`, `/string/api` and
//! `/wikipathways/sparql`.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const UNIPROT_PATH: &str = "/uniprot/sparql";
pub const WIKIPATHWAYS_PATH: &str = "/wikipathways/sparql";
pub const STRING_NETWORK_PATH: &str = "/string/api/json/network";
pub const STRING_PARTNERS_PATH: &str = "/string/api/json/interaction_partners";

/// Matcher on the text of the SPARQL `query` parameter
pub fn sparql_query_contains(fragment: &'static str) -> impl Fn(&Request) -> bool + Send + Sync {
    move |request: &Request| {
        request
            .url
            .query_pairs()
            .any(|(key, value)| key == "query" && value.contains(fragment))
    }
}

pub fn bindings(rows: Vec<Value>) -> Value {
    json!({ "head": { "vars": [] }, "results": { "bindings": rows } })
}

fn literal(value: &str) -> Value {
    json!({ "type": "literal", "value": value })
}

pub fn identity_response() -> Value {
    bindings(vec![json!({
        "protein": { "type": "uri", "value": "http://purl.uniprot.org/uniprot/Q5T1H1" },
        "geneName": literal("EYS"),
        "proteinName": literal("Protein eyes shut homolog"),
        "function": literal("Required to maintain the integrity of photoreceptor cells"),
    })])
}

pub fn go_terms_response() -> Value {
    bindings(vec![
        json!({
            "goTerm": { "type": "uri", "value": "http://purl.obolibrary.org/obo/GO_0005515" },
            "goLabel": literal("protein binding"),
        }),
        json!({
            "goTerm": { "type": "uri", "value": "http://purl.obolibrary.org/obo/GO_0042462" },
            "goLabel": literal("eye photoreceptor cell development"),
        }),
    ])
}

pub fn diseases_response() -> Value {
    bindings(vec![json!({
        "diseaseText": literal("Retinitis pigmentosa 25 (RP25): a retinal dystrophy"),
    })])
}

pub fn pathways_response() -> Value {
    bindings(vec![json!({
        "pathway": { "type": "uri", "value": "https://identifiers.org/wikipathways/WP4657_r1" },
        "title": literal("Retinal dystrophies"),
        "identifier": literal("WP4657"),
    })])
}

fn string_row(a: &str, b: &str, score: f64, escore: f64, dscore: f64, tscore: f64) -> Value {
    json!({
        "stringId_A": format!("9606.ENSP_{}", a),
        "stringId_B": format!("9606.ENSP_{}", b),
        "preferredName_A": a,
        "preferredName_B": b,
        "ncbiTaxonId": 9606,
        "score": score,
        "nscore": 0,
        "fscore": 0,
        "pscore": 0,
        "ascore": 0,
        "escore": escore,
        "dscore": dscore,
        "tscore": tscore,
    })
}

/// EYS network: three EYS edges and one edge between two partners
pub fn network_response() -> Value {
    json!([
        string_row("EYS", "AIPL1", 0.91, 0.5, 0.0, 0.8),
        string_row("EYS", "CERKL", 0.857, 0.0, 0.0, 0.857),
        string_row("DAG1", "EYS", 0.75, 0.0, 0.6, 0.0),
        string_row("CERKL", "AIPL1", 0.8, 0.0, 0.0, 0.8),
    ])
}

pub fn partners_response() -> Value {
    json!([
        string_row("EYS", "CERKL", 0.857, 0.0, 0.0, 0.857),
        string_row("EYS", "PRPH2", 0.788, 0.0, 0.0, 0.788),
    ])
}

/// Mount UniProt responses for the three query kinds
pub async fn mount_uniprot(server: &MockServer) {
    for (fragment, body) in [
        ("up:recommendedName", identity_response()),
        ("up:classifiedWith", go_terms_response()),
        ("up:Disease_Annotation", diseases_response()),
    ] {
        Mock::given(method("GET"))
            .and(path(UNIPROT_PATH))
            .and(sparql_query_contains(fragment))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

pub async fn mount_string(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(STRING_NETWORK_PATH))
        .and(query_param("identifiers", "EYS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_response()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(STRING_PARTNERS_PATH))
        .and(query_param("identifiers", "EYS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(partners_response()))
        .mount(server)
        .await;
}

pub async fn mount_wikipathways(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(WIKIPATHWAYS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(pathways_response()))
        .mount(server)
        .await;
}

/// WikiPathways answering only after `delay`
pub async fn mount_slow_wikipathways(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(WIKIPATHWAYS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pathways_response())
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Server answering every database with the EYS fixtures
pub async fn eys_server() -> MockServer {
    let server = MockServer::start().await;
    mount_uniprot(&server).await;
    mount_string(&server).await;
    mount_wikipathways(&server).await;
    server
}
