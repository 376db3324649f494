//! Endpoint URL builders
//!
//! Helper functions to construct request URLs for each remote database.

/// Build a SPARQL GET URL with the query text URL-encoded
pub fn sparql_url(endpoint: &str, query: &str) -> String {
    format!(
        "{}?format=json&query={}",
        endpoint,
        urlencoding::encode(query)
    )
}

/// STRING `required_score` is an integer in per-mille
pub fn required_score(min_score: f64) -> u32 {
    (min_score.clamp(0.0, 1.0) * 1000.0).round() as u32
}

/// Build STRING network URL
pub fn string_network_url(
    base_url: &str,
    gene: &str,
    species: &str,
    limit: u32,
    min_score: f64,
) -> String {
    format!(
        "{}/json/network?identifiers={}&species={}&limit={}&required_score={}",
        base_url,
        urlencoding::encode(gene),
        urlencoding::encode(species),
        limit,
        required_score(min_score)
    )
}

/// Build STRING interaction-partners URL
pub fn string_partners_url(base_url: &str, gene: &str, species: &str, limit: u32) -> String {
    format!(
        "{}/json/interaction_partners?identifiers={}&species={}&limit={}",
        base_url,
        urlencoding::encode(gene),
        urlencoding::encode(species),
        limit
    )
}
