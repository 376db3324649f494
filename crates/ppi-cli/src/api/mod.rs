//! Remote query module
//!
//! HTTP client for the SPARQL endpoints (UniProt, WikiPathways) and the
//! STRING REST API.

pub mod client;
pub mod endpoints;
pub mod sparql;
pub mod types;

pub use client::{QueryClient, SPARQL_RESULTS_JSON};
pub use types::*;
