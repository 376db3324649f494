//! PPI Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared record types, utilities, and error handling for the PPI analyzer.
//!
//! # Overview
//!
//! This crate provides functionality used across the PPI workspace members:
//!
//! - **Records**: The aggregated per-gene record and its annotation entries
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: `tracing` subscriber setup shared by every binary
//!
//! # Example
//!
//! ```no_run
//! use ppi_common::{GeneRecord, Result};
//!
//! fn show(path: &str) -> Result<()> {
//!     let record = GeneRecord::load_json(path)?;
//!     println!("{} has {} partners", record.gene_symbol, record.interactions.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{PpiError, Result};
pub use types::{GeneRecord, GoTerm, Interaction, Pathway, ProteinIdentity, Source};
