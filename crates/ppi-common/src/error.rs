//! Error types for PPI

use thiserror::Error;

/// Result type alias for PPI operations
pub type Result<T> = std::result::Result<T, PpiError>;

/// Main error type for PPI
#[derive(Error, Debug)]
pub enum PpiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid gene symbol: {0:?}. Provide an HGNC symbol such as 'EYS'.")]
    InvalidGene(String),
}
