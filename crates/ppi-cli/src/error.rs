//! Error types for PPI CLI
//!
//! User-facing errors with messages that say what to do next. Failures of the
//! remote databases are not errors here: the query client logs them and
//! returns empty data.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Unknown report format selector
    #[error("Invalid report format: '{0}'. Valid formats: text, json, markdown.")]
    InvalidFormat(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your PPI_* environment variables or flags.")]
    Config(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Interactive prompt failed (e.g. no TTY)
    #[error("Prompt failed: {0}. Run without --interactive when stdin is not a terminal.")]
    Prompt(#[from] inquire::InquireError),

    /// Shared library error
    #[error(transparent)]
    Common(#[from] ppi_common::PpiError),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_actionable() {
        let err = CliError::InvalidFormat("xml".to_string());
        assert!(err.to_string().contains("text, json, markdown"));

        let err = CliError::config("min score out of range");
        assert!(err.to_string().contains("PPI_"));
    }

    #[test]
    fn test_common_error_is_transparent() {
        let err: CliError = ppi_common::PpiError::InvalidGene(" ".to_string()).into();
        assert!(err.to_string().starts_with("Invalid gene symbol"));
    }
}
