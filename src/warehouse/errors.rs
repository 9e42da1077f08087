//! # Warehouse Errors

use thiserror::Error;

use crate::query::QueryError;

/// Result type for warehouse operations
pub type WarehouseResult<T> = Result<T, WarehouseError>;

/// Warehouse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarehouseError {
    // Identity errors
    #[error("Record has no natural id (fingerprint {fingerprint})")]
    NoIdentifier { fingerprint: String },

    #[error("Natural id cannot be used as a file name: {0:?}")]
    InvalidIdentifier(String),

    // Query errors
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    // Backend errors
    #[error("Stored file not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WarehouseError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            WarehouseError::NoIdentifier { .. } => "CRAWL_NO_IDENTIFIER",
            WarehouseError::InvalidIdentifier(_) => "CRAWL_INVALID_IDENTIFIER",
            WarehouseError::InvalidQuery(e) => e.code(),
            WarehouseError::NotFound(_) => "CRAWL_NOT_FOUND",
            WarehouseError::IoError(_) => "CRAWL_IO_ERROR",
            WarehouseError::Config(_) => "CRAWL_CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            WarehouseError::NoIdentifier { fingerprint: "1".into() }.code(),
            "CRAWL_NO_IDENTIFIER"
        );
        assert_eq!(WarehouseError::IoError("x".into()).code(), "CRAWL_IO_ERROR");
    }

    #[test]
    fn test_query_error_passes_through() {
        let err: WarehouseError = QueryError::InvalidPattern {
            key: "k".into(),
            pattern: "[".into(),
            reason: "unclosed class".into(),
        }
        .into();
        assert_eq!(err.code(), "CRAWL_INVALID_QUERY_PATTERN");
        assert!(err.to_string().contains("unclosed class"));
    }
}
