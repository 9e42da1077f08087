//! # Query Errors

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid query pattern for '{key}': {pattern} ({reason})")]
    InvalidPattern {
        key: String,
        pattern: String,
        reason: String,
    },
}

impl QueryError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidPattern { .. } => "CRAWL_INVALID_QUERY_PATTERN",
        }
    }
}
