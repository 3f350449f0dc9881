// Error types for agent lookups

use thiserror::Error;

use crate::identifier::InvalidIdentifier;

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;

/// Errors that can occur while resolving an agent
#[derive(Debug, Error)]
pub enum LookupError {
    /// Identifier was empty or malformed
    #[error(transparent)]
    InvalidInput(#[from] InvalidIdentifier),

    /// Identifier was well formed but no agent matches it
    #[error("Agent not found")]
    NotFound,

    /// Backing store unreachable or query failed
    #[error("Data source error: {0:#}")]
    DataSource(anyhow::Error),

    /// Anything else, including a violated catalog invariant
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl LookupError {
    /// Create a data source error
    pub fn data_source(err: impl Into<anyhow::Error>) -> Self {
        LookupError::DataSource(err.into())
    }

    /// Create an unexpected error
    pub fn unexpected(msg: impl Into<String>) -> Self {
        LookupError::Unexpected(msg.into())
    }

    /// True for errors caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, LookupError::InvalidInput(_) | LookupError::NotFound)
    }
}
