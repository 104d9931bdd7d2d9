//! Service-layer error taxonomy.
//!
//! Authorization is deliberately absent: venue access is checked by the
//! caller before this engine is invoked.

use crate::db::repository::RepositoryError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for recommendation generation and action execution.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Missing or malformed request input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A venue, zone or optimization id did not resolve.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Action discriminator outside the recognized set.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// The storage collaborator failed. Never retried automatically:
    /// config writes are not safe to replay blindly.
    #[error("Persistence error: {0}")]
    Persistence(#[source] RepositoryError),

    /// Unexpected internal failure (task join, runtime).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for EngineError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { ref message, .. } => {
                EngineError::NotFound(message.clone())
            }
            other => EngineError::Persistence(other),
        }
    }
}
