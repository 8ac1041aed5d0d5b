//! Data-source error types.

use reviews_core::FetchFailure;
use thiserror::Error;

/// Errors a review data source can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Transport-level failure; retryable.
    #[error("Request failed: {0}")]
    Network(String),

    /// The request needs an authenticated session.
    #[error("Authentication required")]
    AuthRequired,

    /// Failed to parse the response payload.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The service refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl SourceError {
    /// Convert into the recoverable state field the banner renders from.
    pub fn into_failure(self) -> FetchFailure {
        match self {
            SourceError::Network(message) => FetchFailure::Network(message),
            SourceError::Decode(message) => FetchFailure::Network(message),
            SourceError::AuthRequired => FetchFailure::AuthRequired,
            SourceError::Rejected(message) => FetchFailure::Rejected(message),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Decode(e.to_string())
    }
}
