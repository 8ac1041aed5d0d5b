//! Widget error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Local rejection of a review submission, surfaced inline next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No star rating selected.
    #[error("A star rating is required")]
    RatingRequired,

    /// Rating outside the 1-5 range.
    #[error("Rating {0} is out of range (1-5)")]
    RatingOutOfRange(u8),

    /// Title missing or blank.
    #[error("A review title is required")]
    TitleRequired,

    /// Review text missing or blank.
    #[error("Review text is required")]
    BodyRequired,

    /// Anonymous submissions are disabled and no session is present.
    #[error("Sign in to submit a review")]
    SignInRequired,
}

/// A recoverable data-source failure, rendered as a non-fatal banner.
///
/// Carried inside `ViewState` so that a failed fetch leaves all previously
/// loaded state intact while still being visible to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailure {
    /// Transport-level failure; the request can be retried as-is.
    Network(String),
    /// The request needs an authenticated session; route to login.
    AuthRequired,
    /// The service refused the request (e.g., a submission).
    Rejected(String),
}

impl FetchFailure {
    /// Whether retrying the same request can succeed without user action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchFailure::Network(_))
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network(message) => write!(f, "Request failed: {}", message),
            FetchFailure::AuthRequired => write!(f, "Sign in to continue"),
            FetchFailure::Rejected(message) => write!(f, "Request rejected: {}", message),
        }
    }
}
