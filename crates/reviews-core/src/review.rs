//! Review data models.

use crate::ids::{ProductId, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An individual review, as projected by the review service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    /// Star rating, 1-5.
    pub rating: u8,
    pub title: String,
    pub body: String,
    /// Display name; `None` renders as anonymous.
    pub reviewer_name: Option<String>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub verified_purchaser: bool,
    #[serde(default)]
    pub location: Option<String>,
}
