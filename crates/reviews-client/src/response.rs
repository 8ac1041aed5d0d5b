//! Responses returned by the review service.

use reviews_core::{RatingHistogram, Review};
use serde::{Deserialize, Serialize};

/// One page of review content plus the totals that ride along with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// The requested range's rows, already sorted and filtered.
    pub reviews: Vec<Review>,
    /// Total reviews matching the approval filter.
    pub total: u32,
    /// Per-star totals across all reviews.
    pub histogram: RatingHistogram,
}
