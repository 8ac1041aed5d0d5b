//! Sort orders for the review list.

use serde::{Deserialize, Serialize};

/// Sort options for the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Most recent first (default).
    #[default]
    RecentDesc,
    /// Oldest first.
    RecentAsc,
    /// Highest rated first.
    RatingDesc,
    /// Lowest rated first.
    RatingAsc,
}

impl SortKey {
    /// Get the order-by value sent to the review service.
    pub fn as_order_by(&self) -> &'static str {
        match self {
            SortKey::RecentDesc => "ReviewDateTime:desc",
            SortKey::RecentAsc => "ReviewDateTime:asc",
            SortKey::RatingDesc => "Rating:desc",
            SortKey::RatingAsc => "Rating:asc",
        }
    }

    /// Parse an order-by value back into a sort key.
    pub fn from_order_by(value: &str) -> Option<Self> {
        match value {
            "ReviewDateTime:desc" => Some(SortKey::RecentDesc),
            "ReviewDateTime:asc" => Some(SortKey::RecentAsc),
            "Rating:desc" => Some(SortKey::RatingDesc),
            "Rating:asc" => Some(SortKey::RatingAsc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::RecentDesc => "Most Recent",
            SortKey::RecentAsc => "Oldest",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::RatingAsc => "Lowest Rated",
        }
    }

    /// All options, in dropdown display order.
    pub fn all() -> [SortKey; 4] {
        [
            SortKey::RecentDesc,
            SortKey::RecentAsc,
            SortKey::RatingDesc,
            SortKey::RatingAsc,
        ]
    }
}
