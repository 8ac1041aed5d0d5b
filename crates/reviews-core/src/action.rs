//! The controller's action set.

use crate::error::FetchFailure;
use crate::histogram::RatingHistogram;
use crate::review::Review;
use crate::settings::SiteSettings;
use crate::sort::SortKey;
use serde::{Deserialize, Serialize};

/// Intents and data arrivals the controller reduces over.
///
/// Presentation intents (paging, sort, accordion, form) and data-source
/// completions (page, star counts, average, settings, auth) share one
/// dispatch entry point; see [`ViewStateController`](crate::ViewStateController)
/// for the transition rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Advance the display range by one decade.
    NextPage,
    /// Retreat the display range by one decade.
    PrevPage,
    /// Pick a rating (1-5) in the submission form.
    SetRating(u8),
    /// Show or hide the submission form.
    ToggleForm,
    /// Expand or collapse one review row.
    ToggleAccordion(usize),
    /// Replace the expanded-row set wholesale.
    SetOpenReviews(Vec<usize>),
    /// Change the sort order. Fetch-relevant.
    SetSort(SortKey),
    /// Fold a successful page fetch into state.
    ReplacePage {
        reviews: Vec<Review>,
        total: u32,
        histogram: RatingHistogram,
    },
    /// Fold one star bucket's total into state.
    SetStarCount { stars: u8, count: u32 },
    /// Fold the average rating into state.
    SetAverage(f32),
    /// Replace the site settings snapshot. Fetch-relevant.
    SetSettings(SiteSettings),
    /// Record the session's auth status.
    SetAuthenticated(bool),
    /// Set or clear the star filter directly.
    SetRatingFilter(Option<u8>),
    /// Apply the single-highlight toggle policy to a star-bucket click:
    /// none active sets, same clears, different switches.
    ToggleRatingFilter(u8),
    /// Record that this session submitted a review. Idempotent.
    MarkSubmitted,
    /// Surface a recoverable fetch failure.
    FetchFailed(FetchFailure),
    /// Clear the failure banner.
    DismissBanner,
}
