//! The widget's view state.

use crate::error::FetchFailure;
use crate::histogram::RatingHistogram;
use crate::review::Review;
use crate::settings::SiteSettings;
use crate::sort::SortKey;
use crate::summary::SummaryProgress;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render the reviews widget.
///
/// Owned exclusively by the [`ViewStateController`](crate::ViewStateController)
/// and mutated only through its dispatch entry point. One snapshot exists per
/// widget mount; nothing persists across mounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Active sort order.
    pub sort: SortKey,
    /// 1-indexed inclusive start of the display range.
    pub from: u32,
    /// 1-indexed inclusive end of the display range.
    pub to: u32,
    /// The current page's rows; `None` until the first page fetch lands.
    pub reviews: Option<Vec<Review>>,
    /// Total reviews matching the approval filter.
    pub total: u32,
    /// Per-star totals across all reviews.
    pub histogram: RatingHistogram,
    /// Aggregate average rating, 0.0-5.0.
    pub average: f32,
    /// Which summary aggregates have arrived.
    pub summary: SummaryProgress,
    /// Rating picked in the unsubmitted form, 0 = none.
    pub pending_rating: u8,
    /// Submission form visibility.
    pub form_open: bool,
    /// Expanded accordion rows, as indices into `reviews`.
    pub open_reviews: Vec<usize>,
    /// Site policy snapshot.
    pub settings: SiteSettings,
    /// Session state, resolved once at startup.
    pub authenticated: bool,
    /// Client-side star filter over the loaded page, 1-5.
    pub rating_filter: Option<u8>,
    /// Set once the session has submitted a review; never reset.
    pub submitted: bool,
    /// Recoverable fetch-failure surface; `None` when healthy.
    pub banner: Option<FetchFailure>,
}

impl ViewState {
    /// The fixed initial snapshot for a fresh mount.
    pub fn initial() -> Self {
        Self {
            sort: SortKey::default(),
            from: 1,
            to: 10,
            reviews: None,
            total: 0,
            histogram: RatingHistogram::default(),
            average: 0.0,
            summary: SummaryProgress::default(),
            pending_rating: 0,
            form_open: false,
            open_reviews: Vec::new(),
            settings: SiteSettings::default(),
            authenticated: false,
            rating_filter: None,
            submitted: false,
            banner: None,
        }
    }

    /// End of the display range capped to the known total.
    ///
    /// Meaningful once totals are known; a 7-review product on its first
    /// page displays `1-7` even though the raw range is `1-10`.
    pub fn display_to(&self) -> u32 {
        self.to.min(self.total)
    }

    /// The loaded rows that pass the active rating filter, with their
    /// indices into `reviews` preserved for accordion bookkeeping.
    pub fn visible_reviews(&self) -> Vec<(usize, &Review)> {
        let Some(reviews) = self.reviews.as_deref() else {
            return Vec::new();
        };
        reviews
            .iter()
            .enumerate()
            .filter(|(_, review)| match self.rating_filter {
                Some(stars) => review.rating == stars,
                None => true,
            })
            .collect()
    }

    /// Whether the accordion row at `index` is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.open_reviews.contains(&index)
    }

    /// Whether the star-bucket control for `stars` renders highlighted.
    ///
    /// At most one bucket is highlighted at any time; this derives entirely
    /// from `rating_filter`.
    pub fn is_filter_active(&self, stars: u8) -> bool {
        self.rating_filter == Some(stars)
    }

    /// Whether the current visitor may open the submission form.
    pub fn can_write_review(&self) -> bool {
        self.settings.allow_anonymous_reviews || self.authenticated
    }

    /// Weak summary gate: true as soon as any histogram bucket and the
    /// average have arrived. Mirrors the widget's historical first-arrival
    /// behavior; prefer [`summary_ready`](Self::summary_ready).
    pub fn summary_started(&self) -> bool {
        self.summary.started() && self.summary.average_loaded()
    }

    /// Strict summary gate: all five buckets and the average have arrived.
    pub fn summary_ready(&self) -> bool {
        self.summary.is_complete() && self.summary.average_loaded()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}
