//! The asynchronous read/write boundary behind the widget.

use crate::error::SourceError;
use crate::request::{PageRequest, ReviewSubmission};
use crate::response::PageResponse;
use async_trait::async_trait;
use reviews_core::{ProductId, SiteSettings};

/// A review data service.
///
/// The six operations map onto the fixed queries the widget issues: site
/// settings, page content, the five per-star totals, the average rating,
/// review submission, and the session's auth status. Implementations own
/// transport and payload decoding; every failure surfaces as a
/// [`SourceError`] so the coordinator can convert it into recoverable
/// state instead of letting it escape.
///
/// Auth status is part of this trait by design: the widget receives it as
/// an injected capability resolved once at startup rather than reading a
/// host-global session object.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch the site-wide review policy.
    async fn fetch_settings(&self) -> Result<SiteSettings, SourceError>;

    /// Fetch one page of reviews with its totals.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse, SourceError>;

    /// Fetch the total for one star bucket (1-5).
    async fn fetch_star_count(&self, product_id: &ProductId, stars: u8)
        -> Result<u32, SourceError>;

    /// Fetch the aggregate average rating.
    async fn fetch_average(&self, product_id: &ProductId) -> Result<f32, SourceError>;

    /// Submit a new review.
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), SourceError>;

    /// Resolve whether the current session is authenticated.
    async fn fetch_auth_status(&self) -> Result<bool, SourceError>;
}
