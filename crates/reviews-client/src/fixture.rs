//! Deterministic in-memory review source for tests and local development.

use crate::error::SourceError;
use crate::request::{PageRequest, ReviewSubmission};
use crate::response::PageResponse;
use crate::source::ReviewSource;
use async_trait::async_trait;
use reviews_core::{ProductId, RatingHistogram, Review, SiteSettings, SortKey};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

/// An in-memory [`ReviewSource`] over a seeded review set.
///
/// Sorting, decade slicing, per-star counting, and approval filtering all
/// behave like the real service, so coordinator behavior can be exercised
/// end to end without transport. `set_failing` flips every operation into
/// a network error to drive the failure paths.
pub struct FixtureSource {
    settings: SiteSettings,
    authenticated: bool,
    approved: Vec<Review>,
    pending: Vec<Review>,
    failing: AtomicBool,
    page_fetches: AtomicU32,
    submissions: Mutex<Vec<ReviewSubmission>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            settings: SiteSettings::default(),
            authenticated: false,
            approved: Vec::new(),
            pending: Vec::new(),
            failing: AtomicBool::new(false),
            page_fetches: AtomicU32::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Set the settings payload the source serves.
    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the auth status the source reports.
    pub fn with_authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Seed approved reviews.
    pub fn with_approved(mut self, reviews: Vec<Review>) -> Self {
        self.approved = reviews;
        self
    }

    /// Seed reviews still awaiting approval; they are only listed when a
    /// page request does not restrict to approved content.
    pub fn with_pending(mut self, reviews: Vec<Review>) -> Self {
        self.pending = reviews;
        self
    }

    /// Make every subsequent operation fail with a network error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// How many page fetches have been served.
    pub fn page_fetch_count(&self) -> u32 {
        self.page_fetches.load(Ordering::Relaxed)
    }

    /// Submissions recorded so far.
    pub fn submissions(&self) -> Vec<ReviewSubmission> {
        self.submissions
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }

    fn check_online(&self) -> Result<(), SourceError> {
        if self.failing.load(Ordering::Relaxed) {
            Err(SourceError::Network("fixture offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn listed(&self, approved_only: bool) -> Vec<&Review> {
        let mut listed: Vec<&Review> = self.approved.iter().collect();
        if !approved_only {
            listed.extend(self.pending.iter());
        }
        listed
    }

    fn sort(reviews: &mut [&Review], order_by: SortKey) {
        match order_by {
            SortKey::RecentDesc => reviews.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at)),
            SortKey::RecentAsc => reviews.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at)),
            SortKey::RatingDesc => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortKey::RatingAsc => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
        }
    }

    fn histogram_of(reviews: &[&Review]) -> RatingHistogram {
        let mut histogram = RatingHistogram::default();
        for review in reviews {
            let count = histogram.count(review.rating);
            histogram.set_count(review.rating, count + 1);
        }
        histogram
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewSource for FixtureSource {
    async fn fetch_settings(&self) -> Result<SiteSettings, SourceError> {
        self.check_online()?;
        Ok(self.settings.clone())
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse, SourceError> {
        self.check_online()?;
        self.page_fetches.fetch_add(1, Ordering::Relaxed);

        let mut listed = self.listed(request.approved_only);
        Self::sort(&mut listed, request.order_by);

        let total = listed.len() as u32;
        let histogram = Self::histogram_of(&listed);
        let skip = request.from.saturating_sub(1) as usize;
        let take = (request.to.saturating_sub(request.from) + 1) as usize;
        let reviews = listed.into_iter().skip(skip).take(take).cloned().collect();

        Ok(PageResponse {
            reviews,
            total,
            histogram,
        })
    }

    async fn fetch_star_count(
        &self,
        _product_id: &ProductId,
        stars: u8,
    ) -> Result<u32, SourceError> {
        self.check_online()?;
        // Bucket totals cover approved reviews only, like the live service.
        Ok(self
            .approved
            .iter()
            .filter(|review| review.rating == stars)
            .count() as u32)
    }

    async fn fetch_average(&self, _product_id: &ProductId) -> Result<f32, SourceError> {
        self.check_online()?;
        if self.approved.is_empty() {
            return Ok(0.0);
        }
        let sum: u32 = self.approved.iter().map(|review| review.rating as u32).sum();
        Ok(sum as f32 / self.approved.len() as f32)
    }

    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), SourceError> {
        self.check_online()?;
        if let Ok(mut recorded) = self.submissions.lock() {
            recorded.push(submission.clone());
        }
        Ok(())
    }

    async fn fetch_auth_status(&self) -> Result<bool, SourceError> {
        self.check_online()?;
        Ok(self.authenticated)
    }
}
