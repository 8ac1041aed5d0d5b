//! Fetch orchestration for the reviews widget.

use crate::error::SourceError;
use crate::guard::RequestGuard;
use crate::request::{PageRequest, ReviewSubmission};
use crate::source::ReviewSource;
use futures::future::{join, join_all};
use reviews_core::{
    Action, ProductId, ReviewDraft, SiteSettings, SortKey, ValidationError, ViewState,
    ViewStateController,
};
use tracing::{debug, warn};

/// The fetch-relevant slice of view state.
///
/// A page fetch is re-issued whenever this differs from the key of the last
/// successful fetch: paging, sort changes, and a settings replacement all
/// invalidate the loaded page, while filter/accordion/form actions do not.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PageKey {
    from: u32,
    to: u32,
    sort: SortKey,
    settings: SiteSettings,
}

impl PageKey {
    fn of(state: &ViewState) -> Self {
        Self {
            from: state.from,
            to: state.to,
            sort: state.sort,
            settings: state.settings.clone(),
        }
    }
}

/// Drives a [`ViewStateController`] against a [`ReviewSource`].
///
/// All mutation still flows through the controller's dispatch; the
/// coordinator's job is deciding *when* to fetch, folding completions back
/// in as actions, and converting source failures into the recoverable
/// banner instead of letting them escape. Stale page responses are
/// discarded via [`RequestGuard`], so renders always reflect the latest
/// request rather than an arbitrary completion order.
pub struct ReviewsCoordinator<S> {
    product_id: ProductId,
    source: S,
    controller: ViewStateController,
    guard: RequestGuard,
    last_page_key: Option<PageKey>,
}

impl<S: ReviewSource> ReviewsCoordinator<S> {
    /// Create a coordinator for one widget mount.
    pub fn new(product_id: ProductId, source: S) -> Self {
        Self {
            product_id,
            source,
            controller: ViewStateController::new(),
            guard: RequestGuard::new(),
            last_page_key: None,
        }
    }

    /// Read the current snapshot.
    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    /// The data source backing this coordinator.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve startup data: settings, auth status, summary aggregates,
    /// and the first page.
    pub async fn bootstrap(&mut self) {
        match self.source.fetch_settings().await {
            Ok(settings) => self.controller.dispatch(Action::SetSettings(settings)),
            Err(error) => {
                warn!(%error, "settings fetch failed");
                self.fail(error);
            }
        }

        match self.source.fetch_auth_status().await {
            Ok(authenticated) => self
                .controller
                .dispatch(Action::SetAuthenticated(authenticated)),
            Err(error) => {
                warn!(%error, "auth status fetch failed");
                self.fail(error);
            }
        }

        self.load_summary().await;
        self.sync_page().await;
    }

    /// Apply one action, then re-fetch the page if the action touched a
    /// fetch-relevant field.
    pub async fn dispatch(&mut self, action: Action) {
        self.controller.dispatch(action);
        self.sync_page().await;
    }

    /// Validate and submit a review draft.
    ///
    /// Validation problems come back to the caller for inline display.
    /// Transport failures surface through the banner; the return value is
    /// `Ok(true)` only when the service accepted the submission.
    pub async fn submit(&mut self, draft: &ReviewDraft) -> Result<bool, ValidationError> {
        {
            let state = self.state();
            draft.validate(&state.settings, state.authenticated)?;
        }

        let use_location = self.state().settings.use_location;
        let submission = ReviewSubmission::from_draft(&self.product_id, draft, use_location);

        match self.source.submit_review(&submission).await {
            Ok(()) => {
                debug!(product_id = %self.product_id, "review submitted");
                self.controller.dispatch(Action::MarkSubmitted);
                Ok(true)
            }
            Err(error) => {
                warn!(%error, "review submission failed");
                self.fail(error);
                Ok(false)
            }
        }
    }

    /// Fetch the five star buckets and the average in parallel.
    ///
    /// The six requests race; each completion folds in independently, so
    /// summary readiness advances per-arrival.
    async fn load_summary(&mut self) {
        debug!(product_id = %self.product_id, "loading summary aggregates");

        let (counts, average) = {
            let source = &self.source;
            let product_id = &self.product_id;
            let buckets = join_all((1u8..=5).map(|stars| source.fetch_star_count(product_id, stars)));
            join(buckets, source.fetch_average(product_id)).await
        };

        for (stars, result) in (1u8..=5).zip(counts) {
            match result {
                Ok(count) => self.controller.dispatch(Action::SetStarCount { stars, count }),
                Err(error) => {
                    warn!(stars, %error, "star-count fetch failed");
                    self.fail(error);
                }
            }
        }

        match average {
            Ok(average) => self.controller.dispatch(Action::SetAverage(average)),
            Err(error) => {
                warn!(%error, "average fetch failed");
                self.fail(error);
            }
        }
    }

    /// Re-fetch the page when the fetch-relevant fields have drifted from
    /// the last successful fetch.
    async fn sync_page(&mut self) {
        let key = PageKey::of(self.state());
        if self.last_page_key.as_ref() != Some(&key) {
            self.load_page().await;
        }
    }

    async fn load_page(&mut self) {
        let key = PageKey::of(self.state());
        let request = PageRequest::for_state(&self.product_id, self.state());
        let generation = self.guard.issue();
        debug!(
            generation,
            from = request.from,
            to = request.to,
            order_by = request.order_by.as_order_by(),
            "issuing page fetch"
        );

        let result = self.source.fetch_page(&request).await;
        if !self.guard.is_current(generation) {
            debug!(generation, "page response superseded, discarding");
            return;
        }

        match result {
            Ok(page) => {
                self.controller.dispatch(Action::ReplacePage {
                    reviews: page.reviews,
                    total: page.total,
                    histogram: page.histogram,
                });
                // Failures leave the key behind so the next dispatch retries.
                self.last_page_key = Some(key);
            }
            Err(error) => {
                warn!(%error, "page fetch failed");
                self.fail(error);
            }
        }
    }

    fn fail(&mut self, error: SourceError) {
        self.controller
            .dispatch(Action::FetchFailed(error.into_failure()));
    }
}
