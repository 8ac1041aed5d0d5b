//! End-to-end widget flows against the fixture source.

use chrono::{Duration, TimeZone, Utc};
use futures::executor::block_on;
use reviews_client::{FixtureSource, ReviewsCoordinator};
use reviews_core::{
    Action, FetchFailure, ProductId, Review, ReviewDraft, ReviewId, SiteSettings, SortKey,
    ValidationError,
};

fn seeded_review(index: usize, rating: u8) -> Review {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Review {
        id: ReviewId::new(format!("rev-{index}")),
        product_id: ProductId::new("prod-1"),
        rating,
        title: format!("Review {index}"),
        body: "A perfectly ordinary review.".to_string(),
        reviewer_name: Some(format!("Shopper {index}")),
        submitted_at: base + Duration::days(index as i64),
        verified_purchaser: index % 2 == 0,
        location: None,
    }
}

fn seeded_reviews(count: usize) -> Vec<Review> {
    (0..count)
        .map(|index| seeded_review(index, (index % 5 + 1) as u8))
        .collect()
}

fn coordinator_with(source: FixtureSource) -> ReviewsCoordinator<FixtureSource> {
    let mut coordinator = ReviewsCoordinator::new(ProductId::new("prod-1"), source);
    block_on(coordinator.bootstrap());
    coordinator
}

#[test]
fn test_bootstrap_loads_summary_and_first_page() {
    let source = FixtureSource::new()
        .with_settings(SiteSettings {
            default_open_count: 2,
            ..SiteSettings::default()
        })
        .with_authenticated(true)
        .with_approved(seeded_reviews(23));
    let coordinator = coordinator_with(source);

    let state = coordinator.state();
    assert_eq!(state.total, 23);
    assert_eq!(state.reviews.as_ref().map(Vec::len), Some(10));
    assert_eq!((state.from, state.to), (1, 10));
    assert!(state.summary_ready());
    assert_eq!(state.histogram.total(), 23);
    assert!(state.average > 0.0);
    assert_eq!(state.open_reviews, vec![0, 1]);
    assert!(state.authenticated);
    assert!(state.banner.is_none());
}

#[test]
fn test_decade_paging_refetches_each_page() {
    let source = FixtureSource::new().with_approved(seeded_reviews(23));
    let mut coordinator = coordinator_with(source);
    assert_eq!(coordinator.source().page_fetch_count(), 1);

    block_on(coordinator.dispatch(Action::NextPage));
    let state = coordinator.state();
    assert_eq!((state.from, state.to), (11, 20));
    // Most-recent-first over indices 22..0: the second decade starts at 12.
    let rows = state.reviews.as_ref().expect("page loaded");
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].id, ReviewId::new("rev-12"));
    assert_eq!(coordinator.source().page_fetch_count(), 2);

    block_on(coordinator.dispatch(Action::NextPage));
    let state = coordinator.state();
    assert_eq!((state.from, state.to), (21, 23));
    assert_eq!(state.reviews.as_ref().map(Vec::len), Some(3));

    block_on(coordinator.dispatch(Action::PrevPage));
    let state = coordinator.state();
    assert_eq!((state.from, state.to), (11, 20));
    assert_eq!(state.reviews.as_ref().map(Vec::len), Some(10));
}

#[test]
fn test_presentation_actions_do_not_refetch() {
    let source = FixtureSource::new().with_approved(seeded_reviews(23));
    let mut coordinator = coordinator_with(source);
    let fetched = coordinator.source().page_fetch_count();

    block_on(coordinator.dispatch(Action::ToggleRatingFilter(4)));
    block_on(coordinator.dispatch(Action::ToggleForm));
    block_on(coordinator.dispatch(Action::ToggleAccordion(3)));
    block_on(coordinator.dispatch(Action::SetRating(5)));

    assert_eq!(coordinator.source().page_fetch_count(), fetched);
    let visible = coordinator.state().visible_reviews();
    assert!(visible.iter().all(|(_, review)| review.rating == 4));
}

#[test]
fn test_sort_change_refetches() {
    let source = FixtureSource::new().with_approved(seeded_reviews(23));
    let mut coordinator = coordinator_with(source);

    block_on(coordinator.dispatch(Action::SetSort(SortKey::RatingAsc)));
    let state = coordinator.state();
    assert_eq!(state.sort, SortKey::RatingAsc);
    let rows = state.reviews.as_ref().expect("page loaded");
    assert_eq!(rows[0].rating, 1);
    assert_eq!(coordinator.source().page_fetch_count(), 2);
}

#[test]
fn test_settings_replacement_refetches_with_new_filter() {
    let source = FixtureSource::new()
        .with_approved(seeded_reviews(3))
        .with_pending(vec![seeded_review(90, 1), seeded_review(91, 1)]);
    let mut coordinator = coordinator_with(source);
    assert_eq!(coordinator.state().total, 3);

    block_on(coordinator.dispatch(Action::SetSettings(SiteSettings {
        require_approval: false,
        ..SiteSettings::default()
    })));
    assert_eq!(coordinator.state().total, 5);
}

#[test]
fn test_fetch_failure_preserves_state_and_retries() {
    let source = FixtureSource::new().with_approved(seeded_reviews(23));
    let mut coordinator = coordinator_with(source);

    coordinator.source().set_failing(true);
    block_on(coordinator.dispatch(Action::NextPage));

    let state = coordinator.state();
    assert!(matches!(state.banner, Some(FetchFailure::Network(_))));
    // The stale-but-valid first page survives the failed fetch.
    let rows = state.reviews.as_ref().expect("page still loaded");
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].id, ReviewId::new("rev-22"));
    assert_eq!(state.total, 23);

    // Once the source recovers, the next dispatch retries the page fetch.
    coordinator.source().set_failing(false);
    block_on(coordinator.dispatch(Action::DismissBanner));
    let state = coordinator.state();
    assert!(state.banner.is_none());
    assert_eq!(state.reviews.as_ref().map(Vec::len), Some(10));
    assert_eq!(
        state.reviews.as_ref().expect("page loaded")[0].id,
        ReviewId::new("rev-12")
    );
}

#[test]
fn test_submission_flow() {
    let source = FixtureSource::new()
        .with_authenticated(true)
        .with_approved(seeded_reviews(5));
    let mut coordinator = coordinator_with(source);

    let incomplete = ReviewDraft::new().with_title("Nice").with_body("Very nice.");
    assert_eq!(
        block_on(coordinator.submit(&incomplete)),
        Err(ValidationError::RatingRequired)
    );
    assert!(coordinator.source().submissions().is_empty());
    assert!(!coordinator.state().submitted);

    let draft = incomplete.with_rating(5);
    assert_eq!(block_on(coordinator.submit(&draft)), Ok(true));
    assert!(coordinator.state().submitted);

    let recorded = coordinator.source().submissions();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].rating, 5);
    assert_eq!(recorded[0].title, "Nice");
}

#[test]
fn test_anonymous_submission_blocked_by_policy() {
    let source = FixtureSource::new().with_approved(seeded_reviews(5));
    let mut coordinator = coordinator_with(source);

    let draft = ReviewDraft::new()
        .with_rating(4)
        .with_title("Fine")
        .with_body("It is fine.");
    assert_eq!(
        block_on(coordinator.submit(&draft)),
        Err(ValidationError::SignInRequired)
    );
}

#[test]
fn test_location_follows_site_policy() {
    let source = FixtureSource::new()
        .with_settings(SiteSettings {
            allow_anonymous_reviews: true,
            use_location: true,
            ..SiteSettings::default()
        })
        .with_approved(seeded_reviews(5));
    let mut coordinator = coordinator_with(source);

    let draft = ReviewDraft::new()
        .with_rating(3)
        .with_title("Okay")
        .with_body("Average.")
        .with_location("Porto");
    assert_eq!(block_on(coordinator.submit(&draft)), Ok(true));
    assert_eq!(
        coordinator.source().submissions()[0].location.as_deref(),
        Some("Porto")
    );
}

#[test]
fn test_failed_submission_sets_banner_not_submitted() {
    let source = FixtureSource::new()
        .with_authenticated(true)
        .with_approved(seeded_reviews(5));
    let mut coordinator = coordinator_with(source);

    coordinator.source().set_failing(true);
    let draft = ReviewDraft::new()
        .with_rating(2)
        .with_title("Hmm")
        .with_body("Not great.");
    assert_eq!(block_on(coordinator.submit(&draft)), Ok(false));
    assert!(!coordinator.state().submitted);
    assert!(coordinator.state().banner.is_some());
}
