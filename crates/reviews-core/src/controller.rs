//! The view-state controller.

use crate::action::Action;
use crate::state::ViewState;

/// Owns the widget's [`ViewState`] and applies the transition rules.
///
/// `dispatch` is synchronous and total: every action reduces to a valid
/// state, and actions that do not apply (out-of-range ratings, paging past
/// the ends) reduce to the current state unchanged. The controller performs
/// no I/O; data-source completions arrive as actions like any other intent.
#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    state: ViewState,
}

impl ViewStateController {
    /// Create a controller holding the fixed initial snapshot.
    pub fn new() -> Self {
        Self {
            state: ViewState::initial(),
        }
    }

    /// Read the current snapshot.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Consume the controller and return the final snapshot.
    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        let state = &mut self.state;
        match action {
            Action::NextPage => {
                // A total under 11 fits on the first page; `from` holds.
                if state.total >= 11 {
                    state.from += 10;
                }
                state.to = (state.to + 10).min(state.total);
            }
            Action::PrevPage => {
                let from = state.from;
                if from >= 11 {
                    state.from = from - 10;
                }
                if from > 10 {
                    // The previous decade always ends right before the old
                    // start, even when the current page is a partial decade.
                    state.to = from - 1;
                }
            }
            Action::SetRating(rating) => {
                if (1..=5).contains(&rating) {
                    state.pending_rating = rating;
                }
            }
            Action::ToggleForm => {
                state.form_open = !state.form_open;
            }
            Action::ToggleAccordion(index) => {
                if state.open_reviews.contains(&index) {
                    state.open_reviews.retain(|open| *open != index);
                } else {
                    state.open_reviews.push(index);
                }
            }
            Action::SetOpenReviews(indices) => {
                state.open_reviews = indices;
            }
            Action::SetSort(sort) => {
                state.sort = sort;
            }
            Action::ReplacePage {
                reviews,
                total,
                histogram,
            } => {
                // Atomic replace: rows, total, and histogram come from the
                // same response, so stale accordion indices cannot survive.
                let seed = (state.settings.default_open_count as usize).min(reviews.len());
                state.open_reviews = (0..seed).collect();
                state.reviews = Some(reviews);
                state.total = total;
                state.histogram = histogram;
                state.summary.record_all_buckets();
            }
            Action::SetStarCount { stars, count } => {
                if (1..=5).contains(&stars) {
                    state.histogram.set_count(stars, count);
                    state.summary.record_bucket(stars);
                }
            }
            Action::SetAverage(average) => {
                state.average = average;
                state.summary.record_average();
            }
            Action::SetSettings(settings) => {
                state.settings = settings;
            }
            Action::SetAuthenticated(authenticated) => {
                state.authenticated = authenticated;
            }
            Action::SetRatingFilter(filter) => match filter {
                Some(stars) if !(1..=5).contains(&stars) => {}
                _ => state.rating_filter = filter,
            },
            Action::ToggleRatingFilter(stars) => {
                if (1..=5).contains(&stars) {
                    state.rating_filter = match state.rating_filter {
                        Some(active) if active == stars => None,
                        _ => Some(stars),
                    };
                }
            }
            Action::MarkSubmitted => {
                state.submitted = true;
            }
            Action::FetchFailed(failure) => {
                state.banner = Some(failure);
            }
            Action::DismissBanner => {
                state.banner = None;
            }
        }
    }
}

impl From<ViewState> for ViewStateController {
    fn from(state: ViewState) -> Self {
        Self { state }
    }
}
