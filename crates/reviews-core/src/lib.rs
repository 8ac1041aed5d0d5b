//! View state and domain types for the storefront reviews widget.
//!
//! This crate is the widget's pure core: the single [`ViewState`] aggregate,
//! the [`Action`] set, and the [`ViewStateController`] that reduces one into
//! the other. It performs no I/O; asynchronous data arrivals are folded in
//! as actions by the companion `reviews-client` crate.
//!
//! - **State**: pagination range, sort order, loaded page, rating histogram,
//!   summary readiness, accordion rows, form and filter state
//! - **Policy**: single-highlight rating filter, accordion seeding, decade
//!   paging, draft validation against site settings
//! - **Display helpers**: histogram bar percentages, elapsed-time formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use reviews_core::prelude::*;
//!
//! let mut controller = ViewStateController::new();
//! controller.dispatch(Action::ToggleRatingFilter(5));
//! controller.dispatch(Action::NextPage);
//!
//! let state = controller.state();
//! for (index, review) in state.visible_reviews() {
//!     println!("{} ({} stars)", review.title, review.rating);
//! }
//! ```

pub mod action;
pub mod controller;
pub mod error;
pub mod form;
pub mod histogram;
pub mod ids;
pub mod review;
pub mod settings;
pub mod sort;
pub mod state;
pub mod summary;
pub mod timeago;

pub use action::Action;
pub use controller::ViewStateController;
pub use error::{FetchFailure, ValidationError};
pub use form::ReviewDraft;
pub use histogram::RatingHistogram;
pub use ids::{ProductId, ReviewId};
pub use review::Review;
pub use settings::SiteSettings;
pub use sort::SortKey;
pub use state::ViewState;
pub use summary::{Readiness, SummaryProgress};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::controller::ViewStateController;
    pub use crate::error::{FetchFailure, ValidationError};
    pub use crate::form::ReviewDraft;
    pub use crate::histogram::RatingHistogram;
    pub use crate::ids::{ProductId, ReviewId};
    pub use crate::review::Review;
    pub use crate::settings::SiteSettings;
    pub use crate::sort::SortKey;
    pub use crate::state::ViewState;
    pub use crate::summary::{Readiness, SummaryProgress};
    pub use crate::timeago::{time_ago, Elapsed};
}
