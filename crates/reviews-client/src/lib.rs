//! Data-source boundary and fetch coordination for the storefront reviews
//! widget.
//!
//! `reviews-core` owns the view state; this crate owns everything that feeds
//! it: the [`ReviewSource`] trait over the review service's fixed queries,
//! the [`ReviewsCoordinator`] that decides when to fetch and folds
//! completions back in as actions, the [`RequestGuard`] that discards stale
//! page responses, and a deterministic [`FixtureSource`] for tests and local
//! development.
//!
//! # Example
//!
//! ```rust,ignore
//! use reviews_client::{FixtureSource, ReviewsCoordinator};
//! use reviews_core::prelude::*;
//!
//! let source = FixtureSource::new().with_authenticated(true);
//! let mut coordinator = ReviewsCoordinator::new(ProductId::new("prod-1"), source);
//!
//! coordinator.bootstrap().await;
//! coordinator.dispatch(Action::NextPage).await;
//!
//! let state = coordinator.state();
//! assert!(state.summary_ready());
//! ```

mod coordinator;
mod error;
mod fixture;
mod guard;
mod request;
mod response;
mod source;

pub use coordinator::ReviewsCoordinator;
pub use error::SourceError;
pub use fixture::FixtureSource;
pub use guard::RequestGuard;
pub use request::{PageRequest, ReviewSubmission};
pub use response::PageResponse;
pub use source::ReviewSource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::coordinator::ReviewsCoordinator;
    pub use crate::error::SourceError;
    pub use crate::fixture::FixtureSource;
    pub use crate::request::{PageRequest, ReviewSubmission};
    pub use crate::response::PageResponse;
    pub use crate::source::ReviewSource;
}
