//! Requests sent to the review service.

use reviews_core::{ProductId, ReviewDraft, SortKey, ViewState};
use serde::{Deserialize, Serialize};

/// Parameters for one page-content fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub product_id: ProductId,
    /// 1-indexed inclusive range start.
    pub from: u32,
    /// 1-indexed inclusive range end.
    pub to: u32,
    pub order_by: SortKey,
    /// Restrict to approved reviews, per site policy.
    pub approved_only: bool,
}

impl PageRequest {
    /// Build the request the current view state calls for.
    pub fn for_state(product_id: &ProductId, state: &ViewState) -> Self {
        Self {
            product_id: product_id.clone(),
            from: state.from,
            to: state.to,
            order_by: state.sort,
            approved_only: state.settings.require_approval,
        }
    }
}

/// A validated review submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    pub product_id: ProductId,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub reviewer_name: Option<String>,
    pub location: Option<String>,
}

impl ReviewSubmission {
    /// Project a draft into a submission.
    ///
    /// Location is only forwarded when site policy captures it.
    pub fn from_draft(product_id: &ProductId, draft: &ReviewDraft, use_location: bool) -> Self {
        Self {
            product_id: product_id.clone(),
            rating: draft.rating,
            title: draft.title.clone(),
            body: draft.body.clone(),
            reviewer_name: draft.reviewer_name.clone(),
            location: if use_location {
                draft.location.clone()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviews_core::SiteSettings;

    #[test]
    fn test_page_request_tracks_state() {
        let mut state = ViewState::initial();
        state.from = 11;
        state.to = 20;
        state.sort = SortKey::RatingDesc;
        state.settings = SiteSettings {
            require_approval: false,
            ..SiteSettings::default()
        };

        let request = PageRequest::for_state(&ProductId::new("prod-1"), &state);
        assert_eq!((request.from, request.to), (11, 20));
        assert_eq!(request.order_by, SortKey::RatingDesc);
        assert!(!request.approved_only);
    }

    #[test]
    fn test_submission_drops_location_when_disabled() {
        let draft = ReviewDraft::new()
            .with_rating(5)
            .with_title("Great")
            .with_body("Loved it.")
            .with_location("Lisbon");

        let submission = ReviewSubmission::from_draft(&ProductId::new("prod-1"), &draft, false);
        assert_eq!(submission.location, None);

        let submission = ReviewSubmission::from_draft(&ProductId::new("prod-1"), &draft, true);
        assert_eq!(submission.location.as_deref(), Some("Lisbon"));
    }
}
