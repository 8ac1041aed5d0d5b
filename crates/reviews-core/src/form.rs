//! Review submission form data and validation.

use crate::error::ValidationError;
use crate::settings::SiteSettings;
use serde::{Deserialize, Serialize};

/// The not-yet-submitted contents of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Star rating, 0 until the shopper picks one.
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub reviewer_name: Option<String>,
    pub location: Option<String>,
}

impl ReviewDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the star rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Set the review title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the review text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the display name.
    pub fn with_reviewer_name(mut self, name: impl Into<String>) -> Self {
        self.reviewer_name = Some(name.into());
        self
    }

    /// Set the shopper's location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Check the draft against site policy and session state.
    ///
    /// Returns the first problem found, in the order the form surfaces
    /// them: session, rating, title, body.
    pub fn validate(
        &self,
        settings: &SiteSettings,
        authenticated: bool,
    ) -> Result<(), ValidationError> {
        if !settings.allow_anonymous_reviews && !authenticated {
            return Err(ValidationError::SignInRequired);
        }
        if self.rating == 0 {
            return Err(ValidationError::RatingRequired);
        }
        if self.rating > 5 {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::BodyRequired);
        }
        Ok(())
    }
}
