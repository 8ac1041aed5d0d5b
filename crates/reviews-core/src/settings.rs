//! Site policy settings for the reviews widget.

use serde::{Deserialize, Serialize};

/// Site-wide review policy, fetched once per widget mount.
///
/// Immutable once loaded. The `Default` is the conservative boot state the
/// widget runs with until the settings fetch lands: anonymous reviews off,
/// approval required, no location capture, nothing pre-expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Whether shoppers without a session may submit reviews.
    #[serde(default)]
    pub allow_anonymous_reviews: bool,
    /// Whether reviews must be approved before they are listed.
    #[serde(default = "default_true")]
    pub require_approval: bool,
    /// Whether the submission form captures the shopper's location.
    #[serde(default)]
    pub use_location: bool,
    /// How many review rows open expanded after a page load.
    #[serde(default)]
    pub default_open_count: u32,
}

fn default_true() -> bool {
    true
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            allow_anonymous_reviews: false,
            require_approval: true,
            use_location: false,
            default_open_count: 0,
        }
    }
}
