//! Per-star rating totals.

use serde::{Deserialize, Serialize};

/// Distribution of ratings (1-5 stars) across all of a product's reviews,
/// not just the currently loaded page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistogram {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingHistogram {
    /// Build a histogram from counts ordered five stars down to one.
    pub fn from_counts(counts: [u32; 5]) -> Self {
        Self {
            five_star: counts[0],
            four_star: counts[1],
            three_star: counts[2],
            two_star: counts[3],
            one_star: counts[4],
        }
    }

    /// Get the count for a rating level.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Set the count for a rating level. Out-of-range stars are ignored.
    pub fn set_count(&mut self, stars: u8, count: u32) {
        match stars {
            5 => self.five_star = count,
            4 => self.four_star = count,
            3 => self.three_star = count,
            2 => self.two_star = count,
            1 => self.one_star = count,
            _ => {}
        }
    }

    /// Sum across all buckets.
    pub fn total(&self) -> u32 {
        self.five_star + self.four_star + self.three_star + self.two_star + self.one_star
    }

    /// Get percentage for a rating level, used as the bar-chart fill width.
    pub fn percentage(&self, stars: u8, total: u32) -> f32 {
        if total == 0 {
            return 0.0;
        }
        (self.count(stars) as f32 / total as f32) * 100.0
    }
}
