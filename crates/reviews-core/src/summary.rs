//! Arrival tracking for the summary block's independent fetches.
//!
//! The five per-star totals and the average rating resolve in no particular
//! order. `SummaryProgress` records which of them have landed so the renderer
//! can gate the summary block on actual completeness instead of on whichever
//! response happened to arrive first.

use serde::{Deserialize, Serialize};

/// How much of the rating histogram has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// No bucket has arrived yet.
    Empty,
    /// Some buckets have arrived (count out of 5).
    Partial(u8),
    /// All five buckets have arrived.
    Complete,
}

/// Tracks which summary aggregates have arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryProgress {
    // One bit per star bucket, bit 0 = one star.
    buckets: u8,
    average: bool,
}

const ALL_BUCKETS: u8 = 0b1_1111;

impl SummaryProgress {
    /// Record the arrival of one star bucket (1-5). Out-of-range is ignored.
    pub fn record_bucket(&mut self, stars: u8) {
        if (1..=5).contains(&stars) {
            self.buckets |= 1 << (stars - 1);
        }
    }

    /// Record a page response, which carries every bucket at once.
    pub fn record_all_buckets(&mut self) {
        self.buckets = ALL_BUCKETS;
    }

    /// Record the arrival of the average rating.
    pub fn record_average(&mut self) {
        self.average = true;
    }

    /// Number of buckets that have arrived, 0-5.
    pub fn arrived_buckets(&self) -> u8 {
        self.buckets.count_ones() as u8
    }

    /// Whether at least one bucket has arrived.
    ///
    /// This is the weak first-arrival signal the widget historically gated
    /// on; prefer `is_complete` for rendering.
    pub fn started(&self) -> bool {
        self.buckets != 0
    }

    /// Whether all five buckets have arrived.
    pub fn is_complete(&self) -> bool {
        self.buckets == ALL_BUCKETS
    }

    pub fn average_loaded(&self) -> bool {
        self.average
    }

    /// Histogram arrival state.
    pub fn readiness(&self) -> Readiness {
        match self.arrived_buckets() {
            0 => Readiness::Empty,
            5 => Readiness::Complete,
            n => Readiness::Partial(n),
        }
    }
}
