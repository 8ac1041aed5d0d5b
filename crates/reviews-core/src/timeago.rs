//! Elapsed-time display formatting.
//!
//! Renders a past timestamp as the largest non-zero calendar unit followed
//! by "ago" ("3 days ago", "1 year ago"), or "just now" when everything is
//! zero. The unit breakdown re-anchors the elapsed duration at the Unix
//! epoch and reads it back as calendar components, so a "month" is a real
//! calendar month rather than a fixed 30 days.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

/// Elapsed calendar components between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl Elapsed {
    /// Break down the time elapsed from `then` to `now`.
    ///
    /// Future timestamps clamp to zero elapsed.
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = now.signed_duration_since(then).max(Duration::zero());
        let anchor = DateTime::<Utc>::UNIX_EPOCH + diff;

        Self {
            years: anchor.year().saturating_sub(1970) as u32,
            months: anchor.month0(),
            days: anchor.day0(),
            hours: anchor.hour(),
            minutes: anchor.minute(),
        }
    }

    /// Render the largest non-zero unit, pluralized, with the "ago" suffix.
    pub fn display(&self) -> String {
        let (value, unit) = if self.years > 0 {
            (self.years, "year")
        } else if self.months > 0 {
            (self.months, "month")
        } else if self.days > 0 {
            (self.days, "day")
        } else if self.hours > 0 {
            (self.hours, "hour")
        } else if self.minutes > 0 {
            (self.minutes, "minute")
        } else {
            return "just now".to_string();
        };

        let plural = if value > 1 { "s" } else { "" };
        format!("{} {}{} ago", value, unit, plural)
    }
}

/// Format how long ago `then` was, relative to `now`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    Elapsed::between(then, now).display()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_exactly_now() {
        assert_eq!(time_ago(now(), now()), "just now");
    }

    #[test]
    fn test_under_a_minute() {
        let then = now() - Duration::seconds(45);
        assert_eq!(time_ago(then, now()), "just now");
    }

    #[test]
    fn test_minutes() {
        let then = now() - Duration::minutes(5);
        assert_eq!(time_ago(then, now()), "5 minutes ago");
    }

    #[test]
    fn test_singular_minute() {
        let then = now() - Duration::minutes(1);
        assert_eq!(time_ago(then, now()), "1 minute ago");
    }

    #[test]
    fn test_ninety_minutes_is_one_hour() {
        let then = now() - Duration::minutes(90);
        assert_eq!(time_ago(then, now()), "1 hour ago");
    }

    #[test]
    fn test_three_days() {
        let then = now() - Duration::days(3);
        assert_eq!(time_ago(then, now()), "3 days ago");
    }

    #[test]
    fn test_calendar_months() {
        let then = now() - Duration::days(65);
        assert_eq!(time_ago(then, now()), "2 months ago");
    }

    #[test]
    fn test_four_hundred_days_is_one_year() {
        let then = now() - Duration::days(400);
        assert_eq!(time_ago(then, now()), "1 year ago");
    }

    #[test]
    fn test_multiple_years() {
        let then = now() - Duration::days(800);
        assert_eq!(time_ago(then, now()), "2 years ago");
    }

    #[test]
    fn test_future_timestamp_clamps() {
        let then = now() + Duration::hours(2);
        assert_eq!(time_ago(then, now()), "just now");
    }
}
