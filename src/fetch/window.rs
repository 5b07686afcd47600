//! Query time window.

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::QUERY_TIME_FORMAT;
use crate::error_handling::ValidationError;

/// `[start, end]` in UTC, `end - start` being a whole number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Inclusive upper bound
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window covering the last `days_back` days up to now.
    pub fn ending_now(days_back: i64) -> Result<Self, ValidationError> {
        Self::ending_at(Utc::now(), days_back)
    }

    /// Window covering `days_back` days up to `end`. Zero days is an empty
    /// instant window; negative days are rejected.
    pub fn ending_at(end: DateTime<Utc>, days_back: i64) -> Result<Self, ValidationError> {
        if days_back < 0 {
            return Err(ValidationError::NegativeDays(days_back));
        }
        let start = TimeDelta::try_days(days_back)
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or(ValidationError::DaysOutOfRange(days_back))?;
        Ok(Self { start, end })
    }

    /// `(starttime, endtime)` rendered for the FDSN query string.
    pub fn query_bounds(&self) -> (String, String) {
        (
            self.start.format(QUERY_TIME_FORMAT).to_string(),
            self.end.format(QUERY_TIME_FORMAT).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_spans_requested_days() {
        let end = Utc.with_ymd_and_hms(2026, 3, 10, 8, 30, 15).unwrap();
        let window = TimeWindow::ending_at(end, 7).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 3, 3, 8, 30, 15).unwrap());
        assert_eq!(window.end, end);
    }

    #[test]
    fn test_zero_days_is_valid() {
        let end = Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap();
        let window = TimeWindow::ending_at(end, 0).unwrap();
        assert_eq!(window.start, window.end);
    }

    #[test]
    fn test_negative_days_rejected() {
        assert_eq!(
            TimeWindow::ending_now(-1),
            Err(ValidationError::NegativeDays(-1))
        );
    }

    #[test]
    fn test_huge_days_rejected() {
        assert_eq!(
            TimeWindow::ending_now(i64::MAX),
            Err(ValidationError::DaysOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_query_bounds_format() {
        let end = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let window = TimeWindow::ending_at(end, 1).unwrap();
        let (start, end) = window.query_bounds();
        assert_eq!(start, "2026-01-01T03:04:05");
        assert_eq!(end, "2026-01-02T03:04:05");
    }
}
