use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// An inclusive calendar date window bounding a commit search.
///
/// Both bounds are required and `since` must not be after `until`;
/// the constructor rejects inverted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl DateRange {
    /// Create a range, enforcing `since <= until`.
    pub fn new(since: NaiveDate, until: NaiveDate) -> DomainResult<Self> {
        if since > until {
            return Err(DomainError::InvalidDateRange {
                since: since.to_string(),
                until: until.to_string(),
            });
        }
        Ok(Self { since, until })
    }

    /// Parse a range from a pair of ISO `YYYY-MM-DD` strings.
    pub fn parse(since: &str, until: &str) -> DomainResult<Self> {
        let since = NaiveDate::parse_from_str(since, "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(since.to_string()))?;
        let until = NaiveDate::parse_from_str(until, "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(until.to_string()))?;
        Self::new(since, until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_range() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();
        assert_eq!(range.since, date(2025, 1, 1));
        assert_eq!(range.until, date(2025, 12, 31));
    }

    #[test]
    fn test_single_day_range_allowed() {
        assert!(DateRange::new(date(2025, 6, 15), date(2025, 6, 15)).is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_parse_iso_dates() {
        let range = DateRange::parse("2025-01-01", "2025-04-01").unwrap();
        assert_eq!(range.since, date(2025, 1, 1));
        assert_eq!(range.until, date(2025, 4, 1));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        let err = DateRange::parse("not-a-date", "2025-04-01").unwrap_err();
        assert!(matches!(err, DomainError::InvalidDate(_)));
    }
}
