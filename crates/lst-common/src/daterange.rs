//! Inclusive calendar date ranges for metric and KPI queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

/// An inclusive [from, to] calendar date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting from > to.
    pub fn new(from: NaiveDate, to: NaiveDate) -> MetricsResult<Self> {
        if from > to {
            return Err(MetricsError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    pub fn parse(from: &str, to: &str) -> MetricsResult<Self> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        Self::new(from, to)
    }
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> MetricsResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| MetricsError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_valid_range() {
        let range = DateRange::parse("2024-07-01", "2024-07-31").unwrap();
        assert_eq!(range.from, d("2024-07-01"));
        assert_eq!(range.to, d("2024-07-31"));
    }

    #[test]
    fn test_range_rejects_inverted() {
        let result = DateRange::new(d("2024-07-31"), d("2024-07-01"));
        assert!(matches!(
            result,
            Err(MetricsError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        assert!(DateRange::new(d("2024-07-15"), d("2024-07-15")).is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            DateRange::parse("2024-07-01", "not-a-date"),
            Err(MetricsError::InvalidDate(_))
        ));
    }
}
