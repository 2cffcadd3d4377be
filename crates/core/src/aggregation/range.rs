//! Inclusive calendar date ranges.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::AggregationError;

/// Inclusive `[start, end]` range of calendar dates.
///
/// Fields are public so ranges can be deserialized from requests; every
/// engine entry point re-checks [`DateRange::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AggregationError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// A single-day range.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The full calendar month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if `month` is outside 1-12 or the year is
    /// out of range.
    pub fn month(year: i32, month: u32) -> Result<Self, AggregationError> {
        let invalid = AggregationError::InvalidMonth { year, month };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(invalid.clone())?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(invalid)?;
        Ok(Self { start, end })
    }

    /// Checks `start <= end`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the range is inverted.
    pub fn validate(&self) -> Result<(), AggregationError> {
        if self.start > self.end {
            return Err(AggregationError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Returns true if `date` falls inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = DateRange::new(date(2025, 5, 2), date(2025, 5, 1)).unwrap_err();
        assert_eq!(
            err,
            AggregationError::InvalidRange {
                start: date(2025, 5, 2),
                end: date(2025, 5, 1),
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(date(2025, 5, 1), date(2025, 5, 31)).unwrap();
        assert!(range.contains(date(2025, 5, 1)));
        assert!(range.contains(date(2025, 5, 31)));
        assert!(!range.contains(date(2025, 4, 30)));
        assert!(!range.contains(date(2025, 6, 1)));
    }

    #[rstest]
    #[case(2025, 5, 31)]
    #[case(2025, 2, 28)]
    #[case(2024, 2, 29)]
    #[case(2025, 12, 31)]
    fn test_month_covers_whole_month(#[case] year: i32, #[case] month: u32, #[case] last: u32) {
        let range = DateRange::month(year, month).unwrap();
        assert_eq!(range.start, date(year, month, 1));
        assert_eq!(range.end, date(year, month, last));
        assert_eq!(range.days(), i64::from(last));
    }

    #[test]
    fn test_month_rejects_bad_month() {
        assert_eq!(
            DateRange::month(2025, 13),
            Err(AggregationError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::day(date(2025, 5, 18));
        assert_eq!(range.days(), 1);
        assert!(range.validate().is_ok());
    }
}
