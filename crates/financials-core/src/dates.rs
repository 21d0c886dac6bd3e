//! Date helpers shared by request building and response normalization.
//!
//! Callers pass ISO `YYYY-MM-DD` strings; providers want unix seconds; records
//! carry both the raw timestamp and a formatted calendar date.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DataError, Result};

/// Format used for every date string accepted or produced by this crate.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| {
        DataError::InvalidParameter(format!("invalid date '{input}' (expected YYYY-MM-DD): {e}"))
    })
}

/// Unix seconds at 00:00 UTC of `date`.
#[must_use]
pub fn date_to_epoch(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Unix seconds at 23:59:59 UTC of `date`.
#[must_use]
pub fn end_of_day_epoch(date: NaiveDate) -> i64 {
    date.and_hms_opt(23, 59, 59)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Formats a unix timestamp as `YYYY-MM-DD` in `time_zone`, or in UTC when
/// no zone is given.
///
/// Bars are stamped at local midnight or at the open, so formatting in the
/// exchange's own zone keeps the date on the trading day across DST changes.
#[must_use]
pub fn format_epoch(timestamp: i64, time_zone: Option<Tz>) -> Option<String> {
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    let local = utc.with_timezone(&time_zone.unwrap_or(Tz::UTC));
    Some(local.format(DATE_FORMAT).to_string())
}

/// Looks up an IANA zone name such as `America/New_York`.
#[must_use]
pub fn time_zone(name: &str) -> Option<Tz> {
    name.parse().ok()
}

/// An inclusive calendar range supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DataError::InvalidParameter(format!(
                "Start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses two ISO dates into a range.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// The `(period1, period2)` epoch pair for provider queries, from
    /// 00:00:00 UTC of `start` through 23:59:59 UTC of `end`.
    #[must_use]
    pub fn to_epochs(&self) -> (i64, i64) {
        (date_to_epoch(self.start), end_of_day_epoch(self.end))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_epoch() {
        let date = parse_date("2015-01-15").unwrap();
        assert_eq!(date_to_epoch(date), 1_421_280_000);
        assert_eq!(date_to_epoch(parse_date("1970-01-01").unwrap()), 0);
    }

    #[test]
    fn test_format_epoch_in_exchange_zone() {
        let new_york = time_zone("America/New_York");
        assert!(new_york.is_some());
        // 05:00 UTC is midnight in New York during winter.
        assert_eq!(
            format_epoch(1_421_038_800, new_york).as_deref(),
            Some("2015-01-12")
        );
        // 02:00 UTC on the 13th is still the 12th in New York.
        assert_eq!(
            format_epoch(1_421_114_400, new_york).as_deref(),
            Some("2015-01-12")
        );
        assert_eq!(format_epoch(1_421_114_400, None).as_deref(), Some("2015-01-13"));
        assert!(time_zone("Not/AZone").is_none());
    }

    #[test]
    fn test_format_epoch_across_daylight_saving() {
        // 04:00 UTC is midnight in New York during summer.
        let new_york = time_zone("America/New_York");
        assert_eq!(
            format_epoch(1_433_131_200, new_york).as_deref(),
            Some("2015-06-01")
        );
        assert_eq!(format_epoch(1_433_131_200, None).as_deref(), Some("2015-06-01"));

        // London midnight in summer is 23:00 UTC of the previous day.
        let london = time_zone("Europe/London");
        assert_eq!(
            format_epoch(1_433_113_200, london).as_deref(),
            Some("2015-06-01")
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            parse_date("15/01/2015"),
            Err(DataError::InvalidParameter(_))
        ));
        assert!(DateRange::parse("2017-10-15", "2015-01-15").is_err());
    }

    #[test]
    fn test_range_epochs() {
        let range = DateRange::parse("1986-09-15", "1987-09-15").unwrap();
        let (start, end) = range.to_epochs();
        assert!(start < end);
        assert_eq!(end - start, 366 * 86_400 - 1);
        assert_eq!(range.to_string(), "1986-09-15..1987-09-15");
    }

    #[test]
    fn test_range_includes_end_date() {
        let range = DateRange::parse("2024-01-02", "2024-01-05").unwrap();
        let (start, end) = range.to_epochs();
        assert_eq!(start, 1_704_153_600);
        assert_eq!(end, 1_704_499_199);
        // a regular session bar on the last day, 14:30 UTC
        assert!((start..=end).contains(&1_704_465_000));
        // but not the next day
        assert!(end < 1_704_499_200);

        let single = DateRange::parse("2024-01-05", "2024-01-05").unwrap();
        let (start, end) = single.to_epochs();
        assert_eq!(end - start, 86_399);
    }
}
