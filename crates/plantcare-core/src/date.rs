//! Calendar-date parsing and arithmetic.
//!
//! The scheduler works on whole calendar days. Timestamps are reduced to the
//! date they carry in their own offset, so `2024-06-01T23:30:00-05:00` is
//! June 1st even though it is June 2nd in UTC. Care timestamps keep the
//! offset they were recorded with, in memory and in storage.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime};

use crate::error::{CoreError, Result};

const ISO_DAY: &str = "%Y-%m-%d";

/// A care timestamp together with the offset it was recorded in.
pub type Timestamp = DateTime<FixedOffset>;

/// Parse a `yyyy-MM-dd` day, or take the calendar date of an RFC 3339 timestamp.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, ISO_DAY) {
        return Ok(day);
    }
    DateTime::<FixedOffset>::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| CoreError::InvalidDate {
            input: input.to_string(),
        })
}

/// Parse a timestamp, keeping its offset. A bare `yyyy-MM-dd` is read as
/// midnight UTC.
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DAY)
        .map(|day| day.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        .map_err(|_| CoreError::InvalidDate {
            input: input.to_string(),
        })
}

/// Format a day as ISO `yyyy-MM-dd`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(ISO_DAY).to_string()
}

/// Calendar date of a timestamp in its own offset.
pub fn calendar_day(ts: Timestamp) -> NaiveDate {
    ts.date_naive()
}

/// `day + days`, saturating at the calendar bounds.
pub fn add_days(day: NaiveDate, days: i64) -> NaiveDate {
    day.checked_add_signed(Duration::days(days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Month number 1..=12.
pub fn month_of(day: NaiveDate) -> u8 {
    day.month() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_plain_day() {
        assert_eq!(parse_day("2024-01-04").unwrap(), d(2024, 1, 4));
        assert_eq!(parse_day(" 2024-01-04 ").unwrap(), d(2024, 1, 4));
    }

    #[test]
    fn timestamp_keeps_its_own_calendar_date() {
        assert_eq!(parse_day("2024-06-01T09:00:00Z").unwrap(), d(2024, 6, 1));
        assert_eq!(parse_day("2024-06-01T23:30:00-05:00").unwrap(), d(2024, 6, 1));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_day("yesterday"),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(parse_day("2024-02-30").is_err());
        assert!(parse_timestamp("06/01/2024").is_err());
    }

    #[test]
    fn bare_day_timestamp_is_midnight_utc() {
        let ts = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn timestamp_keeps_offset_for_calendar_day() {
        let ts = parse_timestamp("2024-06-01T23:30:00-05:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T23:30:00-05:00");
        assert_eq!(calendar_day(ts), d(2024, 6, 1));

        let east = parse_timestamp("2024-06-02T00:30:00+09:00").unwrap();
        assert_eq!(calendar_day(east), d(2024, 6, 2));
    }

    #[test]
    fn arithmetic_crosses_month_and_leap_day() {
        assert_eq!(add_days(d(2024, 2, 27), 3), d(2024, 3, 1));
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 4)), 3);
        assert_eq!(days_between(d(2024, 1, 4), d(2024, 1, 1)), -3);
        assert_eq!(format_day(d(2024, 3, 9)), "2024-03-09");
    }
}
