//! Date and time utility functions
//!
//! All write timestamps come from [`now`], which truncates to millisecond
//! precision so a record read back from SQLite compares equal to the one
//! that was written.

use chrono::{DateTime, Datelike, NaiveDate, SubsecRound, Utc};

/// Date format used for `publishedAt` and other date-only fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current UTC time at millisecond precision
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Calendar year of the given instant as a string (e.g. "2026")
pub fn year_of(instant: DateTime<Utc>) -> String {
    instant.year().to_string()
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Date part of the given instant in YYYY-MM-DD format
pub fn date_of(instant: DateTime<Utc>) -> String {
    format_ymd(instant.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_millisecond_precision() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_calendar_parts() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(year_of(instant), "2024");
        assert_eq!(date_of(instant), "2024-12-31");
    }
}
