//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{NaiveDate, NaiveDateTime};

/// Day shown in table cells, e.g. "2024-07-01"
pub fn format_date(dt: NaiveDate) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Timestamp shown for schedule submissions, e.g. "2024-06-26 14:30"
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Clock time shown for takeoffs and duty blocks, e.g. "08:30"
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
            "2024-07-01"
        );
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(dt("2024-06-26T14:30:00")), "2024-06-26 14:30");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(dt("2024-07-01T08:30:00")), "08:30");
        assert_eq!(format_time(dt("2024-07-01T13:05:59")), "13:05");
    }
}
