// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.
//!
//! The shift service has no timezone context, so calendar dates and
//! clock times are derived in UTC.

use chrono::{DateTime, NaiveDate, Utc};

/// Convert epoch milliseconds to a UTC timestamp.
pub fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// The UTC calendar date a timestamp falls on.
pub fn calendar_date(millis: i64) -> NaiveDate {
    datetime_from_millis(millis).date_naive()
}

/// Clock time as "HH:MM", e.g. "09:30".
pub fn format_clock_time(millis: i64) -> String {
    datetime_from_millis(millis).format("%H:%M").to_string()
}

/// Date header label: "Today" for the current date, otherwise the long
/// form, e.g. "January 15, 2024".
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}
