//! Display formatting for timestamps, durations, dates, and money.
//!
//! Backend timestamps arrive as ISO 8601 strings, either with an explicit
//! offset (`2024-03-01T08:00:00Z`) or as bare wall-clock values
//! (`2024-03-01T08:00:00`). Bare values are read as local time. All helpers
//! here are pure and never panic.
//!
//! ## Examples
//!
//! ```rust
//! use paydesk::libs::formatter::{format_duration_minutes, format_currency};
//!
//! assert_eq!(format_duration_minutes(90), "1h 30m");
//! assert_eq!(format_currency(10138.25, "PHP"), "PHP 10,138.25");
//! ```

use crate::libs::error::PayrollError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Offset-less layouts accepted for backend timestamps.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO 8601 timestamp into local time.
///
/// Timestamps carrying an offset are converted; bare timestamps are taken as
/// local wall-clock time. During a DST fold the earlier instant wins.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Local>, PayrollError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .ok_or_else(|| PayrollError::InvalidTimestamp(value.to_string()))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, PayrollError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| PayrollError::InvalidDate(value.to_string()))
}

/// Returns the calendar date written in the timestamp itself.
///
/// This is the first ten characters of the ISO string, whatever separates
/// date and time; no timezone conversion happens, so
/// `2024-03-01T23:30:00-05:00` belongs to March 1st regardless of where the
/// program runs. Shorter strings are returned whole.
pub fn timestamp_date(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}

/// Whole minutes between two instants, rounded to the nearest minute.
pub fn minutes_between(start: &DateTime<Local>, end: &DateTime<Local>) -> i64 {
    let millis = end.signed_duration_since(*start).num_milliseconds();
    (millis as f64 / 60_000.0).round() as i64
}

/// Formats a timestamp as a 12-hour clock time, e.g. `8:05 AM`.
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Formats a raw ISO timestamp as a clock time, falling back to the raw text.
pub fn format_time_str(value: &str) -> String {
    match parse_timestamp(value) {
        Ok(ts) => format_time(&ts),
        Err(_) => value.to_string(),
    }
}

/// Formats a minute count as `45m`, `2h` or `2h 15m`.
pub fn format_duration_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{}m", mins);
    }
    if mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h {}m", hours, mins)
}

/// Formats fractional hours with one decimal, e.g. `7.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// Formats a date as `Mar 1, 2024`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a date as `YYYY-MM-DD` from its calendar components.
pub fn format_local_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats an amount with a currency code and thousands separators.
///
/// Non-finite amounts are rendered as `NaN` rather than hidden.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if !amount.is_finite() {
        return format!("{} NaN", currency);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{} {}{}.{:02}", currency, sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_date_ignores_offset() {
        assert_eq!(timestamp_date("2024-03-01T23:30:00-05:00"), "2024-03-01");
        assert_eq!(timestamp_date("2024-03-01"), "2024-03-01");
        assert_eq!(timestamp_date("2024-03-01 08:00:00+00:00"), "2024-03-01");
        assert_eq!(timestamp_date("2024"), "2024");
    }

    #[test]
    fn parses_naive_and_offset_timestamps() {
        assert!(parse_timestamp("2024-03-01T08:00:00").is_ok());
        assert!(parse_timestamp("2024-03-01T08:00").is_ok());
        assert!(parse_timestamp("2024-03-01 08:00:00").is_ok());
        assert!(parse_timestamp("2024-03-01 08:00:00+00:00").is_ok());
        assert!(parse_timestamp("2024-03-01T08:00:00.123456Z").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0, "PHP"), "PHP 0.00");
        assert_eq!(format_currency(999.999, "PHP"), "PHP 1,000.00");
        assert_eq!(format_currency(-1234567.5, "USD"), "USD -1,234,567.50");
        assert_eq!(format_currency(f64::INFINITY, "PHP"), "PHP NaN");
    }
}
