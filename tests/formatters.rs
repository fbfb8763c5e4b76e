#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone, Timelike};
    use paydesk::libs::error::PayrollError;
    use paydesk::libs::formatter::{
        format_currency, format_date, format_duration_minutes, format_hours, format_local_date, format_time,
        format_time_str, minutes_between, parse_date, parse_timestamp, timestamp_date,
    };

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration_minutes(0), "0m");
        assert_eq!(format_duration_minutes(45), "45m");
        assert_eq!(format_duration_minutes(60), "1h");
        assert_eq!(format_duration_minutes(120), "2h");
        assert_eq!(format_duration_minutes(135), "2h 15m");
        assert_eq!(format_duration_minutes(601), "10h 1m");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "0.0h");
        assert_eq!(format_hours(7.5), "7.5h");
        assert_eq!(format_hours(8.04), "8.0h");
        assert_eq!(format_hours(1.0 / 3.0), "0.3h");
    }

    #[test]
    fn test_format_time_twelve_hour_clock() {
        let morning = Local.with_ymd_and_hms(2024, 3, 1, 8, 5, 0).unwrap();
        let evening = Local.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap();
        let midnight = Local.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let noon = Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(format_time(&morning), "8:05 AM");
        assert_eq!(format_time(&evening), "5:30 PM");
        assert_eq!(format_time(&midnight), "12:00 AM");
        assert_eq!(format_time(&noon), "12:00 PM");
    }

    #[test]
    fn test_format_time_str() {
        assert_eq!(format_time_str("2024-03-01T13:45:00"), "1:45 PM");
        assert_eq!(format_time_str("not a time"), "not a time");
    }

    #[test]
    fn test_parse_naive_timestamp_as_local_wall_clock() {
        let ts = parse_timestamp("2024-03-01T08:15:30").unwrap();

        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (8, 15, 30));
    }

    #[test]
    fn test_parse_offset_timestamp_keeps_instant() {
        let utc = parse_timestamp("2024-03-01T08:00:00Z").unwrap();
        let shifted = parse_timestamp("2024-03-01T10:00:00+02:00").unwrap();

        assert_eq!(utc, shifted);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(
            parse_timestamp("2024-13-01T08:00:00"),
            Err(PayrollError::InvalidTimestamp("2024-13-01T08:00:00".to_string()))
        );
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(parse_date("2023-02-29"), Err(PayrollError::InvalidDate("2023-02-29".to_string())));
        assert!(parse_date("03/01/2024").is_err());
    }

    #[test]
    fn test_timestamp_date_reads_text() {
        assert_eq!(timestamp_date("2024-03-01T23:59:59+14:00"), "2024-03-01");
        assert_eq!(timestamp_date("2024-03-01T00:00:00-12:00"), "2024-03-01");
    }

    #[test]
    fn test_minutes_between_rounds() {
        let start = Local.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

        assert_eq!(minutes_between(&start, &(start + chrono::Duration::seconds(29))), 0);
        assert_eq!(minutes_between(&start, &(start + chrono::Duration::seconds(30))), 1);
        assert_eq!(minutes_between(&start, &(start + chrono::Duration::minutes(90))), 90);
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(format_date(&date), "Mar 1, 2024");
        assert_eq!(format_local_date(&date), "2024-03-01");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10138.248847, "PHP"), "PHP 10,138.25");
        assert_eq!(format_currency(1000000.0, "PHP"), "PHP 1,000,000.00");
        assert_eq!(format_currency(12.5, "USD"), "USD 12.50");
        assert_eq!(format_currency(-0.5, "PHP"), "PHP -0.50");
        assert_eq!(format_currency(f64::NAN, "PHP"), "PHP NaN");
    }
}
