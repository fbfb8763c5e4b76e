//! Day status classification for reconstructed attendance.
//!
//! The status is a heuristic derived from a day's sessions and the current
//! wall-clock time. Someone who clocked out during working hours looks like
//! they are on a break until [`BREAK_GRACE_MINUTES`] have passed.

use crate::libs::attendance::WorkSession;
use crate::libs::formatter::parse_timestamp;
use chrono::{DateTime, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First local hour (inclusive) counted as working hours.
pub const WORKDAY_START_HOUR: u32 = 8;
/// Local hour (exclusive) at which working hours end.
pub const WORKDAY_END_HOUR: u32 = 18;
/// Minutes after the last TIME_OUT during which an employee counts as on break.
pub const BREAK_GRACE_MINUTES: f64 = 240.0;

/// Attendance status of one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Worked and clocked out for the day.
    Present,
    /// Has an open session.
    #[serde(rename = "Checked In")]
    CheckedIn,
    /// Clocked out recently during working hours.
    #[serde(rename = "On Break")]
    OnBreak,
    /// No sessions at all.
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::CheckedIn => "Checked In",
            AttendanceStatus::OnBreak => "On Break",
            AttendanceStatus::Absent => "Absent",
        };
        write!(f, "{}", label)
    }
}

/// Derives the status for `target_date` from its sessions, as seen at `now`.
///
/// Rules are evaluated in order:
/// 1. no sessions: `Absent`
/// 2. last session still open: `CheckedIn`
/// 3. `target_date` is today, the local hour is in `[8, 18)` and fewer than
///    240 minutes passed since the last TIME_OUT: `OnBreak`
/// 4. otherwise `Present`
pub fn classify(sessions: &[WorkSession], target_date: NaiveDate, now: DateTime<Local>) -> AttendanceStatus {
    let Some(last) = sessions.last() else {
        return AttendanceStatus::Absent;
    };

    let Some(time_out) = last.time_out.as_deref() else {
        return AttendanceStatus::CheckedIn;
    };

    let is_today = target_date == now.date_naive();
    let working_hours = (WORKDAY_START_HOUR..WORKDAY_END_HOUR).contains(&now.hour());

    if is_today && working_hours {
        if let Ok(last_out) = parse_timestamp(time_out) {
            let minutes_since_out = now.signed_duration_since(last_out).num_milliseconds() as f64 / 60_000.0;
            if minutes_since_out < BREAK_GRACE_MINUTES {
                return AttendanceStatus::OnBreak;
            }
        }
    }

    AttendanceStatus::Present
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).earliest().unwrap()
    }

    fn closed(time_in: &str, time_out: &str) -> WorkSession {
        WorkSession {
            time_in: time_in.to_string(),
            time_out: Some(time_out.to_string()),
            duration_minutes: Some(0),
        }
    }

    #[test]
    fn empty_day_is_absent() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(classify(&[], date, at(2024, 3, 1, 10, 0)), AttendanceStatus::Absent);
    }

    #[test]
    fn recent_clock_out_today_is_on_break() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let sessions = vec![closed("2024-03-01T08:00:00", "2024-03-01T12:00:00")];
        assert_eq!(classify(&sessions, date, at(2024, 3, 1, 12, 30)), AttendanceStatus::OnBreak);
    }

    #[test]
    fn grace_period_is_exclusive() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let sessions = vec![closed("2024-03-01T08:00:00", "2024-03-01T12:00:00")];
        assert_eq!(classify(&sessions, date, at(2024, 3, 1, 15, 59)), AttendanceStatus::OnBreak);
        assert_eq!(classify(&sessions, date, at(2024, 3, 1, 16, 0)), AttendanceStatus::Present);
    }

    #[test]
    fn outside_working_hours_is_present() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let sessions = vec![closed("2024-03-01T08:00:00", "2024-03-01T17:30:00")];
        assert_eq!(classify(&sessions, date, at(2024, 3, 1, 18, 0)), AttendanceStatus::Present);
    }

    #[test]
    fn working_hours_start_is_inclusive() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let sessions = vec![closed("2024-03-01T06:00:00", "2024-03-01T07:30:00")];
        assert_eq!(classify(&sessions, date, at(2024, 3, 1, 7, 59)), AttendanceStatus::Present);
        assert_eq!(classify(&sessions, date, at(2024, 3, 1, 8, 0)), AttendanceStatus::OnBreak);
    }

    #[test]
    fn recent_clock_out_on_another_day_is_present() {
        // The shift is filed under March 1st but ended an hour before `now`.
        let sessions = vec![closed("2024-03-02T07:00:00", "2024-03-02T09:00:00")];
        let now = at(2024, 3, 2, 10, 0);

        let previous_day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(classify(&sessions, previous_day, now), AttendanceStatus::Present);

        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(classify(&sessions, today, now), AttendanceStatus::OnBreak);
    }

    #[test]
    fn display_labels() {
        assert_eq!(AttendanceStatus::CheckedIn.to_string(), "Checked In");
        assert_eq!(AttendanceStatus::OnBreak.to_string(), "On Break");
    }
}
