//! Attendance session reconstruction.
//!
//! The backend records attendance as a flat list of punches, each either a
//! TIME_IN or a TIME_OUT. This module pairs them into work sessions per
//! employee for a single calendar day and derives the day's totals and
//! status.
//!
//! ## Pairing rules
//!
//! Punches are processed in timestamp order with at most one open session:
//!
//! - **TIME_IN** while a session is open: the open session is kept as-is,
//!   without a TIME_OUT, and a new session starts.
//! - **TIME_OUT** with an open session: closes it and adds its duration to
//!   the day's total.
//! - **TIME_OUT** with no open session: dropped.
//! - A session still open at the end of the day is appended without a
//!   TIME_OUT and does not count towards the total.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paydesk::libs::attendance::{process_punches, PunchEvent};
//! use chrono::{Local, NaiveDate};
//!
//! let punches: Vec<PunchEvent> = serde_json::from_str("[]")?;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let days = process_punches(&punches, date, Local::now());
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::libs::employee::Employee;
use crate::libs::formatter::{format_local_date, minutes_between, parse_timestamp, timestamp_date};
use crate::libs::status::{classify, AttendanceStatus};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, warn};

/// Kind of punch recorded by the backend (`1` = TIME_IN, `2` = TIME_OUT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AttendanceType {
    TimeIn,
    TimeOut,
}

impl TryFrom<u8> for AttendanceType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AttendanceType::TimeIn),
            2 => Ok(AttendanceType::TimeOut),
            other => Err(format!("unknown attendance type {}", other)),
        }
    }
}

impl From<AttendanceType> for u8 {
    fn from(value: AttendanceType) -> Self {
        match value {
            AttendanceType::TimeIn => 1,
            AttendanceType::TimeOut => 2,
        }
    }
}

impl fmt::Display for AttendanceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttendanceType::TimeIn => write!(f, "TIME IN"),
            AttendanceType::TimeOut => write!(f, "TIME OUT"),
        }
    }
}

/// A single TIME_IN or TIME_OUT punch as returned by `GET attendance/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchEvent {
    pub id: u64,
    #[serde(rename = "employee")]
    pub employee_id: u64,
    /// ISO 8601 timestamp, kept verbatim so its date part can be read
    /// without timezone conversion.
    pub timestamp: String,
    pub attendance_type: AttendanceType,
}

/// A paired (or still open) interval between a TIME_IN and its TIME_OUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    pub time_in: String,
    /// `None` while the session is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_out: Option<String>,
    /// Present exactly when `time_out` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

impl WorkSession {
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }
}

/// One employee's reconstructed attendance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendance {
    pub employee_id: u64,
    /// Filled in when joined against the employee roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
    pub date: NaiveDate,
    pub sessions: Vec<WorkSession>,
    pub total_hours: f64,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_out: Option<String>,
}

impl DailyAttendance {
    /// A record for an employee with no punches on `date`.
    pub fn absent(employee_id: u64, date: NaiveDate) -> Self {
        Self {
            employee_id,
            employee: None,
            date,
            sessions: vec![],
            total_hours: 0.0,
            status: AttendanceStatus::Absent,
            first_in: None,
            last_out: None,
        }
    }

    /// Display name of the employee, or `#id` when not joined.
    pub fn employee_name(&self) -> String {
        match &self.employee {
            Some(employee) => employee.full_name(),
            None => format!("#{}", self.employee_id),
        }
    }
}

/// Result of pairing one employee's ordered punches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionPairing {
    pub sessions: Vec<WorkSession>,
    pub total_minutes: i64,
}

struct OpenSession {
    time_in: String,
    started: DateTime<Local>,
}

impl From<OpenSession> for WorkSession {
    fn from(open: OpenSession) -> Self {
        WorkSession {
            time_in: open.time_in,
            time_out: None,
            duration_minutes: None,
        }
    }
}

/// Pairs chronologically ordered punches into sessions.
///
/// Each punch comes with its parsed instant. See the module docs for the
/// rules applied to unmatched punches.
pub fn pair_punches(punches: &[(DateTime<Local>, &PunchEvent)]) -> SessionPairing {
    let mut pairing = SessionPairing::default();
    let mut current: Option<OpenSession> = None;

    for (instant, punch) in punches {
        match punch.attendance_type {
            AttendanceType::TimeIn => {
                if let Some(open) = current.take() {
                    debug!(punch_id = punch.id, "consecutive TIME_IN, previous session left open");
                    pairing.sessions.push(open.into());
                }
                current = Some(OpenSession {
                    time_in: punch.timestamp.clone(),
                    started: *instant,
                });
            }
            AttendanceType::TimeOut => match current.take() {
                Some(open) => {
                    let duration = minutes_between(&open.started, instant);
                    pairing.total_minutes += duration;
                    pairing.sessions.push(WorkSession {
                        time_in: open.time_in,
                        time_out: Some(punch.timestamp.clone()),
                        duration_minutes: Some(duration),
                    });
                }
                None => {
                    warn!(punch_id = punch.id, "orphan TIME_OUT dropped");
                }
            },
        }
    }

    if let Some(open) = current {
        pairing.sessions.push(open.into());
    }

    pairing
}

/// Reconstructs every employee's attendance on `target_date`.
///
/// Only punches whose timestamp text starts with `target_date` are used.
/// Punches with unreadable timestamps cannot be ordered and are skipped.
/// The result holds one record per employee with at least one punch that
/// day, ordered by employee id. `now` drives the status heuristic.
pub fn process_punches(punches: &[PunchEvent], target_date: NaiveDate, now: DateTime<Local>) -> Vec<DailyAttendance> {
    let target = format_local_date(&target_date);
    let mut by_employee: BTreeMap<u64, Vec<(DateTime<Local>, &PunchEvent)>> = BTreeMap::new();

    for punch in punches.iter().filter(|p| timestamp_date(&p.timestamp) == target) {
        match parse_timestamp(&punch.timestamp) {
            Ok(instant) => by_employee.entry(punch.employee_id).or_default().push((instant, punch)),
            Err(e) => warn!(punch_id = punch.id, error = %e, "skipping punch"),
        }
    }

    by_employee
        .into_iter()
        .map(|(employee_id, mut day)| {
            // Stable, so equal timestamps keep backend order.
            day.sort_by_key(|(instant, _)| *instant);

            let SessionPairing { sessions, total_minutes } = pair_punches(&day);
            let status = classify(&sessions, target_date, now);
            let first_in = sessions.first().map(|s| s.time_in.clone());
            let last_out = sessions.last().and_then(|s| s.time_out.clone());

            debug!(employee_id, sessions = sessions.len(), total_minutes, %status, "attendance reconstructed");

            DailyAttendance {
                employee_id,
                employee: None,
                date: target_date,
                sessions,
                total_hours: total_minutes as f64 / 60.0,
                status,
                first_in,
                last_out,
            }
        })
        .collect()
}

/// Joins attendance against the full roster.
///
/// Returns one record per roster employee, in roster order. Employees with
/// no attendance get an `Absent` record dated like the others, or
/// `fallback_date` when there is no attendance at all.
pub fn with_roster(employees: &[Employee], attendance: Vec<DailyAttendance>, fallback_date: NaiveDate) -> Vec<DailyAttendance> {
    let date = attendance.first().map(|a| a.date).unwrap_or(fallback_date);
    let mut by_id: HashMap<u64, DailyAttendance> = attendance.into_iter().map(|a| (a.employee_id, a)).collect();

    employees
        .iter()
        .map(|employee| {
            let mut day = by_id.remove(&employee.id).unwrap_or_else(|| DailyAttendance::absent(employee.id, date));
            day.employee = Some(employee.clone());
            day
        })
        .collect()
}

/// Headcounts per status for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub checked_in: usize,
    pub on_break: usize,
    pub absent: usize,
}

impl AttendanceStats {
    pub fn from_days(days: &[DailyAttendance]) -> Self {
        days.iter().fold(Self::default(), |mut stats, day| {
            stats.total += 1;
            match day.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::CheckedIn => stats.checked_in += 1,
                AttendanceStatus::OnBreak => stats.on_break += 1,
                AttendanceStatus::Absent => stats.absent += 1,
            }
            stats
        })
    }
}
