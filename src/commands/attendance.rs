//! Daily attendance board.
//!
//! Fetches the day's punches and the active roster in parallel, pairs the
//! punches into sessions and prints one row per employee. Employees without
//! punches are listed as absent.

use super::payroll_api;
use crate::{
    libs::{
        attendance::{process_punches, with_roster, AttendanceStats},
        config::Config,
        export::{ExportFormat, Exporter},
        formatter::format_date,
        messages::Message,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    /// Day to show: `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Also write the board to a file
    #[arg(short, long, value_enum)]
    export: Option<ExportFormat>,

    /// Export file path; defaults to a timestamped name in the working directory
    #[arg(short, long, requires = "export")]
    output: Option<PathBuf>,
}

pub async fn cmd(args: AttendanceArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let config = Config::read()?;
    let api = payroll_api(&config)?;

    let (punches, employees) = tokio::try_join!(api.attendance(date), api.employees())
        .with_context(|| Message::FetchFailed("attendance".to_string()))?;

    let days = with_roster(&employees, process_punches(&punches, date, Local::now()), date);
    if days.is_empty() {
        msg_info!(Message::NoAttendance(format_date(&date)));
        return Ok(());
    }

    msg_print!(Message::AttendanceHeader(format_date(&date)), true);
    View::attendance(&days)?;

    let stats = AttendanceStats::from_days(&days);
    msg_info!(Message::AttendanceSummary {
        total: stats.total,
        present: stats.present,
        checked_in: stats.checked_in,
        on_break: stats.on_break,
        absent: stats.absent,
    });

    if let Some(format) = args.export {
        Exporter::new(format, args.output)
            .export_attendance(&days)
            .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
    }

    Ok(())
}

/// Accepts `today` (any case) or an ISO date.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateArgument(date_str.to_string())))
}
