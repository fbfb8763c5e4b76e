//! Export of attendance and payslip listings to CSV or JSON files.
//!
//! Rows are flattened into [`AttendanceRow`] and [`PayslipRow`] first so
//! both formats carry the same columns. CSV goes through the `csv` crate,
//! JSON is pretty-printed with `serde_json`.
//!
//! Without an explicit path the file is created in the working directory as
//! `paydesk_export_YYYYMMDD_HHMMSS.<ext>`.

use crate::libs::attendance::DailyAttendance;
use crate::libs::employee::Payslip;
use crate::libs::formatter::{format_local_date, format_time_str};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One employee's day in an attendance export.
#[derive(Debug, Serialize)]
pub struct AttendanceRow {
    pub employee_id: u64,
    pub employee: String,
    pub date: String,
    pub first_in: String,
    pub last_out: String,
    pub sessions: usize,
    pub total_hours: String,
    pub status: String,
}

impl From<&DailyAttendance> for AttendanceRow {
    fn from(day: &DailyAttendance) -> Self {
        Self {
            employee_id: day.employee_id,
            employee: day.employee_name(),
            date: format_local_date(&day.date),
            first_in: day.first_in.as_deref().map(format_time_str).unwrap_or_default(),
            last_out: day.last_out.as_deref().map(format_time_str).unwrap_or_default(),
            sessions: day.sessions.len(),
            total_hours: format!("{:.2}", day.total_hours),
            status: day.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayslipRow {
    pub id: u64,
    pub employee: String,
    pub start_date: String,
    pub end_date: String,
    pub total_working_days: i64,
    pub days_worked: f64,
    pub gross_salary: String,
    pub net_salary: String,
    pub status: String,
}

impl From<&Payslip> for PayslipRow {
    fn from(payslip: &Payslip) -> Self {
        Self {
            id: payslip.id,
            employee: payslip.employee.full_name(),
            start_date: format_local_date(&payslip.start_date),
            end_date: format_local_date(&payslip.end_date),
            total_working_days: payslip.total_working_days,
            days_worked: payslip.days_worked,
            gross_salary: format!("{:.2}", payslip.gross_salary),
            net_salary: format!("{:.2}", payslip.net_salary),
            status: payslip.status.to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("paydesk_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_attendance(&self, days: &[DailyAttendance]) -> Result<()> {
        let rows: Vec<AttendanceRow> = days.iter().map(AttendanceRow::from).collect();
        self.write(
            &["Employee ID", "Employee", "Date", "First In", "Last Out", "Sessions", "Total Hours", "Status"],
            &rows,
            |row| {
                vec![
                    row.employee_id.to_string(),
                    row.employee.clone(),
                    row.date.clone(),
                    row.first_in.clone(),
                    row.last_out.clone(),
                    row.sessions.to_string(),
                    row.total_hours.clone(),
                    row.status.clone(),
                ]
            },
        )
    }

    pub fn export_payslips(&self, payslips: &[Payslip]) -> Result<()> {
        let rows: Vec<PayslipRow> = payslips.iter().map(PayslipRow::from).collect();
        self.write(
            &["ID", "Employee", "Start", "End", "Working Days", "Days Worked", "Gross", "Net", "Status"],
            &rows,
            |row| {
                vec![
                    row.id.to_string(),
                    row.employee.clone(),
                    row.start_date.clone(),
                    row.end_date.clone(),
                    row.total_working_days.to_string(),
                    row.days_worked.to_string(),
                    row.gross_salary.clone(),
                    row.net_salary.clone(),
                    row.status.clone(),
                ]
            },
        )
    }

    fn write<T, F>(&self, headers: &[&str], rows: &[T], record: F) -> Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> Vec<String>,
    {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(headers)?;
                for row in rows {
                    wtr.write_record(record(row))?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }
}
