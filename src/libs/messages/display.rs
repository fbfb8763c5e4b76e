//! Text of every [`Message`] variant.
//!
//! All wording lives in this one `match`, so adding a variant forces a
//! decision on how it reads.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIG ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration and stored session removed".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModulePayroll => "Payroll defaults".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to toggle)".to_string(),
            Message::PromptApiUrl => "Payroll API base URL".to_string(),
            Message::PromptDefaultPeriod => "Default pay period (weekly, biweekly, monthly)".to_string(),
            Message::PromptDefaultFrequency => "Default pay frequency (weekly, biweekly, semi_monthly, monthly)".to_string(),
            Message::PromptCurrency => "Currency code".to_string(),

            // === AUTH ===
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::LoginSuccess(username) => format!("Logged in as {}", username),
            Message::LoginFailed(error) => format!("Login failed: {}", error),
            Message::LoggedOut => "Logged out".to_string(),
            Message::LogoutRequestFailed(error) => format!("Logout request failed, local session cleared anyway: {}", error),
            Message::SessionExpired => "Session expired. Run `paydesk login` to sign in again".to_string(),
            Message::NotLoggedIn => "Not logged in. Run `paydesk login` first".to_string(),
            Message::SignedInAs { username, name, role } => format!("Signed in as {} ({}), role: {}", name, username, role),

            // === ATTENDANCE ===
            Message::AttendanceHeader(date) => format!("Attendance for {}", date),
            Message::AttendanceSummary {
                total,
                present,
                checked_in,
                on_break,
                absent,
            } => format!(
                "{} employees: {} present, {} checked in, {} on break, {} absent",
                total, present, checked_in, on_break, absent
            ),
            Message::NoAttendance(date) => format!("No attendance recorded for {}", date),
            Message::InvalidDateArgument(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),

            // === PERIODS AND PRORATION ===
            Message::PeriodHeader(label) => format!("Pay period: {}", label),
            Message::ProrationHeader(amount) => format!("{} per month by pay frequency", amount),
            Message::ProrationResult { monthly, frequency, amount } => {
                format!("{} per month is {} per {} pay period", monthly, amount, frequency)
            }

            // === PAYSLIPS ===
            Message::PayslipsHeader => "Payslips".to_string(),
            Message::PayslipHeader(id, name) => format!("Payslip #{} for {}", id, name),
            Message::NoPayslips => "No payslips found".to_string(),
            Message::PayslipNotFound(id) => format!("Payslip #{} not found", id),
            Message::PayslipRequestFailed(id) => format!("Request for payslip #{} failed", id),
            Message::NoEmployeesToGenerate => "No active employees to generate payslips for".to_string(),
            Message::WorkingDaysOverride(days) => format!("Using {} working days instead of the weekday count", days),
            Message::GeneratingPayslips { count, period } => {
                format!("Generating payslips for {} employee(s), {}", count, period)
            }
            Message::PayslipsGenerated(count) => format!("{} payslip(s) generated", count),
            Message::BulkGenerating(period) => format!("Generating payslips in bulk for {}", period),
            Message::PayslipStatusUpdated(id, status) => format!("Payslip #{} is now {}", id, status),
            Message::PromptConfirmDelete(id, name) => format!("Delete payslip #{} for {}?", id, name),
            Message::PayslipDeleted(id) => format!("Payslip #{} deleted", id),
            Message::DeleteCancelled => "Nothing deleted".to_string(),

            // === EMPLOYEES ===
            Message::EmployeesHeader => "Employees".to_string(),
            Message::NoEmployees => "No active employees".to_string(),

            // === EXPORT ===
            Message::ExportCompleted(path) => format!("Data exported to {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === ERRORS ===
            Message::FetchFailed(what) => format!("Failed to load {}", what),
        };

        write!(f, "{}", text)
    }
}
