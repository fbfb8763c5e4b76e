//! Typed errors for payroll arithmetic and backend communication.
//!
//! Command handlers work with `anyhow::Result`; the variants here are the
//! failures callers may want to match on (an expired session, a payslip
//! with no working days).

use thiserror::Error;

/// Errors raised by the payroll calculators and the API client.
#[derive(Debug, Error, PartialEq)]
pub enum PayrollError {
    /// A monthly-salary computation needs a positive working-day count.
    #[error("total working days must be positive, got {0}")]
    InvalidWorkingDays(i64),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("unknown period type: {0}")]
    UnknownPeriodType(String),
    #[error("unknown pay frequency: {0}")]
    UnknownPayFrequency(String),
    /// Custom periods are entered by hand and have no computed range.
    #[error("custom periods have no computed date range")]
    CustomPeriodHasNoRange,
    #[error("session expired or not authorized")]
    Unauthorized,
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },
}
