//! # Paydesk
//!
//! Library and command-line client for a payroll/HR REST backend.
//!
//! ## Features
//!
//! - **Attendance**: pairs raw TIME_IN/TIME_OUT punches into work sessions
//!   and classifies each employee's day
//! - **Pay periods**: weekly, biweekly and monthly ranges with working-day
//!   counts
//! - **Proration**: monthly allowances, deductions and salaries per pay
//!   frequency, plus leave compensation
//! - **Payslips**: breakdown preview, list statistics and generation
//! - **Export**: attendance boards and payslip lists to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paydesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
