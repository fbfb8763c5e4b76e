//! Conversion of monthly-denominated amounts to per-pay-period amounts.
//!
//! Allowances, deductions, and monthly salaries are stored per month. A
//! payslip issued at a shorter frequency shows them divided by a fixed
//! factor:
//!
//! | Frequency      | Divisor |
//! |----------------|---------|
//! | weekly         | 4.33    |
//! | biweekly       | 2.17    |
//! | semi-monthly   | 2       |
//! | monthly        | 1       |
//!
//! The factors are fixed approximations of 52/12 and 26/12 and must not be
//! recomputed from the calendar; payslip totals are compared against them.
//!
//! Base pay for monthly employees uses the same table except that
//! semi-monthly payslips divide by 4.33. Allowances and deductions divide
//! semi-monthly amounts by 2. Both paths are kept as the backend reports
//! them.

use crate::libs::employee::{Employee, Leave, SalaryType};
use crate::libs::error::PayrollError;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const BIWEEKS_PER_MONTH: f64 = 2.17;
pub const SEMI_MONTHS_PER_MONTH: f64 = 2.0;
/// Hours in a paid day for hourly employees.
pub const HOURS_PER_DAY: f64 = 8.0;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    #[value(name = "semi_monthly")]
    SemiMonthly,
    #[default]
    Monthly,
}

impl PayFrequency {
    /// Divisor applied to monthly allowances and deductions.
    pub fn divisor(&self) -> f64 {
        match self {
            PayFrequency::Weekly => WEEKS_PER_MONTH,
            PayFrequency::Biweekly => BIWEEKS_PER_MONTH,
            PayFrequency::SemiMonthly => SEMI_MONTHS_PER_MONTH,
            PayFrequency::Monthly => 1.0,
        }
    }

    /// Divisor applied to a monthly salary for base pay.
    pub fn base_pay_divisor(&self) -> f64 {
        match self {
            PayFrequency::Weekly | PayFrequency::SemiMonthly => WEEKS_PER_MONTH,
            PayFrequency::Biweekly => BIWEEKS_PER_MONTH,
            PayFrequency::Monthly => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Weekly",
            PayFrequency::Biweekly => "Bi-weekly",
            PayFrequency::SemiMonthly => "Semi-monthly",
            PayFrequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Biweekly => "biweekly",
            PayFrequency::SemiMonthly => "semi_monthly",
            PayFrequency::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PayFrequency {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(PayFrequency::Weekly),
            "biweekly" => Ok(PayFrequency::Biweekly),
            "semi_monthly" => Ok(PayFrequency::SemiMonthly),
            "monthly" => Ok(PayFrequency::Monthly),
            _ => Err(PayrollError::UnknownPayFrequency(s.to_string())),
        }
    }
}

/// Converts a monthly amount to the amount for one pay period.
pub fn prorate(monthly_amount: f64, frequency: PayFrequency) -> f64 {
    monthly_amount / frequency.divisor()
}

fn require_working_days(total_working_days: i64) -> Result<f64, PayrollError> {
    if total_working_days <= 0 {
        return Err(PayrollError::InvalidWorkingDays(total_working_days));
    }
    Ok(total_working_days as f64)
}

/// Base pay for one payslip.
///
/// Hourly employees earn `rate * regular_hours`. Monthly employees earn the
/// period's share of their salary scaled by `days_worked / total_working_days`.
///
/// # Errors
///
/// `InvalidWorkingDays` when a monthly employee's payslip has no positive
/// working-day count.
pub fn base_pay(
    employee: &Employee,
    frequency: PayFrequency,
    regular_hours: f64,
    days_worked: f64,
    total_working_days: i64,
) -> Result<f64, PayrollError> {
    match employee.salary_type {
        SalaryType::Hourly => Ok(employee.base_salary * regular_hours),
        SalaryType::Monthly => {
            let total = require_working_days(total_working_days)?;
            let period_salary = employee.base_salary / frequency.base_pay_divisor();
            Ok(period_salary * (days_worked / total))
        }
    }
}

/// Pay for one day of leave: 8 hours for hourly employees, the monthly
/// salary spread over the working days otherwise.
pub fn daily_rate(employee: &Employee, total_working_days: i64) -> Result<f64, PayrollError> {
    match employee.salary_type {
        SalaryType::Hourly => Ok(employee.base_salary * HOURS_PER_DAY),
        SalaryType::Monthly => Ok(employee.base_salary / require_working_days(total_working_days)?),
    }
}

/// Days of `leave` falling inside `[start, end]`, both ends inclusive.
pub fn leave_days_in_period(leave: &Leave, start: NaiveDate, end: NaiveDate) -> Option<i64> {
    let overlap_start = leave.start_date.max(start);
    let overlap_end = leave.end_date.min(end);

    if overlap_start > overlap_end {
        return None;
    }
    Some((overlap_end - overlap_start).num_days() + 1)
}

/// Leaves that earn compensation: approved paid or sick leave.
pub fn is_compensated(leave: &Leave) -> bool {
    leave.is_approved && leave.leave_type.compensation_rate().is_some()
}

/// Total compensation for approved paid (100%) and sick (50%) leave
/// overlapping the payslip period.
///
/// The daily rate is only computed when some leave qualifies, so a payslip
/// without leave never fails on its working-day count.
pub fn leave_compensation(
    employee: &Employee,
    leaves: &[Leave],
    start: NaiveDate,
    end: NaiveDate,
    total_working_days: i64,
) -> Result<f64, PayrollError> {
    let compensated: Vec<(i64, f64)> = leaves
        .iter()
        .filter(|leave| is_compensated(leave))
        .filter_map(|leave| {
            let days = leave_days_in_period(leave, start, end)?;
            let rate = leave.leave_type.compensation_rate()?;
            Some((days, rate))
        })
        .collect();

    if compensated.is_empty() {
        return Ok(0.0);
    }

    let daily = daily_rate(employee, total_working_days)?;
    Ok(compensated.iter().map(|(days, rate)| *days as f64 * daily * rate).sum())
}
