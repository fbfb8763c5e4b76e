//! Backend record models for employees, compensation items, leaves, and
//! payslips.
//!
//! Decimal fields arrive from the backend as strings (`"22000.00"`); they are
//! read into `f64` with [`deserialize_amount`], which also accepts plain
//! numbers and treats an empty string as zero.

use crate::libs::period::PayPeriod;
use crate::libs::proration::PayFrequency;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Reads a decimal amount sent either as a JSON number or a string.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(n),
        RawAmount::Text(s) if s.trim().is_empty() => Ok(0.0),
        RawAmount::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// How an employee's `base_salary` is denominated (`1` = hourly, `2` = monthly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SalaryType {
    Hourly,
    Monthly,
}

impl TryFrom<u8> for SalaryType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SalaryType::Hourly),
            2 => Ok(SalaryType::Monthly),
            other => Err(format!("unknown salary type {}", other)),
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SalaryType::Hourly => write!(f, "Hourly"),
            SalaryType::Monthly => write!(f, "Monthly"),
        }
    }
}

impl From<SalaryType> for u8 {
    fn from(value: SalaryType) -> Self {
        match value {
            SalaryType::Hourly => 1,
            SalaryType::Monthly => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub user: User,
    pub salary_type: SalaryType,
    /// Hourly rate or monthly salary, depending on `salary_type`.
    #[serde(deserialize_with = "deserialize_amount")]
    pub base_salary: f64,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.user.first_name, self.user.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.user.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allowance {
    pub id: u64,
    #[serde(default)]
    pub employee: Option<u64>,
    /// Monthly-denominated amount.
    #[serde(deserialize_with = "deserialize_amount")]
    pub value: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub allowance_type: u8,
    #[serde(default)]
    pub is_taxable: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Allowance {
    /// The description if set, otherwise the allowance type's name.
    pub fn label(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => match self.allowance_type {
                0 => "Meal Allowance".to_string(),
                1 => "Transportation Allowance".to_string(),
                2 => "Medical Allowance".to_string(),
                3 => "Bonus".to_string(),
                other => format!("Allowance #{}", other),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deduction {
    pub id: u64,
    #[serde(default)]
    pub employee: Option<u64>,
    /// Monthly-denominated amount.
    #[serde(deserialize_with = "deserialize_amount")]
    pub value: f64,
    pub deduction_type: u8,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Deduction {
    pub fn label(&self) -> String {
        match self.deduction_type {
            0 => "Loan".to_string(),
            1 => "Health Insurance".to_string(),
            2 => "Social Security".to_string(),
            3 => "Others".to_string(),
            other => format!("Deduction #{}", other),
        }
    }
}

/// Leave category (`0` = paid .. `4` = half day). Only paid and sick
/// leave are compensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LeaveType {
    PaidLeave,
    Sick,
    Maternity,
    WithoutPay,
    HalfDay,
}

impl LeaveType {
    /// Fraction of the daily rate paid for a day of this leave.
    pub fn compensation_rate(&self) -> Option<f64> {
        match self {
            LeaveType::PaidLeave => Some(1.0),
            LeaveType::Sick => Some(0.5),
            LeaveType::Maternity | LeaveType::WithoutPay | LeaveType::HalfDay => None,
        }
    }
}

impl TryFrom<u8> for LeaveType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LeaveType::PaidLeave),
            1 => Ok(LeaveType::Sick),
            2 => Ok(LeaveType::Maternity),
            3 => Ok(LeaveType::WithoutPay),
            4 => Ok(LeaveType::HalfDay),
            other => Err(format!("unknown leave type {}", other)),
        }
    }
}

impl From<LeaveType> for u8 {
    fn from(value: LeaveType) -> Self {
        match value {
            LeaveType::PaidLeave => 0,
            LeaveType::Sick => 1,
            LeaveType::Maternity => 2,
            LeaveType::WithoutPay => 3,
            LeaveType::HalfDay => 4,
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            LeaveType::PaidLeave => "Paid Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::WithoutPay => "Leave Without Pay",
            LeaveType::HalfDay => "Half Day Leave",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: u64,
    pub employee: u64,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub details: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_approved: bool,
}

/// Payslip workflow state (`1` = draft .. `5` = cancelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PayslipStatus {
    Draft,
    Generated,
    Approved,
    Paid,
    Cancelled,
}

impl TryFrom<u8> for PayslipStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PayslipStatus::Draft),
            2 => Ok(PayslipStatus::Generated),
            3 => Ok(PayslipStatus::Approved),
            4 => Ok(PayslipStatus::Paid),
            5 => Ok(PayslipStatus::Cancelled),
            other => Err(format!("unknown payslip status {}", other)),
        }
    }
}

impl From<PayslipStatus> for u8 {
    fn from(value: PayslipStatus) -> Self {
        match value {
            PayslipStatus::Draft => 1,
            PayslipStatus::Generated => 2,
            PayslipStatus::Approved => 3,
            PayslipStatus::Paid => 4,
            PayslipStatus::Cancelled => 5,
        }
    }
}

impl fmt::Display for PayslipStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub id: u64,
    pub employee: Employee,
    pub total_working_days: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub days_worked: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_hours: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub regular_hours: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub gross_salary: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub net_salary: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub withholding_tax: f64,
    pub status: PayslipStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub generated_at: String,
    #[serde(default)]
    pub approved_at: Option<String>,
    /// Missing means monthly.
    #[serde(default)]
    pub pay_frequency: Option<PayFrequency>,
}

impl Payslip {
    pub fn frequency(&self) -> PayFrequency {
        self.pay_frequency.unwrap_or_default()
    }
}

/// Body of `POST payroll/payslips/generate/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePayslipsRequest {
    pub employee_ids: Vec<u64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_working_days: i64,
    pub auto_calculate_attendance: bool,
    pub pay_frequency: PayFrequency,
}

impl GeneratePayslipsRequest {
    /// Request covering `period`, with attendance computed by the backend
    /// and the period's weekday count as working days.
    pub fn for_period(period: &PayPeriod, employee_ids: Vec<u64>, pay_frequency: PayFrequency) -> Self {
        Self {
            employee_ids,
            start_date: period.start,
            end_date: period.end,
            total_working_days: period.working_days(),
            auto_calculate_attendance: true,
            pay_frequency,
        }
    }
}

/// Body of `POST payroll/payslips/bulk-generate/`.
///
/// Without `employee_ids` the backend generates for every active employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkGeneratePayslipsRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_working_days: i64,
    pub auto_calculate_attendance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_ids: Option<Vec<u64>>,
}

impl BulkGeneratePayslipsRequest {
    pub fn for_period(period: &PayPeriod, employee_ids: Option<Vec<u64>>) -> Self {
        Self {
            start_date: period.start,
            end_date: period.end,
            total_working_days: period.working_days(),
            auto_calculate_attendance: true,
            employee_ids: employee_ids.filter(|ids| !ids.is_empty()),
        }
    }
}

/// Body of `PATCH payroll/payslips/{id}/` for a status transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayslipStatusUpdate {
    pub status: PayslipStatus,
    /// Set only when approving, as an ISO 8601 UTC timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}

impl PayslipStatusUpdate {
    pub fn new(status: PayslipStatus, now: DateTime<Utc>) -> Self {
        let approved_at = match status {
            PayslipStatus::Approved => Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            _ => None,
        };
        Self { status, approved_at }
    }
}
