//! Payslip preview arithmetic and payslip list statistics.

use crate::libs::employee::{Allowance, Deduction, Leave, Payslip, PayslipStatus};
use crate::libs::error::PayrollError;
use crate::libs::proration::{
    base_pay, is_compensated, leave_compensation, leave_days_in_period, prorate, PayFrequency,
};
use serde::Serialize;

/// One allowance or deduction line on a payslip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProratedItem {
    pub label: String,
    /// Amount as stored, per month.
    pub monthly: f64,
    /// Amount for this payslip's pay period.
    pub amount: f64,
    pub taxable: bool,
}

/// Earnings and deductions of a payslip as shown in its preview.
///
/// Gross and net are taken from the backend; everything else is derived
/// from the employee's compensation items for the payslip's frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayslipBreakdown {
    pub frequency: PayFrequency,
    pub base_pay: f64,
    pub leave_compensation: f64,
    pub compensated_leaves: usize,
    pub allowances: Vec<ProratedItem>,
    pub deductions: Vec<ProratedItem>,
    pub total_allowances: f64,
    pub total_deductions: f64,
    pub withholding_tax: f64,
    /// Deductions plus withholding tax.
    pub total_all_deductions: f64,
    pub gross_salary: f64,
    pub net_salary: f64,
}

impl PayslipBreakdown {
    /// Builds the breakdown for `payslip`.
    ///
    /// Every allowance and deduction passed in is listed and prorated;
    /// filtering by employee or activity is left to the backend query.
    ///
    /// # Errors
    ///
    /// `InvalidWorkingDays` when a monthly employee's payslip has no
    /// positive working-day count.
    pub fn compute(
        payslip: &Payslip,
        allowances: &[Allowance],
        deductions: &[Deduction],
        leaves: &[Leave],
    ) -> Result<Self, PayrollError> {
        let frequency = payslip.frequency();
        let employee = &payslip.employee;

        let base_pay = base_pay(
            employee,
            frequency,
            payslip.regular_hours,
            payslip.days_worked,
            payslip.total_working_days,
        )?;

        let leave_compensation = leave_compensation(
            employee,
            leaves,
            payslip.start_date,
            payslip.end_date,
            payslip.total_working_days,
        )?;
        let compensated_leaves = leaves
            .iter()
            .filter(|leave| is_compensated(leave))
            .filter(|leave| leave_days_in_period(leave, payslip.start_date, payslip.end_date).is_some())
            .count();

        let allowances: Vec<ProratedItem> = allowances
            .iter()
            .map(|a| ProratedItem {
                label: a.label(),
                monthly: a.value,
                amount: prorate(a.value, frequency),
                taxable: a.is_taxable,
            })
            .collect();

        let deductions: Vec<ProratedItem> = deductions
            .iter()
            .map(|d| ProratedItem {
                label: d.label(),
                monthly: d.value,
                amount: prorate(d.value, frequency),
                taxable: false,
            })
            .collect();

        let total_allowances = allowances.iter().map(|a| a.amount).sum();
        let total_deductions: f64 = deductions.iter().map(|d| d.amount).sum();

        Ok(Self {
            frequency,
            base_pay,
            leave_compensation,
            compensated_leaves,
            allowances,
            deductions,
            total_allowances,
            total_deductions,
            withholding_tax: payslip.withholding_tax,
            total_all_deductions: total_deductions + payslip.withholding_tax,
            gross_salary: payslip.gross_salary,
            net_salary: payslip.net_salary,
        })
    }
}

/// Counts per status and totals over a list of payslips.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PayslipStats {
    pub total: usize,
    pub draft: usize,
    pub generated: usize,
    pub approved: usize,
    pub paid: usize,
    pub cancelled: usize,
    /// Excludes cancelled payslips.
    pub total_gross: f64,
    /// Excludes cancelled payslips.
    pub total_net: f64,
}

impl PayslipStats {
    pub fn from_payslips(payslips: &[Payslip]) -> Self {
        payslips.iter().fold(Self::default(), |mut stats, p| {
            stats.total += 1;
            match p.status {
                PayslipStatus::Draft => stats.draft += 1,
                PayslipStatus::Generated => stats.generated += 1,
                PayslipStatus::Approved => stats.approved += 1,
                PayslipStatus::Paid => stats.paid += 1,
                PayslipStatus::Cancelled => stats.cancelled += 1,
            }
            if p.status != PayslipStatus::Cancelled {
                stats.total_gross += p.gross_salary;
                stats.total_net += p.net_salary;
            }
            stats
        })
    }
}
