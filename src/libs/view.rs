use crate::libs::attendance::{DailyAttendance, WorkSession};
use crate::libs::employee::{Employee, Payslip, SalaryType};
use crate::libs::formatter::{format_currency, format_date, format_duration_minutes, format_hours, format_time_str};
use crate::libs::payslip::{PayslipBreakdown, PayslipStats};
use crate::libs::period::PayPeriod;
use crate::libs::proration::{prorate, PayFrequency};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn attendance(days: &[DailyAttendance]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "STATUS", "FIRST IN", "LAST OUT", "SESSIONS", "HOURS"]);
        for day in days {
            table.add_row(row![
                day.employee_id,
                day.employee_name(),
                day.status,
                day.first_in.as_deref().map(format_time_str).unwrap_or_else(|| "-".to_string()),
                day.last_out.as_deref().map(format_time_str).unwrap_or_else(|| "-".to_string()),
                Self::sessions_cell(&day.sessions),
                format_hours(day.total_hours)
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn sessions_cell(sessions: &[WorkSession]) -> String {
        if sessions.is_empty() {
            return "-".to_string();
        }
        sessions
            .iter()
            .map(|s| match (&s.time_out, s.duration_minutes) {
                (Some(out), Some(minutes)) => format!(
                    "{} - {} ({})",
                    format_time_str(&s.time_in),
                    format_time_str(out),
                    format_duration_minutes(minutes)
                ),
                _ => format!("{} - ...", format_time_str(&s.time_in)),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn period(period: &PayPeriod) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TYPE", "START", "END", "WORKING DAYS"]);
        table.add_row(row![
            period.period_type,
            format_date(&period.start),
            format_date(&period.end),
            period.working_days()
        ]);
        table.printstd();

        Ok(())
    }

    pub fn proration(monthly: f64, currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FREQUENCY", "DIVISOR", "PER PERIOD"]);
        for frequency in [
            PayFrequency::Weekly,
            PayFrequency::Biweekly,
            PayFrequency::SemiMonthly,
            PayFrequency::Monthly,
        ] {
            table.add_row(row![
                frequency.label(),
                r->frequency.divisor(),
                r->format_currency(prorate(monthly, frequency), currency)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employees(employees: &[Employee], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "USERNAME", "DEPARTMENT", "SALARY TYPE", "BASE SALARY"]);
        for e in employees {
            let rate = match e.salary_type {
                SalaryType::Hourly => format!("{} / h", format_currency(e.base_salary, currency)),
                SalaryType::Monthly => format!("{} / mo", format_currency(e.base_salary, currency)),
            };
            table.add_row(row![
                e.id,
                e.full_name(),
                e.user.username,
                e.department.as_deref().unwrap_or("-"),
                e.salary_type,
                r->rate
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn payslips(payslips: &[Payslip], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "PERIOD", "DAYS", "GROSS", "NET", "STATUS"]);
        for p in payslips {
            table.add_row(row![
                p.id,
                p.employee.full_name(),
                format!("{} - {}", format_date(&p.start_date), format_date(&p.end_date)),
                format!("{}/{}", p.days_worked, p.total_working_days),
                r->format_currency(p.gross_salary, currency),
                r->format_currency(p.net_salary, currency),
                p.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn payslip_stats(stats: &PayslipStats, currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "DRAFT", "GENERATED", "APPROVED", "PAID", "CANCELLED", "GROSS", "NET"]);
        table.add_row(row![
            stats.total,
            stats.draft,
            stats.generated,
            stats.approved,
            stats.paid,
            stats.cancelled,
            r->format_currency(stats.total_gross, currency),
            r->format_currency(stats.total_net, currency)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn payslip(payslip: &Payslip, breakdown: &PayslipBreakdown, currency: &str) -> Result<()> {
        let mut info = Table::new();
        info.add_row(row!["Employee", payslip.employee.full_name()]);
        info.add_row(row![
            "Period",
            format!("{} - {}", format_date(&payslip.start_date), format_date(&payslip.end_date))
        ]);
        info.add_row(row!["Frequency", breakdown.frequency.label()]);
        info.add_row(row!["Days worked", format!("{} of {}", payslip.days_worked, payslip.total_working_days)]);
        info.add_row(row!["Hours", format_hours(payslip.total_hours)]);
        info.add_row(row!["Status", payslip.status]);
        info.printstd();

        let mut earnings = Table::new();
        earnings.add_row(row!["EARNINGS", "MONTHLY", "THIS PERIOD"]);
        earnings.add_row(row!["Base pay", "", r->format_currency(breakdown.base_pay, currency)]);
        if breakdown.compensated_leaves > 0 {
            earnings.add_row(row![
                format!("Leave compensation ({})", breakdown.compensated_leaves),
                "",
                r->format_currency(breakdown.leave_compensation, currency)
            ]);
        }
        for item in &breakdown.allowances {
            let label = if item.taxable { format!("{} (taxable)", item.label) } else { item.label.clone() };
            earnings.add_row(row![
                label,
                r->format_currency(item.monthly, currency),
                r->format_currency(item.amount, currency)
            ]);
        }
        earnings.add_row(row!["Total allowances", "", r->format_currency(breakdown.total_allowances, currency)]);
        earnings.add_row(row!["Gross", "", r->format_currency(breakdown.gross_salary, currency)]);
        earnings.printstd();

        let mut deductions = Table::new();
        deductions.add_row(row!["DEDUCTIONS", "MONTHLY", "THIS PERIOD"]);
        for item in &breakdown.deductions {
            deductions.add_row(row![
                item.label,
                r->format_currency(item.monthly, currency),
                r->format_currency(item.amount, currency)
            ]);
        }
        deductions.add_row(row!["Withholding tax", "", r->format_currency(breakdown.withholding_tax, currency)]);
        deductions.add_row(row!["Total deductions", "", r->format_currency(breakdown.total_all_deductions, currency)]);
        deductions.add_row(row!["Net", "", r->format_currency(breakdown.net_salary, currency)]);
        deductions.printstd();

        Ok(())
    }
}
