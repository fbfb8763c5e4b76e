//! Payslip listing, preview, generation and status changes.

use super::payroll_api;
use crate::{
    api::PayrollApi,
    libs::{
        config::Config,
        employee::{BulkGeneratePayslipsRequest, GeneratePayslipsRequest, PayslipStatus},
        error::PayrollError,
        export::{ExportFormat, Exporter},
        messages::Message,
        payslip::{PayslipBreakdown, PayslipStats},
        period::{PayPeriod, PeriodType},
        proration::PayFrequency,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PayslipArgs {
    #[command(subcommand)]
    command: PayslipCommand,
}

#[derive(Debug, Subcommand)]
enum PayslipCommand {
    /// List all payslips with status counts and totals
    List {
        /// Also write the list to a file
        #[arg(short, long, value_enum)]
        export: Option<ExportFormat>,
        /// Export file path
        #[arg(short, long, requires = "export")]
        output: Option<PathBuf>,
    },
    /// Show one payslip with its earnings and deductions
    Show { id: u64 },
    /// Generate payslips for a pay period
    Generate(GenerateArgs),
    /// Let the backend generate payslips for all active employees
    BulkGenerate(BulkGenerateArgs),
    /// Approve a payslip
    Approve { id: u64 },
    /// Mark a payslip as paid
    Pay { id: u64 },
    /// Cancel a payslip
    Cancel { id: u64 },
    /// Delete a payslip
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Period type; defaults to the configured one
    #[arg(short = 't', long = "type", value_enum)]
    period_type: Option<PeriodType>,

    /// Periods away from the current one
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Pay frequency; defaults to the configured one
    #[arg(short, long, value_enum)]
    frequency: Option<PayFrequency>,

    /// Employee id; repeat for several. All active employees when omitted
    #[arg(short, long = "employee")]
    employees: Vec<u64>,

    /// Working days in the period instead of the weekday count
    #[arg(short, long)]
    working_days: Option<i64>,
}

#[derive(Debug, Args)]
struct BulkGenerateArgs {
    /// Period type; defaults to the configured one
    #[arg(short = 't', long = "type", value_enum)]
    period_type: Option<PeriodType>,

    /// Periods away from the current one
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Employee id; repeat for several. All active employees when omitted
    #[arg(short, long = "employee")]
    employees: Vec<u64>,

    /// Working days in the period instead of the weekday count
    #[arg(short, long)]
    working_days: Option<i64>,
}

pub async fn cmd(args: PayslipArgs) -> Result<()> {
    let config = Config::read()?;
    let api = payroll_api(&config)?;

    match args.command {
        PayslipCommand::List { export, output } => handle_list(&api, &config, export, output).await,
        PayslipCommand::Show { id } => handle_show(&api, &config, id).await,
        PayslipCommand::Generate(generate) => handle_generate(&api, &config, generate).await,
        PayslipCommand::BulkGenerate(bulk) => handle_bulk_generate(&api, &config, bulk).await,
        PayslipCommand::Approve { id } => handle_status(&api, id, PayslipStatus::Approved).await,
        PayslipCommand::Pay { id } => handle_status(&api, id, PayslipStatus::Paid).await,
        PayslipCommand::Cancel { id } => handle_status(&api, id, PayslipStatus::Cancelled).await,
        PayslipCommand::Delete { id, yes } => handle_delete(&api, id, yes).await,
    }
}

async fn handle_list(api: &PayrollApi, config: &Config, export: Option<ExportFormat>, output: Option<PathBuf>) -> Result<()> {
    let payslips = api.payslips().await.with_context(|| Message::FetchFailed("payslips".to_string()))?;

    if payslips.is_empty() {
        msg_info!(Message::NoPayslips);
        return Ok(());
    }

    let currency = config.payroll().currency;
    msg_print!(Message::PayslipsHeader, true);
    View::payslips(&payslips, &currency)?;
    View::payslip_stats(&PayslipStats::from_payslips(&payslips), &currency)?;

    if let Some(format) = export {
        Exporter::new(format, output)
            .export_payslips(&payslips)
            .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
    }

    Ok(())
}

async fn handle_show(api: &PayrollApi, config: &Config, id: u64) -> Result<()> {
    let payslip = api.payslip(id).await.map_err(|e| payslip_error(e, id))?;

    let employee_id = payslip.employee.id;
    let (allowances, deductions, leaves) = tokio::try_join!(
        api.allowances(employee_id),
        api.deductions(employee_id),
        api.leaves(employee_id, payslip.start_date, payslip.end_date),
    )
    .with_context(|| Message::FetchFailed("compensation details".to_string()))?;

    let breakdown = PayslipBreakdown::compute(&payslip, &allowances, &deductions, &leaves)?;

    msg_print!(Message::PayslipHeader(payslip.id, payslip.employee.full_name()), true);
    View::payslip(&payslip, &breakdown, &config.payroll().currency)
}

async fn handle_generate(api: &PayrollApi, config: &Config, args: GenerateArgs) -> Result<()> {
    let defaults = config.payroll();
    let period = PayPeriod::current(args.period_type.unwrap_or(defaults.default_period), args.offset)?;
    let frequency = args.frequency.unwrap_or(defaults.default_frequency);

    let employee_ids = if args.employees.is_empty() {
        api.employees()
            .await
            .with_context(|| Message::FetchFailed("employees".to_string()))?
            .into_iter()
            .filter(|employee| employee.is_active)
            .map(|employee| employee.id)
            .collect()
    } else {
        args.employees
    };

    if employee_ids.is_empty() {
        msg_warning!(Message::NoEmployeesToGenerate);
        return Ok(());
    }

    let mut request = GeneratePayslipsRequest::for_period(&period, employee_ids, frequency);
    if let Some(days) = working_days_override(args.working_days)? {
        request.total_working_days = days;
    }

    msg_info!(Message::GeneratingPayslips {
        count: request.employee_ids.len(),
        period: period.label(),
    });

    msg_debug!(format!("generate request: {:?}", request));
    let response = api.generate_payslips(&request).await?;
    let generated = response.as_array().map(Vec::len).unwrap_or(request.employee_ids.len());

    msg_success!(Message::PayslipsGenerated(generated));
    Ok(())
}

async fn handle_bulk_generate(api: &PayrollApi, config: &Config, args: BulkGenerateArgs) -> Result<()> {
    let period_type = args.period_type.unwrap_or(config.payroll().default_period);
    let period = PayPeriod::current(period_type, args.offset)?;

    let mut request = BulkGeneratePayslipsRequest::for_period(&period, Some(args.employees));
    if let Some(days) = working_days_override(args.working_days)? {
        request.total_working_days = days;
    }

    msg_info!(Message::BulkGenerating(period.label()));
    msg_debug!(format!("bulk generate request: {:?}", request));
    let response = api.bulk_generate_payslips(&request).await?;
    let generated = response
        .as_array()
        .map(Vec::len)
        .or_else(|| request.employee_ids.as_ref().map(Vec::len))
        .unwrap_or_default();

    msg_success!(Message::PayslipsGenerated(generated));
    Ok(())
}

async fn handle_status(api: &PayrollApi, id: u64, status: PayslipStatus) -> Result<()> {
    api.update_payslip_status(id, status).await.map_err(|e| payslip_error(e, id))?;
    msg_success!(Message::PayslipStatusUpdated(id, status.to_string()));
    Ok(())
}

async fn handle_delete(api: &PayrollApi, id: u64, yes: bool) -> Result<()> {
    if !yes {
        let payslip = api.payslip(id).await.map_err(|e| payslip_error(e, id))?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDelete(id, payslip.employee.full_name()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    api.delete_payslip(id).await.map_err(|e| payslip_error(e, id))?;
    msg_success!(Message::PayslipDeleted(id));
    Ok(())
}

/// Validates a `--working-days` value.
fn working_days_override(days: Option<i64>) -> Result<Option<i64>> {
    match days {
        Some(days) if days <= 0 => Err(PayrollError::InvalidWorkingDays(days).into()),
        Some(days) => {
            msg_info!(Message::WorkingDaysOverride(days));
            Ok(Some(days))
        }
        None => Ok(None),
    }
}

/// A 404 becomes `PayslipNotFound`; other errors keep their cause.
fn payslip_error(e: anyhow::Error, id: u64) -> anyhow::Error {
    if matches!(e.downcast_ref::<PayrollError>(), Some(PayrollError::Api { status: 404, .. })) {
        return msg_error_anyhow!(Message::PayslipNotFound(id));
    }
    e.context(Message::PayslipRequestFailed(id))
}
