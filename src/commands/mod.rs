pub mod attendance;
pub mod employee;
pub mod init;
pub mod login;
pub mod logout;
pub mod payslip;
pub mod period;
pub mod prorate;
pub mod whoami;

use crate::api::{ApiConfig, PayrollApi, TokenFile};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in to the payroll backend")]
    Login(login::LoginArgs),
    #[command(about = "Sign out and forget the stored session")]
    Logout,
    #[command(about = "Show the signed-in user")]
    Whoami,
    #[command(about = "Show reconstructed attendance for a day")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Show a pay period's dates and working days")]
    Period(period::PeriodArgs),
    #[command(about = "Convert a monthly amount to a pay-period amount")]
    Prorate(prorate::ProrateArgs),
    #[command(about = "List employees", arg_required_else_help = true)]
    Employee(employee::EmployeeArgs),
    #[command(about = "List, inspect, generate and update payslips", arg_required_else_help = true)]
    Payslip(payslip::PayslipArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd().await,
            Commands::Whoami => whoami::cmd().await,
            Commands::Attendance(args) => attendance::cmd(args).await,
            Commands::Period(args) => period::cmd(args),
            Commands::Prorate(args) => prorate::cmd(args),
            Commands::Employee(args) => employee::cmd(args).await,
            Commands::Payslip(args) => payslip::cmd(args).await,
        }
    }
}

/// Client for the configured backend using the stored session.
pub(crate) fn payroll_api(config: &Config) -> Result<PayrollApi> {
    let api_config = ApiConfig::new(&config.api_url(), Arc::new(TokenFile::new()?))
        .with_unauthorized_handler(Arc::new(|| msg_warning!(Message::SessionExpired)));
    Ok(PayrollApi::new(api_config))
}
