//! Employee roster.

use super::payroll_api;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// List active employees with their salary terms
    List,
}

pub async fn cmd(args: EmployeeArgs) -> Result<()> {
    let config = Config::read()?;
    let api = payroll_api(&config)?;

    match args.command {
        EmployeeCommand::List => {
            let employees = api.employees().await.with_context(|| Message::FetchFailed("employees".to_string()))?;
            if employees.is_empty() {
                msg_info!(Message::NoEmployees);
                return Ok(());
            }

            msg_print!(Message::EmployeesHeader, true);
            View::employees(&employees, &config.payroll().currency)
        }
    }
}
