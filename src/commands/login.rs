use super::payroll_api;
use crate::{
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username; prompted for when omitted
    username: Option<String>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let api = payroll_api(&config)?;

    let username = match login_args.username {
        Some(username) => username,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    match api.login(&username, &password).await {
        Ok(response) => {
            let name = response
                .full_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or(username);
            msg_success!(Message::LoginSuccess(name));
            Ok(())
        }
        Err(e) => msg_bail_anyhow!(Message::LoginFailed(e.to_string())),
    }
}
