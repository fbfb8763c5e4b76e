use super::payroll_api;
use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;

    let Some(session) = payroll_api(&config)?.verify().await? else {
        msg_info!(Message::NotLoggedIn);
        return Ok(());
    };

    msg_print!(Message::SignedInAs {
        name: session.full_name.clone().unwrap_or_else(|| session.username.clone()),
        username: session.username,
        role: session.role.unwrap_or_else(|| "-".to_string()),
    });
    Ok(())
}
