use super::payroll_api;
use crate::{
    libs::{config::Config, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let api = payroll_api(&config)?;

    if let Err(e) = api.logout().await {
        msg_warning!(Message::LogoutRequestFailed(e.to_string()));
    }
    msg_success!(Message::LoggedOut);
    Ok(())
}
