//! Persistent client configuration.
//!
//! The configuration is a small JSON document in the per-user data directory
//! (see [`DataStorage`]). Every section is optional; a missing file or
//! section falls back to defaults, so the client runs against a local
//! backend without any setup.
//!
//! ## File location
//!
//! - **Windows**: `%LOCALAPPDATA%\paydesk\config.json`
//! - **macOS**: `~/Library/Application Support/paydesk/config.json`
//! - **Linux**: `~/.local/share/paydesk/config.json`
//!
//! ## Environment
//!
//! `PAYDESK_API_URL` overrides the configured server URL. The binary loads
//! a `.env` file from the working directory before reading it.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::period::PeriodType;
use crate::libs::proration::PayFrequency;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";
pub const API_URL_ENV: &str = "PAYDESK_API_URL";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the payroll REST API, with trailing slash.
    pub api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Defaults used by commands when no flag is given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PayrollConfig {
    #[serde(default)]
    pub default_period: PeriodType,
    #[serde(default)]
    pub default_frequency: PayFrequency,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "PHP".to_string()
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_period: PeriodType::Monthly,
            default_frequency: PayFrequency::Monthly,
            currency: default_currency(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<PayrollConfig>,
}

impl Config {
    /// Loads the configuration, or the defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Base URL of the API: `PAYDESK_API_URL`, then the configured URL, then
    /// the local default. A trailing slash is always present.
    pub fn api_url(&self) -> String {
        let url = env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.server.as_ref().map(|server| server.api_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let url = url.trim().to_string();
        if url.ends_with('/') {
            url
        } else {
            format!("{}/", url)
        }
    }

    pub fn payroll(&self) -> PayrollConfig {
        self.payroll.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "payroll".to_string(),
                name: Message::ConfigModulePayroll.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                "payroll" => {
                    let default = config.payroll();
                    msg_print!(Message::ConfigModulePayroll);
                    config.payroll = Some(PayrollConfig {
                        default_period: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultPeriod.to_string())
                            .default(default.default_period)
                            .validate_with(|period: &PeriodType| -> Result<(), String> {
                                match period {
                                    PeriodType::Custom => Err("a custom range cannot be a default".to_string()),
                                    _ => Ok(()),
                                }
                            })
                            .interact_text()?,
                        default_frequency: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultFrequency.to_string())
                            .default(default.default_frequency)
                            .interact_text()?,
                        currency: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCurrency.to_string())
                            .default(default.currency)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
