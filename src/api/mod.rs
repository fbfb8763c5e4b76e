//! Client side of the payroll REST backend.
//!
//! [`PayrollApi`] talks to the backend; it does not decide where tokens
//! live or what happens on an expired session. Both are supplied through
//! [`ApiConfig`]:
//!
//! - a [`CredentialProvider`] that hands out the access token for the
//!   `Authorization: Bearer` header and stores or clears the token pair,
//! - an optional `on_unauthorized` callback run before the credentials are
//!   cleared on any `401` response.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paydesk::api::{ApiConfig, PayrollApi, TokenFile};
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ApiConfig::new("http://127.0.0.1:8000/api/", Arc::new(TokenFile::new()?));
//! let api = PayrollApi::new(config);
//! let employees = api.employees().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

pub mod payroll;

pub use payroll::PayrollApi;

const TOKEN_FILE: &str = ".tokens.json";

/// JWT pair issued by `auth/login/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

/// Source and sink of the client's session tokens.
pub trait CredentialProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    fn store(&self, tokens: &Tokens) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Callback run when the backend rejects the session.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL ending in `/`; endpoint paths are appended to it.
    pub base_url: String,
    pub credentials: Arc<dyn CredentialProvider>,
    pub on_unauthorized: Option<UnauthorizedHandler>,
}

impl ApiConfig {
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialProvider>) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Self {
            base_url,
            credentials,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_handler(mut self, handler: UnauthorizedHandler) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }
}

/// Tokens held in memory only.
#[derive(Debug, Default)]
pub struct StaticToken {
    tokens: Mutex<Option<Tokens>>,
}

impl StaticToken {
    pub fn new(tokens: Option<Tokens>) -> Self {
        Self {
            tokens: Mutex::new(tokens),
        }
    }
}

impl CredentialProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.tokens.lock().as_ref().map(|t| t.access.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.lock().as_ref().map(|t| t.refresh.clone())
    }

    fn store(&self, tokens: &Tokens) -> Result<()> {
        *self.tokens.lock() = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.tokens.lock() = None;
        Ok(())
    }
}

/// Tokens persisted as plain JSON in the data directory, so a login
/// survives between command invocations.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: DataStorage::new().get_path(TOKEN_FILE)?,
        })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Option<Tokens> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl CredentialProvider for TokenFile {
    fn access_token(&self) -> Option<String> {
        self.read().map(|t| t.access)
    }

    fn refresh_token(&self) -> Option<String> {
        self.read().map(|t| t.refresh)
    }

    fn store(&self, tokens: &Tokens) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, tokens)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
