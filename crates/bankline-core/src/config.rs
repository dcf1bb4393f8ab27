//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: which
//! backend to talk to, where the session token is kept, and the last email
//! used to sign in.
//!
//! Configuration is stored at `~/.config/bankline/config.json`. The backend
//! URL and token backend can be overridden with `BANKLINE_API_URL` and
//! `BANKLINE_TOKEN_BACKEND`.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::api::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::auth::{FileTokenStore, KeyringTokenStore, Session, TokenStore};

/// Application name used for config/data directory paths
const APP_NAME: &str = "bankline";

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const ENV_API_URL: &str = "BANKLINE_API_URL";
pub const ENV_TOKEN_BACKEND: &str = "BANKLINE_TOKEN_BACKEND";

/// Where the session token is persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    #[default]
    File,
    Keyring,
}

impl std::fmt::Display for TokenBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenBackend::File => write!(f, "file"),
            TokenBackend::Keyring => write!(f, "keyring"),
        }
    }
}

impl FromStr for TokenBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(TokenBackend::File),
            "keyring" | "keychain" => Ok(TokenBackend::Keyring),
            other => Err(anyhow::anyhow!("Unknown token backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub token_backend: TokenBackend,
    pub request_timeout_secs: u64,
    pub expire_on_unauthorized: bool,
    pub last_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            token_backend: TokenBackend::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            expire_on_unauthorized: true,
            last_email: None,
        }
    }
}

impl Config {
    /// Load from disk (defaults when missing) and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply overrides looked up through `var`
    pub fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(backend) = var(ENV_TOKEN_BACKEND).filter(|v| !v.trim().is_empty()) {
            self.token_backend = backend
                .parse()
                .with_context(|| format!("Invalid {}", ENV_TOKEN_BACKEND))?;
        }
        Ok(())
    }

    /// `scheme://host[:port]` of the backend. One session is kept per origin.
    pub fn origin(&self) -> Result<String> {
        let url = Url::parse(self.api_url.trim())
            .with_context(|| format!("Invalid API URL '{}'", self.api_url))?;
        Ok(url.origin().ascii_serialization())
    }

    /// Directory holding the file-backed session for this origin
    pub fn session_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME).join(origin_slug(&self.origin()?)))
    }

    pub fn token_store(&self) -> Result<Arc<dyn TokenStore>> {
        Ok(match self.token_backend {
            TokenBackend::File => Arc::new(FileTokenStore::new(self.session_dir()?)),
            TokenBackend::Keyring => Arc::new(KeyringTokenStore::new(self.origin()?)),
        })
    }

    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(self.token_store()?))
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            expire_on_unauthorized: self.expire_on_unauthorized,
        }
    }
}

/// File-system friendly name for an origin
fn origin_slug(origin: &str) -> String {
    origin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}
