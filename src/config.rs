//! Credentials file loading.
//!
//! Loads the Netatmo account credentials from `~/.pynetatmo.conf` (JSON),
//! with an optional `NETATMO_CONF` environment variable pointing at an
//! alternative path. The file is read once; the resulting [`Config`] is
//! immutable for the lifetime of the process.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up in the home directory by [`Config::load`].
const CONF_FILE_NAME: &str = ".pynetatmo.conf";

/// Netatmo account and application credentials.
///
/// All five keys are required in the credentials file:
///
/// ```json
/// {
///     "user": "E-MAIL",
///     "password": "PASSWORD",
///     "client_id": "CLIENT-ID RETRIEVED FROM dev.netatmo.com",
///     "client_secret": "CLIENT-SECRET RETRIEVED FROM dev.netatmo.com",
///     "scope": "read_thermostat write_thermostat"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Netatmo account e-mail
    pub user: String,
    /// Netatmo account password
    pub password: String,
    /// Application id from dev.netatmo.com
    pub client_id: String,
    /// Application secret from dev.netatmo.com
    pub client_secret: String,
    /// Space-separated OAuth2 scopes to request
    pub scope: String,
}

impl Config {
    /// Load credentials from `$NETATMO_CONF` if set, else `~/.pynetatmo.conf`.
    pub fn load() -> Result<Self> {
        let path = match env::var_os("NETATMO_CONF") {
            Some(path) => PathBuf::from(path),
            None => Self::default_path()?,
        };
        Self::from_path(&path)
    }

    /// Load credentials from an explicit path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read credentials file {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Invalid credentials file {}", path.display()))
    }

    /// Parse credentials from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Credentials must be a JSON object with user, password, client_id, client_secret and scope")
    }

    fn default_path() -> Result<PathBuf> {
        let home = env::var_os("HOME").context("HOME is not set; cannot locate ~/.pynetatmo.conf")?;
        Ok(PathBuf::from(home).join(CONF_FILE_NAME))
    }
}
