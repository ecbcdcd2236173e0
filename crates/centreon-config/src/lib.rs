//! Connection configuration for the Centreon provider.
//!
//! Values are layered with figment: built-in defaults, then an optional
//! TOML file, then `CENTREON_*` environment variables, then explicit
//! overrides (command-line flags). The result translates into
//! `centreon_core::ProviderConfig`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use centreon_core::ProviderConfig;

/// Prefix of every environment variable read by [`load`].
pub const ENV_PREFIX: &str = "CENTREON_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Provider connection settings as read from file and environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the Centreon web application.
    pub url: String,
    /// Skip TLS certificate verification.
    pub allow_unverified_ssl: bool,
    pub user: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1".into(),
            allow_unverified_ssl: false,
            user: "admin".into(),
            password: "centreon".into(),
        }
    }
}

/// Values that take priority over every other layer. `None` leaves the
/// lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unverified_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// Default config file location via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "centreon", "centreon-provider").map_or_else(
        || PathBuf::from("centreon-provider.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// The layered figment: defaults, `path` (skipped when missing),
/// environment, overrides.
pub fn figment(path: &Path, overrides: &Overrides) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
}

/// Load configuration from `path` (or the default location) with
/// `overrides` applied last.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    debug!(path = %path.display(), "loading configuration");
    Ok(figment(&path, overrides).extract()?)
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Validate and convert into the runtime connection settings.
    pub fn into_provider_config(self) -> Result<ProviderConfig, ConfigError> {
        let url = Url::parse(&self.url).map_err(|e| ConfigError::Validation {
            field: "url".into(),
            reason: format!("{e}: {}", self.url),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "url".into(),
                reason: format!("expected an http or https URL, got {}", self.url),
            });
        }
        if self.user.is_empty() {
            return Err(ConfigError::Validation {
                field: "user".into(),
                reason: "must not be empty".into(),
            });
        }

        Ok(ProviderConfig {
            url,
            allow_unverified_ssl: self.allow_unverified_ssl,
            user: self.user,
            password: SecretString::from(self.password),
        })
    }
}
