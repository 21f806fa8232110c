//! Configuration for Bookly clients.
//!
//! One resolution pass at process start: built-in defaults, then an
//! optional TOML profile file, then `BOOKLY_*` environment variables.
//! The result carries the server base address (loopback by default),
//! the transport timeout, and the form-draft defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookly_api::{BooksClient, TransportConfig};
use bookly_core::FormDefaults;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Resolved client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server base address. Every request targets this plus a fixed path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Initial values for create-mode form drafts.
    #[serde(default)]
    pub defaults: FormDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            defaults: FormDefaults::default(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".into()
}
fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Transport settings derived from this config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::default().with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Build an API client for the configured base address.
    pub fn client(&self) -> Result<BooksClient, ConfigError> {
        BooksClient::new(&self.base_url, &self.transport()).map_err(|e| {
            ConfigError::Validation {
                field: "base_url".into(),
                reason: e.to_string(),
            }
        })
    }

    /// Write this config as TOML to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Platform config file location, e.g. `~/.config/bookly/config.toml`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "bookly").map_or_else(
        || PathBuf::from("bookly.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load configuration from the default file location plus environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Load configuration from a specific TOML file plus environment.
///
/// Precedence, lowest to highest: built-in defaults, the TOML file (if
/// present), `BOOKLY_*` environment variables. Nested keys use `__`,
/// e.g. `BOOKLY_DEFAULTS__LANGUAGE`.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("BOOKLY_").split("__"))
        .extract()?;
    Ok(config)
}
