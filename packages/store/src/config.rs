//! # Client configuration, `Roster.toml`
//!
//! Defines the TOML configuration embedded into the client at build time
//! (filename: [`RosterConfig::filename`] = `"Roster.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [remote]
//! base_url = "https://jsonplaceholder.typicode.com"
//! backend = "http"        # or "memory" for an in-process collection
//!
//! [table]
//! page_size = 5
//!
//! [log]
//! level = "info"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`RosterConfig`] | Top-level config. Builder helpers, TOML (de)serialisation, and the canonical filename. |
//! | [`RemoteConfig`] | Where the user collection lives and which backend talks to it. |
//! | [`TableConfig`] | Table presentation, i.e. the fixed page size. |
//! | [`LogConfig`] | Minimum log level for the client logger. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::DEFAULT_PAGE_SIZE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("table.page_size must be at least 1")]
    ZeroPageSize,
}

/// Top-level configuration stored in `Roster.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Which implementation of the remote directory to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Http,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the service; the collection is `{base_url}/users`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub backend: Backend,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            backend: Backend::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Records per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl RosterConfig {
    /// Builder method to point at another service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.remote.base_url = base_url.into();
        self
    }

    /// Builder method to set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.table.page_size = page_size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "Roster.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        if config.table.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Collection URL with any trailing slash on the base removed.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.remote.base_url.trim_end_matches('/'))
    }
}
