// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot configuration.
//!
//! One explicit struct, passed by constructor injection to every component
//! that needs it. There is deliberately no process-wide settings object, so
//! parallel test runs can each carry their own configuration.

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a [`BotConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

/// How often the bot is scheduled to run. Stored with each database record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Daily => write!(f, "daily"),
            Recurrence::Weekly => write!(f, "weekly"),
            Recurrence::Monthly => write!(f, "monthly"),
            Recurrence::Annual => write!(f, "annual"),
        }
    }
}

/// Configuration for one supervised bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot name; prefixes the log file and names the remote subfolder.
    pub bot_name: String,
    pub developer: String,
    pub sector: String,
    pub stakeholder: String,
    pub recurrence: Recurrence,
    /// Numeric/textual prefix identifying the department folder in the
    /// document store (folders are named `<prefix> - <label>`).
    pub folder_prefix: String,
    /// Root path in the document store under which department folders live.
    pub store_root: String,
    /// Local directory for the rotating run log.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Publish the log artifact to the document store after each run.
    #[serde(default)]
    pub use_document_store: bool,
    /// Insert a run record into the database sink on success.
    #[serde(default)]
    pub use_database: bool,
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl BotConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_name.trim().is_empty() {
            return Err(ConfigError::Missing("bot_name"));
        }
        if self.folder_prefix.trim().is_empty() {
            return Err(ConfigError::Missing("folder_prefix"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
