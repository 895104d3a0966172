// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration: event limits from file and environment
//!
//! Precedence, lowest first: built-in defaults, the config file, then
//! `BEACON_MAX_LABELS_PER_RESOURCE` / `BEACON_MAX_RELATED_RESOURCES`.

use beacon_core::EventLimits;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "beacon.toml";

pub const ENV_MAX_LABELS: &str = "BEACON_MAX_LABELS_PER_RESOURCE";
pub const ENV_MAX_RELATED: &str = "BEACON_MAX_RELATED_RESOURCES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Invalid config {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("{name} must be positive")]
    NonPositive { name: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limits: EventLimits,
}

impl Config {
    /// Load config from `explicit`, or the first default location that exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit.map(Path::to_path_buf).or_else(default_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Override limits from environment variables
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ENV_MAX_LABELS) {
            self.limits.max_labels_per_resource = parse_limit(ENV_MAX_LABELS, value)?;
        }
        if let Some(value) = lookup(ENV_MAX_RELATED) {
            self.limits.max_related_resources = parse_limit(ENV_MAX_RELATED, value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_labels_per_resource == 0 {
            return Err(ConfigError::NonPositive {
                name: "max_labels_per_resource",
            });
        }
        if self.limits.max_related_resources == 0 {
            return Err(ConfigError::NonPositive {
                name: "max_related_resources",
            });
        }
        Ok(())
    }
}

fn default_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("beacon").join("config.toml"))
        .filter(|path| path.is_file())
}

fn parse_limit(var: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidEnv { var, value }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
